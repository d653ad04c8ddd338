//! CIEDE2000 color difference
//!
//! Implements the formulation in G. Sharma, W. Wu, E. N. Dalal,
//! "The CIEDE2000 Color-Difference Formula: Implementation Notes,
//! Supplementary Test Data, and Mathematical Observations" (2005), with the
//! parametric weights kL = kC = kH = 1.

use std::f32::consts::PI;

use super::lab::Lab;

/// 25^7, used by the chroma compensation term G and rotation term R_C.
const POW25_7: f32 = 6_103_515_625.0;

#[inline]
fn deg(rad: f32) -> f32 {
    rad * 180.0 / PI
}

#[inline]
fn rad(deg: f32) -> f32 {
    deg * PI / 180.0
}

/// Hue angle in degrees (0..360) of the point (a, b); 0 for the neutral axis.
#[inline]
fn hue_angle(b: f32, a: f32) -> f32 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = deg(b.atan2(a));
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

/// Perceptual difference between two Lab colors (ΔE00).
///
/// The result is symmetric in its arguments, zero exactly when both colors
/// are equal, and grows with perceived dissimilarity. A difference around
/// 1.0 is the threshold of a just-noticeable difference.
///
/// # Example
///
/// ```
/// use palette_quant::{ciede2000, Lab};
///
/// let a = Lab::new(50.0, 2.6772, -79.7751);
/// let b = Lab::new(50.0, 0.0, -82.7485);
/// assert!((ciede2000(a, b) - 2.0425).abs() < 1e-3);
/// ```
pub fn ciede2000(lab1: Lab, lab2: Lab) -> f32 {
    // Step 1: adjusted a' and chroma C'
    let c1 = (lab1.a * lab1.a + lab1.b * lab1.b).sqrt();
    let c2 = (lab2.a * lab2.a + lab2.b * lab2.b).sqrt();
    let c_bar = (c1 + c2) / 2.0;
    let c_bar7 = c_bar.powi(7);
    let g = 0.5 * (1.0 - (c_bar7 / (c_bar7 + POW25_7)).sqrt());

    let a1p = (1.0 + g) * lab1.a;
    let a2p = (1.0 + g) * lab2.a;
    let c1p = (a1p * a1p + lab1.b * lab1.b).sqrt();
    let c2p = (a2p * a2p + lab2.b * lab2.b).sqrt();
    let h1p = hue_angle(lab1.b, a1p);
    let h2p = hue_angle(lab2.b, a2p);

    // Step 2: ΔL', ΔC', ΔH'
    let delta_lp = lab2.l - lab1.l;
    let delta_cp = c2p - c1p;

    let chroma_product = c1p * c2p;
    let delta_hp = if chroma_product == 0.0 {
        0.0
    } else {
        let diff = h2p - h1p;
        if diff > 180.0 {
            diff - 360.0
        } else if diff < -180.0 {
            diff + 360.0
        } else {
            diff
        }
    };
    let delta_big_hp = 2.0 * chroma_product.sqrt() * rad(delta_hp / 2.0).sin();

    // Step 3: weighting functions
    let l_bar_p = (lab1.l + lab2.l) / 2.0;
    let c_bar_p = (c1p + c2p) / 2.0;

    let h_bar_p = if chroma_product == 0.0 {
        h1p + h2p
    } else if (h1p - h2p).abs() <= 180.0 {
        (h1p + h2p) / 2.0
    } else if h1p + h2p < 360.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * rad(h_bar_p - 30.0).cos()
        + 0.24 * rad(2.0 * h_bar_p).cos()
        + 0.32 * rad(3.0 * h_bar_p + 6.0).cos()
        - 0.20 * rad(4.0 * h_bar_p - 63.0).cos();

    let delta_theta = 30.0 * (-((h_bar_p - 275.0) / 25.0).powi(2)).exp();
    let c_bar_p7 = c_bar_p.powi(7);
    let r_c = 2.0 * (c_bar_p7 / (c_bar_p7 + POW25_7)).sqrt();

    let l_offset = (l_bar_p - 50.0).powi(2);
    let s_l = 1.0 + (0.015 * l_offset) / (20.0 + l_offset).sqrt();
    let s_c = 1.0 + 0.045 * c_bar_p;
    let s_h = 1.0 + 0.015 * c_bar_p * t;
    let r_t = -rad(2.0 * delta_theta).sin() * r_c;

    let term_l = delta_lp / s_l;
    let term_c = delta_cp / s_c;
    let term_h = delta_big_hp / s_h;

    (term_l * term_l + term_c * term_c + term_h * term_h + r_t * term_c * term_h)
        .max(0.0)
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use palette::color_difference::Ciede2000;

    /// Selected pairs from Sharma et al. supplementary test data.
    const SHARMA_PAIRS: &[([f32; 3], [f32; 3], f32)] = &[
        ([50.0, 2.6772, -79.7751], [50.0, 0.0, -82.7485], 2.0425),
        ([50.0, 3.1571, -77.2803], [50.0, 0.0, -82.7485], 2.8615),
        ([50.0, 2.8361, -74.0200], [50.0, 0.0, -82.7485], 3.4412),
        ([50.0, 0.0, 0.0], [50.0, -1.0, 2.0], 2.3669),
        ([50.0, 2.4900, -0.0010], [50.0, -2.4900, 0.0009], 7.1792),
        ([50.0, 2.5000, 0.0000], [73.0000, 25.0000, -18.0000], 27.1492),
        ([60.2574, -34.0099, 36.2677], [60.4626, -34.1751, 39.4387], 1.2644),
        ([63.0109, -31.0961, -5.8663], [62.8187, -29.7946, -4.0864], 1.2630),
        ([22.7233, 20.0904, -46.6940], [23.0331, 14.9730, -42.5619], 2.0373),
        ([90.9257, -0.5406, -0.9208], [88.6381, -0.8985, -0.7239], 1.4441),
    ];

    fn lab(v: [f32; 3]) -> Lab {
        Lab::new(v[0], v[1], v[2])
    }

    #[test]
    fn test_sharma_reference_pairs() {
        for &(a, b, expected) in SHARMA_PAIRS {
            let got = ciede2000(lab(a), lab(b));
            assert!(
                (got - expected).abs() < 1e-3,
                "{a:?} vs {b:?}: expected {expected}, got {got}"
            );
        }
    }

    #[test]
    fn test_symmetric() {
        for &(a, b, _) in SHARMA_PAIRS {
            let ab = ciede2000(lab(a), lab(b));
            let ba = ciede2000(lab(b), lab(a));
            assert!((ab - ba).abs() < 1e-4, "{a:?}/{b:?}: {ab} vs {ba}");
        }
    }

    #[test]
    fn test_identity_is_zero() {
        for &(a, b, _) in SHARMA_PAIRS {
            assert_eq!(ciede2000(lab(a), lab(a)), 0.0);
            assert_eq!(ciede2000(lab(b), lab(b)), 0.0);
        }
    }

    #[test]
    fn test_distinct_colors_are_positive() {
        let a = Lab::from(Color::rgb(100, 100, 100));
        let b = Lab::from(Color::rgb(100, 100, 101));
        assert!(ciede2000(a, b) > 0.0);
    }

    #[test]
    fn test_grows_with_dissimilarity() {
        let base = Lab::from(Color::rgb(128, 0, 0));
        let near = Lab::from(Color::rgb(140, 0, 0));
        let far = Lab::from(Color::rgb(200, 0, 0));
        assert!(ciede2000(base, near) < ciede2000(base, far));
    }

    #[test]
    fn test_matches_reference_crate() {
        let pairs = [
            (Color::rgb(255, 0, 0), Color::rgb(0, 0, 255)),
            (Color::rgb(10, 200, 30), Color::rgb(20, 180, 60)),
            (Color::rgb(128, 128, 128), Color::rgb(130, 125, 120)),
            (Color::rgb(250, 240, 10), Color::rgb(240, 250, 200)),
        ];
        for (x, y) in pairs {
            let ours = ciede2000(Lab::from(x), Lab::from(y));
            let rx: palette::Lab = palette::IntoColor::into_color(
                palette::Srgb::new(x.r, x.g, x.b).into_format::<f32>(),
            );
            let ry: palette::Lab = palette::IntoColor::into_color(
                palette::Srgb::new(y.r, y.g, y.b).into_format::<f32>(),
            );
            let theirs = rx.difference(ry);
            assert!(
                (ours - theirs).abs() < 0.05,
                "{x} vs {y}: ours {ours}, reference {theirs}"
            );
        }
    }
}
