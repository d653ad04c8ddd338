//! Remap pipeline tests: image + palette in, indexed PNG out.

mod common;

use common::{fixtures, read_indexed_png, Workspace};
use palette_quant::{Color, PaletteFormat};
use palremap::error::RemapError;
use palremap::models::{Overrides, PaletteRange, QuantizerChoice, RemapConfig, SlotChoice};
use palremap::rendering::decode_raster;
use palremap::services::run_remap;
use pretty_assertions::assert_eq;

#[test]
fn test_full_palette_small_window_is_four_bit() {
    let ws = Workspace::new();
    let input = ws.image("in.png", 4, 1, fixtures::strip());
    let palette = ws.palette("colors.act", &fixtures::primaries(), PaletteFormat::Act);
    let output = ws.path("out.png");

    run_remap(&input, &palette, &output, &RemapConfig::default()).unwrap();

    let png = read_indexed_png(&output);
    assert_eq!(png.bit_depth, 4);
    assert_eq!(png.indices(), vec![1, 2, 0, 4]);
    assert_eq!(png.plte.len(), 5);
    assert_eq!(png.plte[2], [255, 0, 0]);
    assert_eq!(png.trns, None);
}

#[test]
fn test_eight_bit_range_writes_master_indices() {
    let ws = Workspace::new();
    let input = ws.image("in.png", 4, 1, fixtures::strip());
    let palette = ws.palette("colors.gpl", &fixtures::primaries(), PaletteFormat::Gimp);
    let output = ws.path("out.png");
    let config = RemapConfig::default().apply(Overrides {
        range: Some(PaletteRange { min: 2, max: 4 }),
        bits: Some(8),
        ..Default::default()
    });

    run_remap(&input, &palette, &output, &config).unwrap();

    let png = read_indexed_png(&output);
    assert_eq!(png.bit_depth, 8);
    // PLTE runs from the start of the master palette to the window end
    assert_eq!(png.plte.len(), 5);
    let indices = png.indices();
    assert!(indices.iter().all(|i| (2..=4).contains(i)), "{indices:?}");
    assert_eq!(indices[1], 2);
    assert_eq!(indices[3], 4);
}

#[test]
fn test_fixed_slot_is_slot_relative() {
    let ws = Workspace::new();
    let input = ws.image(
        "in.png",
        2,
        1,
        vec![Color::rgb(135, 0, 0), Color::rgb(255, 15, 15)],
    );
    let palette = ws.palette("colors.act", &fixtures::two_slots(), PaletteFormat::Act);
    let output = ws.path("out.png");
    let config = RemapConfig {
        slot: Some(SlotChoice::Index(1)),
        ..Default::default()
    };

    run_remap(&input, &palette, &output, &config).unwrap();

    let png = read_indexed_png(&output);
    assert_eq!(png.bit_depth, 4);
    assert_eq!(png.indices(), vec![0, 15]);
    assert_eq!(png.plte.len(), 16);
    assert_eq!(png.plte[0], [135, 0, 0]);
}

#[test]
fn test_auto_slot_picks_lowest_error_slot() {
    let ws = Workspace::new();
    let input = ws.image(
        "in.png",
        3,
        1,
        vec![
            Color::rgb(199, 8, 8),
            Color::rgb(143, 1, 1),
            Color::rgb(231, 12, 12),
        ],
    );
    let palette = ws.palette("colors.pal", &fixtures::two_slots(), PaletteFormat::Riff);
    let output = ws.path("out.png");
    let config = RemapConfig {
        slot: Some(SlotChoice::Auto),
        ..Default::default()
    };

    let quantized = run_remap(&input, &palette, &output, &config).unwrap();
    assert_eq!(quantized.range(), 16..=31);

    let png = read_indexed_png(&output);
    assert_eq!(png.indices(), vec![8, 1, 12]);
    assert_eq!(png.plte[0], [135, 0, 0]);
}

#[test]
fn test_transparent_index_written_as_trns() {
    let ws = Workspace::new();
    let input = ws.image("in.png", 4, 1, fixtures::strip());
    let keyed = fixtures::primaries()
        .with_transparent_index(Some(3))
        .unwrap();
    let palette = ws.palette("colors.act", &keyed, PaletteFormat::Act);
    let output = ws.path("out.png");

    run_remap(&input, &palette, &output, &RemapConfig::default()).unwrap();

    let png = read_indexed_png(&output);
    assert_eq!(png.trns, Some(vec![255, 255, 255, 0]));
}

#[test]
fn test_mask_written_next_to_output() {
    let ws = Workspace::new();
    let input = ws.image(
        "in.png",
        2,
        1,
        vec![Color::rgba(200, 10, 10, 128), Color::rgba(0, 0, 255, 0)],
    );
    let palette = ws.palette("colors.txt", &fixtures::primaries(), PaletteFormat::PaintNet);
    let output = ws.path("sprite.png");
    let config = RemapConfig {
        mask: true,
        ..Default::default()
    };

    run_remap(&input, &palette, &output, &config).unwrap();

    assert!(ws.exists("sprite_mask.png"));
    let mask = decode_raster(&ws.path("sprite_mask.png")).unwrap();
    assert_eq!(
        mask.pixels(),
        &[Color::rgba(255, 255, 255, 128), Color::rgba(0, 0, 255, 0)]
    );
}

#[test]
fn test_config_file_with_overrides() {
    let ws = Workspace::new();
    let input = ws.image("in.png", 4, 1, fixtures::strip());
    let palette = ws.palette("colors.act", &fixtures::primaries(), PaletteFormat::Act);
    let config_path = ws.write(
        "palremap.yaml",
        "range: \"0-1\"\nbits: 8\nmask_suffix: \".alpha\"\n",
    );
    let output = ws.path("out.png");

    let config = RemapConfig::load(&config_path).unwrap().apply(Overrides {
        mask: true,
        ..Default::default()
    });
    let quantized = run_remap(&input, &palette, &output, &config).unwrap();

    assert_eq!(quantized.range(), 0..=1);
    assert_eq!(read_indexed_png(&output).bit_depth, 8);
    assert!(ws.exists("out.alpha.png"));
}

#[test]
fn test_imagequant_strategy_stays_in_window() {
    let ws = Workspace::new();
    let pixels: Vec<Color> = fixtures::primaries().colors().to_vec();
    let input = ws.image("in.png", 5, 1, pixels);
    let palette = ws.palette("colors.act", &fixtures::primaries(), PaletteFormat::Act);
    let output = ws.path("out.png");
    let config = RemapConfig::default().apply(Overrides {
        strategy: Some(QuantizerChoice::Imagequant),
        ..Default::default()
    });

    run_remap(&input, &palette, &output, &config).unwrap();

    let png = read_indexed_png(&output);
    assert_eq!(png.plte.len(), 5);
    assert!(png.indices().iter().all(|&i| i < 5));
}

#[test]
fn test_imagequant_auto_slot_picks_lowest_error_slot() {
    let ws = Workspace::new();
    let input = ws.image(
        "in.png",
        3,
        1,
        vec![
            Color::rgb(199, 8, 8),
            Color::rgb(143, 1, 1),
            Color::rgb(231, 12, 12),
        ],
    );
    let palette = ws.palette("colors.act", &fixtures::two_slots(), PaletteFormat::Act);
    let output = ws.path("out.png");
    let config = RemapConfig::default().apply(Overrides {
        slot: Some(SlotChoice::Auto),
        strategy: Some(QuantizerChoice::Imagequant),
        ..Default::default()
    });

    let quantized = run_remap(&input, &palette, &output, &config).unwrap();
    assert_eq!(quantized.range(), 16..=31);
    assert_eq!(read_indexed_png(&output).plte[0], [135, 0, 0]);
}

#[test]
fn test_range_outside_palette_fails_without_output() {
    let ws = Workspace::new();
    let input = ws.image("in.png", 4, 1, fixtures::strip());
    let palette = ws.palette("colors.act", &fixtures::primaries(), PaletteFormat::Act);
    let output = ws.path("out.png");
    let config = RemapConfig {
        range: Some(PaletteRange { min: 3, max: 9 }),
        ..Default::default()
    };

    let err = run_remap(&input, &palette, &output, &config).unwrap_err();
    assert!(matches!(err, RemapError::Quantize { .. }), "{err}");
    assert!(!ws.exists("out.png"));
}

#[test]
fn test_unsupported_palette_extension() {
    let ws = Workspace::new();
    let input = ws.image("in.png", 4, 1, fixtures::strip());
    let palette = ws.write("colors.xyz", "not a palette");
    let output = ws.path("out.png");

    let err = run_remap(&input, &palette, &output, &RemapConfig::default()).unwrap_err();
    assert!(matches!(err, RemapError::ReadPalette { .. }), "{err}");
    assert!(err.to_string().contains("colors.xyz"));
}
