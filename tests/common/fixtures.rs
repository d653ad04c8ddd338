//! Scratch directories, test images and palettes.

use std::path::{Path, PathBuf};

use palette_quant::palette::codec::write_palette;
use palette_quant::{Color, ColorPalette, PaletteFormat, Raster};
use palremap::rendering::encode_rgba_png;
use tempfile::TempDir;

/// A temporary directory holding the files of one test.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `pixels` (row-major) as an RGBA PNG.
    pub fn image(&self, name: &str, width: u32, height: u32, pixels: Vec<Color>) -> PathBuf {
        let path = self.path(name);
        let raster = Raster::new(width, height, pixels).expect("valid raster");
        encode_rgba_png(&path, &raster).expect("write image");
        path
    }

    /// Write a palette file in `format`.
    pub fn palette(&self, name: &str, palette: &ColorPalette, format: PaletteFormat) -> PathBuf {
        let path = self.path(name);
        write_palette(&path, palette, format).expect("write palette");
        path
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).expect("write file");
        path
    }

    pub fn exists(&self, name: &str) -> bool {
        Path::new(&self.path(name)).exists()
    }
}

/// Black, white, red, green, blue.
pub fn primaries() -> ColorPalette {
    ColorPalette::new(vec![
        Color::BLACK,
        Color::WHITE,
        Color::rgb(255, 0, 0),
        Color::rgb(0, 255, 0),
        Color::rgb(0, 0, 255),
    ])
    .expect("valid palette")
}

/// 32 entries: slot 0 is a gray ramp, slot 1 a red ramp.
pub fn two_slots() -> ColorPalette {
    let grays = (0..16u8).map(|i| Color::rgb(i * 17, i * 17, i * 17));
    let reds = (0..16u8).map(|i| Color::rgb(135 + i * 8, i, i));
    ColorPalette::new(grays.chain(reds).collect()).expect("valid palette")
}

/// A 4x1 strip of colors close to the primaries.
pub fn strip() -> Vec<Color> {
    vec![
        Color::rgb(250, 248, 252),
        Color::rgb(210, 15, 20),
        Color::rgb(12, 3, 8),
        Color::rgb(20, 30, 230),
    ]
}
