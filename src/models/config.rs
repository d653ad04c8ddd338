use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::ValueEnum;
use palette_quant::{BitDepth, Strategy, Window};
use serde::Deserialize;

use crate::error::RemapError;

/// Run configuration, built once and passed to the pipeline.
///
/// Loaded from an optional YAML file and then overridden by command-line
/// flags (see [`RemapConfig::apply`]).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RemapConfig {
    /// Restrict matching to palette entries `min-max`
    pub range: Option<PaletteRange>,

    /// Output bit depth (4 or 8); automatic when unset
    pub bits: Option<u8>,

    /// Fixed 16-color slot or `auto`
    pub slot: Option<SlotChoice>,

    /// Also write a transparency mask
    pub mask: bool,

    /// Quantization strategy
    pub strategy: QuantizerChoice,

    /// Appended to the output file stem to name the mask
    #[serde(default = "default_mask_suffix")]
    pub mask_suffix: String,
}

fn default_mask_suffix() -> String {
    "_mask".to_string()
}

impl Default for RemapConfig {
    fn default() -> Self {
        Self {
            range: None,
            bits: None,
            slot: None,
            mask: false,
            strategy: QuantizerChoice::default(),
            mask_suffix: default_mask_suffix(),
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub range: Option<PaletteRange>,
    pub bits: Option<u8>,
    pub slot: Option<SlotChoice>,
    pub mask: bool,
    pub strategy: Option<QuantizerChoice>,
}

impl RemapConfig {
    /// Load and validate a YAML config file.
    pub fn load(path: &Path) -> Result<Self, RemapError> {
        let config_error = |reason: String| RemapError::Config {
            path: path.to_path_buf(),
            reason,
        };
        let content = std::fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
        let config: Self = serde_yaml::from_str(&content).map_err(|e| config_error(e.to_string()))?;
        config.validate().map_err(config_error)?;
        tracing::info!(path = %path.display(), ?config, "Loaded configuration");
        Ok(config)
    }

    /// Layer command-line values on top.
    ///
    /// A range on the command line replaces a configured slot and vice
    /// versa, so the two never both apply.
    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(range) = overrides.range {
            self.range = Some(range);
            self.slot = None;
        }
        if let Some(slot) = overrides.slot {
            self.slot = Some(slot);
            self.range = None;
        }
        if let Some(bits) = overrides.bits {
            self.bits = Some(bits);
        }
        if let Some(strategy) = overrides.strategy {
            self.strategy = strategy;
        }
        self.mask |= overrides.mask;
        self
    }

    /// Check field combinations serde cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(bits) = self.bits {
            if BitDepth::from_bits(bits).is_none() {
                return Err(format!("bits must be 4 or 8, got {bits}"));
            }
        }
        if self.range.is_some() && self.slot.is_some() {
            return Err("range and slot are mutually exclusive".to_string());
        }
        if self.mask_suffix.is_empty() {
            return Err("mask_suffix must not be empty".to_string());
        }
        Ok(())
    }

    /// The palette window this configuration selects.
    pub fn window(&self) -> Window {
        match (self.slot, self.range) {
            (Some(SlotChoice::Auto), _) => Window::AutoSlot,
            (Some(SlotChoice::Index(n)), _) => Window::Slot(n),
            (None, Some(range)) => Window::Range {
                min: range.min,
                max: range.max,
            },
            (None, None) => Window::Full,
        }
    }

    /// Forced output depth, if any.
    pub fn bit_depth(&self) -> Option<BitDepth> {
        self.bits.and_then(BitDepth::from_bits)
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy.into()
    }

    /// Mask path next to `output`: `<stem><suffix>.png`.
    pub fn mask_path(&self, output: &Path) -> PathBuf {
        let stem = output
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        output.with_file_name(format!("{stem}{}.png", self.mask_suffix))
    }
}

/// Inclusive palette index range, written `MIN-MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct PaletteRange {
    pub min: usize,
    pub max: usize,
}

impl FromStr for PaletteRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (min, max) = s
            .split_once('-')
            .ok_or_else(|| format!("expected MIN-MAX, got {s:?}"))?;
        let min: usize = min
            .trim()
            .parse()
            .map_err(|_| format!("invalid range start {min:?}"))?;
        let max: usize = max
            .trim()
            .parse()
            .map_err(|_| format!("invalid range end {max:?}"))?;
        if min > max {
            return Err(format!("range start {min} exceeds end {max}"));
        }
        Ok(Self { min, max })
    }
}

impl TryFrom<String> for PaletteRange {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for PaletteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Slot selection: a fixed slot number or `auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawSlot")]
pub enum SlotChoice {
    Index(usize),
    Auto,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSlot {
    Index(usize),
    Text(String),
}

impl FromStr for SlotChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") {
            return Ok(SlotChoice::Auto);
        }
        s.parse()
            .map(SlotChoice::Index)
            .map_err(|_| format!("expected a slot number or \"auto\", got {s:?}"))
    }
}

impl TryFrom<RawSlot> for SlotChoice {
    type Error = String;

    fn try_from(raw: RawSlot) -> Result<Self, Self::Error> {
        match raw {
            RawSlot::Index(n) => Ok(SlotChoice::Index(n)),
            RawSlot::Text(s) => s.parse(),
        }
    }
}

/// Quantizer selectable from the command line and config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum QuantizerChoice {
    /// CIEDE2000 nearest color
    #[default]
    Nearest,
    /// libimagequant pinned to the palette colors
    Imagequant,
}

impl From<QuantizerChoice> for Strategy {
    fn from(choice: QuantizerChoice) -> Self {
        match choice {
            QuantizerChoice::Nearest => Strategy::Nearest,
            QuantizerChoice::Imagequant => Strategy::Imagequant,
        }
    }
}
