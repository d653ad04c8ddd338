use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use palette_quant::PaletteFormat;
use palremap::models::{Overrides, PaletteRange, QuantizerChoice, RemapConfig, SlotChoice};
use palremap::services::{run_convert, run_remap};

#[derive(Parser)]
#[command(name = "palremap")]
#[command(about = "Remap images onto fixed legacy palettes and convert palette files")]
#[command(subcommand_negates_reqs = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Source image (any format the image decoder understands)
    #[arg(required = true)]
    input: Option<PathBuf>,

    /// Palette file (act, pal, gpl, txt) or image (png, bmp, gif, jpg, tga)
    #[arg(required = true)]
    palette: Option<PathBuf>,

    /// Indexed PNG to write
    #[arg(required = true)]
    output: Option<PathBuf>,

    /// Restrict matching to palette entries MIN-MAX
    #[arg(long, value_name = "MIN-MAX", conflicts_with = "slot")]
    range: Option<PaletteRange>,

    /// Output bit depth
    #[arg(long, value_name = "4|8", value_parser = parse_bits)]
    bits: Option<u8>,

    /// 16-color slot to match against, or "auto" to pick the best one
    #[arg(long, value_name = "N|auto")]
    slot: Option<SlotChoice>,

    /// Also write a transparency mask next to the output
    #[arg(long)]
    mask: bool,

    /// Quantization strategy
    #[arg(long, value_enum)]
    quantizer: Option<QuantizerChoice>,

    /// YAML configuration file; command-line flags take precedence
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Re-encode a palette in another format
    Convert {
        /// Palette file or image to read
        palette: PathBuf,

        /// Palette file to write
        output: PathBuf,

        /// Output format: act, riff, jasc, gimp, paint-net
        #[arg(short, long, value_parser = parse_format)]
        format: PaletteFormat,
    },
}

fn parse_bits(s: &str) -> Result<u8, String> {
    match s.trim() {
        "4" => Ok(4),
        "8" => Ok(8),
        other => Err(format!("expected 4 or 8, got {other:?}")),
    }
}

fn parse_format(s: &str) -> Result<PaletteFormat, String> {
    s.parse().map_err(|e: palette_quant::PaletteError| e.to_string())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "palremap=warn,palette_quant=warn",
        1 => "palremap=info,palette_quant=info",
        _ => "palremap=debug,palette_quant=debug",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Convert {
            palette,
            output,
            format,
        }) => run_convert_command(&palette, &output, format),
        None => {
            let (Some(input), Some(palette), Some(output)) = (cli.input, cli.palette, cli.output)
            else {
                anyhow::bail!("input, palette and output are required");
            };
            let overrides = Overrides {
                range: cli.range,
                bits: cli.bits,
                slot: cli.slot,
                mask: cli.mask,
                strategy: cli.quantizer,
            };
            run_remap_command(&input, &palette, &output, cli.config.as_deref(), overrides)
        }
    }
}

/// Remap one image and report the result
fn run_remap_command(
    input: &Path,
    palette: &Path,
    output: &Path,
    config_path: Option<&Path>,
    overrides: Overrides,
) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => RemapConfig::load(path)?,
        None => RemapConfig::default(),
    }
    .apply(overrides);
    config.validate().map_err(|e| anyhow::anyhow!("Invalid options: {e}"))?;

    let quantized = run_remap(input, palette, output, &config)?;
    println!(
        "Wrote {} ({}x{}, {}, palette {}-{}, error {:.3})",
        output.display(),
        quantized.width(),
        quantized.height(),
        quantized.bit_depth(),
        quantized.range().start(),
        quantized.range().end(),
        quantized.error()
    );
    Ok(())
}

/// Convert a palette file
fn run_convert_command(palette: &Path, output: &Path, format: PaletteFormat) -> anyhow::Result<()> {
    let count = run_convert(palette, output, format)?;
    println!("Wrote {} ({} colors, {format})", output.display(), count);
    Ok(())
}
