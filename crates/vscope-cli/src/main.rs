//! vscope - render a vectorscope from a still frame
//!
//! Takes raw, already-decoded pixels (or a built-in test pattern), converts
//! them to HSV, rotates hues onto the grading wheel and plots the scope.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vscope_core::Pattern;

mod commands;

#[derive(Parser)]
#[command(name = "vscope")]
#[command(author, version, about = "Vectorscope renderer for still frames")]
#[command(long_about = "
Plots image chroma on a polar scope in the style of color-grading tools.
Hue is the angle, saturation the radius, value the point brightness.

Examples:
  vscope render -o bars.png                      # 75% color bars
  vscope render --pattern sweep --format ascii   # hue sweep, text preview
  vscope render --raw frame.rgba --channels 4 -o scope.png
  vscope render --config scope.yaml --size 512 -o scope.png
  vscope convert 255 128 0                       # inspect one sample
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a vectorscope
    #[command(visible_alias = "r")]
    Render(RenderArgs),

    /// Convert one RGB sample and print HSV/HSL
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),
}

/// Output encoding for `render`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// 8-bit RGB PNG
    Png,
    /// Text density map
    Ascii,
}

/// Arguments for the `render` command.
#[derive(Args)]
struct RenderArgs {
    /// Raw interleaved 8-bit pixels (no header); overrides --pattern
    #[arg(long)]
    raw: Option<PathBuf>,

    /// Channels per pixel in --raw input: 3 (RGB) or 4 (RGBA)
    #[arg(long, default_value = "4")]
    channels: usize,

    /// Built-in test pattern: bars, sweep, gray
    #[arg(short, long, default_value = "bars")]
    pattern: Pattern,

    /// Test pattern size as WxH
    #[arg(long, default_value = "320x180", value_parser = parse_dims)]
    pattern_size: (u32, u32),

    /// Scope size in pixels (square)
    #[arg(short, long, default_value = "256")]
    size: u32,

    /// Scope width, overrides --size
    #[arg(short, long)]
    width: Option<u32>,

    /// Scope height, overrides --size
    #[arg(short = 'H', long)]
    height: Option<u32>,

    /// Hue wheel rotation in degrees
    #[arg(long, default_value = "240", allow_negative_numbers = true)]
    offset: f64,

    /// Scope configuration (YAML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "png")]
    format: OutputFormat,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Arguments for the `convert` command.
#[derive(Args)]
struct ConvertArgs {
    /// Red (0-255)
    r: u8,

    /// Green (0-255)
    g: u8,

    /// Blue (0-255)
    b: u8,

    /// Hue wheel rotation in degrees
    #[arg(long, default_value = "240", allow_negative_numbers = true)]
    offset: f64,
}

/// Parses `WxH`.
fn parse_dims(s: &str) -> std::result::Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{s}'"))?;
    let w: u32 = w.trim().parse().map_err(|e| format!("bad width: {e}"))?;
    let h: u32 = h.trim().parse().map_err(|e| format!("bad height: {e}"))?;
    Ok((w, h))
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Render(args) => commands::render::run(args, cli.verbose),
        Commands::Convert(args) => commands::convert::run(args, cli.verbose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_dims() {
        assert_eq!(parse_dims("320x180").unwrap(), (320, 180));
        assert_eq!(parse_dims("8X2").unwrap(), (8, 2));
        assert!(parse_dims("320").is_err());
        assert!(parse_dims("ax2").is_err());
    }

    #[test]
    fn test_render_defaults() {
        let cli = Cli::try_parse_from(["vscope", "render"]).unwrap();
        let Commands::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.pattern, Pattern::Bars);
        assert_eq!(args.size, 256);
        assert_eq!(args.offset, 240.0);
        assert_eq!(args.format, OutputFormat::Png);
    }

    #[test]
    fn test_render_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("bars.png");
        let cli = Cli::try_parse_from([
            "vscope",
            "render",
            "--pattern-size",
            "14x2",
            "--size",
            "64",
            "-o",
            out.to_str().unwrap(),
        ])
        .unwrap();
        let Commands::Render(args) = cli.command else {
            panic!("expected render");
        };
        commands::render::run(args, 0).unwrap();

        let bytes = std::fs::read(&out).unwrap();
        assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
        // IHDR carries the scope size
        assert_eq!(&bytes[16..24], &[0, 0, 0, 64, 0, 0, 0, 64]);
    }

    #[test]
    fn test_convert_args() {
        let cli = Cli::try_parse_from(["vscope", "-v", "convert", "255", "0", "0", "--offset", "-30"]).unwrap();
        assert_eq!(cli.verbose, 1);
        let Commands::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!((args.r, args.g, args.b), (255, 0, 0));
        assert_eq!(args.offset, -30.0);
        assert!(Cli::try_parse_from(["vscope", "convert", "256", "0", "0"]).is_err());
    }
}
