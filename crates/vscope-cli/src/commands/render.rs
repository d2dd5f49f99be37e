//! Render command
//!
//! Samples -> HSV -> hue wheel remap -> vectorscope on a raster canvas.

use crate::{OutputFormat, RenderArgs};
use anyhow::{Context, Result, bail};
use tracing::{debug, info, trace};
use vscope_color::{par_rgb_to_hsv_batch, remap_hue_batch};
use vscope_core::{Rgb, Rgba, samples_from_interleaved};
use vscope_plot::{Canvas, ScopeConfig, Vectorscope};

/// Density ramp for ASCII output, dark to bright.
const ASCII_RAMP: &[u8] = b" .:-=+*#%@";

/// Columns in ASCII output.
const ASCII_COLS: u32 = 64;

pub fn run(args: RenderArgs, verbose: u8) -> Result<()> {
    trace!(raw = ?args.raw, pattern = %args.pattern, "render::run");

    let config = match &args.config {
        Some(path) => ScopeConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => ScopeConfig::default(),
    };

    let samples = load_samples(&args)?;
    info!(count = samples.len(), "Loaded samples");

    let mut hsv = par_rgb_to_hsv_batch(&samples);
    remap_hue_batch(&mut hsv, args.offset);

    let width = args.width.unwrap_or(args.size);
    let height = args.height.unwrap_or(args.size);
    if width == 0 || height == 0 {
        bail!("Scope size must be non-zero, got {}x{}", width, height);
    }

    let mut scope = Vectorscope::new(&config).context("Invalid scope configuration")?;
    scope.bind(Canvas::new(width, height));
    scope.clear();
    scope.render(&hsv);

    let background = scope.canvas_background();
    let canvas = scope.unbind().context("Scope lost its surface")?;

    if verbose > 0 {
        eprintln!(
            "Plotted {} samples on a {}x{} scope (offset {}deg)",
            hsv.len(),
            width,
            height,
            args.offset
        );
    }

    let bytes = match args.format {
        OutputFormat::Png => canvas
            .to_png(background)
            .context("Failed to encode PNG")?,
        OutputFormat::Ascii => to_ascii(&canvas, background).into_bytes(),
    };
    super::write_output(args.output.as_deref(), &bytes)
}

fn load_samples(args: &RenderArgs) -> Result<Vec<Rgb>> {
    match &args.raw {
        Some(path) => {
            let data = std::fs::read(path)
                .with_context(|| format!("Failed to read: {}", path.display()))?;
            debug!(bytes = data.len(), channels = args.channels, "raw input");
            samples_from_interleaved(&data, args.channels)
                .with_context(|| format!("Bad pixel buffer: {}", path.display()))
        }
        None => {
            let (w, h) = args.pattern_size;
            debug!(pattern = %args.pattern, w, h, "pattern input");
            args.pattern
                .generate(w, h)
                .with_context(|| format!("Failed to generate pattern '{}'", args.pattern))
        }
    }
}

/// Downsamples the canvas into a text density map.
///
/// Each character samples the pixel at its cell center, composited over
/// `background`, and maps Rec.709 luma onto [`ASCII_RAMP`]. Cells are twice
/// as tall as they are wide to roughly match terminal glyphs. An empty
/// canvas gives an empty string.
pub fn to_ascii(canvas: &Canvas, background: Rgba) -> String {
    use vscope_plot::DrawingSurface;

    let (w, h) = (canvas.width(), canvas.height());
    if w == 0 || h == 0 {
        return String::new();
    }
    let cols = ASCII_COLS.min(w).max(1);
    let cell_w = f64::from(w) / f64::from(cols);
    let rows = ((f64::from(h) / (cell_w * 2.0)).round() as u32).max(1);
    let cell_h = f64::from(h) / f64::from(rows);

    let mut out = String::with_capacity(((cols + 1) * rows) as usize);
    for row in 0..rows {
        for col in 0..cols {
            let x = ((f64::from(col) + 0.5) * cell_w) as u32;
            let y = ((f64::from(row) + 0.5) * cell_h) as u32;
            let luma = canvas
                .pixel(x.min(w - 1), y.min(h - 1))
                .map(|p| over(p, background))
                .unwrap_or(0.0);
            let idx = (luma * (ASCII_RAMP.len() - 1) as f64).round() as usize;
            out.push(ASCII_RAMP[idx.min(ASCII_RAMP.len() - 1)] as char);
        }
        out.push('\n');
    }
    out
}

/// Luma of `p` composited over an opaque `bg`.
fn over(p: Rgba, bg: Rgba) -> f64 {
    let mix = |s: u8, d: u8| (f64::from(s) * p.a + f64::from(d) * (1.0 - p.a)) / 255.0;
    0.2126 * mix(p.r, bg.r) + 0.7152 * mix(p.g, bg.g) + 0.0722 * mix(p.b, bg.b)
}
