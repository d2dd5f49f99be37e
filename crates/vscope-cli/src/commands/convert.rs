//! Convert command
//!
//! Prints the HSV and HSL forms of one sample, before and after the hue
//! wheel rotation, plus where it would land on a default 256px scope.

use crate::ConvertArgs;
use anyhow::{Context, Result};
use tracing::trace;
use vscope_color::{RgbExt, remap_hue};
use vscope_core::Rgb;
use vscope_plot::{Recorder, ScopeConfig, Vectorscope};

pub fn run(args: ConvertArgs, verbose: u8) -> Result<()> {
    trace!(r = args.r, g = args.g, b = args.b, offset = args.offset, "convert::run");

    let rgb = Rgb::new(args.r, args.g, args.b);
    let hsv = rgb.to_hsv();
    let hsl = rgb.to_hsl();

    let mut hsv_wheel = hsv;
    let mut hsl_wheel = hsl;
    remap_hue(&mut hsv_wheel, args.offset);
    remap_hue(&mut hsl_wheel, args.offset);

    println!("{rgb}");
    println!("  {hsv}  ->  {hsv_wheel}");
    println!("  {hsl}  ->  {hsl_wheel}");

    if verbose > 0 {
        let mut scope = Vectorscope::new(&ScopeConfig::default()).context("Invalid default config")?;
        scope.bind(Recorder::new(256, 256));
        let (x, y) = scope.project(&hsv_wheel);
        println!("  scope position (256x256): ({x:.2}, {y:.2}), alpha {:.4}", hsv_wheel.v);
    }

    Ok(())
}
