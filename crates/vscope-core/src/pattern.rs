//! Synthetic sample sequences.
//!
//! Generates row-major [`Rgb`] samples without an image source:
//! - [`Pattern::Bars`] - 75% color bars (white, yellow, cyan, green, magenta, red, blue)
//! - [`Pattern::HueSweep`] - hue across x, saturation falling down y
//! - [`Pattern::GrayRamp`] - neutral ramp, every sample lands at the scope center

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::model::Rgb;

/// 75% amplitude bar level.
const BAR_LEVEL: u8 = 191;

/// Bar colors left to right.
const BARS: [Rgb; 7] = [
    Rgb::new(BAR_LEVEL, BAR_LEVEL, BAR_LEVEL),
    Rgb::new(BAR_LEVEL, BAR_LEVEL, 0),
    Rgb::new(0, BAR_LEVEL, BAR_LEVEL),
    Rgb::new(0, BAR_LEVEL, 0),
    Rgb::new(BAR_LEVEL, 0, BAR_LEVEL),
    Rgb::new(BAR_LEVEL, 0, 0),
    Rgb::new(0, 0, BAR_LEVEL),
];

/// Built-in test pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pattern {
    /// Seven vertical 75% color bars.
    #[default]
    Bars,
    /// Full hue circle along x, saturation 1 -> 0 along y.
    HueSweep,
    /// Black to white along x.
    GrayRamp,
}

impl Pattern {
    /// All patterns, in display order.
    pub const ALL: [Pattern; 3] = [Pattern::Bars, Pattern::HueSweep, Pattern::GrayRamp];

    /// Short name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bars => "bars",
            Self::HueSweep => "sweep",
            Self::GrayRamp => "gray",
        }
    }

    /// Generates `width * height` samples in row-major order.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimensions`] if either dimension is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use vscope_core::Pattern;
    ///
    /// let samples = Pattern::GrayRamp.generate(16, 2).unwrap();
    /// assert_eq!(samples.len(), 32);
    /// ```
    pub fn generate(self, width: u32, height: u32) -> Result<Vec<Rgb>> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let (w, h) = (width as usize, height as usize);
        let mut out = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                out.push(self.sample_at(x, y, w, h));
            }
        }
        Ok(out)
    }

    fn sample_at(self, x: usize, y: usize, w: usize, h: usize) -> Rgb {
        match self {
            Self::Bars => BARS[x * BARS.len() / w],
            Self::HueSweep => {
                let hue = 360.0 * x as f64 / w as f64;
                let sat = if h > 1 {
                    1.0 - y as f64 / (h - 1) as f64
                } else {
                    1.0
                };
                hsv_to_rgb8(hue, sat, 1.0)
            }
            Self::GrayRamp => {
                let t = if w > 1 { x as f64 / (w - 1) as f64 } else { 0.0 };
                Rgb::gray((t * 255.0).round() as u8)
            }
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bars" | "colorbars" => Ok(Self::Bars),
            "sweep" | "hue" | "huesweep" => Ok(Self::HueSweep),
            "gray" | "grey" | "ramp" => Ok(Self::GrayRamp),
            other => Err(format!("unknown pattern '{other}' (expected bars, sweep, gray)")),
        }
    }
}

/// HSV (degrees, 0-1, 0-1) to 8-bit RGB.
fn hsv_to_rgb8(h: f64, s: f64, v: f64) -> Rgb {
    let c = v * s;
    let h_prime = h.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());

    let (r1, g1, b1) = if h_prime < 1.0 {
        (c, x, 0.0)
    } else if h_prime < 2.0 {
        (x, c, 0.0)
    } else if h_prime < 3.0 {
        (0.0, c, x)
    } else if h_prime < 4.0 {
        (0.0, x, c)
    } else if h_prime < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    let m = v - c;
    let to8 = |u: f64| ((u + m).clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgb::new(to8(r1), to8(g1), to8(b1))
}
