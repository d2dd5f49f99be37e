//! RGB to HSV / HSL conversion.
//!
//! All math runs on channels normalized to `[0, 1]` in `f64`.
//!
//! # Functions
//!
//! - [`rgb_to_hsv`], [`rgb_to_hsv_batch`]
//! - [`rgb_to_hsl`], [`rgb_to_hsl_batch`]
//! - [`RgbExt`] - method-call form on [`Rgb`]
//!
//! Batch functions emit exactly one output per input, in input order. An
//! empty slice yields an empty vector.
//!
//! # Example
//!
//! ```rust
//! use vscope_color::RgbExt;
//! use vscope_core::Rgb;
//!
//! let hsv = Rgb::new(0, 255, 0).to_hsv();
//! assert_eq!(hsv.h, 120.0);
//! assert_eq!(hsv.s, 1.0);
//!
//! let hsl = Rgb::new(0, 255, 0).to_hsl();
//! assert_eq!(hsl.l, 0.5);
//! ```

#[allow(unused_imports)]
use tracing::{debug, trace};
use vscope_core::{Hsl, Hsv, Rgb};

/// Method-call conversions on a sample.
pub trait RgbExt {
    /// Converts to HSV. See [`rgb_to_hsv`].
    fn to_hsv(self) -> Hsv;

    /// Converts to HSL. See [`rgb_to_hsl`].
    fn to_hsl(self) -> Hsl;
}

impl RgbExt for Rgb {
    #[inline]
    fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self)
    }

    #[inline]
    fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }
}

/// Converts one sample to HSV.
///
/// Achromatic samples (all channels equal, black included) return
/// `h = 0, s = 0, v = channel / 255`. Otherwise the hue is derived from the
/// minimum channel:
///
/// | min | d       | t |
/// |-----|---------|---|
/// | r   | g - b   | 3 |
/// | b   | r - g   | 1 |
/// | g   | b - r   | 5 |
///
/// `h = 60 * (t - d / (max - min))`, `s = (max - min) / max`, `v = max`.
/// The hue is not folded; apply [`crate::wheel::remap_hue`] for that.
///
/// # Example
///
/// ```rust
/// use vscope_color::rgb_to_hsv;
/// use vscope_core::Rgb;
///
/// let hsv = rgb_to_hsv(Rgb::new(255, 0, 0));
/// assert_eq!((hsv.h, hsv.s, hsv.v), (0.0, 1.0, 1.0));
/// ```
#[inline]
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let [r, g, b] = rgb.normalized();

    let min = r.min(g).min(b);
    let max = r.max(g).max(b);

    if min == max {
        return Hsv::new(0.0, 0.0, min);
    }

    let (d, t) = if r == min {
        (g - b, 3.0)
    } else if b == min {
        (r - g, 1.0)
    } else {
        (b - r, 5.0)
    };

    Hsv {
        h: 60.0 * (t - d / (max - min)),
        s: (max - min) / max,
        v: max,
    }
}

/// Converts a sample sequence to HSV, one entry per input.
pub fn rgb_to_hsv_batch(samples: &[Rgb]) -> Vec<Hsv> {
    trace!(count = samples.len(), "rgb_to_hsv_batch");
    samples.iter().map(|&c| rgb_to_hsv(c)).collect()
}

/// Converts one sample to HSL.
///
/// Hue follows the standard max-channel formula, scaled by 60 and rounded
/// half-up to whole degrees, then folded into `[0, 360)`. The red-max branch
/// is the only one that can go negative (when `g < b`).
///
/// `l = (max + min) / 2`, `s = delta / (1 - |2l - 1|)` or 0 when achromatic.
///
/// # Example
///
/// ```rust
/// use vscope_color::rgb_to_hsl;
/// use vscope_core::Rgb;
///
/// let hsl = rgb_to_hsl(Rgb::new(255, 0, 255));
/// assert_eq!(hsl.h, 300.0);
/// assert_eq!(hsl.s, 1.0);
/// assert_eq!(hsl.l, 0.5);
/// ```
#[inline]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let [r, g, b] = rgb.normalized();

    let c_min = r.min(g).min(b);
    let c_max = r.max(g).max(b);
    let delta = c_max - c_min;

    let sector = if delta == 0.0 {
        0.0
    } else if c_max == r {
        ((g - b) / delta) % 6.0
    } else if c_max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    let h = round_half_up(sector * 60.0).rem_euclid(360.0);
    let l = 0.5 * (c_max + c_min);
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };

    Hsl { h, s, l }
}

/// Converts a sample sequence to HSL, one entry per input.
pub fn rgb_to_hsl_batch(samples: &[Rgb]) -> Vec<Hsl> {
    trace!(count = samples.len(), "rgb_to_hsl_batch");
    samples.iter().map(|&c| rgb_to_hsl(c)).collect()
}

/// Parallel [`rgb_to_hsv_batch`]. Output order matches input order.
#[cfg(feature = "parallel")]
pub fn par_rgb_to_hsv_batch(samples: &[Rgb]) -> Vec<Hsv> {
    use rayon::prelude::*;

    debug!(count = samples.len(), "par_rgb_to_hsv_batch");
    samples.par_iter().map(|&c| rgb_to_hsv(c)).collect()
}

/// Parallel [`rgb_to_hsl_batch`]. Output order matches input order.
#[cfg(feature = "parallel")]
pub fn par_rgb_to_hsl_batch(samples: &[Rgb]) -> Vec<Hsl> {
    use rayon::prelude::*;

    debug!(count = samples.len(), "par_rgb_to_hsl_batch");
    samples.par_iter().map(|&c| rgb_to_hsl(c)).collect()
}

/// Rounds .5 toward positive infinity.
#[inline]
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}
