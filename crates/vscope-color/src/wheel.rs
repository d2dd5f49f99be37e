//! Hue wheel remapping.
//!
//! Grading tools place red at a fixed clock position instead of at 0 degrees.
//! Remapping rotates the hue origin by a constant offset so the plotted chroma
//! lines up with that layout. Rotation happens in place on [`Hsv`] or [`Hsl`]
//! samples through the [`Hue`] trait.
//!
//! The fold uses a mathematical modulo, so negative input hues still land in
//! `[0, 360)`.
//!
//! [`Hsv`]: vscope_core::Hsv
//! [`Hsl`]: vscope_core::Hsl

use tracing::trace;
use vscope_core::Hue;

/// Offset matching the DaVinci Resolve color wheel layout.
pub const RESOLVE_WHEEL_OFFSET: f64 = 240.0;

/// Folds an angle in degrees into `[0, 360)`.
///
/// # Example
///
/// ```rust
/// use vscope_color::wrap_degrees;
///
/// assert_eq!(wrap_degrees(-90.0), 270.0);
/// assert_eq!(wrap_degrees(720.0), 0.0);
/// ```
#[inline]
pub fn wrap_degrees(h: f64) -> f64 {
    ((h % 360.0) + 360.0) % 360.0
}

/// Rotates one sample's hue by `offset` degrees, in place.
///
/// # Example
///
/// ```rust
/// use vscope_color::remap_hue;
/// use vscope_core::Hsv;
///
/// let mut hsv = Hsv::new(300.0, 1.0, 1.0);
/// remap_hue(&mut hsv, 240.0);
/// assert_eq!(hsv.h, 180.0);
/// ```
#[inline]
pub fn remap_hue<T: Hue + ?Sized>(sample: &mut T, offset: f64) {
    sample.set_hue(wrap_degrees(sample.hue() + offset));
}

/// Rotates every sample's hue by `offset` degrees, in place.
pub fn remap_hue_batch<T: Hue>(samples: &mut [T], offset: f64) {
    trace!(count = samples.len(), offset, "remap_hue_batch");
    for sample in samples.iter_mut() {
        remap_hue(sample, offset);
    }
}

/// [`remap_hue`] with [`RESOLVE_WHEEL_OFFSET`].
#[inline]
pub fn to_resolve_wheel<T: Hue + ?Sized>(sample: &mut T) {
    remap_hue(sample, RESOLVE_WHEEL_OFFSET);
}

/// [`remap_hue_batch`] with [`RESOLVE_WHEEL_OFFSET`].
pub fn to_resolve_wheel_batch<T: Hue>(samples: &mut [T]) {
    remap_hue_batch(samples, RESOLVE_WHEEL_OFFSET);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::rgb_to_hsv;
    use vscope_core::{Hsl, Hsv, Rgb};

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(359.5), 359.5);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(-360.0), 0.0);
        assert_eq!(wrap_degrees(-1.0), 359.0);
        assert_eq!(wrap_degrees(-725.0), 355.0);
    }

    #[test]
    fn test_red_lands_at_240() {
        let mut hsv = rgb_to_hsv(Rgb::new(255, 0, 0));
        to_resolve_wheel(&mut hsv);
        assert_eq!(hsv.h, 240.0);
        assert_eq!(hsv.s, 1.0);
        assert_eq!(hsv.v, 1.0);
    }

    #[test]
    fn test_remap_negative_input() {
        let mut hsv = Hsv::new(-300.0, 0.5, 0.5);
        remap_hue(&mut hsv, 0.0);
        assert_eq!(hsv.h, 60.0);

        let mut hsv = Hsv::new(-10.0, 0.5, 0.5);
        to_resolve_wheel(&mut hsv);
        assert_eq!(hsv.h, 230.0);
    }

    #[test]
    fn test_remap_is_invertible() {
        let hues = [-720.0, -361.5, -90.25, -0.5, 0.0, 12.5, 119.75, 240.0, 359.5, 540.0];
        let offsets = [0.0, 1.0, 90.0, 240.0, 359.0];
        for &h in &hues {
            for &o in &offsets {
                let mut hsv = Hsv::new(h, 1.0, 1.0);
                remap_hue(&mut hsv, o);
                remap_hue(&mut hsv, 360.0 - o);
                assert_eq!(hsv.h, wrap_degrees(h), "h={h} o={o}");
            }
        }
    }

    #[test]
    fn test_remap_batch_hsl() {
        let mut samples = vec![Hsl::new(0.0, 1.0, 0.5), Hsl::new(120.0, 1.0, 0.5), Hsl::new(200.0, 0.0, 0.0)];
        to_resolve_wheel_batch(&mut samples);
        let hues: Vec<f64> = samples.iter().map(|s| s.h).collect();
        assert_eq!(hues, vec![240.0, 0.0, 80.0]);
        // only the hue moves
        assert_eq!(samples[0].l, 0.5);
    }

    #[test]
    fn test_remap_batch_empty() {
        let mut samples: Vec<Hsv> = Vec::new();
        remap_hue_batch(&mut samples, 45.0);
        assert!(samples.is_empty());
    }
}
