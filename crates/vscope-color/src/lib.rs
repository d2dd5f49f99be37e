//! # vscope-color
//!
//! Color conversion kernel for the vectorscope.
//!
//! ## Modules
//!
//! - [`convert`] - RGB to HSV and RGB to HSL, single sample and batch
//! - [`wheel`] - Hue origin rotation onto a grading tool's color wheel
//!
//! ## Quick Start
//!
//! ```rust
//! use vscope_color::{rgb_to_hsv_batch, to_resolve_wheel_batch};
//! use vscope_core::Rgb;
//!
//! let samples = vec![Rgb::new(255, 0, 0), Rgb::new(0, 0, 0)];
//! let mut hsv = rgb_to_hsv_batch(&samples);
//! to_resolve_wheel_batch(&mut hsv);
//!
//! assert_eq!(hsv.len(), 2);
//! assert_eq!(hsv[0].h, 240.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` - rayon-backed batch conversion (`par_*` functions)

#![warn(missing_docs)]

pub mod convert;
pub mod wheel;

pub use convert::{rgb_to_hsl, rgb_to_hsl_batch, rgb_to_hsv, rgb_to_hsv_batch, RgbExt};
#[cfg(feature = "parallel")]
pub use convert::{par_rgb_to_hsl_batch, par_rgb_to_hsv_batch};
pub use wheel::{
    remap_hue, remap_hue_batch, to_resolve_wheel, to_resolve_wheel_batch, wrap_degrees,
    RESOLVE_WHEEL_OFFSET,
};

/// Re-export of the core sample types.
pub use vscope_core::{Hsl, Hsv, Hue, Rgb};
