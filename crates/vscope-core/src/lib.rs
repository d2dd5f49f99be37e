//! # vscope-core
//!
//! Core sample types for vectorscope rendering.
//!
//! This crate provides the value types shared by every other vscope crate:
//!
//! - [`Rgb`] - One sampled 8-bit pixel, alpha already dropped
//! - [`Hsv`], [`Hsl`] - Cylindrical color models produced by `vscope-color`
//! - [`Hue`] - Common access to the hue angle of [`Hsv`] and [`Hsl`]
//! - [`Rgba`] - Draw color handed to drawing surfaces
//! - [`samples_from_interleaved`] - Sampler for already-decoded pixel buffers
//! - [`Pattern`] - Synthetic sample sequences (color bars, hue sweep, gray ramp)
//!
//! ## Crate Structure
//!
//! ```text
//! vscope-core (this crate)
//!    ^
//!    |
//!    +-- vscope-color (RGB -> HSV/HSL, hue wheel remap)
//!    +-- vscope-plot (drawing surfaces, vectorscope plotter)
//!    +-- vscope-cli
//! ```
//!
//! ## Data Flow
//!
//! ```text
//! sampler -> Vec<Rgb> -> vscope-color -> Vec<Hsv> -> remap (in place) -> vscope-plot
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod model;
pub mod pattern;
pub mod sample;

// Re-exports for convenience
pub use error::*;
pub use model::*;
pub use pattern::Pattern;
pub use sample::samples_from_interleaved;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use vscope_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::model::{Hsl, Hsv, Hue, Rgb, Rgba};
    pub use crate::pattern::Pattern;
    pub use crate::sample::samples_from_interleaved;
}
