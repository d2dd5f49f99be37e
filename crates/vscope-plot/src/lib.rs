//! # vscope-plot
//!
//! Polar projection of HSV samples onto a drawing surface.
//!
//! ## Modules
//!
//! - [`surface`] - [`DrawingSurface`] trait and the [`Recorder`] display list
//! - [`canvas`] - [`Canvas`], a software RGBA raster surface
//! - [`config`] - [`ScopeConfig`], colors and inset margin (YAML loadable)
//! - [`style`] - CSS-style color string parsing
//! - [`vectorscope`] - [`Vectorscope`], the bind-then-render plotter
//!
//! ## Example
//!
//! ```rust
//! use vscope_core::Hsv;
//! use vscope_plot::{Recorder, ScopeConfig, Vectorscope};
//!
//! let mut scope = Vectorscope::new(&ScopeConfig::default()).unwrap();
//! scope.bind(Recorder::new(100, 100));
//! scope.render(&[Hsv::new(0.0, 1.0, 1.0)]);
//!
//! let points = scope.surface().unwrap().points();
//! assert_eq!(points[0].0, 90.0);
//! assert_eq!(points[0].1, 50.0);
//! ```

#![warn(missing_docs)]

pub mod canvas;
pub mod config;
pub mod error;
pub mod style;
pub mod surface;
pub mod vectorscope;

pub use canvas::Canvas;
pub use config::ScopeConfig;
pub use error::{PlotError, PlotResult};
pub use style::parse_color;
pub use surface::{DrawCommand, DrawingSurface, Recorder};
pub use vectorscope::{Vectorscope, DEFAULT_BUFFER};
