//! Vectorscope plotter.
//!
//! Projects HSV samples onto a disc: hue is the angle, saturation the
//! distance from the center, and value becomes the point's opacity.
//!
//! # Geometry
//!
//! For a `width x height` surface and inset `buffer`:
//!
//! ```text
//! mid_x  = round(width / 2)
//! mid_y  = round(height / 2)
//! radius = round(min(width, height) / 2) - buffer
//! x      = mid_x + s * radius * cos(h)
//! y      = mid_y + s * radius * sin(h)
//! ```
//!
//! Saturation is not clamped; samples with `s` near 1 may land on or just
//! past the bounding circle.
//!
//! # Usage
//!
//! The plotter must be bound to a surface before rendering. Rendering while
//! unbound draws nothing and does not fail.
//!
//! ```rust
//! use vscope_core::Hsv;
//! use vscope_plot::{Canvas, ScopeConfig, Vectorscope};
//!
//! let mut scope = Vectorscope::new(&ScopeConfig::default()).unwrap();
//! scope.render(&[Hsv::new(0.0, 1.0, 1.0)]); // unbound: no-op
//!
//! scope.bind(Canvas::new(256, 256));
//! scope.clear();
//! scope.render(&[Hsv::new(240.0, 1.0, 1.0)]);
//! ```

use std::f64::consts::PI;

use tracing::{debug, trace};
use vscope_core::{Hsv, Rgba};

use crate::config::ScopeConfig;
use crate::error::PlotResult;
use crate::style::parse_color;
use crate::surface::DrawingSurface;

/// Default inset in pixels between the surface edge and the disc/axes.
pub const DEFAULT_BUFFER: u32 = 10;

const DEG_TO_RAD: f64 = PI / 180.0;

const POINT_SIZE: f64 = 1.0;
const CIRCLE_WIDTH: f64 = 2.0;
const AXIS_WIDTH: f64 = 1.0;

/// Bind-then-render vectorscope.
#[derive(Debug, Clone)]
pub struct Vectorscope<S> {
    buffer: f64,
    line_color: Rgba,
    axis_color: Rgba,
    scope_background: Rgba,
    canvas_background: Rgba,
    width: u32,
    height: u32,
    surface: Option<S>,
}

impl<S> Vectorscope<S> {
    /// Creates an unbound plotter from a configuration.
    ///
    /// All configured color strings are parsed here, so rendering never
    /// has to deal with bad colors.
    pub fn new(config: &ScopeConfig) -> PlotResult<Self> {
        Ok(Self {
            buffer: f64::from(config.buffer),
            line_color: parse_color(&config.vectorscope_lines)?,
            axis_color: parse_color(&config.vectorscope_axes)?,
            scope_background: parse_color(&config.vectorscope_bkg)?,
            canvas_background: parse_color(&config.canvas_background)?,
            width: 0,
            height: 0,
            surface: None,
        })
    }

    /// True once a surface is bound.
    pub fn is_bound(&self) -> bool {
        self.surface.is_some()
    }

    /// Bound surface, if any.
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Mutable access to the bound surface, if any.
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Releases the bound surface and resets the recorded dimensions.
    pub fn unbind(&mut self) -> Option<S> {
        self.width = 0;
        self.height = 0;
        self.surface.take()
    }

    /// Width recorded at bind time (0 when unbound).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height recorded at bind time (0 when unbound).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Inset margin in pixels.
    pub fn buffer(&self) -> f64 {
        self.buffer
    }

    /// Parsed `canvasBackground` color.
    pub fn canvas_background(&self) -> Rgba {
        self.canvas_background
    }

    /// Parsed `vectorscopeBkg` color.
    pub fn scope_background(&self) -> Rgba {
        self.scope_background
    }

    /// Center and radius of the plotted disc for the recorded dimensions.
    ///
    /// On surfaces smaller than twice the buffer the radius goes negative,
    /// which mirrors every projected sample through the center.
    pub fn geometry(&self) -> (f64, f64, f64) {
        let w = f64::from(self.width);
        let h = f64::from(self.height);
        let mid_x = (0.5 * w).round();
        let mid_y = (0.5 * h).round();
        let radius = (0.5 * w.min(h)).round() - self.buffer;
        (mid_x, mid_y, radius)
    }

    /// Surface position of one sample.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vscope_core::Hsv;
    /// use vscope_plot::{Recorder, ScopeConfig, Vectorscope};
    ///
    /// let mut scope = Vectorscope::new(&ScopeConfig::default()).unwrap();
    /// scope.bind(Recorder::new(100, 100));
    /// assert_eq!(scope.project(&Hsv::new(0.0, 1.0, 1.0)), (90.0, 50.0));
    /// ```
    pub fn project(&self, sample: &Hsv) -> (f64, f64) {
        let (mid_x, mid_y, radius) = self.geometry();
        project_onto(sample, mid_x, mid_y, radius)
    }
}

impl<S: DrawingSurface> Vectorscope<S> {
    /// Binds a surface and records its dimensions.
    ///
    /// Replaces any previously bound surface.
    pub fn bind(&mut self, surface: S) {
        self.width = surface.width();
        self.height = surface.height();
        trace!(width = self.width, height = self.height, "vectorscope bind");
        self.surface = Some(surface);
    }

    /// Fills the bound surface with the scope background color.
    ///
    /// Does nothing when unbound.
    pub fn clear(&mut self) {
        let (w, h, color) = (f64::from(self.width), f64::from(self.height), self.scope_background);
        if let Some(surface) = self.surface.as_mut() {
            surface.fill_rect(0.0, 0.0, w, h, color);
        }
    }

    /// Plots samples, then the bounding circle and both axes.
    ///
    /// Each sample becomes a 1x1 point colored `rgba(255, 255, 255, v)`.
    /// The circle is stroked 2px wide in the line color, the axes 1px wide
    /// in the axis color. Does nothing when unbound.
    ///
    /// Samples are not validated. A non-finite sample projects to a
    /// non-finite position, which raster surfaces skip.
    pub fn render(&mut self, samples: &[Hsv]) {
        let (mid_x, mid_y, radius) = self.geometry();
        let (w, h, buffer) = (f64::from(self.width), f64::from(self.height), self.buffer);
        let (line_color, axis_color) = (self.line_color, self.axis_color);

        let Some(surface) = self.surface.as_mut() else {
            trace!(count = samples.len(), "vectorscope render skipped: no surface bound");
            return;
        };

        debug!(count = samples.len(), mid_x, mid_y, radius, "vectorscope render");

        for sample in samples {
            let (x, y) = project_onto(sample, mid_x, mid_y, radius);
            surface.fill_rect(x, y, POINT_SIZE, POINT_SIZE, Rgba::white(sample.v));
        }

        surface.begin_path();
        surface.arc(mid_x, mid_y, radius, 0.0, 2.0 * PI);
        surface.set_stroke(CIRCLE_WIDTH, line_color);
        surface.stroke();

        surface.set_stroke(AXIS_WIDTH, axis_color);
        surface.begin_path();
        surface.move_to(buffer, mid_y);
        surface.line_to(w - buffer, mid_y);
        surface.move_to(mid_x, buffer);
        surface.line_to(mid_x, h - buffer);
        surface.stroke();
    }
}

#[inline]
fn project_onto(sample: &Hsv, mid_x: f64, mid_y: f64, radius: f64) -> (f64, f64) {
    let angle = sample.h * DEG_TO_RAD;
    let r = sample.s * radius;
    (mid_x + r * angle.cos(), mid_y + r * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::surface::{DrawCommand, Recorder};
    use approx::assert_relative_eq;

    fn scope(w: u32, h: u32) -> Vectorscope<Recorder> {
        let mut s = Vectorscope::new(&ScopeConfig::default()).unwrap();
        s.bind(Recorder::new(w, h));
        s
    }

    #[test]
    fn test_unbound_render_is_noop() {
        let mut s: Vectorscope<Recorder> = Vectorscope::new(&ScopeConfig::default()).unwrap();
        assert!(!s.is_bound());
        s.render(&[Hsv::new(0.0, 1.0, 1.0), Hsv::new(90.0, 0.5, 0.5)]);
        s.clear();
        assert_eq!(s.width(), 0);

        s.bind(Recorder::new(10, 10));
        assert!(s.surface().unwrap().is_empty());
    }

    #[test]
    fn test_geometry() {
        let s = scope(100, 100);
        assert_eq!(s.geometry(), (50.0, 50.0, 40.0));

        let s = scope(101, 60);
        // 50.5 rounds up
        assert_eq!(s.geometry(), (51.0, 30.0, 20.0));
    }

    #[test]
    fn test_red_at_zero_degrees() {
        let mut s = scope(100, 100);
        s.render(&[Hsv::new(0.0, 1.0, 1.0)]);
        let points = s.surface().unwrap().points();
        assert_eq!(points, vec![(90.0, 50.0, Rgba::white(1.0))]);
    }

    #[test]
    fn test_projection_quadrants() {
        let s = scope(100, 100);
        let (x, y) = s.project(&Hsv::new(90.0, 1.0, 1.0));
        assert_relative_eq!(x, 50.0, epsilon = 1e-9);
        assert_relative_eq!(y, 90.0, epsilon = 1e-9);

        let (x, y) = s.project(&Hsv::new(180.0, 0.5, 1.0));
        assert_relative_eq!(x, 30.0, epsilon = 1e-9);
        assert_relative_eq!(y, 50.0, epsilon = 1e-9);

        assert_eq!(s.project(&Hsv::new(123.0, 0.0, 1.0)), (50.0, 50.0));
    }

    #[test]
    fn test_saturation_not_clamped() {
        let s = scope(100, 100);
        let (x, _) = s.project(&Hsv::new(0.0, 1.5, 1.0));
        assert_eq!(x, 110.0);
    }

    #[test]
    fn test_value_becomes_alpha() {
        let mut s = scope(50, 50);
        s.render(&[Hsv::new(10.0, 0.2, 0.0), Hsv::new(20.0, 0.4, 0.25)]);
        let alphas: Vec<f64> = s.surface().unwrap().points().iter().map(|p| p.2.a).collect();
        assert_eq!(alphas, vec![0.0, 0.25]);
    }

    #[test]
    fn test_command_sequence() {
        let mut s = scope(100, 80);
        s.render(&[Hsv::new(45.0, 0.5, 1.0)]);

        let lines = parse_color("#fdb44e").unwrap();
        let cmds = s.surface().unwrap().commands();
        assert_eq!(cmds.len(), 1 + 4 + 7);
        assert!(matches!(cmds[0], DrawCommand::FillRect { w, h, .. } if w == 1.0 && h == 1.0));
        assert_eq!(
            &cmds[1..],
            &[
                DrawCommand::BeginPath,
                DrawCommand::Arc { cx: 50.0, cy: 40.0, radius: 30.0, start: 0.0, end: 2.0 * PI },
                DrawCommand::SetStroke { width: 2.0, color: lines },
                DrawCommand::Stroke,
                DrawCommand::SetStroke { width: 1.0, color: lines },
                DrawCommand::BeginPath,
                DrawCommand::MoveTo { x: 10.0, y: 40.0 },
                DrawCommand::LineTo { x: 90.0, y: 40.0 },
                DrawCommand::MoveTo { x: 50.0, y: 10.0 },
                DrawCommand::LineTo { x: 50.0, y: 70.0 },
                DrawCommand::Stroke,
            ]
        );
    }

    #[test]
    fn test_empty_samples_still_draw_frame() {
        let mut s = scope(40, 40);
        s.render(&[]);
        let rec = s.surface().unwrap();
        assert!(rec.points().is_empty());
        assert_eq!(rec.len(), 11);
    }

    #[test]
    fn test_custom_colors_and_buffer() {
        let config = ScopeConfig {
            vectorscope_axes: "#00ff00".into(),
            buffer: 4,
            ..Default::default()
        };
        let mut s = Vectorscope::new(&config).unwrap();
        s.bind(Recorder::new(20, 20));
        assert_eq!(s.geometry(), (10.0, 10.0, 6.0));
        s.render(&[]);
        assert!(s
            .surface()
            .unwrap()
            .commands()
            .contains(&DrawCommand::SetStroke { width: 1.0, color: Rgba::opaque(0, 255, 0) }));
    }

    #[test]
    fn test_bad_config_color() {
        let config = ScopeConfig {
            vectorscope_lines: "orange-ish".into(),
            ..Default::default()
        };
        assert!(Vectorscope::<Recorder>::new(&config).is_err());
    }

    #[test]
    fn test_unbind() {
        let mut s = scope(30, 30);
        let rec = s.unbind().unwrap();
        assert_eq!(rec.width(), 30);
        assert_eq!(s.geometry().0, 0.0);
        s.render(&[Hsv::new(0.0, 1.0, 1.0)]);
        assert!(s.surface().is_none());
    }

    #[test]
    fn test_canvas_render() {
        let mut s = Vectorscope::new(&ScopeConfig::default()).unwrap();
        s.bind(Canvas::new(100, 100));
        s.clear();
        s.render(&[Hsv::new(45.0, 0.5, 1.0)]);

        let canvas = s.surface().unwrap();
        // 50 + 20 * cos(45deg) = 64.14, inside pixel 64
        assert_eq!(canvas.pixel(64, 64).unwrap().rgb(), vscope_core::Rgb::gray(255));
        // background stays
        assert_eq!(canvas.pixel(25, 25).unwrap(), Rgba::opaque(0x33, 0x33, 0x33));
        // circle in line color
        assert_eq!(canvas.pixel(89, 45).unwrap().rgb(), vscope_core::Rgb::new(0xfd, 0xb4, 0x4e));
    }

    #[test]
    fn test_canvas_skips_nan_sample() {
        let mut s = Vectorscope::new(&ScopeConfig::default()).unwrap();
        s.bind(Canvas::new(100, 100));
        s.clear();
        s.render(&[Hsv::new(f64::NAN, 1.0, 1.0), Hsv::new(0.0, f64::INFINITY, 1.0)]);

        let canvas = s.surface().unwrap();
        let bg = Rgba::opaque(0x33, 0x33, 0x33);
        assert_eq!(canvas.pixel(0, 0), Some(bg));
        assert_eq!(canvas.pixel(25, 25), Some(bg));
        assert_eq!(canvas.pixel(75, 75), Some(bg));
    }

    #[test]
    fn test_small_surface_negative_radius() {
        let s = scope(16, 16);
        assert_eq!(s.geometry(), (8.0, 8.0, -2.0));
        assert_eq!(s.project(&Hsv::new(0.0, 1.0, 1.0)), (6.0, 8.0));
    }

    #[test]
    fn test_render_through_mut_ref() {
        let mut rec = Recorder::new(100, 100);
        {
            let mut s = Vectorscope::new(&ScopeConfig::default()).unwrap();
            s.bind(&mut rec);
            s.render(&[Hsv::new(0.0, 1.0, 1.0)]);
        }
        assert_eq!(rec.points().len(), 1);
    }
}
