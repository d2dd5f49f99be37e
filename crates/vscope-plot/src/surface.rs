//! Drawing surface abstraction.
//!
//! The plotter needs very little from its target: query the size, fill a
//! small rectangle with an RGBA color, and stroke paths made of lines and
//! circular arcs. [`DrawingSurface`] captures exactly that, following the
//! HTML canvas 2D call model (path building, then `stroke`).
//!
//! Two implementations ship with the crate:
//! - [`Recorder`] - keeps an ordered [`DrawCommand`] list (display list, tests)
//! - [`crate::Canvas`] - rasterizes into an RGBA buffer

use vscope_core::Rgba;

/// Minimal 2D drawing capability.
///
/// Coordinates are in pixels with the origin at the top-left corner and y
/// pointing down. Angles are in radians.
pub trait DrawingSurface {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba);

    /// Sets line width and color for subsequent [`stroke`](Self::stroke) calls.
    fn set_stroke(&mut self, width: f64, color: Rgba);

    /// Discards the current path.
    fn begin_path(&mut self);

    /// Starts a new subpath at (x, y).
    fn move_to(&mut self, x: f64, y: f64);

    /// Adds a straight segment to (x, y).
    fn line_to(&mut self, x: f64, y: f64);

    /// Adds a circular arc from `start` to `end`, clockwise on screen.
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64);

    /// Strokes the current path with the current stroke style.
    fn stroke(&mut self);
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba) {
        (**self).fill_rect(x, y, w, h, color)
    }

    fn set_stroke(&mut self, width: f64, color: Rgba) {
        (**self).set_stroke(width, color)
    }

    fn begin_path(&mut self) {
        (**self).begin_path()
    }

    fn move_to(&mut self, x: f64, y: f64) {
        (**self).move_to(x, y)
    }

    fn line_to(&mut self, x: f64, y: f64) {
        (**self).line_to(x, y)
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        (**self).arc(cx, cy, radius, start, end)
    }

    fn stroke(&mut self) {
        (**self).stroke()
    }
}

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum DrawCommand {
    FillRect { x: f64, y: f64, w: f64, h: f64, color: Rgba },
    SetStroke { width: f64, color: Rgba },
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Arc { cx: f64, cy: f64, radius: f64, start: f64, end: f64 },
    Stroke,
}

/// Surface that records every call in order.
///
/// # Example
///
/// ```rust
/// use vscope_core::Rgba;
/// use vscope_plot::{DrawCommand, DrawingSurface, Recorder};
///
/// let mut rec = Recorder::new(64, 32);
/// rec.fill_rect(1.0, 2.0, 1.0, 1.0, Rgba::white(1.0));
/// assert_eq!(rec.len(), 1);
/// assert!(matches!(rec.commands()[0], DrawCommand::FillRect { .. }));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl Recorder {
    /// Creates an empty recorder with the given surface size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Recorded commands, oldest first.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Consumes the recorder, returning the command list.
    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when nothing was drawn.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Forgets all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Position and color of every `fill_rect` call.
    pub fn points(&self) -> Vec<(f64, f64, Rgba)> {
        self.commands
            .iter()
            .filter_map(|c| match *c {
                DrawCommand::FillRect { x, y, color, .. } => Some((x, y, color)),
                _ => None,
            })
            .collect()
    }

    fn push(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }
}

impl DrawingSurface for Recorder {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba) {
        self.push(DrawCommand::FillRect { x, y, w, h, color });
    }

    fn set_stroke(&mut self, width: f64, color: Rgba) {
        self.push(DrawCommand::SetStroke { width, color });
    }

    fn begin_path(&mut self) {
        self.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push(DrawCommand::LineTo { x, y });
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        self.push(DrawCommand::Arc { cx, cy, radius, start, end });
    }

    fn stroke(&mut self) {
        self.push(DrawCommand::Stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_order() {
        let mut rec = Recorder::new(10, 20);
        rec.begin_path();
        rec.move_to(1.0, 1.0);
        rec.line_to(2.0, 2.0);
        rec.stroke();

        assert_eq!(rec.width(), 10);
        assert_eq!(rec.height(), 20);
        assert_eq!(
            rec.commands(),
            &[
                DrawCommand::BeginPath,
                DrawCommand::MoveTo { x: 1.0, y: 1.0 },
                DrawCommand::LineTo { x: 2.0, y: 2.0 },
                DrawCommand::Stroke,
            ]
        );
        assert!(rec.points().is_empty());
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut rec = Recorder::new(5, 5);
        {
            let mut r: &mut Recorder = &mut rec;
            DrawingSurface::fill_rect(&mut r, 0.5, 1.5, 1.0, 1.0, Rgba::white(0.3));
            assert_eq!(DrawingSurface::width(&r), 5);
        }
        assert_eq!(rec.points(), vec![(0.5, 1.5, Rgba::white(0.3))]);
        rec.clear();
        assert!(rec.is_empty());
    }
}
