//! Software raster surface.
//!
//! [`Canvas`] implements [`DrawingSurface`] over an RGBA buffer so a scope
//! can be rendered without a windowing system.
//!
//! # Rasterization rules
//!
//! - `fill_rect` covers every pixel whose center lies inside the rectangle,
//!   so a 1x1 fill at any float position touches exactly one pixel.
//! - Strokes cover every pixel whose center is within half the line width
//!   (at least half a pixel) of a path segment. Each pixel is blended at most
//!   once per `stroke` call.
//! - Arcs are approximated by polylines.
//! - Colors are composited with alpha-over.
//! - Non-finite coordinates draw nothing, like on an HTML canvas.
//!
//! Finished canvases are exported as PNG through the `png` crate.

use std::f64::consts::TAU;

use tracing::{debug, trace};
use vscope_core::Rgba;

use crate::error::{PlotError, PlotResult};
use crate::surface::DrawingSurface;

/// Pixel with straight (non-premultiplied) alpha, channels in `[0, 1]`.
type Px = [f32; 4];

/// RGBA raster drawing surface.
///
/// # Example
///
/// ```rust
/// use vscope_core::Rgba;
/// use vscope_plot::{Canvas, DrawingSurface};
///
/// let mut canvas = Canvas::new(4, 4);
/// canvas.fill(Rgba::opaque(0, 0, 0));
/// canvas.fill_rect(1.2, 2.2, 1.0, 1.0, Rgba::white(1.0));
/// assert_eq!(canvas.pixel(1, 2), Some(Rgba::opaque(255, 255, 255)));
/// assert_eq!(canvas.pixel(1, 3), Some(Rgba::opaque(0, 0, 0)));
/// ```
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Px>,
    stroke_width: f64,
    stroke_color: Rgba,
    path: Vec<Vec<(f64, f64)>>,
}

impl Canvas {
    /// Creates a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0.0; 4]; width as usize * height as usize],
            stroke_width: 1.0,
            stroke_color: Rgba::opaque(0, 0, 0),
            path: Vec::new(),
        }
    }

    /// Replaces every pixel with `color` (no blending).
    pub fn fill(&mut self, color: Rgba) {
        let px = to_px(color);
        self.pixels.iter_mut().for_each(|p| *p = px);
    }

    /// Resets to fully transparent.
    pub fn clear(&mut self) {
        self.fill(Rgba::TRANSPARENT);
    }

    /// Reads one pixel, `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(from_px(self.pixels[self.index(x, y)]))
    }

    /// Interleaved RGBA8 bytes, alpha scaled to `[0, 255]`.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for p in &self.pixels {
            out.extend_from_slice(&[to_u8(p[0]), to_u8(p[1]), to_u8(p[2]), to_u8(p[3])]);
        }
        out
    }

    /// Interleaved RGB8 bytes with every pixel composited over an opaque
    /// `background`.
    pub fn to_rgb8(&self, background: Rgba) -> Vec<u8> {
        let bg = to_px(Rgba { a: 1.0, ..background });
        let mut out = Vec::with_capacity(self.pixels.len() * 3);
        for p in &self.pixels {
            let mut c = bg;
            blend(&mut c, *p);
            out.extend_from_slice(&[to_u8(c[0]), to_u8(c[1]), to_u8(c[2])]);
        }
        out
    }

    /// Encodes the canvas as an 8-bit RGB PNG, composited over `background`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vscope_core::Rgba;
    /// use vscope_plot::Canvas;
    ///
    /// let png = Canvas::new(8, 8).to_png(Rgba::opaque(255, 255, 255)).unwrap();
    /// assert_eq!(&png[1..4], b"PNG");
    /// ```
    pub fn to_png(&self, background: Rgba) -> PlotResult<Vec<u8>> {
        let data = self.to_rgb8(background);
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, self.width, self.height);
            encoder.set_color(png::ColorType::Rgb);
            encoder.set_depth(png::BitDepth::Eight);
            encoder.set_compression(png::Compression::default());
            encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

            let mut writer = encoder
                .write_header()
                .map_err(|e| PlotError::Encode(e.to_string()))?;
            writer
                .write_image_data(&data)
                .map_err(|e| PlotError::Encode(e.to_string()))?;
            writer.finish().map_err(|e| PlotError::Encode(e.to_string()))?;
        }
        debug!(width = self.width, height = self.height, bytes = out.len(), "canvas png");
        Ok(out)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Pixel index span whose centers fall in `[lo, hi)`, clipped to `0..limit`.
    ///
    /// Empty when either bound is not finite.
    fn center_span(lo: f64, hi: f64, limit: u32) -> (u32, u32) {
        if !lo.is_finite() || !hi.is_finite() {
            return (0, 0);
        }
        let a = (lo - 0.5).ceil().max(0.0);
        let b = (hi - 0.5).ceil().min(f64::from(limit));
        if a >= b {
            return (0, 0);
        }
        (a as u32, b as u32)
    }

    fn current_point(&self) -> Option<(f64, f64)> {
        self.path.last().and_then(|sub| sub.last().copied())
    }

    fn push_point(&mut self, x: f64, y: f64) {
        match self.path.last_mut() {
            Some(sub) => sub.push((x, y)),
            None => self.path.push(vec![(x, y)]),
        }
    }

    /// Marks pixels within `hw` of segment a-b.
    fn cover_segment(&self, mask: &mut [bool], a: (f64, f64), b: (f64, f64), hw: f64) {
        if ![a.0, a.1, b.0, b.1].iter().all(|v| v.is_finite()) {
            return;
        }
        let (x0, x1) = Self::center_span(a.0.min(b.0) - hw, a.0.max(b.0) + hw + 1.0, self.width);
        let (y0, y1) = Self::center_span(a.1.min(b.1) - hw, a.1.max(b.1) + hw + 1.0, self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                let p = (f64::from(x) + 0.5, f64::from(y) + 0.5);
                if dist_to_segment(p, a, b) <= hw {
                    mask[self.index(x, y)] = true;
                }
            }
        }
    }
}

impl DrawingSurface for Canvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba) {
        let (xa, xb) = if w < 0.0 { (x + w, x) } else { (x, x + w) };
        let (ya, yb) = if h < 0.0 { (y + h, y) } else { (y, y + h) };
        let (x0, x1) = Self::center_span(xa, xb, self.width);
        let (y0, y1) = Self::center_span(ya, yb, self.height);

        let src = to_px(color);
        for py in y0..y1 {
            for px in x0..x1 {
                let i = self.index(px, py);
                blend(&mut self.pixels[i], src);
            }
        }
    }

    fn set_stroke(&mut self, width: f64, color: Rgba) {
        self.stroke_width = width;
        self.stroke_color = color;
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.push(vec![(x, y)]);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push_point(x, y);
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        if ![cx, cy, radius, start, end].iter().all(|v| v.is_finite()) {
            return;
        }
        let sweep = (end - start).clamp(-TAU, TAU);
        let steps = ((sweep.abs() * radius.abs() / 2.0).ceil() as usize).max(16);

        // A pending subpath is joined to the arc start, as on an HTML canvas.
        let start_pt = (cx + radius * start.cos(), cy + radius * start.sin());
        if self.current_point().is_some() {
            self.push_point(start_pt.0, start_pt.1);
        } else {
            self.move_to(start_pt.0, start_pt.1);
        }

        for i in 1..=steps {
            let a = start + sweep * i as f64 / steps as f64;
            self.push_point(cx + radius * a.cos(), cy + radius * a.sin());
        }
    }

    fn stroke(&mut self) {
        let hw = (self.stroke_width / 2.0).max(0.5);
        let mut mask = vec![false; self.pixels.len()];

        for sub in &self.path {
            match sub.as_slice() {
                [] => {}
                [p] => self.cover_segment(&mut mask, *p, *p, hw),
                pts => {
                    for seg in pts.windows(2) {
                        self.cover_segment(&mut mask, seg[0], seg[1], hw);
                    }
                }
            }
        }

        let src = to_px(self.stroke_color);
        let mut covered = 0usize;
        for (p, hit) in self.pixels.iter_mut().zip(&mask) {
            if *hit {
                blend(p, src);
                covered += 1;
            }
        }
        trace!(covered, width = self.stroke_width, "canvas stroke");
    }
}

/// Alpha-over: `out = src * src_a + dst * dst_a * (1 - src_a)`.
fn blend(dst: &mut Px, src: Px) {
    let sa = src[3];
    let da = dst[3];
    let out_a = sa + da * (1.0 - sa);
    if out_a > 0.0 {
        for i in 0..3 {
            dst[i] = (src[i] * sa + dst[i] * da * (1.0 - sa)) / out_a;
        }
    }
    dst[3] = out_a;
}

fn dist_to_segment(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len2 = dx * dx + dy * dy;
    let t = if len2 > 0.0 {
        (((p.0 - a.0) * dx + (p.1 - a.1) * dy) / len2).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (qx, qy) = (a.0 + t * dx, a.1 + t * dy);
    ((p.0 - qx).powi(2) + (p.1 - qy).powi(2)).sqrt()
}

fn to_px(c: Rgba) -> Px {
    [
        f32::from(c.r) / 255.0,
        f32::from(c.g) / 255.0,
        f32::from(c.b) / 255.0,
        c.a.clamp(0.0, 1.0) as f32,
    ]
}

fn from_px(p: Px) -> Rgba {
    Rgba::new(to_u8(p[0]), to_u8(p[1]), to_u8(p[2]), f64::from(p[3]))
}

#[inline]
fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
