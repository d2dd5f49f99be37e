//! Sample value types.
//!
//! # Types
//!
//! - [`Rgb`] - 8-bit RGB sample, one per source pixel
//! - [`Hsv`] - Hue/saturation/value, the model the vectorscope plots
//! - [`Hsl`] - Hue/saturation/lightness, produced alongside HSV
//! - [`Rgba`] - Draw color with a fractional alpha
//!
//! Hue is expressed in degrees. Converters may emit hues outside `[0, 360)`;
//! the hue wheel remap in `vscope-color` folds them back into range.

use std::fmt;

/// One sampled pixel, channels in `[0, 255]`.
///
/// # Example
///
/// ```
/// use vscope_core::Rgb;
///
/// let red = Rgb::new(255, 0, 0);
/// assert_eq!(red.max_channel(), 255);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Creates a new sample.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a gray sample with all channels equal.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Channels normalized to `[0, 1]`.
    #[inline]
    pub fn normalized(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }

    /// Largest channel value.
    #[inline]
    pub fn max_channel(self) -> u8 {
        self.r.max(self.g).max(self.b)
    }

    /// Smallest channel value.
    #[inline]
    pub fn min_channel(self) -> u8 {
        self.r.min(self.g).min(self.b)
    }

    /// True when all channels are equal (no defined hue).
    #[inline]
    pub fn is_achromatic(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(v: [u8; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Hue/saturation/value sample.
///
/// `h` in degrees, `s` and `v` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    /// Hue angle in degrees
    pub h: f64,
    /// Saturation
    pub s: f64,
    /// Value (brightness)
    pub v: f64,
}

impl Hsv {
    /// Creates a new HSV sample.
    #[inline]
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsv({:.2}, {:.4}, {:.4})", self.h, self.s, self.v)
    }
}

/// Hue/saturation/lightness sample.
///
/// `h` in degrees, `s` and `l` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    /// Hue angle in degrees
    pub h: f64,
    /// Saturation
    pub s: f64,
    /// Lightness
    pub l: f64,
}

impl Hsl {
    /// Creates a new HSL sample.
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({:.2}, {:.4}, {:.4})", self.h, self.s, self.l)
    }
}

/// Read/write access to the hue angle of a cylindrical color sample.
///
/// Lets hue operations accept either [`Hsv`] or [`Hsl`].
pub trait Hue {
    /// Hue angle in degrees.
    fn hue(&self) -> f64;

    /// Replaces the hue angle.
    fn set_hue(&mut self, h: f64);
}

impl Hue for Hsv {
    #[inline]
    fn hue(&self) -> f64 {
        self.h
    }

    #[inline]
    fn set_hue(&mut self, h: f64) {
        self.h = h;
    }
}

impl Hue for Hsl {
    #[inline]
    fn hue(&self) -> f64 {
        self.h
    }

    #[inline]
    fn set_hue(&mut self, h: f64) {
        self.h = h;
    }
}

/// Draw color: 8-bit RGB plus alpha in `[0, 1]`.
///
/// Mirrors a CSS `rgba(r, g, b, a)` value.
///
/// # Example
///
/// ```
/// use vscope_core::Rgba;
///
/// let dim_white = Rgba::white(0.25);
/// assert_eq!(dim_white.r, 255);
/// assert_eq!(dim_white.a, 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha in `[0, 1]`
    pub a: f64,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0.0);

    /// Creates a new draw color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// White with the given alpha.
    #[inline]
    pub const fn white(a: f64) -> Self {
        Self::new(255, 255, 255, a)
    }

    /// Drops the alpha channel.
    #[inline]
    pub fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}
