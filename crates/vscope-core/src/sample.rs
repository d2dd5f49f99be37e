//! Sampling of decoded pixel buffers.
//!
//! The vectorscope consumes a flat sequence of [`Rgb`] samples, one per pixel
//! in row-major order. Decoding is left to the caller; this module only walks
//! an interleaved 8-bit buffer and drops the alpha channel when present.

use crate::error::{Error, Result};
use crate::model::Rgb;

/// Converts an interleaved 8-bit buffer into RGB samples.
///
/// `channels` is 3 for RGB or 4 for RGBA. Alpha is skipped. The output has
/// exactly `data.len() / channels` entries in buffer order.
///
/// # Errors
///
/// - [`Error::UnsupportedChannels`] for any channel count other than 3 or 4
/// - [`Error::BufferLength`] if `data` does not hold a whole number of pixels
///
/// # Example
///
/// ```
/// use vscope_core::{samples_from_interleaved, Rgb};
///
/// let rgba = [255, 0, 0, 255, 0, 0, 255, 128];
/// let samples = samples_from_interleaved(&rgba, 4).unwrap();
/// assert_eq!(samples, vec![Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)]);
/// ```
pub fn samples_from_interleaved(data: &[u8], channels: usize) -> Result<Vec<Rgb>> {
    if channels != 3 && channels != 4 {
        return Err(Error::UnsupportedChannels(channels));
    }
    if data.len() % channels != 0 {
        return Err(Error::BufferLength {
            len: data.len(),
            channels,
        });
    }

    Ok(data
        .chunks_exact(channels)
        .map(|px| Rgb::new(px[0], px[1], px[2]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_buffer() {
        let data = [1, 2, 3, 4, 5, 6];
        let samples = samples_from_interleaved(&data, 3).unwrap();
        assert_eq!(samples, vec![Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)]);
    }

    #[test]
    fn test_rgba_skips_alpha() {
        let data = [10, 20, 30, 0, 40, 50, 60, 255, 70, 80, 90, 17];
        let samples = samples_from_interleaved(&data, 4).unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[2], Rgb::new(70, 80, 90));
    }

    #[test]
    fn test_empty_buffer() {
        let samples = samples_from_interleaved(&[], 4).unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn test_bad_channels() {
        assert!(matches!(
            samples_from_interleaved(&[0; 8], 2),
            Err(Error::UnsupportedChannels(2))
        ));
    }

    #[test]
    fn test_partial_pixel() {
        assert!(matches!(
            samples_from_interleaved(&[0; 7], 4),
            Err(Error::BufferLength { len: 7, channels: 4 })
        ));
    }
}
