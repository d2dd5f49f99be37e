//! Error types for vscope-core operations.
//!
//! Color conversion, hue remapping and plotting never fail. The only fallible
//! step in the core is turning a raw pixel buffer into samples, which is
//! what [`Error`] describes.
//!
//! # Usage
//!
//! ```rust
//! use vscope_core::{Error, Result};
//!
//! fn check_channels(channels: usize) -> Result<()> {
//!     if channels != 3 && channels != 4 {
//!         return Err(Error::UnsupportedChannels(channels));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while producing sample sequences.
#[derive(Debug, Error)]
pub enum Error {
    /// Interleaved buffers must carry RGB (3) or RGBA (4) channels.
    #[error("unsupported channel count {0}, expected 3 (RGB) or 4 (RGBA)")]
    UnsupportedChannels(usize),

    /// Buffer length is not a whole number of pixels.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vscope_core::Error;
    ///
    /// let err = Error::BufferLength { len: 10, channels: 4 };
    /// assert!(err.to_string().contains("10"));
    /// ```
    #[error("buffer of {len} bytes is not a multiple of {channels} channels")]
    BufferLength {
        /// Buffer length in bytes
        len: usize,
        /// Channels per pixel
        channels: usize,
    },

    /// Pattern dimensions are zero.
    #[error("invalid pattern dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnsupportedChannels(2);
        assert!(err.to_string().contains('2'));

        let err = Error::BufferLength { len: 7, channels: 3 };
        assert_eq!(err.to_string(), "buffer of 7 bytes is not a multiple of 3 channels");
    }
}
