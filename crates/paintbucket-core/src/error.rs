//! Error types for paintbucket-core
//!
//! A fill has exactly one failure mode: the caller handed it an input it
//! cannot work with. Each variant of [`InvalidInput`] records which
//! precondition was broken, so the host can report it, but all of them mean
//! the same thing: fix the call, do not retry it.

use thiserror::Error;

/// Precondition violation detected before any pixel is touched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// Width or height is zero
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Buffer length is not `width * height * 4`
    #[error("buffer length mismatch: expected {expected} bytes, got {actual}")]
    BufferLength { expected: usize, actual: usize },

    /// Seed coordinate lies outside the image
    #[error("seed ({x}, {y}) is outside the {width}x{height} image")]
    SeedOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Result type alias for raster and fill operations
pub type Result<T> = std::result::Result<T, InvalidInput>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = InvalidInput::InvalidDimension {
            width: 0,
            height: 4,
        };
        assert_eq!(err.to_string(), "invalid image dimensions: 0x4");

        let err = InvalidInput::BufferLength {
            expected: 100,
            actual: 96,
        };
        assert_eq!(
            err.to_string(),
            "buffer length mismatch: expected 100 bytes, got 96"
        );

        let err = InvalidInput::SeedOutOfBounds {
            x: 5,
            y: 5,
            width: 5,
            height: 5,
        };
        assert_eq!(err.to_string(), "seed (5, 5) is outside the 5x5 image");
    }
}
