//! RGBA rasters
//!
//! Two containers share one memory layout:
//!
//! - [`RgbaView`] borrows a caller-owned byte slice mutably for the length
//!   of an operation. This is what a host hands over after reading pixels
//!   back from its drawing surface.
//! - [`RgbaImage`] owns its bytes. Hosts that keep their own canvas copy and
//!   tests use it; [`RgbaImage::view_mut`] produces an [`RgbaView`] over it.
//!
//! # Pixel layout
//!
//! - Rows are stored top to bottom with no padding
//! - Each pixel is 4 bytes: R, G, B, A
//! - The byte offset of `(x, y)` is `(y * width + x) * 4`

mod access;
mod pointer;

pub use access::{pixel_offset, read_pixel, write_pixel};
pub use pointer::pixel_at_pointer;

use crate::color::{BYTES_PER_PIXEL, Color};
use crate::error::{InvalidInput, Result};

/// Check dimensions and buffer length against each other.
///
/// Uses u64 arithmetic so that `width * height * 4` cannot wrap on 32-bit
/// targets.
///
/// # Errors
///
/// - [`InvalidInput::InvalidDimension`] if width or height is 0, or the
///   byte size does not fit in `usize`
/// - [`InvalidInput::BufferLength`] if `len != width * height * 4`
pub fn validate_layout(width: u32, height: u32, len: usize) -> Result<()> {
    let expected = checked_len(width, height)?;
    if expected != len {
        return Err(InvalidInput::BufferLength {
            expected,
            actual: len,
        });
    }
    Ok(())
}

/// Byte length of a `width x height` raster, rejecting zero or
/// unaddressable dimensions.
fn checked_len(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(InvalidInput::InvalidDimension { width, height });
    }
    required_len(width, height).ok_or(InvalidInput::InvalidDimension { width, height })
}

/// Number of bytes a `width x height` RGBA raster needs, if addressable.
pub fn required_len(width: u32, height: u32) -> Option<usize> {
    let bytes = u64::from(width)
        .checked_mul(u64::from(height))?
        .checked_mul(BYTES_PER_PIXEL as u64)?;
    usize::try_from(bytes).ok()
}

/// Exclusive, validated borrow of a caller-owned RGBA buffer
///
/// # Examples
///
/// ```
/// use paintbucket_core::{Color, RgbaView};
///
/// let mut bytes = vec![255u8; 2 * 2 * 4];
/// let mut view = RgbaView::new(&mut bytes, 2, 2).unwrap();
/// view.set_pixel(1, 0, Color::BLACK);
/// assert_eq!(view.pixel(1, 0), Some(Color::BLACK));
/// assert_eq!(view.pixel(2, 0), None);
/// ```
#[derive(Debug)]
pub struct RgbaView<'a> {
    data: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> RgbaView<'a> {
    /// Wrap `data` as a `width x height` raster.
    ///
    /// # Errors
    ///
    /// See [`validate_layout`].
    pub fn new(data: &'a mut [u8], width: u32, height: u32) -> Result<Self> {
        validate_layout(width, height, data.len())?;
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether `(x, y)` lies inside the raster.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..]
    }

    /// Get the color at `(x, y)`, or `None` if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.contains(x, y)
            .then(|| read_pixel(&self.data[..], self.width, x, y))
    }

    /// Get the color at `(x, y)` without a bounds check on the coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` maps past the end of the buffer.
    #[inline]
    pub fn pixel_unchecked(&self, x: u32, y: u32) -> Color {
        read_pixel(&self.data[..], self.width, x, y)
    }

    /// Set the color at `(x, y)`.
    ///
    /// Returns `false` and writes nothing if out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        write_pixel(&mut self.data[..], self.width, x, y, color);
        true
    }

    /// Set the color at `(x, y)` without a bounds check on the coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` maps past the end of the buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, color: Color) {
        write_pixel(&mut self.data[..], self.width, x, y, color);
    }
}

/// Owned RGBA raster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaImage {
    /// Create a raster of transparent black pixels.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::InvalidDimension`] if width or height is 0
    /// or the size is not addressable.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, Color::TRANSPARENT)
    }

    /// Create a raster with every pixel set to `color`.
    pub fn new_filled(width: u32, height: u32, color: Color) -> Result<Self> {
        let len = checked_len(width, height)?;
        let data = color
            .to_array()
            .iter()
            .copied()
            .cycle()
            .take(len)
            .collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Take ownership of raw RGBA bytes.
    ///
    /// # Errors
    ///
    /// See [`validate_layout`].
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        validate_layout(width, height, data.len())?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Give the raw bytes back.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Borrow the pixels as an [`RgbaView`].
    pub fn view_mut(&mut self) -> RgbaView<'_> {
        RgbaView {
            data: self.data.as_mut_slice(),
            width: self.width,
            height: self.height,
        }
    }

    /// Get the color at `(x, y)`, or `None` if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        (x < self.width && y < self.height).then(|| read_pixel(&self.data, self.width, x, y))
    }

    /// Set the color at `(x, y)`.
    ///
    /// Returns `false` and writes nothing if out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> bool {
        self.view_mut().set_pixel(x, y, color)
    }

    /// Overwrite every pixel with `color`.
    ///
    /// Hosts use this to reset a canvas before redrawing a background.
    pub fn fill(&mut self, color: Color) {
        let px = color.to_array();
        for chunk in self.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            chunk.copy_from_slice(&px);
        }
    }

    /// Count pixels exactly equal to `color`.
    pub fn count_color(&self, color: Color) -> usize {
        let px = color.to_array();
        self.data
            .chunks_exact(BYTES_PER_PIXEL)
            .filter(|chunk| *chunk == px)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_layout() {
        assert!(validate_layout(5, 5, 100).is_ok());
        assert_eq!(
            validate_layout(0, 5, 0),
            Err(InvalidInput::InvalidDimension {
                width: 0,
                height: 5
            })
        );
        assert_eq!(
            validate_layout(5, 5, 99),
            Err(InvalidInput::BufferLength {
                expected: 100,
                actual: 99
            })
        );
        assert_eq!(
            validate_layout(u32::MAX, u32::MAX, 0),
            Err(InvalidInput::InvalidDimension {
                width: u32::MAX,
                height: u32::MAX
            })
        );
    }

    #[test]
    fn test_view_rejects_short_buffer() {
        let mut bytes = vec![0u8; 15];
        assert!(RgbaView::new(&mut bytes, 2, 2).is_err());
    }

    #[test]
    fn test_view_pixel_access() {
        let mut bytes = vec![0u8; 3 * 2 * 4];
        let mut view = RgbaView::new(&mut bytes, 3, 2).unwrap();
        assert_eq!(view.width(), 3);
        assert_eq!(view.height(), 2);

        assert!(view.set_pixel(2, 1, Color::new(9, 8, 7, 6)));
        assert!(!view.set_pixel(3, 1, Color::WHITE));
        assert_eq!(view.pixel(2, 1), Some(Color::new(9, 8, 7, 6)));
        assert_eq!(view.pixel_unchecked(0, 0), Color::TRANSPARENT);
        assert_eq!(view.pixel(0, 2), None);

        // Last pixel of the buffer
        assert_eq!(&bytes[20..24], &[9, 8, 7, 6]);
    }

    #[test]
    fn test_image_new_filled() {
        let img = RgbaImage::new_filled(4, 3, Color::rgb(1, 2, 3)).unwrap();
        assert_eq!(img.as_bytes().len(), 48);
        assert_eq!(img.pixel(3, 2), Some(Color::rgb(1, 2, 3)));
        assert_eq!(img.count_color(Color::rgb(1, 2, 3)), 12);
        assert!(RgbaImage::new(0, 3).is_err());
    }

    #[test]
    fn test_image_fill_and_raw() {
        let mut img = RgbaImage::new(2, 2).unwrap();
        assert!(img.set_pixel(1, 1, Color::BLACK));
        assert_eq!(img.count_color(Color::BLACK), 1);

        img.fill(Color::WHITE);
        assert_eq!(img.count_color(Color::WHITE), 4);

        let raw = img.clone().into_raw();
        assert_eq!(RgbaImage::from_raw(2, 2, raw).unwrap(), img);
        assert!(RgbaImage::from_raw(2, 2, vec![0; 4]).is_err());
    }
}
