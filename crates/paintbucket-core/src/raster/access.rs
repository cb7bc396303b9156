//! Pixel access functions
//!
//! Low-level reads and writes on a flat RGBA byte slice. Callers are
//! responsible for keeping `(x, y)` inside the raster; these functions only
//! rely on slice indexing to catch overruns.

use crate::color::{BYTES_PER_PIXEL, Color};

/// Byte offset of pixel `(x, y)` in a raster `width` pixels wide.
#[inline]
pub fn pixel_offset(width: u32, x: u32, y: u32) -> usize {
    (y as usize * width as usize + x as usize) * BYTES_PER_PIXEL
}

/// Read the pixel at `(x, y)`.
///
/// # Panics
///
/// Panics if the pixel lies past the end of `data`.
#[inline]
pub fn read_pixel(data: &[u8], width: u32, x: u32, y: u32) -> Color {
    let o = pixel_offset(width, x, y);
    Color::new(data[o], data[o + 1], data[o + 2], data[o + 3])
}

/// Write `color` verbatim at `(x, y)`.
///
/// No blending: all four channels, including alpha, are replaced.
///
/// # Panics
///
/// Panics if the pixel lies past the end of `data`.
#[inline]
pub fn write_pixel(data: &mut [u8], width: u32, x: u32, y: u32, color: Color) {
    let o = pixel_offset(width, x, y);
    data[o..o + BYTES_PER_PIXEL].copy_from_slice(&color.to_array());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        assert_eq!(pixel_offset(5, 0, 0), 0);
        assert_eq!(pixel_offset(5, 4, 0), 16);
        assert_eq!(pixel_offset(5, 0, 1), 20);
        assert_eq!(pixel_offset(5, 4, 4), 96);
    }

    #[test]
    fn test_write_replaces_alpha() {
        let mut data = vec![10u8; 8];
        write_pixel(&mut data, 2, 1, 0, Color::new(1, 2, 3, 0));
        assert_eq!(data, vec![10, 10, 10, 10, 1, 2, 3, 0]);
        assert_eq!(read_pixel(&data, 2, 1, 0), Color::new(1, 2, 3, 0));
    }
}
