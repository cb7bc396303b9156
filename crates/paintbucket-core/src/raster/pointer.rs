//! Pointer to pixel mapping

/// Map a pointer position to the pixel under it.
///
/// The pixel is the floor of the pointer position relative to the
/// surface origin (both in the same coordinate space, e.g. client
/// coordinates of a mouse event and the canvas bounding rectangle).
///
/// Returns `None` if the position is not finite or falls outside the
/// `width x height` raster.
///
/// # Examples
///
/// ```
/// use paintbucket_core::pixel_at_pointer;
///
/// assert_eq!(pixel_at_pointer(110.7, 52.2, 100.0, 50.0, 400, 400), Some((10, 2)));
/// assert_eq!(pixel_at_pointer(99.5, 52.0, 100.0, 50.0, 400, 400), None);
/// ```
pub fn pixel_at_pointer(
    pointer_x: f64,
    pointer_y: f64,
    origin_x: f64,
    origin_y: f64,
    width: u32,
    height: u32,
) -> Option<(u32, u32)> {
    let x = (pointer_x - origin_x).floor();
    let y = (pointer_y - origin_y).floor();
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    if x < 0.0 || y < 0.0 || x >= f64::from(width) || y >= f64::from(height) {
        return None;
    }
    Some((x as u32, y as u32))
}
