//! Seed fill operations
//!
//! Tolerance-based flood fill of an RGBA raster, starting from a seed pixel
//! and spreading through 4-connected neighbors whose color lies within
//! `tolerance` of the seed's original color.
//!
//! # Algorithm
//!
//! The fill works on horizontal spans with an explicit stack instead of
//! recursion or per-pixel pushes:
//!
//! 1. Pop a coordinate and walk left to the first pixel of its matching run.
//! 2. Walk right, repainting each matching pixel as soon as it is visited.
//! 3. While walking, push one coordinate for every contiguous run of
//!    matching pixels in the row above and one for every run in the row
//!    below.
//!
//! Repainted pixels stop matching, so rows that are scanned again end
//! immediately. When the fill color itself lies within the tolerance of the
//! seed color that no longer holds, and painted pixels are tracked in a
//! per-pixel visited mask instead. The stack holds pending runs rather than pixels, which keeps
//! it proportional to the image height for ordinary line art.

use paintbucket_core::color::colors_match;
use paintbucket_core::{Color, InvalidInput, Result, RgbaImage, RgbaView};
use tracing::{debug, trace};

/// Options for a seed fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillOptions {
    /// Color written to every filled pixel, verbatim
    pub fill_color: Color,
    /// Radius on the RGBA distance from the seed color (0 = exact match)
    pub tolerance: u32,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self {
            fill_color: Color::BLACK,
            tolerance: 0,
        }
    }
}

impl FillOptions {
    /// Create options that paint `fill_color` with exact matching
    pub fn new(fill_color: Color) -> Self {
        Self {
            fill_color,
            tolerance: 0,
        }
    }

    /// Set the match tolerance
    pub fn with_tolerance(mut self, tolerance: u32) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Statistics from a completed fill
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillStats {
    /// Number of pixels repainted
    pub pixels_filled: u64,
    /// Number of stack entries that painted at least one pixel
    pub spans: u64,
    /// Largest number of pending entries on the span stack
    pub peak_stack: usize,
}

/// Flood fill a caller-owned RGBA buffer in place.
///
/// Every pixel 4-connected to `(seed_x, seed_y)` through pixels within
/// `tolerance` of the seed's original color is set to `fill_color`.
///
/// # Arguments
///
/// * `buffer` - Row-major RGBA bytes, `width * height * 4` long
/// * `width` - Width in pixels (must be > 0)
/// * `height` - Height in pixels (must be > 0)
/// * `seed_x` - X coordinate of the seed point
/// * `seed_y` - Y coordinate of the seed point
/// * `fill_color` - Color to paint
/// * `tolerance` - Radius on the RGBA distance (`distance^2 <= tolerance^2`)
///
/// If the seed pixel already equals `fill_color` exactly, nothing is
/// written, whatever the tolerance.
///
/// # Errors
///
/// Returns [`InvalidInput`] for zero dimensions, a buffer of the wrong
/// length or a seed outside the image. The buffer is untouched in that case.
///
/// # Examples
///
/// ```
/// use paintbucket_core::Color;
/// use paintbucket_region::fill;
///
/// let mut buffer = vec![255u8; 3 * 3 * 4];
/// fill(&mut buffer, 3, 3, 1, 1, Color::rgb(255, 0, 0), 10).unwrap();
/// assert_eq!(&buffer[0..4], &[255, 0, 0, 255]);
/// ```
pub fn fill(
    buffer: &mut [u8],
    width: u32,
    height: u32,
    seed_x: u32,
    seed_y: u32,
    fill_color: Color,
    tolerance: u32,
) -> Result<()> {
    let mut view = RgbaView::new(buffer, width, height)?;
    let options = FillOptions::new(fill_color).with_tolerance(tolerance);
    fill_view(&mut view, seed_x, seed_y, &options)?;
    Ok(())
}

/// Flood fill an owned image in place.
///
/// Same semantics as [`fill`]; returns statistics about the fill.
pub fn fill_image(
    image: &mut RgbaImage,
    seed_x: u32,
    seed_y: u32,
    options: &FillOptions,
) -> Result<FillStats> {
    fill_view(&mut image.view_mut(), seed_x, seed_y, options)
}

/// Flood fill a validated raster view in place.
///
/// # Errors
///
/// Returns [`InvalidInput::SeedOutOfBounds`] if the seed lies outside the
/// view. Dimensions and buffer length were already checked when the view
/// was built.
pub fn fill_view(
    view: &mut RgbaView<'_>,
    seed_x: u32,
    seed_y: u32,
    options: &FillOptions,
) -> Result<FillStats> {
    if !view.contains(seed_x, seed_y) {
        return Err(InvalidInput::SeedOutOfBounds {
            x: seed_x,
            y: seed_y,
            width: view.width(),
            height: view.height(),
        });
    }

    let target = view.pixel_unchecked(seed_x, seed_y);
    if target == options.fill_color {
        debug!(seed_x, seed_y, color = %target, "seed already holds fill color");
        return Ok(FillStats::default());
    }

    let mut filler = SpanFiller {
        target,
        fill_color: options.fill_color,
        tolerance: options.tolerance,
        // A fill color inside the tolerance radius keeps matching after it is
        // written, so painted pixels have to be remembered separately.
        visited: colors_match(options.fill_color, target, options.tolerance)
            .then(|| vec![false; view.width() as usize * view.height() as usize]),
        stack: vec![(seed_x, seed_y)],
        stats: FillStats {
            peak_stack: 1,
            ..FillStats::default()
        },
        view,
    };
    filler.run();

    let stats = filler.stats;
    debug!(
        seed_x,
        seed_y,
        target = %target,
        fill = %options.fill_color,
        tolerance = options.tolerance,
        pixels = stats.pixels_filled,
        spans = stats.spans,
        peak_stack = stats.peak_stack,
        "fill complete"
    );
    Ok(stats)
}

/// Traversal state for one fill call
struct SpanFiller<'v, 'a> {
    view: &'v mut RgbaView<'a>,
    /// Seed color sampled before any write
    target: Color,
    fill_color: Color,
    tolerance: u32,
    /// Row-major painted flags, only when the fill color itself matches
    visited: Option<Vec<bool>>,
    stack: Vec<(u32, u32)>,
    stats: FillStats,
}

impl SpanFiller<'_, '_> {
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.view.width() as usize + x as usize
    }

    #[inline]
    fn matches(&self, x: u32, y: u32) -> bool {
        if let Some(visited) = &self.visited
            && visited[self.index(x, y)]
        {
            return false;
        }
        colors_match(self.view.pixel_unchecked(x, y), self.target, self.tolerance)
    }

    #[inline]
    fn paint(&mut self, x: u32, y: u32) {
        self.view.set_pixel_unchecked(x, y, self.fill_color);
        let i = self.index(x, y);
        if let Some(visited) = &mut self.visited {
            visited[i] = true;
        }
    }

    /// Push the start of a run in row `y` when the pixel at `x` begins one.
    ///
    /// `in_run` tracks whether the previous column of that row was matching.
    #[inline]
    fn look_at(&mut self, x: u32, y: u32, in_run: &mut bool) {
        let m = self.matches(x, y);
        if m && !*in_run {
            self.stack.push((x, y));
            *in_run = true;
        } else if !m && *in_run {
            *in_run = false;
        }
    }

    fn run(&mut self) {
        let width = self.view.width();
        let height = self.view.height();

        while let Some((x, y)) = self.stack.pop() {
            // Leftmost matching pixel of the run containing x
            let mut cx = if self.matches(x, y) {
                let mut left = x;
                while left > 0 && self.matches(left - 1, y) {
                    left -= 1;
                }
                left
            } else {
                x + 1
            };
            let start = cx;

            let mut span_above = false;
            let mut span_below = false;

            while cx < width && self.matches(cx, y) {
                self.paint(cx, y);
                if y > 0 {
                    self.look_at(cx, y - 1, &mut span_above);
                }
                if y + 1 < height {
                    self.look_at(cx, y + 1, &mut span_below);
                }
                cx += 1;
            }

            if cx > start {
                let painted = u64::from(cx - start);
                self.stats.pixels_filled += painted;
                self.stats.spans += 1;
                self.stats.peak_stack = self.stats.peak_stack.max(self.stack.len());
                trace!(y, x0 = start, x1 = cx - 1, pending = self.stack.len(), "span");
            }
        }
    }
}
