//! Test image fixtures and reference implementations

use std::collections::VecDeque;

use paintbucket_core::{Color, RgbaImage, colors_match};

use crate::error::TestResult;

/// Square image of `interior` pixels framed by a one pixel `ring`.
///
/// `ring_image(5, BLACK, WHITE)` is the 5x5 outline used throughout the
/// fill tests: black at row/column 0 and 4, white at 1..=3.
pub fn ring_image(size: u32, ring: Color, interior: Color) -> TestResult<RgbaImage> {
    let mut img = RgbaImage::new_filled(size, size, interior)?;
    let last = size - 1;
    for i in 0..size {
        img.set_pixel(i, 0, ring);
        img.set_pixel(i, last, ring);
        img.set_pixel(0, i, ring);
        img.set_pixel(last, i, ring);
    }
    Ok(img)
}

/// Simple linear congruential generator for reproducible randomness
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed as u64 }
    }

    pub fn next(&mut self) -> u64 {
        // LCG parameters from Numerical Recipes
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }

    /// Uniform value in `0..n` (`n` must be > 0)
    pub fn below(&mut self, n: u32) -> u32 {
        // High bits of an LCG are the well mixed ones
        ((self.next() >> 33) % u64::from(n)) as u32
    }
}

/// Image whose pixels are drawn uniformly from `palette`.
pub fn noise_image(
    width: u32,
    height: u32,
    palette: &[Color],
    rng: &mut SimpleRng,
) -> TestResult<RgbaImage> {
    let mut img = RgbaImage::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            let c = palette[rng.below(palette.len() as u32) as usize];
            img.set_pixel(x, y, c);
        }
    }
    Ok(img)
}

/// Pixels a tolerance fill from `(seed_x, seed_y)` must reach.
///
/// Naive breadth-first search over 4-connected neighbors, one queue entry
/// per pixel, with a separate visited mask. Returns a row-major mask of
/// `width * height` flags. Used as an oracle for the span fill.
pub fn reference_fill_mask(
    image: &RgbaImage,
    seed_x: u32,
    seed_y: u32,
    tolerance: u32,
) -> Vec<bool> {
    let width = image.width();
    let height = image.height();
    let idx = |x: u32, y: u32| (y * width + x) as usize;
    let mut mask = vec![false; (width * height) as usize];

    let Some(target) = image.pixel(seed_x, seed_y) else {
        return mask;
    };

    let mut queue = VecDeque::new();
    mask[idx(seed_x, seed_y)] = true;
    queue.push_back((seed_x, seed_y));

    while let Some((x, y)) = queue.pop_front() {
        let mut neighbors = Vec::with_capacity(4);
        if x > 0 {
            neighbors.push((x - 1, y));
        }
        if x + 1 < width {
            neighbors.push((x + 1, y));
        }
        if y > 0 {
            neighbors.push((x, y - 1));
        }
        if y + 1 < height {
            neighbors.push((x, y + 1));
        }

        for (nx, ny) in neighbors {
            let i = idx(nx, ny);
            if mask[i] {
                continue;
            }
            if let Some(c) = image.pixel(nx, ny)
                && colors_match(c, target, tolerance)
            {
                mask[i] = true;
                queue.push_back((nx, ny));
            }
        }
    }

    mask
}
