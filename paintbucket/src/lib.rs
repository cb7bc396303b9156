//! paintbucket - Tolerance-based flood fill for RGBA rasters
//!
//! Paints the contiguous region around a seed pixel with a new color,
//! stopping at outlines even when they are surrounded by anti-aliasing
//! noise. The host supplies a raw RGBA buffer and a seed coordinate and gets
//! the same buffer back, repainted in place.
//!
//! # Overview
//!
//! - [`fill`] - The flat-buffer entry point
//! - [`region`] - Fill options, statistics and the view/image entry points
//! - [`config`] - Serializable fill settings for host UIs
//! - [`Color`], [`RgbaImage`], [`RgbaView`] - Core types
//!
//! # Example
//!
//! ```
//! use paintbucket::{Color, RgbaImage, config::FillConfig, region::fill_image};
//!
//! // A white canvas with a black vertical outline at x = 4
//! let mut canvas = RgbaImage::new_filled(8, 8, Color::WHITE).unwrap();
//! for y in 0..8 {
//!     canvas.set_pixel(4, y, Color::BLACK);
//! }
//!
//! // What the host's color picker and tolerance slider currently hold
//! let config = FillConfig::new("#3366ff".parse().unwrap());
//!
//! // A click at client (102.4, 53.9) on a canvas whose top-left is (100, 50)
//! let (x, y) = paintbucket::pixel_at_pointer(102.4, 53.9, 100.0, 50.0, 8, 8).unwrap();
//! fill_image(&mut canvas, x, y, &config.to_options()).unwrap();
//!
//! assert_eq!(canvas.pixel(0, 0), Some(Color::rgb(0x33, 0x66, 0xff)));
//! assert_eq!(canvas.pixel(7, 7), Some(Color::WHITE));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use paintbucket_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use paintbucket_config as config;
pub use paintbucket_region as region;

pub use paintbucket_region::fill;
