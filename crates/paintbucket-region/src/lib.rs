//! paintbucket-region - Region filling for paintbucket
//!
//! This crate provides the tolerance-based scanline flood fill:
//!
//! - **Seed fill** - Repaint the 4-connected region around a seed whose
//!   colors lie within a tolerance radius of the seed color
//!
//! # Examples
//!
//! ## Filling a caller-owned buffer
//!
//! ```
//! use paintbucket_region::{fill, Color};
//!
//! // 4x1 strip: white, white, black, white
//! let mut buffer = vec![255u8; 4 * 4];
//! buffer[8..12].copy_from_slice(&[0, 0, 0, 255]);
//!
//! fill(&mut buffer, 4, 1, 0, 0, Color::rgb(0, 0, 255), 10).unwrap();
//! assert_eq!(&buffer[0..8], &[0, 0, 255, 255, 0, 0, 255, 255]);
//! assert_eq!(&buffer[12..16], &[255, 255, 255, 255]);
//! ```
//!
//! ## Filling an owned image
//!
//! ```
//! use paintbucket_region::{fill_image, Color, FillOptions, RgbaImage};
//!
//! let mut image = RgbaImage::new_filled(10, 10, Color::WHITE).unwrap();
//! let options = FillOptions::new(Color::rgb(255, 0, 0)).with_tolerance(16);
//! let stats = fill_image(&mut image, 5, 5, &options).unwrap();
//! assert_eq!(stats.pixels_filled, 100);
//! ```

pub mod seedfill;

// Re-export core types
pub use paintbucket_core;
pub use paintbucket_core::{Color, InvalidInput, Result, RgbaImage, RgbaView};

// Re-export seedfill types and functions
pub use seedfill::{FillOptions, FillStats, fill, fill_image, fill_view};
