//! paintbucket core - Basic data structures for region filling
//!
//! This crate provides the types every other paintbucket crate works on:
//!
//! - [`Color`] - 8-bit RGBA color and the squared-distance match metric
//! - [`RgbaView`] / [`RgbaImage`] - Borrowed / owned flat RGBA rasters
//! - [`InvalidInput`] - The single error kind raised by raster validation
//!   and by the fill
//! - [`pixel_at_pointer`] - Pointer position to pixel coordinate mapping

pub mod color;
pub mod error;
pub mod raster;

pub use color::{Color, ParseColorError, colors_match, distance_sq};
pub use error::{InvalidInput, Result};
pub use raster::{RgbaImage, RgbaView, pixel_at_pointer, validate_layout};
