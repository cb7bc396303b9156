//! RGBA colors and the fill's color-distance metric
//!
//! # Pixel format
//!
//! A pixel is four bytes in memory order R, G, B, A. [`Color`] mirrors that
//! layout and converts to and from `[u8; 4]` without reordering.
//!
//! # Matching
//!
//! Two colors match when the squared Euclidean distance over all four
//! channels is at most `tolerance^2`. Alpha counts like any other channel,
//! so two fully transparent pixels with different RGB do not necessarily
//! match, and a transparent seed can match an opaque pixel only within the
//! radius.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Red channel offset within a pixel
pub const RED: usize = 0;
/// Green channel offset
pub const GREEN: usize = 1;
/// Blue channel offset
pub const BLUE: usize = 2;
/// Alpha channel offset
pub const ALPHA: usize = 3;

/// Bytes per RGBA pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// An 8-bit-per-channel RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque black
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Opaque white
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Fully transparent black
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    /// Create a color from all four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color (alpha = 255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Channels in memory order.
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Build from channels in memory order.
    #[inline]
    pub const fn from_array(px: [u8; 4]) -> Self {
        Self {
            r: px[RED],
            g: px[GREEN],
            b: px[BLUE],
            a: px[ALPHA],
        }
    }

    /// Parse a CSS-style hex color.
    ///
    /// Accepts `#rgb`, `#rrggbb` and `#rrggbbaa`. The leading `#` is
    /// optional and digits are case-insensitive. Forms without an alpha
    /// component are opaque.
    ///
    /// # Examples
    ///
    /// ```
    /// use paintbucket_core::Color;
    ///
    /// assert_eq!(Color::from_hex("#ff0000").unwrap(), Color::rgb(255, 0, 0));
    /// assert_eq!(Color::from_hex("0f08").unwrap_err().to_string(),
    ///            "invalid hex color '0f08': expected 3, 6 or 8 digits");
    /// ```
    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(s.to_string()));
        }

        let nibble = |i: usize| -> u8 {
            // Validated above, every byte is a hex digit
            (digits.as_bytes()[i] as char).to_digit(16).unwrap_or(0) as u8
        };
        let byte = |i: usize| -> u8 { (nibble(i) << 4) | nibble(i + 1) };

        match digits.len() {
            3 => Ok(Color::rgb(nibble(0) * 17, nibble(1) * 17, nibble(2) * 17)),
            6 => Ok(Color::rgb(byte(0), byte(2), byte(4))),
            8 => Ok(Color::new(byte(0), byte(2), byte(4), byte(6))),
            _ => Err(ParseColorError::InvalidLength(s.to_string())),
        }
    }

    /// Format as `#rrggbb` when opaque, `#rrggbbaa` otherwise.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

impl From<[u8; 4]> for Color {
    fn from(px: [u8; 4]) -> Self {
        Color::from_array(px)
    }
}

impl From<Color> for [u8; 4] {
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Color::new(r, g, b, a)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Error returned by [`Color::from_hex`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Wrong number of hex digits
    #[error("invalid hex color '{0}': expected 3, 6 or 8 digits")]
    InvalidLength(String),

    /// A character that is not a hex digit
    #[error("invalid hex color '{0}': non-hex character")]
    InvalidDigit(String),
}

/// Squared Euclidean distance between two colors over R, G, B and A.
///
/// The result is at most `4 * 255^2 = 260100`.
#[inline]
pub fn distance_sq(a: Color, b: Color) -> u32 {
    let d = |x: u8, y: u8| -> u32 {
        let diff = x.abs_diff(y) as u32;
        diff * diff
    };
    d(a.r, b.r) + d(a.g, b.g) + d(a.b, b.b) + d(a.a, b.a)
}

/// Check whether `a` lies within `tolerance` of `b`.
///
/// `tolerance` is a radius, compared as `distance_sq(a, b) <= tolerance^2`.
/// A tolerance of 0 is an exact four-channel match.
#[inline]
pub fn colors_match(a: Color, b: Color, tolerance: u32) -> bool {
    let radius_sq = u64::from(tolerance) * u64::from(tolerance);
    u64::from(distance_sq(a, b)) <= radius_sq
}
