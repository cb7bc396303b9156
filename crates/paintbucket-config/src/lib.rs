//! Fill configuration for paintbucket hosts
//!
//! The fill never reads ambient state. Whatever a host UI keeps as "the
//! current color" and "the current tolerance" is collected into a
//! [`FillConfig`] and passed to each call. The config serializes to JSON
//! with the color as a hex string, so hosts can persist it or send it
//! across a process boundary.

use paintbucket_core::Color;
use paintbucket_region::FillOptions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default fill color (`#ff0000`)
pub const DEFAULT_FILL_COLOR: Color = Color::rgb(255, 0, 0);

/// Default tolerance
///
/// Large enough to absorb the grey fringe that anti-aliasing leaves along
/// black outlines in line art, small enough to stop at the outline itself.
pub const DEFAULT_TOLERANCE: u32 = 32;

/// Errors from reading or writing a [`FillConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed JSON, unknown color string or wrong field type
    #[error("invalid fill config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings for one fill operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillConfig {
    /// Color to paint, serialized as `#rrggbb` or `#rrggbbaa`
    #[serde(with = "hex_color")]
    pub fill_color: Color,
    /// Radius on the RGBA distance from the seed color
    pub tolerance: u32,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            fill_color: DEFAULT_FILL_COLOR,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl FillConfig {
    /// Create a config with the given color and the default tolerance
    pub fn new(fill_color: Color) -> Self {
        Self {
            fill_color,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Set the tolerance
    pub fn with_tolerance(mut self, tolerance: u32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Options for [`paintbucket_region::fill_view`] and friends
    pub fn to_options(&self) -> FillOptions {
        FillOptions::new(self.fill_color).with_tolerance(self.tolerance)
    }

    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<FillConfig> for FillOptions {
    fn from(config: FillConfig) -> Self {
        config.to_options()
    }
}

mod hex_color {
    use paintbucket_core::Color;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&color.to_hex())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FillConfig::default();
        assert_eq!(config.fill_color, Color::rgb(255, 0, 0));
        assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
    }

    #[test]
    fn test_to_options() {
        let config = FillConfig::new(Color::rgb(0, 128, 0)).with_tolerance(7);
        let options: FillOptions = config.into();
        assert_eq!(options.fill_color, Color::rgb(0, 128, 0));
        assert_eq!(options.tolerance, 7);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = FillConfig::new(Color::new(1, 2, 3, 4)).with_tolerance(12);
        let json = config.to_json().unwrap();
        assert_eq!(json, r##"{"fill_color":"#01020304","tolerance":12}"##);
        assert_eq!(FillConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_json_defaults_and_short_hex() {
        let config = FillConfig::from_json(r##"{"fill_color":"#0f0"}"##).unwrap();
        assert_eq!(config.fill_color, Color::rgb(0, 255, 0));
        assert_eq!(config.tolerance, DEFAULT_TOLERANCE);

        let config = FillConfig::from_json("{}").unwrap();
        assert_eq!(config, FillConfig::default());
    }

    #[test]
    fn test_json_rejects_bad_color() {
        let err = FillConfig::from_json(r#"{"fill_color":"red"}"#).unwrap_err();
        assert!(err.to_string().contains("invalid hex color"), "{err}");
    }
}
