//! Configuration file support for doodlepad.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/doodlepad/config.toml`. Settings
//! include drawing defaults and surface allocation parameters.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{DrawingConfig, SurfaceConfig};

use crate::draw::Color;
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "teal"
/// pen_thickness = 3.0
/// eraser_thickness = 20.0
///
/// [surface]
/// background = [0.039, 0.086, 0.157, 0.5]
/// scale = 2.0
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Drawing tool defaults (color, stroke widths)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Surface allocation defaults (background, scale factor)
    #[serde(default)]
    pub surface: SurfaceConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning
    /// is logged.
    ///
    /// Validated ranges:
    /// - `pen_thickness` / `eraser_thickness`: 1.0 - 64.0
    /// - `surface.scale`: 0.5 - 4.0
    /// - `surface.background` components: 0.0 - 1.0
    fn validate_and_clamp(&mut self) {
        if !(1.0..=64.0).contains(&self.drawing.pen_thickness) {
            log::warn!(
                "Invalid pen_thickness {:.1}, clamping to 1.0-64.0 range",
                self.drawing.pen_thickness
            );
            self.drawing.pen_thickness = self.drawing.pen_thickness.clamp(1.0, 64.0);
        }

        if !(1.0..=64.0).contains(&self.drawing.eraser_thickness) {
            log::warn!(
                "Invalid eraser_thickness {:.1}, clamping to 1.0-64.0 range",
                self.drawing.eraser_thickness
            );
            self.drawing.eraser_thickness = self.drawing.eraser_thickness.clamp(1.0, 64.0);
        }

        if !(0.5..=4.0).contains(&self.surface.scale) {
            log::warn!(
                "Invalid surface scale {:.2}, clamping to 0.5-4.0 range",
                self.surface.scale
            );
            self.surface.scale = self.surface.scale.clamp(0.5, 4.0);
        }

        for i in 0..4 {
            if !(0.0..=1.0).contains(&self.surface.background[i]) {
                log::warn!(
                    "Invalid background[{}] = {:.3}, clamping to 0.0-1.0",
                    i,
                    self.surface.background[i]
                );
                self.surface.background[i] = self.surface.background[i].clamp(0.0, 1.0);
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/doodlepad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g.,
    /// HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("doodlepad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::parse(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Parses and validates a configuration from a TOML string.
    pub fn parse(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// The configured background as a [`Color`].
    pub fn background(&self) -> Color {
        let [r, g, b, a] = self.surface.background;
        Color::new(r, g, b, a)
    }

    /// The configured default pen color as a [`Color`].
    pub fn default_color(&self) -> Color {
        self.drawing.default_color.to_color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BACKGROUND, SKY, TEAL};

    #[test]
    fn defaults_match_fixed_palette() {
        let config = Config::default();
        assert_eq!(config.default_color(), SKY);
        assert_eq!(config.background(), BACKGROUND);
        assert_eq!(config.drawing.pen_thickness, 3.0);
        assert_eq!(config.drawing.eraser_thickness, 20.0);
        assert_eq!(config.surface.scale, 1.0);
    }

    #[test]
    fn parses_partial_config_with_defaults() {
        let config = Config::parse(
            r#"
            [drawing]
            default_color = "teal"
            "#,
        )
        .unwrap();

        assert_eq!(config.default_color(), TEAL);
        assert_eq!(config.drawing.pen_thickness, 3.0);
        assert_eq!(config.surface.scale, 1.0);
    }

    #[test]
    fn rgb_color_spec_converts_to_unit_range() {
        let config = Config::parse(
            r#"
            [drawing]
            default_color = [255, 0, 51]
            "#,
        )
        .unwrap();

        let color = config.default_color();
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert!((color.b - 0.2).abs() < 1e-9);
    }

    #[test]
    fn unknown_color_name_falls_back_to_sky() {
        let config = Config::parse(
            r#"
            [drawing]
            default_color = "chartreuse"
            "#,
        )
        .unwrap();
        assert_eq!(config.default_color(), SKY);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config::parse(
            r#"
            [drawing]
            pen_thickness = 500.0
            eraser_thickness = 0.1

            [surface]
            scale = 16.0
            background = [2.0, -1.0, 0.5, 0.5]
            "#,
        )
        .unwrap();

        assert_eq!(config.drawing.pen_thickness, 64.0);
        assert_eq!(config.drawing.eraser_thickness, 1.0);
        assert_eq!(config.surface.scale, 4.0);
        assert_eq!(config.surface.background[0], 1.0);
        assert_eq!(config.surface.background[1], 0.0);
        assert_eq!(config.surface.background[2], 0.5);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::parse("not toml at all [").is_err());
    }
}
