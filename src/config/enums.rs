//! Configuration enum types.

use crate::draw::{Color, color::SKY};
use log::warn;
use serde::{Deserialize, Serialize};

/// Color specification - either a palette color name or RGB values.
///
/// # Examples
/// ```toml
/// # Named palette color
/// default_color = "sky"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named palette color: sky, lilac, mint, peach, blossom, white, coral,
    /// teal, butter, seafoam
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Named colors are resolved through `util::name_to_color()`. Unknown
    /// names fall back to the default pen color with a warning. RGB arrays
    /// are converted from 0-255 range to 0.0-1.0 range with full opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using sky", name);
                SKY
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}
