//! Configuration type definitions.

use super::enums::ColorSpec;
use serde::{Deserialize, Serialize};

/// Drawing tool defaults.
///
/// Controls the appearance of the tools when the pad is first created. The
/// host UI can change tool and color at runtime; widths are fixed per tool.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Default pen color - either a palette name (sky, lilac, mint, peach,
    /// blossom, white, coral, teal, butter, seafoam) or an RGB array like
    /// `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Pen stroke width in logical units (valid range: 1.0 - 64.0)
    #[serde(default = "default_pen_thickness")]
    pub pen_thickness: f64,

    /// Eraser stroke width in logical units (valid range: 1.0 - 64.0)
    #[serde(default = "default_eraser_thickness")]
    pub eraser_thickness: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            pen_thickness: default_pen_thickness(),
            eraser_thickness: default_eraser_thickness(),
        }
    }
}

/// Surface allocation defaults.
#[derive(Debug, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Background fill color [R, G, B, A] (0.0-1.0 range). Also the
    /// eraser ink.
    #[serde(default = "default_background")]
    pub background: [f64; 4],

    /// Scale factor to use when the host does not report a device pixel
    /// ratio (valid range: 0.5 - 4.0)
    #[serde(default = "default_scale")]
    pub scale: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            scale: default_scale(),
        }
    }
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("sky".to_string())
}

fn default_pen_thickness() -> f64 {
    3.0
}

fn default_eraser_thickness() -> f64 {
    20.0
}

fn default_background() -> [f64; 4] {
    let b = crate::draw::BACKGROUND;
    [b.r, b.g, b.b, b.a]
}

fn default_scale() -> f64 {
    1.0
}
