//! Shared geometry and color-name helpers.

use crate::draw::{Color, color::*};

/// A point in logical (device-independent) coordinates.
///
/// All pointer positions and stroke anchors use this type; physical pixel
/// coordinates never appear outside the surface allocation code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Maps palette color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config
/// file and by replay scripts that select colors by name.
///
/// # Supported Names (case-insensitive)
/// - "sky", "lilac", "mint", "peach", "blossom", "white", "coral", "teal",
///   "butter", "seafoam"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "sky" => Some(SKY),
        "lilac" => Some(LILAC),
        "mint" => Some(MINT),
        "peach" => Some(PEACH),
        "blossom" => Some(BLOSSOM),
        "white" => Some(WHITE),
        "coral" => Some(CORAL),
        "teal" => Some(TEAL),
        "butter" => Some(BUTTER),
        "seafoam" => Some(SEAFOAM),
        _ => None,
    }
}

/// Maps a Color value back to its palette name.
///
/// Exact matching is fine here: palette colors are constants, not computed.
/// Returns "custom" for anything outside the palette.
pub fn color_to_name(color: &Color) -> &'static str {
    for (candidate, name) in [
        (SKY, "sky"),
        (LILAC, "lilac"),
        (MINT, "mint"),
        (PEACH, "peach"),
        (BLOSSOM, "blossom"),
        (WHITE, "white"),
        (CORAL, "coral"),
        (TEAL, "teal"),
        (BUTTER, "butter"),
        (SEAFOAM, "seafoam"),
    ] {
        if *color == candidate {
            return name;
        }
    }
    "custom"
}
