//! RGBA color type and the doodle palette.

use serde::{Deserialize, Serialize};

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use doodlepad::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let semi_transparent_blue = Color { r: 0.0, g: 0.0, b: 1.0, a: 0.5 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    ///
    /// All values should be in the range 0.0 to 1.0.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit RGB components.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }
}

// ============================================================================
// Palette Constants
// ============================================================================
//
// The ten pen colors offered by the color picker, plus the surface background
// tint. Pen colors are fully opaque; the background is a half-transparent
// navy so whatever sits behind the surface shows through.

/// Light sky blue (#88ccff) - the default pen color
pub const SKY: Color = Color::from_rgb8(0x88, 0xcc, 0xff);

/// Soft violet (#cc88ff)
pub const LILAC: Color = Color::from_rgb8(0xcc, 0x88, 0xff);

/// Pale spring green (#88ffcc)
pub const MINT: Color = Color::from_rgb8(0x88, 0xff, 0xcc);

/// Warm sand (#ffcc88)
pub const PEACH: Color = Color::from_rgb8(0xff, 0xcc, 0x88);

/// Light magenta (#ff88cc)
pub const BLOSSOM: Color = Color::from_rgb8(0xff, 0x88, 0xcc);

/// Plain white (#ffffff)
pub const WHITE: Color = Color::from_rgb8(0xff, 0xff, 0xff);

/// Muted red (#ff6b6b)
pub const CORAL: Color = Color::from_rgb8(0xff, 0x6b, 0x6b);

/// Sea green (#4ecdc4)
pub const TEAL: Color = Color::from_rgb8(0x4e, 0xcd, 0xc4);

/// Pale yellow (#ffe66d)
pub const BUTTER: Color = Color::from_rgb8(0xff, 0xe6, 0x6d);

/// Desaturated green (#a8e6cf)
pub const SEAFOAM: Color = Color::from_rgb8(0xa8, 0xe6, 0xcf);

/// The fixed pen palette, in picker order. [`SKY`] is the default.
pub const PALETTE: [Color; 10] = [
    SKY, LILAC, MINT, PEACH, BLOSSOM, WHITE, CORAL, TEAL, BUTTER, SEAFOAM,
];

/// Surface background tint (rgba(10, 22, 40, 0.5)).
///
/// Doubles as the eraser ink: erasing overpaints with this color, which
/// reads as "erased" because the background is flat.
pub const BACKGROUND: Color = Color {
    r: 10.0 / 255.0,
    g: 22.0 / 255.0,
    b: 40.0 / 255.0,
    a: 0.5,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgb8_scales_components() {
        let c = Color::from_rgb8(255, 0, 51);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 0.2).abs() < 1e-9);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn palette_has_ten_distinct_opaque_colors() {
        assert_eq!(PALETTE.len(), 10);
        for (i, color) in PALETTE.iter().enumerate() {
            assert_eq!(color.a, 1.0);
            for other in &PALETTE[i + 1..] {
                assert_ne!(color, other);
            }
        }
    }
}
