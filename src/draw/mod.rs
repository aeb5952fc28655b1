//! Rendering primitives and color definitions (Cairo-based).
//!
//! This module defines the core drawing types used by the doodle surface:
//! - [`Color`]: RGBA color representation with the fixed pen palette
//! - Rendering functions for incremental stroke segments and background fills

pub mod color;
pub mod render;

// Re-export commonly used types at module level
pub use color::Color;
pub use render::{fill_background, stroke_segment};

// Re-export palette constants for public API
#[allow(unused_imports)]
pub use color::{
    BACKGROUND, BLOSSOM, BUTTER, CORAL, LILAC, MINT, PALETTE, PEACH, SEAFOAM, SKY, TEAL, WHITE,
};
