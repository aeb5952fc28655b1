//! Input handling and the stroke state machine.
//!
//! This module translates host pointer events into drawing actions. It
//! maintains the active tool and color, resolves mouse/touch coordinates
//! into logical units, and manages the Idle/Drawing stroke lifecycle.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{PointerEvent, TouchPoint};
pub use state::{PadState, Segment, StrokeState, StrokeStyle};
pub use tool::Tool;
