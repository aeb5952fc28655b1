//! Drawing tool selection.

use serde::{Deserialize, Serialize};

/// Drawing tool selection.
///
/// The active tool determines how pointer drags mark the surface. Tools are
/// selected by the host UI's toolbar between strokes; an in-progress stroke
/// keeps the tool it started with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    /// Freehand pen - strokes the selected palette color (default)
    Pen,
    /// Eraser - strokes the background fill color at a wider width
    Eraser,
}
