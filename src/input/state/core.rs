//! Stroke state machine and tool state management.

use crate::draw::Color;
use crate::input::tool::Tool;
use crate::util::Point;

/// Stroke appearance captured when a stroke begins.
///
/// Snapshotting color and width at pointer-down is what makes tool and color
/// changes non-retroactive: switching tools mid-stroke leaves the in-progress
/// stroke untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Ink color (palette color for pen, background fill for eraser)
    pub color: Color,
    /// Stroke width in logical units
    pub width: f64,
}

/// One incremental stroke segment ready to render.
///
/// Produced by [`PadState::pointer_move`]; connects the previous anchor to
/// the new pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub style: StrokeStyle,
}

/// Current stroke state machine.
///
/// Tracks whether a stroke is in progress and, if so, where its path
/// currently ends. Transitions occur only through the pointer methods on
/// [`PadState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeState {
    /// Not drawing - waiting for pointer-down
    Idle,
    /// Stroke in progress (pointer held down)
    Drawing {
        /// Where the last rendered segment ended (the next segment's start)
        anchor: Point,
        /// Appearance locked in at pointer-down
        style: StrokeStyle,
    },
}

/// Tool and stroke state for one drawing surface.
///
/// This is the pure half of the pad: it turns pointer transitions into
/// [`Segment`]s without touching any pixel buffer, so every state-machine
/// guarantee is testable without a renderer.
#[derive(Debug)]
pub struct PadState {
    /// Current stroke state machine
    pub stroke: StrokeState,
    /// Active tool for strokes begun from now on
    pub tool: Tool,
    /// Active pen color for strokes begun from now on
    pub color: Color,
    /// Background fill color (also the eraser ink)
    pub background: Color,
    /// Pen stroke width in logical units
    pub pen_width: f64,
    /// Eraser stroke width in logical units
    pub eraser_width: f64,
}

impl PadState {
    /// Creates a new state with the given defaults and an idle stroke.
    pub fn with_defaults(color: Color, background: Color, pen_width: f64, eraser_width: f64) -> Self {
        Self {
            stroke: StrokeState::Idle,
            tool: Tool::Pen,
            color,
            background,
            pen_width,
            eraser_width,
        }
    }

    /// Returns the stroke style a stroke started right now would use.
    fn current_style(&self) -> StrokeStyle {
        match self.tool {
            Tool::Pen => StrokeStyle {
                color: self.color,
                width: self.pen_width,
            },
            Tool::Eraser => StrokeStyle {
                color: self.background,
                width: self.eraser_width,
            },
        }
    }

    /// Begins a new stroke at `point`.
    ///
    /// Establishes the path anchor only; no segment is rendered until the
    /// first pointer-move. A pointer-down while already drawing is ignored
    /// (the in-progress stroke continues from its existing anchor).
    pub fn pointer_down(&mut self, point: Point) {
        if matches!(self.stroke, StrokeState::Idle) {
            self.stroke = StrokeState::Drawing {
                anchor: point,
                style: self.current_style(),
            };
            log::debug!("stroke started at ({:.1}, {:.1})", point.x, point.y);
        }
    }

    /// Extends the in-progress stroke to `point`.
    ///
    /// Returns the segment from the previous anchor to `point` and
    /// re-anchors the path there, so the next segment starts exactly where
    /// this one ended. Returns `None` while idle: moves without a stroke in
    /// progress are ignored.
    pub fn pointer_move(&mut self, point: Point) -> Option<Segment> {
        match &mut self.stroke {
            StrokeState::Idle => None,
            StrokeState::Drawing { anchor, style } => {
                let segment = Segment {
                    from: *anchor,
                    to: point,
                    style: *style,
                };
                *anchor = point;
                Some(segment)
            }
        }
    }

    /// Terminates the in-progress stroke, if any.
    ///
    /// Idempotent: pointer-up followed by pointer-leave (or any repeat) is a
    /// no-op after the first call.
    pub fn pointer_up(&mut self) {
        if matches!(self.stroke, StrokeState::Drawing { .. }) {
            self.stroke = StrokeState::Idle;
            log::debug!("stroke finished");
        }
    }

    /// Selects the tool for strokes begun after this call.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// Selects the pen color for strokes begun after this call.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}
