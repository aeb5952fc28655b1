//! The drawing surface component: pointer input in, rendered strokes out.

use crate::config::Config;
use crate::draw::Color;
use crate::input::{PadState, PointerEvent, Tool};
use crate::surface::{Surface, SurfaceError};
use crate::util::Point;
use log::warn;
use std::path::Path;

/// A freehand drawing surface.
///
/// Composes the stroke state machine with a pixel buffer: pointer events are
/// resolved against the pad's origin, fed through the state machine, and any
/// produced segment is rendered immediately. All operations execute
/// synchronously on the caller's thread in delivery order.
///
/// A pad may be *detached* (no surface could be allocated, e.g. an
/// unsupported environment). Every operation on a detached pad is a silent
/// no-op; nothing panics or returns an error through the event path.
pub struct DoodlePad {
    surface: Option<Surface>,
    state: PadState,
    origin: Point,
}

impl DoodlePad {
    /// Creates a pad with an allocated surface of the given laid-out size.
    ///
    /// # Errors
    /// Fails only on buffer allocation; see [`Surface::new`].
    pub fn new(
        logical_width: f64,
        logical_height: f64,
        scale: f64,
        config: &Config,
    ) -> Result<Self, SurfaceError> {
        let background = config.background();
        let surface = Surface::new(logical_width, logical_height, scale, background)?;
        Ok(Self {
            surface: Some(surface),
            state: Self::state_from(config),
            origin: Point::new(0.0, 0.0),
        })
    }

    /// Creates a pad with no rendering surface.
    ///
    /// Used when the environment cannot provide a renderer; the pad accepts
    /// every operation and does nothing.
    pub fn detached(config: &Config) -> Self {
        Self {
            surface: None,
            state: Self::state_from(config),
            origin: Point::new(0.0, 0.0),
        }
    }

    fn state_from(config: &Config) -> PadState {
        PadState::with_defaults(
            config.default_color(),
            config.background(),
            config.drawing.pen_thickness,
            config.drawing.eraser_thickness,
        )
    }

    /// Sets the pad's top-left corner in client coordinates.
    ///
    /// Pointer events carry client-space positions; this is subtracted to
    /// obtain logical surface coordinates.
    pub fn set_origin(&mut self, x: f64, y: f64) {
        self.origin = Point::new(x, y);
    }

    /// Handles pointer-down (mouse-down or touch-start).
    ///
    /// Begins a stroke at the resolved point. Events without resolvable
    /// coordinates (empty touch list) are ignored.
    pub fn pointer_down(&mut self, event: &PointerEvent) {
        if self.surface.is_none() {
            return;
        }
        if let Some(point) = event.resolve(self.origin) {
            self.state.pointer_down(point);
        }
    }

    /// Handles pointer-move (mouse-move or touch-move).
    ///
    /// While a stroke is in progress, renders the incremental segment from
    /// the previous anchor to the new point. Ignored while idle.
    pub fn pointer_move(&mut self, event: &PointerEvent) {
        let Some(surface) = self.surface.as_ref() else {
            return;
        };
        if let Some(point) = event.resolve(self.origin) {
            if let Some(segment) = self.state.pointer_move(point) {
                surface.draw_segment(&segment);
            }
        }
    }

    /// Handles pointer-up, pointer-leave/cancel, or touch-end.
    ///
    /// Terminates the in-progress stroke; idempotent.
    pub fn pointer_up(&mut self) {
        if self.surface.is_none() {
            return;
        }
        self.state.pointer_up();
    }

    /// Selects the tool for strokes begun after this call.
    pub fn set_tool(&mut self, tool: Tool) {
        self.state.set_tool(tool);
    }

    /// Selects the pen color for strokes begun after this call.
    pub fn set_color(&mut self, color: Color) {
        self.state.set_color(color);
    }

    /// Currently selected tool.
    pub fn tool(&self) -> Tool {
        self.state.tool
    }

    /// Currently selected pen color.
    pub fn color(&self) -> Color {
        self.state.color
    }

    /// Repaints the surface with the background fill color.
    ///
    /// Callable at any time; the stroke state machine is untouched, so a
    /// stroke in progress continues from its last anchor on the fresh
    /// buffer.
    pub fn clear(&mut self) {
        if let Some(surface) = self.surface.as_ref() {
            surface.clear();
        }
    }

    /// Reallocates the buffer for a new laid-out size and scale.
    ///
    /// Prior stroke pixels are discarded. Allocation failures leave the old
    /// buffer in place and are logged, not propagated; the event path stays
    /// infallible.
    pub fn resize(&mut self, logical_width: f64, logical_height: f64, scale: f64) {
        if let Some(surface) = self.surface.as_mut() {
            if let Err(err) = surface.resize(logical_width, logical_height, scale) {
                warn!("surface resize to {logical_width}x{logical_height} failed: {err}");
            }
        }
    }

    /// Writes the current pixels to a PNG file.
    pub fn write_png(&self, path: &Path) -> Result<(), SurfaceError> {
        self.surface
            .as_ref()
            .ok_or(SurfaceError::Detached)?
            .write_png(path)
    }

    /// The underlying surface, if attached.
    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    /// Mutable access to the underlying surface, if attached.
    pub fn surface_mut(&mut self) -> Option<&mut Surface> {
        self.surface.as_mut()
    }
}
