//! Generic pointer event types for host-UI compatibility.
//!
//! The host delivers raw mouse and touch events in client (viewport)
//! coordinates; [`PointerEvent::resolve`] maps them into the surface's
//! logical coordinate space.

use crate::util::Point;
use serde::{Deserialize, Serialize};

/// A single active touch contact in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub client_x: f64,
    pub client_y: f64,
}

/// A pointer event as delivered by the host UI.
///
/// Mouse events always carry a position. Touch events carry the currently
/// active contacts and may be empty (e.g. a touch-end reporting no remaining
/// touches); empty touch events resolve to no coordinates and are ignored by
/// the pad rather than producing a degenerate point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PointerEvent {
    /// Mouse event with a client-space cursor position.
    Mouse { client_x: f64, client_y: f64 },
    /// Touch event with zero or more active contacts.
    Touch { touches: Vec<TouchPoint> },
}

impl PointerEvent {
    /// Resolves the event to logical surface coordinates.
    ///
    /// `origin` is the surface element's top-left corner in client space
    /// (the laid-out bounding box). Touch events use the first active
    /// contact; an empty touch list yields `None`.
    pub fn resolve(&self, origin: Point) -> Option<Point> {
        let (client_x, client_y) = match self {
            PointerEvent::Mouse { client_x, client_y } => (*client_x, *client_y),
            PointerEvent::Touch { touches } => {
                let first = touches.first()?;
                (first.client_x, first.client_y)
            }
        };

        Some(Point::new(client_x - origin.x, client_y - origin.y))
    }
}
