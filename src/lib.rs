//! Library exports for the doodlepad drawing surface.
//!
//! Exposes the drawing surface component alongside the supporting modules it
//! relies on so that host UIs can embed the pad and tools (e.g. the replay
//! CLI) can share configuration and script handling.

pub mod config;
pub mod draw;
pub mod input;
pub mod pad;
pub mod replay;
pub mod surface;
pub mod util;

pub use config::Config;
pub use pad::DoodlePad;
