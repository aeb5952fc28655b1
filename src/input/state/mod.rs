mod core;
#[cfg(test)]
mod tests;

pub use core::{PadState, Segment, StrokeState, StrokeStyle};
