//! Cairo-based rendering primitives for the doodle surface.

use super::color::Color;
use crate::input::state::Segment;

/// Fills the entire surface with the given color.
///
/// Uses `Operator::Source` so the fill *replaces* existing pixels instead of
/// compositing onto them. The background tint is semi-transparent; blending
/// it onto itself on every clear would darken the surface over time.
/// Painting (rather than filling a logical-size rectangle) also covers the
/// sub-pixel sliver left when a fractional logical size rounds up to whole
/// physical pixels.
///
/// # Arguments
/// * `ctx` - Cairo drawing context (already scaled to logical units)
/// * `color` - Fill color
pub fn fill_background(ctx: &cairo::Context, color: Color) {
    ctx.save().ok();
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let _ = ctx.paint();
    ctx.restore().ok();
}

/// Renders one incremental stroke segment.
///
/// Round caps and joins keep consecutive segments seamless: each segment
/// starts exactly where the previous one ended, and the round cap fills the
/// joint. Compositing is normal source-over for both pen and eraser (the
/// eraser's "ink" is simply the background color).
///
/// # Arguments
/// * `ctx` - Cairo drawing context (already scaled to logical units)
/// * `segment` - Segment endpoints plus the stroke style captured at
///   pointer-down
pub fn stroke_segment(ctx: &cairo::Context, segment: &Segment) {
    let style = &segment.style;
    ctx.save().ok();
    ctx.set_operator(cairo::Operator::Over);
    ctx.set_source_rgba(style.color.r, style.color.g, style.color.b, style.color.a);
    ctx.set_line_width(style.width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(segment.from.x, segment.from.y);
    ctx.line_to(segment.to.x, segment.to.y);
    let _ = ctx.stroke();
    ctx.restore().ok();
}
