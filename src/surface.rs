//! Pixel buffer ownership and device-pixel-ratio scaling.
//!
//! A [`Surface`] wraps a Cairo image surface whose physical dimensions are
//! the logical (laid-out) size multiplied by the scale factor. Every drawing
//! context it hands out is pre-scaled, so the rest of the crate reasons only
//! in logical units and strokes stay crisp at any scale.

use crate::draw::{self, Color};
use crate::input::state::Segment;
use log::debug;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

/// Errors raised while allocating or exporting the pixel buffer.
///
/// Drawing operations themselves never fail: once allocation succeeds they
/// are local pixel writes, and a context that cannot be acquired makes the
/// operation a silent no-op.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("no rendering surface attached")]
    Detached,

    #[error("invalid surface size {width}x{height} at scale {scale}")]
    InvalidSize { width: f64, height: f64, scale: f64 },

    #[error("cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error("failed to write PNG file: {0}")]
    Io(#[from] std::io::Error),
}

/// A rectangular pixel buffer with logical sizing and a scale factor.
pub struct Surface {
    image: cairo::ImageSurface,
    logical_width: f64,
    logical_height: f64,
    scale: f64,
    background: Color,
}

impl Surface {
    /// Allocates a buffer of `logical size × scale` physical pixels and
    /// fills it with the background color.
    ///
    /// # Errors
    /// Returns [`SurfaceError::InvalidSize`] for non-positive or non-finite
    /// dimensions and scale, or a Cairo error if allocation fails.
    pub fn new(
        logical_width: f64,
        logical_height: f64,
        scale: f64,
        background: Color,
    ) -> Result<Self, SurfaceError> {
        let image = allocate(logical_width, logical_height, scale)?;
        let surface = Self {
            image,
            logical_width,
            logical_height,
            scale,
            background,
        };
        surface.fill();
        Ok(surface)
    }

    /// Reallocates the buffer for a new laid-out size and scale.
    ///
    /// Previous stroke pixels are discarded and the background is repainted;
    /// there is no stroke log to replay, so content does not survive a
    /// resize.
    pub fn resize(
        &mut self,
        logical_width: f64,
        logical_height: f64,
        scale: f64,
    ) -> Result<(), SurfaceError> {
        self.image = allocate(logical_width, logical_height, scale)?;
        self.logical_width = logical_width;
        self.logical_height = logical_height;
        self.scale = scale;
        self.fill();
        debug!(
            "surface resized to {:.0}x{:.0} @ {:.2}x",
            logical_width, logical_height, scale
        );
        Ok(())
    }

    /// Repaints the whole surface with the background color.
    pub fn clear(&self) {
        self.fill();
    }

    /// Renders one stroke segment in logical coordinates.
    pub fn draw_segment(&self, segment: &Segment) {
        self.with_context(|ctx| draw::stroke_segment(ctx, segment));
    }

    /// Logical width in device-independent units.
    pub fn logical_width(&self) -> f64 {
        self.logical_width
    }

    /// Logical height in device-independent units.
    pub fn logical_height(&self) -> f64 {
        self.logical_height
    }

    /// Logical-to-physical scale factor.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Physical buffer width in pixels.
    pub fn physical_width(&self) -> i32 {
        self.image.width()
    }

    /// Physical buffer height in pixels.
    pub fn physical_height(&self) -> i32 {
        self.image.height()
    }

    /// Writes the current pixels to a PNG file.
    pub fn write_png(&self, path: &Path) -> Result<(), SurfaceError> {
        self.image.flush();
        let mut file = File::create(path)?;
        self.image.write_to_png(&mut file)?;
        Ok(())
    }

    /// Reads back one physical pixel as straight `[r, g, b, a]` bytes.
    ///
    /// Components are premultiplied by alpha, as Cairo stores them. Returns
    /// `None` out of bounds or while the buffer cannot be borrowed.
    pub fn pixel_at(&mut self, px: u32, py: u32) -> Option<[u8; 4]> {
        if (px as i32) >= self.image.width() || (py as i32) >= self.image.height() {
            return None;
        }
        let stride = self.image.stride() as usize;
        let data = self.image.data().ok()?;
        let offset = py as usize * stride + px as usize * 4;
        let word = u32::from_ne_bytes(data[offset..offset + 4].try_into().ok()?);
        Some([
            (word >> 16) as u8,
            (word >> 8) as u8,
            word as u8,
            (word >> 24) as u8,
        ])
    }

    fn fill(&self) {
        let background = self.background;
        self.with_context(|ctx| draw::fill_background(ctx, background));
    }

    /// Runs `f` with a context scaled to logical units.
    ///
    /// A context that cannot be acquired aborts the operation silently, per
    /// the error model: no drawing call may panic or propagate.
    fn with_context(&self, f: impl FnOnce(&cairo::Context)) {
        match cairo::Context::new(&self.image) {
            Ok(ctx) => {
                ctx.scale(self.scale, self.scale);
                f(&ctx);
            }
            Err(err) => debug!("skipping draw, no cairo context: {err}"),
        }
    }
}

fn allocate(
    logical_width: f64,
    logical_height: f64,
    scale: f64,
) -> Result<cairo::ImageSurface, SurfaceError> {
    if !(logical_width.is_finite() && logical_height.is_finite() && scale.is_finite())
        || logical_width <= 0.0
        || logical_height <= 0.0
        || scale <= 0.0
    {
        return Err(SurfaceError::InvalidSize {
            width: logical_width,
            height: logical_height,
            scale,
        });
    }

    let physical_width = (logical_width * scale).ceil() as i32;
    let physical_height = (logical_height * scale).ceil() as i32;
    Ok(cairo::ImageSurface::create(
        cairo::Format::ARgb32,
        physical_width,
        physical_height,
    )?)
}
