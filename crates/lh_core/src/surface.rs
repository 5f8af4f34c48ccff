//! The drawing-surface contract.
//!
//! The game consumes exactly two host primitives: an axis-aligned filled
//! rectangle and an image blit at a position. Draw order within a frame is
//! significant -- later calls occlude earlier ones -- so implementations must
//! execute calls in submission order.

/// RGBA, each channel in `0.0..=1.0`.
pub type Color = [f32; 4];

pub trait Surface {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    /// Blit the frame identified by `frame` with its top-left corner at (x, y).
    fn draw_image(&mut self, frame: &str, x: f32, y: f32);
}

/// One recorded draw call, in submission order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    DrawImage {
        frame: String,
        x: f32,
        y: f32,
    },
}

/// A [`Surface`] that records every call. Backs the headless demo host and
/// lets tests assert on draw content and ordering.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Drop everything recorded so far, keeping the allocation.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Frame handles of the image draws, in order.
    pub fn image_frames(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::DrawImage { frame, .. } => Some(frame.as_str()),
                DrawOp::FillRect { .. } => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.ops.push(DrawOp::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn draw_image(&mut self, frame: &str, x: f32, y: f32) {
        self.ops.push(DrawOp::DrawImage {
            frame: frame.to_string(),
            x,
            y,
        });
    }
}
