pub mod canvas2d;
pub mod recording;

pub use canvas2d::Canvas2dBackend;
pub use recording::RecordingCanvas;

use crate::error::Result;
use crate::growth::Branch;
use crate::math::Point;

/// One "draw line" request sent to a backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
    /// Packed `0xRRGGBB`
    pub color: u32,
    pub thickness: u32,
}

impl From<&Branch> for LineSegment {
    fn from(branch: &Branch) -> Self {
        Self {
            start: branch.start,
            end: branch.end,
            color: branch.color,
            thickness: branch.thickness,
        }
    }
}

/// Surface that can paint line segments.
///
/// Requests are issued synchronously; any error ends the current run.
pub trait LineCanvas {
    /// Wipe the surface before a new frame
    fn clear(&mut self) -> Result<()>;

    fn draw_line(&mut self, segment: &LineSegment) -> Result<()>;

    /// Hand the finished frame to the display
    fn present(&mut self) -> Result<()> {
        Ok(())
    }
}
