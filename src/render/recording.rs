use super::{LineCanvas, LineSegment};
use crate::error::{Result, TreeError};

/// In-memory backend that keeps every draw request.
///
/// Segments collect until `present`, which moves them into a finished
/// frame. Useful for headless runs and for inspecting what was drawn.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    segments: Vec<LineSegment>,
    frames: Vec<Vec<LineSegment>>,
    draws: usize,
    fail_after: Option<usize>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canvas that accepts `draws` lines and fails on the next one
    pub fn failing_after(draws: usize) -> Self {
        Self {
            fail_after: Some(draws),
            ..Self::default()
        }
    }

    /// Segments drawn since the last `clear`/`present`
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    pub fn take_segments(&mut self) -> Vec<LineSegment> {
        std::mem::take(&mut self.segments)
    }

    /// Presented frames, oldest first
    pub fn frames(&self) -> &[Vec<LineSegment>] {
        &self.frames
    }

    /// Lines accepted over the canvas lifetime
    #[cfg(test)]
    pub(crate) fn draw_count(&self) -> usize {
        self.draws
    }
}

impl LineCanvas for RecordingCanvas {
    fn clear(&mut self) -> Result<()> {
        self.segments.clear();
        Ok(())
    }

    fn draw_line(&mut self, segment: &LineSegment) -> Result<()> {
        if self.fail_after.is_some_and(|limit| self.draws >= limit) {
            return Err(TreeError::Render(format!("backend closed after {} lines", self.draws)));
        }
        self.draws += 1;
        self.segments.push(*segment);
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.frames.push(std::mem::take(&mut self.segments));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point;

    fn segment(x: f64) -> LineSegment {
        LineSegment {
            start: Point::ZERO,
            end: Point::new(x, 0.0),
            color: 0xABCDEF,
            thickness: 2,
        }
    }

    #[test]
    fn test_records_segments_per_frame() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_line(&segment(1.0)).unwrap();
        canvas.draw_line(&segment(2.0)).unwrap();
        canvas.present().unwrap();
        canvas.clear().unwrap();
        canvas.draw_line(&segment(3.0)).unwrap();
        canvas.present().unwrap();

        assert_eq!(canvas.frames().len(), 2);
        assert_eq!(canvas.frames()[0].len(), 2);
        assert_eq!(canvas.frames()[1], vec![segment(3.0)]);
        assert_eq!(canvas.draw_count(), 3);
        assert!(canvas.segments().is_empty());
    }

    #[test]
    fn test_clear_discards_pending() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_line(&segment(1.0)).unwrap();
        canvas.clear().unwrap();
        assert!(canvas.segments().is_empty());
    }

    #[test]
    fn test_failing_after_limit() {
        let mut canvas = RecordingCanvas::failing_after(1);
        assert!(canvas.draw_line(&segment(1.0)).is_ok());
        let err = canvas.draw_line(&segment(2.0)).unwrap_err();
        assert!(matches!(err, TreeError::Render(_)));
        assert_eq!(canvas.draw_count(), 1);
    }
}
