//! Level-by-level reveal of a grown tree
//!
//! Each tick adds a fixed distance to a running total. Every branch at
//! the revealing depth is drawn up to that distance from its start. Once
//! the total covers every branch of the depth, the next depth begins.

use log::debug;

use crate::error::{Result, TreeError};
use crate::growth::Branch;
use crate::render::{LineCanvas, LineSegment};

/// Reveal animation state for one tree
#[derive(Debug, Clone, Default)]
pub struct RevealAnimation {
    /// Depth currently being drawn (0 = trunk)
    reveal_level: u32,
    /// Distance covered so far within `reveal_level`
    distance: f64,
    /// Distance added per tick
    step_distance: f64,
    /// Whether `start` has been called
    running: bool,
    /// Whether the deepest level has been fully drawn
    finished: bool,
}

impl RevealAnimation {
    /// Reset to the trunk and start revealing `step_distance` per tick
    pub fn start(&mut self, step_distance: f64) -> Result<()> {
        if !(step_distance.is_finite() && step_distance > 0.0) {
            return Err(TreeError::InvalidStepDistance(step_distance));
        }
        self.reveal_level = 0;
        self.distance = 0.0;
        self.step_distance = step_distance;
        self.running = true;
        self.finished = false;
        Ok(())
    }

    /// Advance one tick and redraw the revealed part of the tree.
    ///
    /// `levels` is the depth of the deepest level under `trunk`. After the
    /// animation finishes the state no longer changes and the whole tree is
    /// drawn in full.
    pub fn step<C: LineCanvas + ?Sized>(
        &mut self,
        trunk: &Branch,
        levels: u32,
        canvas: &mut C,
    ) -> Result<()> {
        if !self.running {
            return Ok(());
        }

        if !self.finished {
            self.distance += self.step_distance;

            if self.level_complete(trunk) {
                if self.reveal_level >= levels {
                    self.finished = true;
                    debug!("reveal finished at level {}", self.reveal_level);
                } else {
                    self.reveal_level += 1;
                    self.distance = 0.0;
                    debug!("revealing level {}", self.reveal_level);
                }
            }
        }

        self.draw(trunk, canvas)
    }

    /// Every branch at the revealing depth is covered by the distance so far
    fn level_complete(&self, trunk: &Branch) -> bool {
        trunk
            .branches_at(self.reveal_level)
            .all(|branch| branch.length() <= self.distance)
    }

    fn draw<C: LineCanvas + ?Sized>(&self, trunk: &Branch, canvas: &mut C) -> Result<()> {
        for (depth, branch) in trunk.iter_to_depth(self.reveal_level) {
            if self.finished || depth < self.reveal_level {
                canvas.draw_line(&branch.into())?;
            } else if let Some(segment) = partial_segment(branch, self.distance) {
                canvas.draw_line(&segment)?;
            }
        }
        Ok(())
    }

    pub fn reveal_level(&self) -> u32 {
        self.reveal_level
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn step_distance(&self) -> f64 {
        self.step_distance
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// The first `distance` units of `branch`, or nothing if that is empty
fn partial_segment(branch: &Branch, distance: f64) -> Option<LineSegment> {
    let length = branch.length();
    let drawn = distance.min(length);
    if drawn <= 0.0 {
        return None;
    }
    let end = branch.start.lerp(&branch.end, drawn / length);
    Some(LineSegment {
        end,
        ..LineSegment::from(branch)
    })
}
