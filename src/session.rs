//! Run lifecycle: sample parameters, grow a tree, animate it, repeat

use log::{debug, info};

use crate::config::{ParamSampler, ScreensaverConfig};
use crate::error::Result;
use crate::growth::{FractalTree, TreeGrowth};
use crate::render::LineCanvas;

/// Drives one tree at a time on a line canvas.
///
/// The page calls `frame` once per animation frame; pacing between frames
/// and between runs is left to the caller.
pub struct GrowthSession<C: LineCanvas> {
    canvas: C,
    config: ScreensaverConfig,
    sampler: ParamSampler,
    width: f64,
    height: f64,
    tree: Option<FractalTree>,
    runs: u64,
}

impl<C: LineCanvas> GrowthSession<C> {
    /// `fallback_seed` is used when the config does not pin a seed
    pub fn new(canvas: C, width: f64, height: f64, config: ScreensaverConfig, fallback_seed: u64) -> Self {
        let sampler = ParamSampler::new(config.seed.unwrap_or(fallback_seed));
        Self {
            canvas,
            config,
            sampler,
            width,
            height,
            tree: None,
            runs: 0,
        }
    }

    /// Swap in a new config; the current tree keeps running until its run ends
    pub fn set_config(&mut self, config: ScreensaverConfig) {
        if let Some(seed) = config.seed {
            self.sampler = ParamSampler::new(seed);
        }
        self.config = config;
    }

    pub fn set_surface_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Drop the current tree and grow a new one from fresh parameters
    pub fn begin_run(&mut self) -> Result<&FractalTree> {
        let params = self.sampler.sample(&self.config);
        let (trunk_start, trunk_end) =
            FractalTree::centered_trunk(self.width, self.height, self.config.trunk_length);

        let mut tree = TreeGrowth::new(params).grow(trunk_start, trunk_end);
        tree.start_animation(self.config.step_distance)?;
        self.runs += 1;

        info!(
            "run {}: angle {:.1}°, scale {:.3}, delta angle {:.2}°, delta scale {:.4}",
            self.runs,
            params.start_angle.to_degrees(),
            params.start_scale,
            params.delta_angle.to_degrees(),
            params.delta_scale
        );
        debug!(
            "grew {} branches over {} levels",
            tree.trunk().count(),
            tree.levels()
        );

        Ok(self.tree.insert(tree))
    }

    /// Clear, advance the animation one tick and present.
    ///
    /// Starts a run if none is active. Returns whether the current tree is
    /// fully revealed. A backend error ends the run.
    pub fn frame(&mut self) -> Result<bool> {
        if self.tree.is_none() {
            self.begin_run()?;
        }
        let Some(tree) = self.tree.as_mut() else {
            return Ok(false);
        };

        let drawn = self
            .canvas
            .clear()
            .and_then(|_| tree.animation_step(&mut self.canvas))
            .and_then(|_| self.canvas.present());
        if let Err(e) = drawn {
            self.tree = None;
            return Err(e);
        }

        Ok(tree.animation_finished())
    }

    pub fn is_finished(&self) -> bool {
        self.tree.as_ref().is_some_and(|t| t.animation_finished())
    }

    pub fn reveal_level(&self) -> u32 {
        self.tree.as_ref().map_or(0, |t| t.animation().reveal_level())
    }

    pub fn tree(&self) -> Option<&FractalTree> {
        self.tree.as_ref()
    }

    pub fn config(&self) -> &ScreensaverConfig {
        &self.config
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// Runs started so far
    pub fn runs(&self) -> u64 {
        self.runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TreeError;
    use crate::render::RecordingCanvas;

    fn small_config() -> ScreensaverConfig {
        ScreensaverConfig {
            levels: 3,
            trunk_length: 40.0,
            step_distance: 7.0,
            seed: Some(11),
            ..Default::default()
        }
    }

    fn session(config: ScreensaverConfig) -> GrowthSession<RecordingCanvas> {
        GrowthSession::new(RecordingCanvas::new(), 400.0, 300.0, config, 0)
    }

    #[test]
    fn test_first_frame_begins_run() {
        let mut s = session(small_config());
        assert!(s.tree().is_none());

        let finished = s.frame().unwrap();
        assert!(!finished);
        assert_eq!(s.runs(), 1);
        assert_eq!(s.canvas().frames().len(), 1);
    }

    #[test]
    fn test_trunk_placed_on_surface() {
        let mut s = session(small_config());
        let tree = s.begin_run().unwrap();
        assert_eq!(tree.trunk().start.x, 200.0);
        assert_eq!(tree.trunk().start.y, 300.0);
        assert!((tree.trunk().length() - 40.0).abs() < 1e-9);
        assert_eq!(tree.levels(), 3);
    }

    #[test]
    fn test_run_finishes_and_stays_finished() {
        let mut s = session(small_config());
        let mut frames = 0;
        while !s.frame().unwrap() {
            frames += 1;
            assert!(frames < 10_000);
        }
        assert!(s.is_finished());
        assert_eq!(s.reveal_level(), 3);

        let branch_count = s.tree().unwrap().trunk().count();
        assert!(s.frame().unwrap());
        let last = s.canvas().frames().last().unwrap();
        assert_eq!(last.len(), branch_count);
    }

    #[test]
    fn test_begin_run_resamples() {
        let mut s = session(small_config());
        let first = *s.begin_run().unwrap().params();
        let second = *s.begin_run().unwrap().params();
        assert_ne!(first, second);
        assert_eq!(s.runs(), 2);
        assert_eq!(s.reveal_level(), 0);
    }

    #[test]
    fn test_seeded_sessions_match() {
        let mut a = session(small_config());
        let mut b = session(small_config());
        assert_eq!(a.begin_run().unwrap().trunk(), b.begin_run().unwrap().trunk());
    }

    #[test]
    fn test_backend_failure_ends_run() {
        let mut s = GrowthSession::new(RecordingCanvas::failing_after(0), 400.0, 300.0, small_config(), 0);
        let err = s.frame().unwrap_err();
        assert!(matches!(err, TreeError::Render(_)));
        assert!(s.tree().is_none());
        assert!(!s.is_finished());
    }

    #[test]
    fn test_resized_surface_moves_next_trunk() {
        let mut s = session(small_config());
        s.begin_run().unwrap();
        s.set_surface_size(1000.0, 600.0);

        let tree = s.begin_run().unwrap();
        assert_eq!(tree.trunk().start.x, 500.0);
        assert_eq!(tree.trunk().start.y, 600.0);
        assert_eq!(tree.trunk().end.y, 560.0);
    }

    #[test]
    fn test_set_config_reseeds() {
        let mut s = session(small_config());
        let first = *s.begin_run().unwrap().params();
        s.set_config(small_config());
        let again = *s.begin_run().unwrap().params();
        assert_eq!(first, again);
    }
}
