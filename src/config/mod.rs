//! Screensaver configuration
//!
//! Loaded from YAML. Every field has a default, so an empty document
//! is a valid config.

pub mod sampler;

pub use sampler::ParamSampler;

use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

use crate::error::{Result, TreeError};
use crate::growth::MAX_LEVELS;
use crate::math::Color;

/// Closed interval sampled uniformly for each run
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Same interval with `min <= max`
    pub fn normalized(self) -> Self {
        if self.min > self.max {
            Self { min: self.max, max: self.min }
        } else {
            self
        }
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

/// YAML input format for the screensaver
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScreensaverConfig {
    /// Levels grown below the trunk
    pub levels: u32,
    /// Trunk length in pixels
    pub trunk_length: f64,
    /// Trunk stroke width in pixels
    pub start_thickness: u32,
    /// Distance revealed per frame in pixels
    pub step_distance: f64,
    /// Starting branch angle, degrees
    pub angle: Range,
    /// Starting length ratio
    pub scale: Range,
    /// Per-level angle change, degrees
    pub delta_angle: Range,
    /// Per-level length ratio change
    pub delta_scale: Range,
    /// Fixed gradient colors; random per run when absent
    pub start_color: Option<Color>,
    pub end_color: Option<Color>,
    /// Delay between frames for the page's loop
    pub frame_interval_ms: u32,
    /// Delay after a finished tree before the next run
    pub pause_between_runs_ms: u32,
    /// Sampler seed; the page's clock is used when absent
    pub seed: Option<u64>,
    /// `log` level filter name, e.g. "info" or "debug"
    pub log_level: String,
}

impl Default for ScreensaverConfig {
    fn default() -> Self {
        Self {
            levels: 9,
            trunk_length: 200.0,
            start_thickness: 10,
            step_distance: 1.0,
            angle: Range::new(35.0, 45.0),
            scale: Range::new(0.7, 0.9),
            delta_angle: Range::new(-7.0, 5.0),
            delta_scale: Range::new(-0.01, 0.01),
            start_color: None,
            end_color: None,
            frame_interval_ms: 10,
            pause_between_runs_ms: 1000,
            seed: None,
            log_level: "info".to_string(),
        }
    }
}

impl ScreensaverConfig {
    /// Parse, normalize ranges and validate
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: ScreensaverConfig = if yaml.trim().is_empty() {
            ScreensaverConfig::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        let config = config.normalized();
        config.validate()?;
        Ok(config)
    }

    /// Swap any range given as `max..min`
    pub fn normalized(mut self) -> Self {
        self.angle = self.angle.normalized();
        self.scale = self.scale.normalized();
        self.delta_angle = self.delta_angle.normalized();
        self.delta_scale = self.delta_scale.normalized();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.levels > MAX_LEVELS {
            return Err(TreeError::InvalidConfig(format!(
                "levels must be at most {}, got {}",
                MAX_LEVELS, self.levels
            )));
        }
        if self.start_thickness == 0 {
            return Err(TreeError::InvalidConfig("start_thickness must be at least 1".to_string()));
        }
        if !(self.trunk_length.is_finite() && self.trunk_length > 0.0) {
            return Err(TreeError::InvalidConfig(format!(
                "trunk_length must be positive, got {}",
                self.trunk_length
            )));
        }
        if !(self.step_distance.is_finite() && self.step_distance > 0.0) {
            return Err(TreeError::InvalidStepDistance(self.step_distance));
        }

        let ranges = [
            ("angle", &self.angle),
            ("scale", &self.scale),
            ("delta_angle", &self.delta_angle),
            ("delta_scale", &self.delta_scale),
        ];
        for (name, range) in ranges {
            if !range.is_finite() {
                return Err(TreeError::InvalidConfig(format!("{} range must be finite", name)));
            }
        }

        for (name, color) in [("start_color", &self.start_color), ("end_color", &self.end_color)] {
            if let Some(c) = color {
                let channels = [c.red, c.green, c.blue];
                if channels.iter().any(|ch| !(0..=255).contains(ch)) {
                    return Err(TreeError::InvalidConfig(format!(
                        "{} channels must be within 0-255",
                        name
                    )));
                }
            }
        }

        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.log_level).map_err(|_| {
            TreeError::InvalidConfig(format!("unknown log_level '{}'", self.log_level))
        })
    }
}
