use super::{Range, ScreensaverConfig};
use crate::growth::GrowthParams;
use crate::math::Color;

/// Seeded xorshift generator drawing per-run growth parameters
#[derive(Debug, Clone)]
pub struct ParamSampler {
    state: u64,
}

impl ParamSampler {
    pub fn new(seed: u64) -> Self {
        // xorshift never leaves the all-zero state
        let state = if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed };
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in `[range.min, range.max]`
    pub fn uniform(&mut self, range: Range) -> f64 {
        let range = range.normalized();
        range.min + self.next_f64() * (range.max - range.min)
    }

    fn channel(&mut self) -> i32 {
        (self.next_u64() % 256) as i32
    }

    pub fn color(&mut self) -> Color {
        Color::new(self.channel(), self.channel(), self.channel())
    }

    /// Draw the parameters for one run. Angles in the config are degrees.
    pub fn sample(&mut self, config: &ScreensaverConfig) -> GrowthParams {
        let start_color = config.start_color.unwrap_or_else(|| self.color());
        let end_color = config.end_color.unwrap_or_else(|| self.color());
        let start_angle = self.uniform(config.angle).to_radians();
        let start_scale = self.uniform(config.scale);
        let delta_angle = self.uniform(config.delta_angle).to_radians();
        let delta_scale = self.uniform(config.delta_scale);

        GrowthParams {
            levels: config.levels,
            start_angle,
            start_scale,
            delta_angle,
            delta_scale,
            start_thickness: config.start_thickness,
            start_color,
            end_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let config = ScreensaverConfig::default();
        let mut a = ParamSampler::new(99);
        let mut b = ParamSampler::new(99);
        for _ in 0..10 {
            assert_eq!(a.sample(&config), b.sample(&config));
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let config = ScreensaverConfig::default();
        let a = ParamSampler::new(1).sample(&config);
        let b = ParamSampler::new(2).sample(&config);
        assert_ne!(a, b);
    }

    #[test]
    fn test_zero_seed_still_varies() {
        let mut sampler = ParamSampler::new(0);
        let first = sampler.next_f64();
        let second = sampler.next_f64();
        assert_ne!(first, second);
    }

    #[test]
    fn test_unit_interval() {
        let mut sampler = ParamSampler::new(1234);
        for _ in 0..1000 {
            let v = sampler.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_samples_stay_in_ranges() {
        let config = ScreensaverConfig::default();
        let mut sampler = ParamSampler::new(42);
        for _ in 0..200 {
            let p = sampler.sample(&config);
            let within_degrees = |radians: f64, range: Range| {
                let degrees = radians.to_degrees();
                degrees >= range.min - 1e-9 && degrees <= range.max + 1e-9
            };
            assert!(within_degrees(p.start_angle, config.angle));
            assert!(within_degrees(p.delta_angle, config.delta_angle));
            assert!(config.scale.contains(p.start_scale));
            assert!(config.delta_scale.contains(p.delta_scale));
            for c in [p.start_color, p.end_color] {
                for ch in [c.red, c.green, c.blue] {
                    assert!((0..=255).contains(&ch));
                }
            }
            assert_eq!(p.levels, config.levels);
            assert_eq!(p.start_thickness, config.start_thickness);
        }
    }

    #[test]
    fn test_fixed_colors_are_kept() {
        let config = ScreensaverConfig {
            start_color: Some(Color::new(1, 2, 3)),
            end_color: Some(Color::new(4, 5, 6)),
            ..Default::default()
        };
        let p = ParamSampler::new(5).sample(&config);
        assert_eq!(p.start_color, Color::new(1, 2, 3));
        assert_eq!(p.end_color, Color::new(4, 5, 6));
    }

    #[test]
    fn test_degenerate_range_is_constant() {
        let mut sampler = ParamSampler::new(8);
        for _ in 0..10 {
            assert_eq!(sampler.uniform(Range::new(0.25, 0.25)), 0.25);
        }
    }
}
