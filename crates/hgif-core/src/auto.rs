use crate::config::AutoModeConfig;
use rand::prelude::*;

/// Synthetic bandwidth source for auto mode: a slow sine plus uniform jitter.
pub struct AutoBandwidth {
    config: AutoModeConfig,
    rng: StdRng,
}

impl AutoBandwidth {
    pub fn new(config: AutoModeConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Integral Mbps in `[min_mbps, max_mbps]` for wall time `now_ms`.
    pub fn sample(&mut self, now_ms: f64) -> f64 {
        let c = &self.config;
        let noise = (now_ms / c.period_ms).sin() * c.amplitude_mbps;
        let jitter = self.rng.gen::<f64>() * c.jitter_mbps;
        (c.base_mbps + noise + jitter)
            .clamp(c.min_mbps, c.max_mbps)
            .round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = AutoBandwidth::new(AutoModeConfig::default(), 7);
        let mut b = AutoBandwidth::new(AutoModeConfig::default(), 7);
        for t in 0..20 {
            let now = t as f64 * 1000.0;
            assert_eq!(a.sample(now), b.sample(now));
        }
    }

    #[test]
    fn zero_jitter_follows_the_sine() {
        let cfg = AutoModeConfig {
            jitter_mbps: 0.0,
            ..AutoModeConfig::default()
        };
        let mut gen = AutoBandwidth::new(cfg, 0);
        assert_eq!(gen.sample(0.0), 150.0);
        let peak = std::f64::consts::FRAC_PI_2 * 2000.0;
        assert_eq!(gen.sample(peak), 300.0);
        assert_eq!(gen.sample(3.0 * peak), 1.0);
    }

    #[test]
    fn default_samples_are_integral_and_in_range() {
        let mut gen = AutoBandwidth::new(AutoModeConfig::default(), 42);
        for step in 0..5_000 {
            let s = gen.sample(step as f64 * 137.0);
            assert!((1.0..=1000.0).contains(&s), "{s} out of range");
            assert_eq!(s.fract(), 0.0, "{s} not integral");
        }
    }

    #[test]
    fn high_base_is_pinned_to_the_ceiling() {
        let cfg = AutoModeConfig {
            base_mbps: 2000.0,
            ..AutoModeConfig::default()
        };
        let mut gen = AutoBandwidth::new(cfg, 3);
        for step in 0..200 {
            assert_eq!(gen.sample(step as f64 * 250.0), 1000.0);
        }
    }
}
