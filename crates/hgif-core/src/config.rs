//! Runtime tuning for the demo.
//!
//! Front-ends start from [`DemoConfig::default`] and override individual
//! fields (the native CLI exposes a few of them as flags).

/// Synthetic bandwidth generator tuning.
///
/// A sample is `base + sin(now_ms / period_ms) * amplitude + jitter * U[0, 1)`,
/// rounded and clamped to `[min_mbps, max_mbps]`.
#[derive(Clone, Debug, PartialEq)]
pub struct AutoModeConfig {
    pub base_mbps: f64,
    pub amplitude_mbps: f64,
    pub jitter_mbps: f64,
    pub period_ms: f64,
    pub min_mbps: f64,
    pub max_mbps: f64,
    pub interval_ms: i32,
}

impl Default for AutoModeConfig {
    fn default() -> Self {
        Self {
            base_mbps: 150.0,
            amplitude_mbps: 150.0,
            jitter_mbps: 50.0,
            period_ms: 2000.0,
            min_mbps: 1.0,
            max_mbps: 1000.0,
            interval_ms: 1000,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DemoConfig {
    /// Maximum number of agent log entries kept (most recent first).
    pub log_capacity: usize,
    pub initial_bandwidth_mbps: f64,
    pub auto: AutoModeConfig,
    /// Percent added per upload progress tick.
    pub progress_step: u8,
    pub progress_interval_ms: i32,
    pub particles_l2: usize,
    pub particles_base: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_capacity: 20,
            initial_bandwidth_mbps: 100.0,
            auto: AutoModeConfig::default(),
            progress_step: 2,
            progress_interval_ms: 30,
            particles_l2: 50,
            particles_base: 20,
        }
    }
}
