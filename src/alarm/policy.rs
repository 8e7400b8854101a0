//! Detection policy — decides when a sampled intensity means "alarm".
//!
//! Two strategies behind one type:
//!
//! - [`WindowedAverage`](DetectionPolicy::WindowedAverage) debounces by
//!   averaging the rolling window and comparing against the threshold
//!   (inclusive, `>=`). This is the production default.
//! - [`Instant`](DetectionPolicy::Instant) trips on any nonzero intensity.
//!   Used on rigs where the sensor module does its own hysteresis.
//!
//! A policy only ever reports the alarm condition — it never clears the
//! shared trigger; clearing is the notifier's and reset watcher's job.

use crate::alarm::window::IntensityWindow;
use crate::config::{PolicyKind, SystemConfig};

/// Outcome of folding one sample into the policy.
#[derive(Debug, Clone, Copy)]
pub struct Observation {
    /// Whether the alarm condition holds after this sample.
    pub alarm: bool,
    /// The level the decision was made on: the windowed average, or the
    /// instantaneous intensity for the instant policy.
    pub level: f32,
}

/// Detection strategy run by the sampler once per sampling period.
#[derive(Debug, Clone)]
pub enum DetectionPolicy {
    WindowedAverage {
        window: IntensityWindow,
        threshold_pct: f32,
    },
    Instant,
}

impl DetectionPolicy {
    /// Build the policy selected in the configuration.
    pub fn from_config(config: &SystemConfig) -> Self {
        match config.detection_policy {
            PolicyKind::WindowedAverage => Self::WindowedAverage {
                window: IntensityWindow::new(),
                threshold_pct: config.flame_threshold_pct,
            },
            PolicyKind::Instant => Self::Instant,
        }
    }

    /// Fold one intensity sample (0–100) into the policy.
    pub fn observe(&mut self, intensity: u8) -> Observation {
        match self {
            Self::WindowedAverage {
                window,
                threshold_pct,
            } => {
                window.push(intensity);
                // push() guarantees the window is non-empty here.
                let avg = window.average().unwrap_or(0.0);
                Observation {
                    alarm: avg >= *threshold_pct,
                    level: avg,
                }
            }
            Self::Instant => Observation {
                alarm: intensity > 0,
                level: f32::from(intensity),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn windowed(threshold: f32) -> DetectionPolicy {
        DetectionPolicy::WindowedAverage {
            window: IntensityWindow::new(),
            threshold_pct: threshold,
        }
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut p = windowed(20.0);
        // Single sample of exactly 20 makes the average exactly 20.0.
        let obs = p.observe(20);
        assert!(obs.alarm, "mean exactly at threshold must alarm");
        assert!((obs.level - 20.0).abs() < f32::EPSILON);
    }

    #[test]
    fn below_threshold_stays_quiet() {
        let mut p = windowed(20.0);
        for _ in 0..10 {
            assert!(!p.observe(19).alarm);
        }
    }

    #[test]
    fn window_debounces_single_spike() {
        let mut p = windowed(20.0);
        for _ in 0..4 {
            assert!(!p.observe(0).alarm);
        }
        // One 90% spike over a window of [0,0,0,0,90] averages 18 < 20.
        assert!(!p.observe(90).alarm);
        // A second spike pushes the average to 36 >= 20.
        assert!(p.observe(90).alarm);
    }

    #[test]
    fn instant_policy_trips_on_any_nonzero() {
        let mut p = DetectionPolicy::Instant;
        assert!(!p.observe(0).alarm);
        let obs = p.observe(1);
        assert!(obs.alarm);
        assert!((obs.level - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn from_config_selects_variant() {
        let mut config = crate::config::SystemConfig::default();
        assert!(matches!(
            DetectionPolicy::from_config(&config),
            DetectionPolicy::WindowedAverage { .. }
        ));
        config.detection_policy = crate::config::PolicyKind::Instant;
        assert!(matches!(
            DetectionPolicy::from_config(&config),
            DetectionPolicy::Instant
        ));
    }
}
