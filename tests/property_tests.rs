//! Property tests for the alarm core data structures.
//!
//! Runs on host (x86_64) only — proptest is not available for ESP32
//! targets. On ESP32, these tests are compiled out.

#![cfg(not(target_os = "espidf"))]

use firesentry::alarm::policy::DetectionPolicy;
use firesentry::alarm::trigger::{AlarmState, TriggerHandle};
use firesentry::alarm::window::{IntensityWindow, WINDOW_LEN};
use firesentry::sensors::flame::{raw_to_voltage, voltage_to_intensity};
use proptest::prelude::*;

// ── Rolling window ────────────────────────────────────────────

proptest! {
    /// For any pushed sequence, the reported average equals the arithmetic
    /// mean of exactly the last `min(len, WINDOW_LEN)` values.
    #[test]
    fn window_average_reflects_last_five(
        samples in proptest::collection::vec(0u8..=100u8, 1..=40),
    ) {
        let mut w = IntensityWindow::new();
        for &s in &samples {
            w.push(s);
        }

        let tail_len = samples.len().min(WINDOW_LEN);
        let tail = &samples[samples.len() - tail_len..];
        let expected: f32 =
            tail.iter().map(|&v| u32::from(v)).sum::<u32>() as f32 / tail_len as f32;

        prop_assert_eq!(w.len(), tail_len);
        prop_assert!((w.average().unwrap() - expected).abs() < 1e-4);
    }

    /// The windowed policy alarms exactly when the window mean is at or
    /// above the threshold (inclusive boundary).
    #[test]
    fn windowed_policy_matches_mean_comparison(
        samples in proptest::collection::vec(0u8..=100u8, 1..=20),
        threshold in 0.0f32..=100.0f32,
    ) {
        let mut policy = DetectionPolicy::WindowedAverage {
            window: IntensityWindow::new(),
            threshold_pct: threshold,
        };
        let mut shadow = IntensityWindow::new();

        for &s in &samples {
            let obs = policy.observe(s);
            shadow.push(s);
            let mean = shadow.average().unwrap();
            prop_assert_eq!(obs.alarm, mean >= threshold);
            prop_assert!((obs.level - mean).abs() < 1e-4);
        }
    }
}

// ── Conversion pipeline ───────────────────────────────────────

proptest! {
    /// Intensity stays within [0,100] and never increases with raw counts
    /// (low voltage = flame present).
    #[test]
    fn intensity_bounded_and_antitone(raw_a in 0u16..=4095u16, raw_b in 0u16..=4095u16) {
        let (lo, hi) = if raw_a <= raw_b { (raw_a, raw_b) } else { (raw_b, raw_a) };
        let i_lo = voltage_to_intensity(raw_to_voltage(lo));
        let i_hi = voltage_to_intensity(raw_to_voltage(hi));
        prop_assert!(i_lo <= 100);
        prop_assert!(i_hi <= 100);
        prop_assert!(i_lo >= i_hi, "intensity must not increase with raw");
    }
}

// ── Trigger state machine ─────────────────────────────────────

proptest! {
    /// Any sequence of raise/clear operations leaves the trigger in the
    /// state implied by the last operation — never anything undefined.
    #[test]
    fn trigger_follows_last_operation(ops in proptest::collection::vec(any::<bool>(), 1..=64)) {
        let trigger = TriggerHandle::new();
        for &raise in &ops {
            if raise {
                trigger.raise();
            } else {
                trigger.clear();
            }
        }
        let expected = if *ops.last().unwrap() {
            AlarmState::Triggered
        } else {
            AlarmState::Idle
        };
        prop_assert_eq!(trigger.get(), expected);
    }
}
