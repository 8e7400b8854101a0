//! System configuration parameters
//!
//! All tunable parameters for the FireSentry system. Values are fixed at
//! build time; WiFi credentials can be injected through the
//! `FIRESENTRY_WIFI_SSID` / `FIRESENTRY_WIFI_PASSWORD` environment
//! variables at compile time.

use serde::{Deserialize, Serialize};

/// Which detection policy the sampler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyKind {
    /// Alarm when the rolling-window average intensity crosses the threshold.
    WindowedAverage,
    /// Alarm on any nonzero intensity reading (no debounce).
    Instant,
}

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Detection ---
    /// Average flame intensity (0–100) at or above which the alarm trips.
    pub flame_threshold_pct: f32,
    /// Detection policy the sampler runs.
    pub detection_policy: PolicyKind,

    // --- Timing ---
    /// Flame sensor sampling period (milliseconds)
    pub sample_interval_ms: u32,
    /// Alarm notifier polling period (milliseconds)
    pub notify_interval_ms: u32,
    /// Indicator LED blink period (milliseconds)
    pub blink_interval_ms: u32,
    /// Manual reset input polling period (milliseconds)
    pub reset_poll_interval_ms: u32,

    // --- Alert listener ---
    /// Remote listener host (the Raspberry Pi collecting alarm events).
    pub listener_host: String,
    /// Remote listener TCP port.
    pub listener_port: u16,
    /// HTTP request timeout for the alert POST (milliseconds).
    pub alert_timeout_ms: u32,
    /// Message carried in the alert payload.
    pub alert_message: String,

    // --- WiFi ---
    /// Station SSID. Empty disables the network link (alarm still runs).
    pub wifi_ssid: String,
    /// Station password. Empty means an open network.
    pub wifi_password: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Detection
            flame_threshold_pct: 20.0,
            detection_policy: PolicyKind::WindowedAverage,

            // Timing
            sample_interval_ms: 1000,
            notify_interval_ms: 1000,
            blink_interval_ms: 500,
            reset_poll_interval_ms: 500,

            // Alert listener
            listener_host: "192.168.1.90".to_string(),
            listener_port: 5000,
            alert_timeout_ms: 10_000,
            alert_message: "Alarm Triggered".to_string(),

            // WiFi
            wifi_ssid: option_env!("FIRESENTRY_WIFI_SSID")
                .unwrap_or("")
                .to_string(),
            wifi_password: option_env!("FIRESENTRY_WIFI_PASSWORD")
                .unwrap_or("")
                .to_string(),
        }
    }
}

impl SystemConfig {
    /// URL of the alert endpoint on the remote listener.
    pub fn alert_url(&self) -> String {
        format!("http://{}:{}/alert", self.listener_host, self.listener_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let c = SystemConfig::default();
        assert!(c.flame_threshold_pct > 0.0 && c.flame_threshold_pct <= 100.0);
        assert!(c.sample_interval_ms > 0);
        assert!(c.notify_interval_ms > 0);
        assert!(c.blink_interval_ms > 0);
        assert!(c.reset_poll_interval_ms > 0);
        assert!(c.alert_timeout_ms > 0);
        assert_eq!(c.detection_policy, PolicyKind::WindowedAverage);
    }

    #[test]
    fn serde_roundtrip() {
        let c = SystemConfig::default();
        let json = serde_json::to_string(&c).unwrap();
        let c2: SystemConfig = serde_json::from_str(&json).unwrap();
        assert!((c.flame_threshold_pct - c2.flame_threshold_pct).abs() < 0.001);
        assert_eq!(c.listener_port, c2.listener_port);
        assert_eq!(c.alert_message, c2.alert_message);
        assert_eq!(c.detection_policy, c2.detection_policy);
    }

    #[test]
    fn indicator_polls_faster_than_sampler() {
        let c = SystemConfig::default();
        assert!(
            c.blink_interval_ms <= c.sample_interval_ms,
            "blink cadence must be at least as fast as sampling"
        );
        assert!(c.reset_poll_interval_ms <= c.notify_interval_ms);
    }

    #[test]
    fn alert_url_matches_listener() {
        let c = SystemConfig::default();
        assert_eq!(c.alert_url(), "http://192.168.1.90:5000/alert");
    }
}
