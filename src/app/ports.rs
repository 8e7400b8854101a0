//! Port traits — the hexagonal boundary between the task loops and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ task loop (domain)
//! ```
//!
//! Driven adapters (ADC sensor, GPIO pins, HTTP client, event sinks)
//! implement these traits. Tasks consume them via generics, so the domain
//! core never touches hardware directly.

use crate::error::{NetworkError, SensorError};
use crate::sensors::flame::FlameReading;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the sampler calls this once per period.
pub trait FlameSensorPort {
    /// Obtain one converted reading. Errors are transient — the caller
    /// skips the cycle.
    fn sample(&mut self) -> Result<FlameReading, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// GPIO ports (domain → hardware, hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the alarm indicator output. Infallible once the
/// pin is configured.
pub trait IndicatorPort {
    fn set_level(&mut self, on: bool);
}

/// Read-side port for the manual reset input. The adapter owns the
/// active-low mapping: `true` means the button is physically pressed.
pub trait ResetInputPort {
    fn is_pressed(&mut self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Alert port (domain → remote listener)
// ───────────────────────────────────────────────────────────────

/// Outbound alert dispatch to the remote listener.
pub trait AlertPort {
    /// Whether the network link is currently up. Used for a diagnostic
    /// warning only — it never gates the send attempt.
    fn is_connected(&self) -> bool;

    /// Synchronously POST one alert. Returns the HTTP status on success.
    fn send_alert(&mut self, message: &str) -> Result<u16, NetworkError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The tasks emit structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go (serial log in
/// production, a recording sink in tests).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
