//! Unified error types for the FireSentry firmware.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! top-level startup path's error handling uniform. All variants are `Copy`
//! so they can be cheaply passed through task loops and structured events
//! without allocation.
//!
//! Steady-state errors never cross a task boundary: a `SensorError` skips
//! one sampling cycle, a `NetworkError` drops one alert. Only startup
//! errors (`Init`, `Config`) are fatal.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The flame sensor could not be read or returned out-of-range data.
    Sensor(SensorError),
    /// The alert dispatch to the remote listener failed.
    Network(NetworkError),
    /// Peripheral initialisation failed.
    Init(&'static str),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor(e) => write!(f, "sensor: {e}"),
            Self::Network(e) => write!(f, "network: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

/// Transient sensor failures. The sampler skips the cycle and keeps the
/// previous window contents — it never substitutes a zero reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// ADC read returned an error or timed out.
    AdcReadFailed,
    /// Reading is outside the 12-bit converter range.
    OutOfRange,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AdcReadFailed => write!(f, "ADC read failed"),
            Self::OutOfRange => write!(f, "reading out of range"),
        }
    }
}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

// ---------------------------------------------------------------------------
// Network errors
// ---------------------------------------------------------------------------

/// Alert dispatch failures. The notifier reacts identically to every
/// variant: log, drop the alert, clear the trigger. No retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkError {
    /// The request did not complete within the configured timeout.
    Timeout,
    /// TCP connection to the listener could not be established.
    ConnectionRefused,
    /// The listener answered with a non-2xx status.
    Status(u16),
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "request timed out"),
            Self::ConnectionRefused => write!(f, "connection refused"),
            Self::Status(code) => write!(f, "listener returned HTTP {code}"),
        }
    }
}

impl From<NetworkError> for Error {
    fn from(e: NetworkError) -> Self {
        Self::Network(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
