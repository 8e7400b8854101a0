//! Sensor subsystem.
//!
//! FireSentry carries a single analog sensor: the LM393 flame detector on
//! ADC1. The driver converts raw counts into a normalized 0–100 intensity;
//! windowing and thresholding live in the alarm domain.

pub mod flame;

pub use flame::{FlameReading, FlameSensor};
