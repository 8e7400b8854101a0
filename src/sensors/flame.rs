//! LM393 flame sensor driver.
//!
//! Reads the analog voltage output through an ESP32 ADC channel and maps it
//! to a flame intensity percentage. The module outputs LOW (near 0 V) when
//! a flame is present and HIGH (near 3.3 V) when not, so intensity is the
//! inverse of the measured voltage, scaled to 0–100.
//!
//! The whole pipeline is real-valued: `raw / 4095.0 * 3.3` then
//! `(3.3 - v) / 3.3 * 100`, rounded once at the end. Integer division
//! anywhere in this chain collapses every sub-maximal reading to a
//! constant.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the ADC via the oneshot API (initialised by hw_init).
//! On host/test: reads from static atomics for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicBool, AtomicU16, Ordering};

use crate::error::SensorError;

/// 12-bit ADC full-scale count.
pub const ADC_FULL_SCALE: f32 = 4095.0;

/// ADC reference voltage.
pub const ADC_VREF: f32 = 3.3;

#[cfg(not(target_os = "espidf"))]
static SIM_FLAME_ADC: AtomicU16 = AtomicU16::new(0);
#[cfg(not(target_os = "espidf"))]
static SIM_FLAME_FAULT: AtomicBool = AtomicBool::new(false);

/// Inject a raw ADC count for host-side tests and simulation.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_flame_adc(raw: u16) {
    SIM_FLAME_ADC.store(raw, Ordering::Relaxed);
}

/// Make every subsequent simulated read fail until turned off again.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_flame_fault(on: bool) {
    SIM_FLAME_FAULT.store(on, Ordering::Relaxed);
}

/// One converted sensor reading.
#[derive(Debug, Clone, Copy)]
pub struct FlameReading {
    /// Raw 12-bit ADC count.
    pub raw: u16,
    /// Measured sensor voltage.
    pub voltage: f32,
    /// Flame intensity, 0 (no flame) to 100 (saturated).
    pub intensity: u8,
}

/// Flame sensor driver bound to one ADC1 channel.
pub struct FlameSensor {
    adc_channel: u32,
    total_reads: u32,
}

impl FlameSensor {
    pub fn new(adc_channel: u32) -> Self {
        Self {
            adc_channel,
            total_reads: 0,
        }
    }

    /// Read and convert one sample.
    ///
    /// A failed ADC read surfaces as [`SensorError`] — the caller skips the
    /// cycle rather than folding a fabricated zero into the window.
    pub fn read(&mut self) -> Result<FlameReading, SensorError> {
        self.total_reads = self.total_reads.saturating_add(1);

        let raw = self.read_adc()?;
        if f32::from(raw) > ADC_FULL_SCALE {
            return Err(SensorError::OutOfRange);
        }

        let voltage = raw_to_voltage(raw);
        Ok(FlameReading {
            raw,
            voltage,
            intensity: voltage_to_intensity(voltage),
        })
    }

    /// Total read attempts since startup (diagnostics).
    pub fn total_reads(&self) -> u32 {
        self.total_reads
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> Result<u16, SensorError> {
        crate::drivers::hw_init::adc1_read(self.adc_channel)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> Result<u16, SensorError> {
        if SIM_FLAME_FAULT.load(Ordering::Relaxed) {
            return Err(SensorError::AdcReadFailed);
        }
        Ok(SIM_FLAME_ADC.load(Ordering::Relaxed))
    }
}

/// Proportional raw→voltage conversion.
pub fn raw_to_voltage(raw: u16) -> f32 {
    f32::from(raw) / ADC_FULL_SCALE * ADC_VREF
}

/// Invert: low voltage = flame present, high voltage = no flame.
pub fn voltage_to_intensity(voltage: f32) -> u8 {
    let pct = (ADC_VREF - voltage) / ADC_VREF * 100.0;
    pct.round().clamp(0.0, 100.0) as u8
}
