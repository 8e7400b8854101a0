//! GPIO and ADC port implementations.
//!
//! Thin adapters over [`hw_init`](crate::drivers::hw_init): all pin state
//! lives in the hardware registers (or the host-sim atomics), so the
//! adapter types themselves are plain markers and stay trivially `Send`.

use crate::app::ports::{FlameSensorPort, IndicatorPort, ResetInputPort};
use crate::drivers::hw_init;
use crate::error::SensorError;
use crate::sensors::flame::{FlameReading, FlameSensor};

impl FlameSensorPort for FlameSensor {
    fn sample(&mut self) -> Result<FlameReading, SensorError> {
        self.read()
    }
}

/// Alarm indicator LED on [`pins::LED_GPIO`](crate::pins::LED_GPIO).
#[derive(Debug, Default, Clone, Copy)]
pub struct LedIndicator;

impl LedIndicator {
    pub fn new() -> Self {
        Self
    }
}

impl IndicatorPort for LedIndicator {
    fn set_level(&mut self, on: bool) {
        hw_init::led_write(on);
    }
}

/// Manual reset button on [`pins::BUTTON_GPIO`](crate::pins::BUTTON_GPIO),
/// active-low with pull-up: a physical low level means pressed.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResetButton;

impl ResetButton {
    pub fn new() -> Self {
        Self
    }
}

impl ResetInputPort for ResetButton {
    fn is_pressed(&mut self) -> bool {
        hw_init::button_is_low()
    }
}

#[cfg(all(test, not(target_os = "espidf")))]
mod tests {
    use super::*;

    // Single test for the hw_init sim atomics — process-global state must
    // not race the parallel test runner.
    #[test]
    fn gpio_adapters_roundtrip_through_sim() {
        let mut led = LedIndicator::new();
        led.set_level(true);
        assert!(hw_init::sim_led_level());
        led.set_level(false);
        assert!(!hw_init::sim_led_level());

        let mut button = ResetButton::new();
        assert!(!button.is_pressed());
        hw_init::sim_set_button_pressed(true);
        assert!(button.is_pressed());
        hw_init::sim_set_button_pressed(false);
    }
}
