//! Physical pin assignment for the FireSentry board (plain ESP32 devkit).

/// LM393 flame sensor analog output — ADC1 channel 6 (GPIO34).
pub const FLAME_ADC_CHANNEL: u32 = 6;

/// Onboard alarm indicator LED.
pub const LED_GPIO: i32 = 2;

/// Manual reset button, active-low with internal pull-up.
pub const BUTTON_GPIO: i32 = 23;
