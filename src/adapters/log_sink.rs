//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                info!("START | all tasks spawned");
            }
            AppEvent::FlameDetected { level } => {
                info!("FLAME | level={:.1}%", level);
            }
            AppEvent::AlarmRaised => {
                warn!("ALARM | trigger set");
            }
            AppEvent::AlertSent { status } => {
                info!("ALERT | dispatched, HTTP {status}");
            }
            AppEvent::AlertFailed(e) => {
                warn!("ALERT | failed: {e}");
            }
            AppEvent::AlarmCleared(reason) => {
                info!("ALARM | cleared ({reason:?})");
            }
        }
    }
}
