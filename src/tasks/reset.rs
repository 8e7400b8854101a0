//! Reset watcher task — manual alarm silence/override.
//!
//! Polls the reset input every period. While the button is held the task
//! forces the trigger to `Idle` and the indicator output low on every
//! cycle, unconditionally. Repeated assertion while already idle is a
//! state-wise no-op; the cleared event and log line fire on the
//! `Triggered → Idle` edge only.

use std::time::Duration;

use log::info;

use crate::alarm::trigger::TriggerHandle;
use crate::app::events::{AppEvent, ClearReason};
use crate::app::ports::{EventSink, IndicatorPort, ResetInputPort};

use super::PeriodicTask;

pub struct ResetTask<I: ResetInputPort, O: IndicatorPort, E: EventSink> {
    trigger: TriggerHandle,
    input: I,
    output: O,
    sink: E,
    period: Duration,
}

impl<I: ResetInputPort, O: IndicatorPort, E: EventSink> ResetTask<I, O, E> {
    pub fn new(
        trigger: TriggerHandle,
        input: I,
        output: O,
        sink: E,
        period: Duration,
    ) -> Self {
        Self {
            trigger,
            input,
            output,
            sink,
            period,
        }
    }
}

impl<I, O, E> PeriodicTask for ResetTask<I, O, E>
where
    I: ResetInputPort + Send,
    O: IndicatorPort + Send,
    E: EventSink + Send,
{
    fn name(&self) -> &'static str {
        "reset"
    }

    fn period(&self) -> Duration {
        self.period
    }

    fn tick(&mut self) {
        if !self.input.is_pressed() {
            return;
        }

        let edge = self.trigger.clear();
        self.output.set_level(false);
        if edge {
            info!("manual reset, alarm cleared and indicator off");
            self.sink.emit(&AppEvent::AlarmCleared(ClearReason::ManualReset));
        }
    }
}
