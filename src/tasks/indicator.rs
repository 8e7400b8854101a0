//! Indicator task — alarm LED blink controller.
//!
//! While the trigger is set, flips the LED every period. The blink phase is
//! the accumulated side effect of repeated toggles, not a wall-clock-aligned
//! square wave. When the trigger is clear this task leaves the output
//! untouched — forcing it off is the reset watcher's job.

use std::time::Duration;

use crate::alarm::trigger::TriggerHandle;
use crate::app::ports::IndicatorPort;

use super::PeriodicTask;

pub struct IndicatorTask<O: IndicatorPort> {
    trigger: TriggerHandle,
    output: O,
    /// Level to write on the next triggered cycle.
    level: bool,
    period: Duration,
}

impl<O: IndicatorPort> IndicatorTask<O> {
    pub fn new(trigger: TriggerHandle, output: O, period: Duration) -> Self {
        Self {
            trigger,
            output,
            level: true,
            period,
        }
    }
}

impl<O> PeriodicTask for IndicatorTask<O>
where
    O: IndicatorPort + Send,
{
    fn name(&self) -> &'static str {
        "indicator"
    }

    fn period(&self) -> Duration {
        self.period
    }

    fn tick(&mut self) {
        if self.trigger.is_triggered() {
            self.output.set_level(self.level);
            self.level = !self.level;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingOutput {
        writes: Vec<bool>,
    }

    impl IndicatorPort for RecordingOutput {
        fn set_level(&mut self, on: bool) {
            self.writes.push(on);
        }
    }

    #[test]
    fn no_writes_while_idle() {
        let trigger = TriggerHandle::new();
        let mut t = IndicatorTask::new(
            trigger,
            RecordingOutput::default(),
            Duration::from_millis(1),
        );
        for _ in 0..5 {
            t.tick();
        }
        assert!(t.output.writes.is_empty());
    }

    #[test]
    fn toggles_every_cycle_while_triggered() {
        let trigger = TriggerHandle::new();
        trigger.raise();
        let mut t = IndicatorTask::new(
            trigger,
            RecordingOutput::default(),
            Duration::from_millis(1),
        );
        for _ in 0..4 {
            t.tick();
        }
        assert_eq!(t.output.writes, vec![true, false, true, false]);
    }

    #[test]
    fn blink_phase_survives_an_idle_gap() {
        let trigger = TriggerHandle::new();
        trigger.raise();
        let mut t = IndicatorTask::new(
            trigger.clone(),
            RecordingOutput::default(),
            Duration::from_millis(1),
        );
        t.tick(); // writes true
        trigger.clear();
        t.tick(); // idle: no write, phase untouched
        trigger.raise();
        t.tick(); // resumes with the flipped phase
        assert_eq!(t.output.writes, vec![true, false]);
    }
}
