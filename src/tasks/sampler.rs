//! Sampler task — flame sensing and trigger raising.
//!
//! Once per period: one sensor reading, fold it into the detection policy,
//! raise the shared trigger when the policy reports an alarm condition.
//! The sampler never clears the trigger; that is the notifier's and reset
//! watcher's job.

use std::time::Duration;

use log::{info, warn};

use crate::alarm::policy::DetectionPolicy;
use crate::alarm::trigger::TriggerHandle;
use crate::app::events::AppEvent;
use crate::app::ports::{EventSink, FlameSensorPort};

use super::PeriodicTask;

pub struct SamplerTask<S: FlameSensorPort, E: EventSink> {
    sensor: S,
    policy: DetectionPolicy,
    trigger: TriggerHandle,
    sink: E,
    period: Duration,
}

impl<S: FlameSensorPort, E: EventSink> SamplerTask<S, E> {
    pub fn new(
        sensor: S,
        policy: DetectionPolicy,
        trigger: TriggerHandle,
        sink: E,
        period: Duration,
    ) -> Self {
        Self {
            sensor,
            policy,
            trigger,
            sink,
            period,
        }
    }
}

impl<S, E> PeriodicTask for SamplerTask<S, E>
where
    S: FlameSensorPort + Send,
    E: EventSink + Send,
{
    fn name(&self) -> &'static str {
        "sampler"
    }

    fn period(&self) -> Duration {
        self.period
    }

    fn tick(&mut self) {
        let reading = match self.sensor.sample() {
            Ok(r) => r,
            Err(e) => {
                // Skip the cycle; the window keeps its previous contents.
                warn!("sampler: sensor read failed ({e}), skipping cycle");
                return;
            }
        };

        let obs = self.policy.observe(reading.intensity);
        if !obs.alarm {
            return;
        }

        let edge = self.trigger.raise();
        // Diagnostics happen after the lock is released.
        info!(
            "flame detected (level {:.1}%, raw {}), alarm trigger set",
            obs.level, reading.raw
        );
        self.sink.emit(&AppEvent::FlameDetected { level: obs.level });
        if edge {
            self.sink.emit(&AppEvent::AlarmRaised);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alarm::window::IntensityWindow;
    use crate::error::SensorError;
    use crate::sensors::flame::FlameReading;

    struct ScriptedSensor {
        script: Vec<Result<u8, SensorError>>,
    }

    impl FlameSensorPort for ScriptedSensor {
        fn sample(&mut self) -> Result<FlameReading, SensorError> {
            let intensity = self.script.remove(0)?;
            Ok(FlameReading {
                raw: 0,
                voltage: 0.0,
                intensity,
            })
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        events: Vec<AppEvent>,
    }

    impl EventSink for RecordingSink {
        fn emit(&mut self, event: &AppEvent) {
            self.events.push(*event);
        }
    }

    fn windowed() -> DetectionPolicy {
        DetectionPolicy::WindowedAverage {
            window: IntensityWindow::new(),
            threshold_pct: 20.0,
        }
    }

    #[test]
    fn raises_trigger_when_average_crosses_threshold() {
        let trigger = TriggerHandle::new();
        let mut task = SamplerTask::new(
            ScriptedSensor {
                script: vec![Ok(100)],
            },
            windowed(),
            trigger.clone(),
            RecordingSink::default(),
            Duration::from_millis(1),
        );
        task.tick();
        assert!(trigger.is_triggered());
        assert!(task.sink.events.contains(&AppEvent::AlarmRaised));
    }

    #[test]
    fn stays_idle_below_threshold() {
        let trigger = TriggerHandle::new();
        let mut task = SamplerTask::new(
            ScriptedSensor {
                script: vec![Ok(5), Ok(10), Ok(15)],
            },
            windowed(),
            trigger.clone(),
            RecordingSink::default(),
            Duration::from_millis(1),
        );
        for _ in 0..3 {
            task.tick();
        }
        assert!(!trigger.is_triggered());
        assert!(task.sink.events.is_empty());
    }

    #[test]
    fn sensor_error_skips_cycle_and_preserves_window() {
        let trigger = TriggerHandle::new();
        // A failed read must not fold a fabricated zero into the window or
        // touch the trigger.
        let mut task = SamplerTask::new(
            ScriptedSensor {
                script: vec![
                    Ok(100),
                    Err(SensorError::AdcReadFailed),
                ],
            },
            windowed(),
            trigger.clone(),
            RecordingSink::default(),
            Duration::from_millis(1),
        );
        task.tick();
        assert!(trigger.is_triggered());
        trigger.clear();
        task.tick(); // failed read: no state change
        assert!(!trigger.is_triggered());
    }

    #[test]
    fn alarm_raised_only_on_edge() {
        let trigger = TriggerHandle::new();
        let mut task = SamplerTask::new(
            ScriptedSensor {
                script: vec![Ok(100), Ok(100), Ok(100)],
            },
            windowed(),
            trigger.clone(),
            RecordingSink::default(),
            Duration::from_millis(1),
        );
        for _ in 0..3 {
            task.tick();
        }
        let raised = task
            .sink
            .events
            .iter()
            .filter(|e| matches!(e, AppEvent::AlarmRaised))
            .count();
        assert_eq!(raised, 1);
        // FlameDetected is reported on every alarming cycle.
        let detected = task
            .sink
            .events
            .iter()
            .filter(|e| matches!(e, AppEvent::FlameDetected { .. }))
            .count();
        assert_eq!(detected, 3);
    }
}
