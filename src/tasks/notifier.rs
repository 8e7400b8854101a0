//! Alarm notifier task — edge-triggered remote alert dispatch.
//!
//! Polls the shared trigger once per period. On observing `Triggered` the
//! task releases the lock, performs the (blocking, up to 10 s) HTTP send,
//! and only then re-acquires the lock to clear the flag. The lock is never
//! held across the network call, so the sampler, indicator, and reset
//! watcher keep running during a slow send.
//!
//! One dispatch attempt per trigger edge: success and failure both clear
//! the trigger. Failures are logged and dropped — no retry, no re-arm.

use std::time::Duration;

use log::{error, info, warn};

use crate::alarm::trigger::TriggerHandle;
use crate::app::events::{AppEvent, ClearReason};
use crate::app::ports::{AlertPort, EventSink};

use super::PeriodicTask;

pub struct NotifierTask<A: AlertPort, E: EventSink> {
    trigger: TriggerHandle,
    alert: A,
    sink: E,
    message: String,
    period: Duration,
}

impl<A: AlertPort, E: EventSink> NotifierTask<A, E> {
    pub fn new(
        trigger: TriggerHandle,
        alert: A,
        sink: E,
        message: impl Into<String>,
        period: Duration,
    ) -> Self {
        Self {
            trigger,
            alert,
            sink,
            message: message.into(),
            period,
        }
    }
}

impl<A, E> PeriodicTask for NotifierTask<A, E>
where
    A: AlertPort + Send,
    E: EventSink + Send,
{
    fn name(&self) -> &'static str {
        "notifier"
    }

    fn period(&self) -> Duration {
        self.period
    }

    fn tick(&mut self) {
        // Snapshot; the trigger lock is released before the send below.
        if !self.trigger.is_triggered() {
            return;
        }

        if !self.alert.is_connected() {
            // Diagnostic only — the send is attempted regardless.
            warn!("notifier: network link down, attempting alert anyway");
        }

        match self.alert.send_alert(&self.message) {
            Ok(status) => {
                info!("alert dispatched (HTTP {status})");
                self.sink.emit(&AppEvent::AlertSent { status });
            }
            Err(e) => {
                error!("alert send failed: {e}");
                self.sink.emit(&AppEvent::AlertFailed(e));
            }
        }

        // One attempt per edge — clear regardless of the outcome. A flame
        // edge racing this clear is absorbed (accepted best-effort).
        if self.trigger.clear() {
            self.sink.emit(&AppEvent::AlarmCleared(ClearReason::AlertDispatched));
        }
    }
}
