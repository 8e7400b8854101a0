//! Periodic task loops and the runtime that drives them.
//!
//! Four independent loops share one [`TriggerHandle`](crate::alarm::TriggerHandle):
//!
//! | Task        | Period  | Role                                        |
//! |-------------|---------|---------------------------------------------|
//! | `sampler`   | 1000 ms | read sensor, window, raise trigger          |
//! | `notifier`  | 1000 ms | edge-triggered alert dispatch, clear trigger|
//! | `indicator` | 500 ms  | blink the LED while triggered               |
//! | `reset`     | 500 ms  | manual override: clear trigger, LED off     |
//!
//! Each loop is `tick()` + fixed sleep. The sleep happens on a
//! [`CancellationToken`] so a cancel wakes the task immediately —
//! production never cancels; tests do. Tests can also skip the runtime
//! entirely and drive `tick()` through the [`PeriodicTask`] trait to
//! advance logical time without threads.

pub mod indicator;
pub mod notifier;
pub mod reset;
pub mod sampler;

pub use indicator::IndicatorTask;
pub use notifier::NotifierTask;
pub use reset::ResetTask;
pub use sampler::SamplerTask;

use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::Duration;

use log::info;

use crate::drivers::task_spawn;

// ───────────────────────────────────────────────────────────────
// Periodic task abstraction
// ───────────────────────────────────────────────────────────────

/// A unit of execution that runs one cycle per fixed period, forever.
pub trait PeriodicTask: Send {
    /// Short task name for logs and the FreeRTOS task list.
    fn name(&self) -> &'static str;

    /// Sleep between cycles.
    fn period(&self) -> Duration;

    /// Run one cycle.
    fn tick(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Cancellation
// ───────────────────────────────────────────────────────────────

/// Condvar-backed cancellation flag shared by all task loops.
///
/// `wait_timeout` doubles as the inter-cycle sleep: it blocks for the
/// task's period but returns early the moment `cancel()` is called.
#[derive(Clone)]
pub struct CancellationToken {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self {
            inner: Arc::new((Mutex::new(false), Condvar::new())),
        }
    }

    /// Request every task sharing this token to stop after its current
    /// cycle.
    pub fn cancel(&self) {
        let (flag, condvar) = &*self.inner;
        *flag.lock().unwrap_or_else(PoisonError::into_inner) = true;
        condvar.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        let (flag, _) = &*self.inner;
        *flag.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Sleep for `period` or until cancelled, whichever comes first.
    /// Returns `true` when cancelled.
    pub fn wait_timeout(&self, period: Duration) -> bool {
        let (flag, condvar) = &*self.inner;
        let guard = flag.lock().unwrap_or_else(PoisonError::into_inner);
        let (guard, _) = condvar
            .wait_timeout_while(guard, period, |cancelled| !*cancelled)
            .unwrap_or_else(PoisonError::into_inner);
        *guard
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

// ───────────────────────────────────────────────────────────────
// Runtime
// ───────────────────────────────────────────────────────────────

/// Drive a task until the token is cancelled. Never returns in production.
pub fn run(mut task: impl PeriodicTask, cancel: &CancellationToken) {
    info!(
        "task '{}' started (period {}ms)",
        task.name(),
        task.period().as_millis()
    );
    loop {
        task.tick();
        if cancel.wait_timeout(task.period()) {
            break;
        }
    }
    info!("task '{}' stopped", task.name());
}

/// Spawn a task loop on its own FreeRTOS-backed thread.
///
/// `name` must be null-terminated (see
/// [`task_spawn::spawn_task`](crate::drivers::task_spawn::spawn_task)).
pub fn spawn(
    name: &'static str,
    task: impl PeriodicTask + 'static,
    cancel: CancellationToken,
) -> std::thread::JoinHandle<()> {
    task_spawn::spawn_task(
        name,
        task_spawn::TASK_PRIORITY,
        task_spawn::TASK_STACK_KB,
        move || run(task, &cancel),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct CountingTask {
        count: Arc<AtomicU32>,
    }

    impl PeriodicTask for CountingTask {
        fn name(&self) -> &'static str {
            "counting"
        }
        fn period(&self) -> Duration {
            Duration::from_millis(5)
        }
        fn tick(&mut self) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn cancel_stops_a_running_loop() {
        let count = Arc::new(AtomicU32::new(0));
        let cancel = CancellationToken::new();
        let handle = spawn(
            "counting\0",
            CountingTask {
                count: count.clone(),
            },
            cancel.clone(),
        );

        while count.load(Ordering::SeqCst) < 3 {
            std::thread::yield_now();
        }
        cancel.cancel();
        handle.join().unwrap();
        assert!(cancel.is_cancelled());
        assert!(count.load(Ordering::SeqCst) >= 3);
    }

    #[test]
    fn wait_timeout_returns_early_on_cancel() {
        let cancel = CancellationToken::new();
        let waiter = cancel.clone();
        let handle = std::thread::spawn(move || {
            // Would sleep for a minute if the cancel did not wake it.
            waiter.wait_timeout(Duration::from_secs(60))
        });
        std::thread::sleep(Duration::from_millis(20));
        cancel.cancel();
        assert!(handle.join().unwrap());
    }

    #[test]
    fn wait_timeout_expires_without_cancel() {
        let cancel = CancellationToken::new();
        assert!(!cancel.wait_timeout(Duration::from_millis(1)));
    }
}
