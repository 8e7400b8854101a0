//! The shared alarm trigger.
//!
//! One two-state flag shared by all four tasks, guarded by one mutex:
//!
//! ```text
//!   Sampler ──raise()──▶ ┌───────────────┐ ◀──is_triggered()── Notifier
//!                        │ Mutex<State>  │ ◀──is_triggered()── Indicator
//!   Reset  ──clear()───▶ └───────────────┘ ◀──clear()───────── Notifier
//! ```
//!
//! The handle owns the locking discipline: every read-test-write happens
//! inside one method call, so the guard can never be held across a blocking
//! I/O call. Tasks receive cloned handles at construction — all clones
//! share the identical lock instance.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// The alarm trigger state machine. `Idle` is the initial state; there is
/// no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AlarmState {
    Idle = 0,
    Triggered = 1,
}

/// Cloneable handle to the one process-wide alarm trigger.
#[derive(Debug, Clone)]
pub struct TriggerHandle {
    inner: Arc<Mutex<AlarmState>>,
}

impl TriggerHandle {
    /// Create a fresh trigger in `Idle`.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(AlarmState::Idle)),
        }
    }

    /// Transition to `Triggered`. Returns `true` on the `Idle → Triggered`
    /// edge, `false` when the trigger was already set.
    pub fn raise(&self) -> bool {
        let mut state = self.lock();
        let edge = *state == AlarmState::Idle;
        *state = AlarmState::Triggered;
        edge
    }

    /// Transition to `Idle`. Returns `true` on the `Triggered → Idle` edge,
    /// `false` when the trigger was already clear. Idempotent.
    pub fn clear(&self) -> bool {
        let mut state = self.lock();
        let edge = *state == AlarmState::Triggered;
        *state = AlarmState::Idle;
        edge
    }

    /// Snapshot of the current state. The lock is released before this
    /// returns — callers act on a copy, never on the guard.
    pub fn get(&self) -> AlarmState {
        *self.lock()
    }

    /// Convenience snapshot test.
    pub fn is_triggered(&self) -> bool {
        self.get() == AlarmState::Triggered
    }

    // A poisoned lock means a task panicked mid-write; the stored value is
    // still a valid enum, and an alarm controller must keep running.
    fn lock(&self) -> MutexGuard<'_, AlarmState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for TriggerHandle {
    fn default() -> Self {
        Self::new()
    }
}
