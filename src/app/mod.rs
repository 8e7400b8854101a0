//! Application boundary — port traits and structured events.
//!
//! The task loops in [`crate::tasks`] consume hardware and network
//! exclusively through the **port traits** defined in [`ports`], keeping
//! every task fully testable without real peripherals.

pub mod events;
pub mod ports;
