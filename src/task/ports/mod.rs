//! Port contracts for task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the task store.

pub mod slot;

pub use slot::{TaskSlot, TaskSlotError, TaskSlotResult};
