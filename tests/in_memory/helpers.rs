//! Shared test helpers for in-memory store integration tests.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rstest::fixture;
use taskboard::task::{
    adapters::{clock::ManualClock, memory::InMemoryTaskSlot},
    services::TaskStore,
};

/// Store type used by the in-memory integration tests.
pub type TestStore = TaskStore<InMemoryTaskSlot, ManualClock>;

/// Returns the instant every test clock starts at.
pub fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Builds a calendar date.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Provides a shared slot so tests can reload from it.
#[fixture]
pub fn slot() -> Arc<InMemoryTaskSlot> {
    Arc::new(InMemoryTaskSlot::new())
}

/// Provides a clock frozen at [`start`].
#[fixture]
pub fn clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(start()))
}

/// Provides a loaded store over the given slot and clock.
#[fixture]
pub fn store(slot: Arc<InMemoryTaskSlot>, clock: Arc<ManualClock>) -> TestStore {
    taskboard::logging::init_tracing();
    let mut store = TaskStore::new(slot, clock);
    store.load();
    store
}
