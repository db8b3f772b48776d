//! Shared world state for task board BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{NaiveDate, TimeZone, Utc};
use rstest::fixture;
use taskboard::task::{
    adapters::{clock::ManualClock, memory::InMemoryTaskSlot},
    domain::{Task, TaskId},
    services::TaskStore,
};

/// Store type used by the BDD world.
pub type TestTaskStore = TaskStore<InMemoryTaskSlot, ManualClock>;

/// Scenario world for task board behaviour tests.
pub struct TaskBoardWorld {
    pub slot: Arc<InMemoryTaskSlot>,
    pub clock: Arc<ManualClock>,
    pub store: TestTaskStore,
    pub ids_by_title: HashMap<String, TaskId>,
    pub last_search: Option<Vec<Task>>,
    pub last_delete: Option<Option<Task>>,
}

impl TaskBoardWorld {
    /// Creates a world over an empty slot. The store is not loaded yet.
    #[must_use]
    pub fn new() -> Self {
        taskboard::logging::init_tracing();
        let slot = Arc::new(InMemoryTaskSlot::new());
        let start = Utc
            .with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
            .single()
            .unwrap_or_default();
        let clock = Arc::new(ManualClock::new(start));
        let store = TaskStore::new(Arc::clone(&slot), Arc::clone(&clock));

        Self {
            slot,
            clock,
            store,
            ids_by_title: HashMap::new(),
            last_search: None,
            last_delete: None,
        }
    }

    /// Replaces the store with a freshly loaded one over the same slot.
    pub fn reopen(&mut self) {
        self.store = TaskStore::new(Arc::clone(&self.slot), Arc::clone(&self.clock));
        self.store.load();
    }

    /// Looks up the identifier of a task created in this scenario.
    pub fn id_for(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.ids_by_title
            .get(title)
            .cloned()
            .ok_or_else(|| eyre::eyre!("no task titled '{title}' in scenario world"))
    }
}

impl Default for TaskBoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskBoardWorld {
    TaskBoardWorld::default()
}

/// Parses an ISO calendar date from a scenario step.
pub fn parse_date(value: &str) -> Result<NaiveDate, eyre::Report> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|err| eyre::eyre!("invalid date '{value}' in scenario: {err}"))
}

/// Sets the world clock to midday on `day`.
pub fn set_today(world: &TaskBoardWorld, day: NaiveDate) -> Result<(), eyre::Report> {
    let midday = day
        .and_hms_opt(12, 0, 0)
        .ok_or_else(|| eyre::eyre!("invalid midday for {day}"))?;
    world.clock.set(Utc.from_utc_datetime(&midday));
    Ok(())
}
