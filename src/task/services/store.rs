//! Task store: the authoritative task list mirrored to a persisted slot.

use chrono::NaiveDate;
use mockable::Clock;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use super::{
    StoreEvent, SubscriptionId, TaskStoreConfig,
    codec::{decode_records, encode_tasks},
};
use crate::task::{
    domain::{NewTask, PersistedTaskData, Task, TaskId, TaskPatch, TaskStatus},
    ports::{TaskSlot, TaskSlotError},
    query::{TaskFilters, TaskStats, distinct_categories, filter_tasks, task_stats},
};

/// Service-level errors for task store operations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// A mutation was attempted before [`TaskStore::load`] completed.
    #[error("task store is not loaded yet")]
    NotReady,

    /// The slot rejected the write. The in-memory change is kept.
    #[error(transparent)]
    Slot(#[from] TaskSlotError),

    /// The task list could not be serialized. The in-memory change is kept.
    #[error("failed to encode task list: {0}")]
    Encode(Arc<serde_json::Error>),
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

type Listener = Box<dyn FnMut(&StoreEvent, &[Task]) + Send>;

/// Owner of the canonical task list.
///
/// The store starts empty and not ready. [`TaskStore::load`] reads the slot
/// and marks it ready; from then on every effective mutation rewrites the
/// whole list to the slot. Mutations before that point fail with
/// [`TaskStoreError::NotReady`].
///
/// When a write fails the in-memory change stands and the error is returned;
/// the next successful write (or [`TaskStore::flush`]) brings the slot back in
/// line, since each write is a full snapshot.
pub struct TaskStore<S, C>
where
    S: TaskSlot,
    C: Clock + Send + Sync,
{
    slot: Arc<S>,
    clock: Arc<C>,
    config: TaskStoreConfig,
    tasks: Vec<Task>,
    ready: bool,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<S, C> TaskStore<S, C>
where
    S: TaskSlot,
    C: Clock + Send + Sync,
{
    /// Creates an unloaded store with the default configuration.
    #[must_use]
    pub fn new(slot: Arc<S>, clock: Arc<C>) -> Self {
        Self::with_config(slot, clock, TaskStoreConfig::default())
    }

    /// Creates an unloaded store with a custom configuration.
    #[must_use]
    pub const fn with_config(slot: Arc<S>, clock: Arc<C>, config: TaskStoreConfig) -> Self {
        Self {
            slot,
            clock,
            config,
            tasks: Vec::new(),
            ready: false,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Returns the store configuration.
    #[must_use]
    pub const fn config(&self) -> &TaskStoreConfig {
        &self.config
    }

    /// Returns `true` once [`TaskStore::load`] has run.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.ready
    }

    /// Returns every task in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Replaces the in-memory list with the slot contents and marks the store
    /// ready.
    ///
    /// A missing, unreadable or malformed blob yields an empty list; the
    /// failure is logged and never returned. When a blob repeats an
    /// identifier, the first record wins. A record whose `updatedAt`
    /// precedes its `createdAt` is loaded with both timestamps equal.
    pub fn load(&mut self) {
        let slot_key = self.config.slot_key();
        let tasks = match self.slot.read() {
            Ok(Some(blob)) => match decode_records(&blob) {
                Ok(records) => dedupe_by_id(restore_tasks(records, slot_key), slot_key),
                Err(err) => {
                    warn!(slot = slot_key, error = %err, "persisted tasks are malformed, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => {
                debug!(slot = slot_key, "no persisted tasks");
                Vec::new()
            }
            Err(err) => {
                warn!(slot = slot_key, error = %err, "persisted tasks are unreadable, starting empty");
                Vec::new()
            }
        };

        info!(slot = slot_key, count = tasks.len(), "task store loaded");
        self.tasks = tasks;
        self.ready = true;
        self.notify(&StoreEvent::Loaded);
    }

    /// Creates a task from caller-supplied fields and persists the list.
    ///
    /// The identifier is freshly generated and unique among the live tasks;
    /// both timestamps are set to the current clock time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotReady`] before [`TaskStore::load`], or a
    /// persistence error after the task has been appended in memory.
    pub fn create(&mut self, draft: NewTask) -> TaskStoreResult<Task> {
        self.ensure_ready()?;
        let task = Task::new(self.unused_id(), draft, &*self.clock);
        debug!(task_id = %task.id(), "task created");
        self.tasks.push(task.clone());
        self.commit(&StoreEvent::Created(task.id().clone()))?;
        Ok(task)
    }

    /// Applies `patch` to the task with identifier `id` and persists the list.
    ///
    /// Returns `Ok(None)` without writing anything when no task has that
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotReady`] before [`TaskStore::load`], or a
    /// persistence error after the task has been updated in memory.
    pub fn update(&mut self, id: &TaskId, patch: TaskPatch) -> TaskStoreResult<Option<Task>> {
        self.ensure_ready()?;
        let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) else {
            debug!(task_id = %id, "update ignored, task not found");
            return Ok(None);
        };
        task.apply(patch, &*self.clock);
        let updated = task.clone();
        debug!(task_id = %id, "task updated");
        self.commit(&StoreEvent::Updated(id.clone()))?;
        Ok(Some(updated))
    }

    /// Changes only the status of a task.
    ///
    /// # Errors
    ///
    /// See [`TaskStore::update`].
    pub fn set_status(&mut self, id: &TaskId, status: TaskStatus) -> TaskStoreResult<Option<Task>> {
        self.update(id, TaskPatch::new().with_status(status))
    }

    /// Removes the task with identifier `id` and persists the list.
    ///
    /// Returns the removed task, or `Ok(None)` without writing anything when
    /// no task has that identifier, so repeated deletes are harmless.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotReady`] before [`TaskStore::load`], or a
    /// persistence error after the task has been removed in memory.
    pub fn delete(&mut self, id: &TaskId) -> TaskStoreResult<Option<Task>> {
        self.ensure_ready()?;
        let Some(position) = self.tasks.iter().position(|task| task.id() == id) else {
            debug!(task_id = %id, "delete ignored, task not found");
            return Ok(None);
        };
        let removed = self.tasks.remove(position);
        debug!(task_id = %id, "task deleted");
        self.commit(&StoreEvent::Deleted(id.clone()))?;
        Ok(Some(removed))
    }

    /// Writes the current list to the slot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotReady`] before [`TaskStore::load`], or the
    /// persistence error.
    pub fn flush(&self) -> TaskStoreResult<()> {
        self.ensure_ready()?;
        self.persist()
    }

    /// Returns the tasks matching `filters`.
    #[must_use]
    pub fn filtered(&self, filters: &TaskFilters) -> Vec<Task> {
        filter_tasks(&self.tasks, filters)
    }

    /// Returns task counts as of the clock's current local date.
    #[must_use]
    pub fn stats(&self) -> TaskStats {
        task_stats(&self.tasks, self.today())
    }

    /// Returns the distinct non-empty categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        distinct_categories(&self.tasks)
    }

    /// Returns the clock's current local calendar date.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }

    /// Registers a listener called after every load and mutation with the
    /// event and the current list.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent, &[Task]) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` when it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(registered, _)| *registered != id);
        self.listeners.len() != before
    }

    const fn ensure_ready(&self) -> TaskStoreResult<()> {
        if self.ready {
            Ok(())
        } else {
            Err(TaskStoreError::NotReady)
        }
    }

    fn unused_id(&self) -> TaskId {
        loop {
            let candidate = TaskId::generate();
            if self.get(&candidate).is_none() {
                return candidate;
            }
        }
    }

    /// Listeners see the in-memory change even when the write fails.
    fn commit(&mut self, event: &StoreEvent) -> TaskStoreResult<()> {
        let written = self.persist();
        self.notify(event);
        written
    }

    fn persist(&self) -> TaskStoreResult<()> {
        let slot_key = self.config.slot_key();
        let blob = encode_tasks(&self.tasks, self.config.pretty_json()).map_err(|err| {
            error!(slot = slot_key, error = %err, "failed to encode tasks");
            TaskStoreError::Encode(Arc::new(err))
        })?;
        self.slot.write(&blob).map_err(|err| {
            error!(slot = slot_key, error = %err, "failed to persist tasks");
            TaskStoreError::from(err)
        })
    }

    fn notify(&mut self, event: &StoreEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event, &self.tasks);
        }
    }
}

/// Rebuilds tasks from stored records, repairing inverted timestamps.
fn restore_tasks(records: Vec<PersistedTaskData>, slot_key: &str) -> Vec<Task> {
    let repaired = records
        .iter()
        .filter(|record| record.has_inverted_timestamps())
        .count();
    if repaired > 0 {
        warn!(
            slot = slot_key,
            repaired, "persisted tasks were updated before creation, clamping updatedAt"
        );
    }
    records.into_iter().map(Task::from_persisted).collect()
}

/// Keeps the first task for each identifier.
fn dedupe_by_id(tasks: Vec<Task>, slot_key: &str) -> Vec<Task> {
    let mut seen = HashSet::with_capacity(tasks.len());
    let before = tasks.len();
    let unique: Vec<Task> = tasks
        .into_iter()
        .filter(|task| seen.insert(task.id().clone()))
        .collect();
    if unique.len() != before {
        warn!(
            slot = slot_key,
            dropped = before - unique.len(),
            "persisted tasks repeat identifiers, keeping first occurrence"
        );
    }
    unique
}
