//! Change notifications emitted by the task store.

use crate::task::domain::TaskId;

/// State change reported to store subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// The list was (re)loaded from the slot.
    Loaded,
    /// A task was created.
    Created(TaskId),
    /// A task was updated.
    Updated(TaskId),
    /// A task was deleted.
    Deleted(TaskId),
}

impl StoreEvent {
    /// Returns the affected task, if the event concerns a single task.
    #[must_use]
    pub const fn task_id(&self) -> Option<&TaskId> {
        match self {
            Self::Loaded => None,
            Self::Created(id) | Self::Updated(id) | Self::Deleted(id) => Some(id),
        }
    }
}

/// Handle returned by [`TaskStore::subscribe`](super::TaskStore::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(super) u64);
