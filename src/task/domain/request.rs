//! Input types for creating and updating tasks.

use super::{TaskDomainError, TaskPriority, TaskStatus};
use chrono::NaiveDate;

/// Caller-supplied fields for a new task.
///
/// Identifiers and timestamps are never part of the input; the store
/// generates them. Field values pass through unvalidated unless the caller
/// runs [`NewTask::validate`] at its own boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub(super) title: String,
    pub(super) description: String,
    pub(super) status: TaskStatus,
    pub(super) priority: TaskPriority,
    pub(super) category: String,
    pub(super) due_date: Option<NaiveDate>,
}

impl NewTask {
    /// Creates input with the given title and default values elsewhere:
    /// status `todo`, priority `medium`, no description, category or due
    /// date.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            category: String::new(),
            due_date: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the category label.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the initial status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the category label.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Checks the input before it is submitted to the store.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty after
    /// trimming.
    pub fn validate(self) -> Result<Self, TaskDomainError> {
        if self.title.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(self)
    }
}

/// Partial update for an existing task.
///
/// Only the fields set on the patch are overwritten. An empty patch still
/// refreshes the task's `updated_at` timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub(super) title: Option<String>,
    pub(super) description: Option<String>,
    pub(super) status: Option<TaskStatus>,
    pub(super) priority: Option<TaskPriority>,
    pub(super) category: Option<String>,
    pub(super) due_date: Option<Option<NaiveDate>>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every caller-editable field with the values from `draft`.
    ///
    /// This is the shape produced by an edit form, which always submits the
    /// full field set.
    #[must_use]
    pub fn replace_with(draft: NewTask) -> Self {
        let NewTask {
            title,
            description,
            status,
            priority,
            category,
            due_date,
        } = draft;

        Self {
            title: Some(title),
            description: Some(description),
            status: Some(status),
            priority: Some(priority),
            category: Some(category),
            due_date: Some(due_date),
        }
    }

    /// Overwrites the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Overwrites the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Overwrites the status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Overwrites the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Overwrites the category label.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Overwrites the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(Some(due_date));
        self
    }

    /// Removes the due date.
    #[must_use]
    pub fn clear_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    /// Returns `true` when the patch sets no field.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.category.is_none()
            && self.due_date.is_none()
    }
}
