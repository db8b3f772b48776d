//! Task list filtering.

use crate::task::domain::{Task, TaskPriority, TaskStatus};
use serde::de::{self, IntoDeserializer};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Wildcard token accepted by [`FieldFilter`] parsing.
const WILDCARD: &str = "all";

/// Exact-match criterion on an enumerated task field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldFilter<T> {
    /// Matches every value.
    All,
    /// Matches only the given value.
    Only(T),
}

impl<T> Default for FieldFilter<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> FieldFilter<T> {
    /// Returns `true` when `value` satisfies the criterion.
    #[must_use]
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }
}

/// Error returned when a filter string names no known value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown filter value: {0}")]
pub struct ParseFieldFilterError(pub String);

impl<T> FieldFilter<T>
where
    T: for<'a> TryFrom<&'a str>,
{
    /// Parses a UI filter value, where `all` is the wildcard.
    ///
    /// # Errors
    ///
    /// Returns [`ParseFieldFilterError`] when the value is neither the
    /// wildcard nor a valid field value.
    pub fn parse(value: &str) -> Result<Self, ParseFieldFilterError> {
        if value.trim().eq_ignore_ascii_case(WILDCARD) {
            return Ok(Self::All);
        }
        T::try_from(value)
            .map(Self::Only)
            .map_err(|_| ParseFieldFilterError(value.to_owned()))
    }
}

impl<T: Serialize> Serialize for FieldFilter<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::All => serializer.serialize_str(WILDCARD),
            Self::Only(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T> Deserialize<'de> for FieldFilter<T>
where
    T: de::DeserializeOwned,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.trim().is_empty() || raw.trim().eq_ignore_ascii_case(WILDCARD) {
            return Ok(Self::All);
        }
        let value_deserializer: de::value::StringDeserializer<D::Error> = raw.into_deserializer();
        T::deserialize(value_deserializer).map(Self::Only)
    }
}

/// Filter criteria for a task list.
///
/// All criteria are combined with logical AND. The default value matches
/// every task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskFilters {
    search: String,
    status: FieldFilter<TaskStatus>,
    priority: FieldFilter<TaskPriority>,
    category: String,
}

impl TaskFilters {
    /// Creates filters that match every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the case-insensitive search text matched against title and
    /// description.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Restricts results to a status.
    #[must_use]
    pub fn with_status(mut self, status: FieldFilter<TaskStatus>) -> Self {
        self.status = status;
        self
    }

    /// Restricts results to a priority.
    #[must_use]
    pub fn with_priority(mut self, priority: FieldFilter<TaskPriority>) -> Self {
        self.priority = priority;
        self
    }

    /// Restricts results to an exact category label. An empty label matches
    /// every task.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Returns the search text.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Returns the status criterion.
    #[must_use]
    pub const fn status(&self) -> FieldFilter<TaskStatus> {
        self.status
    }

    /// Returns the priority criterion.
    #[must_use]
    pub const fn priority(&self) -> FieldFilter<TaskPriority> {
        self.priority
    }

    /// Returns the category criterion.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns `true` when every criterion is a wildcard.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.search.is_empty()
            && self.status == FieldFilter::All
            && self.priority == FieldFilter::All
            && self.category.is_empty()
    }
}

/// Returns the tasks matching `filters`, preserving input order.
#[must_use]
pub fn filter_tasks(tasks: &[Task], filters: &TaskFilters) -> Vec<Task> {
    let needle = filters.search.to_lowercase();
    tasks
        .iter()
        .filter(|task| {
            matches_search(task, &needle)
                && filters.status.matches(&task.status())
                && filters.priority.matches(&task.priority())
                && (filters.category.is_empty() || task.category() == filters.category)
        })
        .cloned()
        .collect()
}

/// `needle` must already be lowercased.
fn matches_search(task: &Task, needle: &str) -> bool {
    needle.is_empty()
        || task.title().to_lowercase().contains(needle)
        || task.description().to_lowercase().contains(needle)
}
