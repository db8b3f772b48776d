//! Distinct category extraction.

use crate::task::domain::Task;
use std::collections::HashSet;

/// Returns the non-empty category labels in first-seen order.
#[must_use]
pub fn distinct_categories(tasks: &[Task]) -> Vec<String> {
    let mut seen = HashSet::new();
    tasks
        .iter()
        .map(Task::category)
        .filter(|category| !category.is_empty() && seen.insert(*category))
        .map(str::to_owned)
        .collect()
}
