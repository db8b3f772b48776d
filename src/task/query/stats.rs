//! Aggregate task counts.

use crate::task::domain::{Task, TaskStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Summary counts over a task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    /// Number of tasks.
    pub total: usize,
    /// Tasks with status `completed`.
    pub completed: usize,
    /// Tasks with status `in-progress`.
    pub in_progress: usize,
    /// Tasks with status `todo`.
    pub todo: usize,
    /// Incomplete tasks due strictly before the evaluation date.
    pub overdue: usize,
}

/// Counts tasks by status and overdue state as of `today`.
#[must_use]
pub fn task_stats(tasks: &[Task], today: NaiveDate) -> TaskStats {
    tasks.iter().fold(TaskStats::default(), |mut stats, task| {
        stats.total += 1;
        match task.status() {
            TaskStatus::Todo => stats.todo += 1,
            TaskStatus::InProgress => stats.in_progress += 1,
            TaskStatus::Completed => stats.completed += 1,
        }
        if task.is_overdue(today) {
            stats.overdue += 1;
        }
        stats
    })
}
