//! Pure query and aggregation functions over task lists.
//!
//! Every function takes a task slice, never mutates it, and rescans the
//! whole list on each call.

mod categories;
mod filter;
mod stats;

pub use categories::distinct_categories;
pub use filter::{FieldFilter, ParseFieldFilterError, TaskFilters, filter_tasks};
pub use stats::{TaskStats, task_stats};
