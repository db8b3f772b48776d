//! Domain model for task management.
//!
//! Tasks are plain records: a title, free-text description and category,
//! a status, a priority and an optional due date. The domain keeps clock
//! access injectable and leaves persistence to the ports.

mod due_date;
mod error;
mod ids;
mod request;
mod task;

pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use request::{NewTask, TaskPatch};
pub use task::{PersistedTaskData, Task, TaskPriority, TaskStatus};
