//! Application services for task management.

mod codec;
mod config;
mod events;
mod store;

pub use codec::{decode_tasks, encode_tasks};
pub use config::{DEFAULT_SLOT_KEY, TaskStoreConfig};
pub use events::{StoreEvent, SubscriptionId};
pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
