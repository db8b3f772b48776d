//! Persisted slot port: a single named location holding the serialized task
//! list.

use std::sync::Arc;
use thiserror::Error;

/// Result type for slot operations.
pub type TaskSlotResult<T> = Result<T, TaskSlotError>;

/// Storage for one serialized task list.
///
/// Implementations store and return the blob verbatim; encoding is the
/// store's concern.
pub trait TaskSlot: Send + Sync {
    /// Reads the stored blob.
    ///
    /// Returns `Ok(None)` when nothing has been written yet.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSlotError`] when the underlying storage cannot be read.
    fn read(&self) -> TaskSlotResult<Option<String>>;

    /// Replaces the stored blob.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSlotError`] when the underlying storage rejects the
    /// write.
    fn write(&self, contents: &str) -> TaskSlotResult<()>;
}

/// Errors returned by slot implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskSlotError {
    /// The slot key cannot name a storage location.
    #[error("invalid slot key '{0}'")]
    InvalidKey(String),

    /// The storage backing the slot is unusable.
    #[error("slot storage unavailable: {0}")]
    Unavailable(String),

    /// Filesystem failure.
    #[error("slot I/O error: {0}")]
    Io(Arc<std::io::Error>),
}

impl TaskSlotError {
    /// Wraps an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}
