//! In-memory persisted slot.

use std::sync::{Arc, RwLock};

use crate::task::ports::{TaskSlot, TaskSlotError, TaskSlotResult};

/// Thread-safe in-memory slot.
///
/// Clones share the same cell, so a test can keep a handle and inspect what
/// the store wrote.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskSlot {
    contents: Arc<RwLock<Option<String>>>,
}

impl InMemoryTaskSlot {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot that already holds `contents`.
    #[must_use]
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Arc::new(RwLock::new(Some(contents.into()))),
        }
    }

    /// Returns a copy of the stored blob, if any.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSlotError::Unavailable`] when the cell lock is poisoned.
    pub fn contents(&self) -> TaskSlotResult<Option<String>> {
        self.read()
    }
}

impl TaskSlot for InMemoryTaskSlot {
    fn read(&self) -> TaskSlotResult<Option<String>> {
        let contents = self
            .contents
            .read()
            .map_err(|err| TaskSlotError::Unavailable(err.to_string()))?;
        Ok(contents.clone())
    }

    fn write(&self, contents: &str) -> TaskSlotResult<()> {
        let mut cell = self
            .contents
            .write()
            .map_err(|err| TaskSlotError::Unavailable(err.to_string()))?;
        *cell = Some(contents.to_owned());
        Ok(())
    }
}
