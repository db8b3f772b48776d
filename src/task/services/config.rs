//! Task store configuration.

use serde::{Deserialize, Serialize};

/// Slot key used when none is configured.
pub const DEFAULT_SLOT_KEY: &str = "tasks";

/// Configuration for [`TaskStore`](super::TaskStore) and the slots it
/// writes to.
///
/// # Examples
///
/// ```
/// use taskboard::task::services::TaskStoreConfig;
///
/// let config = TaskStoreConfig::default();
/// assert_eq!(config.slot_key(), "tasks");
/// assert!(!config.pretty_json());
///
/// let readable = TaskStoreConfig::readable();
/// assert!(readable.pretty_json());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskStoreConfig {
    slot_key: String,
    pretty_json: bool,
}

impl Default for TaskStoreConfig {
    fn default() -> Self {
        Self {
            slot_key: DEFAULT_SLOT_KEY.to_owned(),
            pretty_json: false,
        }
    }
}

impl TaskStoreConfig {
    /// Creates a configuration that writes indented JSON.
    ///
    /// Useful when the slot file is meant to be inspected by hand.
    #[must_use]
    pub fn readable() -> Self {
        Self {
            pretty_json: true,
            ..Self::default()
        }
    }

    /// Sets the slot key.
    #[must_use]
    pub fn with_slot_key(mut self, slot_key: impl Into<String>) -> Self {
        self.slot_key = slot_key.into();
        self
    }

    /// Sets whether the persisted list is indented.
    #[must_use]
    pub fn with_pretty_json(mut self, pretty_json: bool) -> Self {
        self.pretty_json = pretty_json;
        self
    }

    /// Returns the slot key.
    #[must_use]
    pub fn slot_key(&self) -> &str {
        &self.slot_key
    }

    /// Returns whether the persisted list is indented.
    #[must_use]
    pub const fn pretty_json(&self) -> bool {
        self.pretty_json
    }
}
