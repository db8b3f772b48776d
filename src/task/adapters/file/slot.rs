//! Persisted slot stored as a JSON file.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::fmt;
use std::io::ErrorKind;

use crate::task::{
    ports::{TaskSlot, TaskSlotError, TaskSlotResult},
    services::TaskStoreConfig,
};

const FILE_EXTENSION: &str = "json";

/// Slot stored as `<key>.json` inside a directory.
///
/// The directory is opened once as a capability; the slot never touches
/// paths outside it. Writes land in a temporary sibling first and are then
/// renamed over the slot file, so readers never observe a partial blob.
pub struct FileTaskSlot {
    dir: Dir,
    file_name: String,
    temp_name: String,
}

impl FileTaskSlot {
    /// Opens the slot named `key` in `dir_path`, creating the directory when
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSlotError::InvalidKey`] when `key` is empty or contains
    /// path separators, or [`TaskSlotError::Io`] when the directory cannot be
    /// created or opened.
    pub fn open(dir_path: &Utf8Path, key: &str) -> TaskSlotResult<Self> {
        validate_key(key)?;
        Dir::create_ambient_dir_all(dir_path, ambient_authority()).map_err(TaskSlotError::io)?;
        let dir = Dir::open_ambient_dir(dir_path, ambient_authority()).map_err(TaskSlotError::io)?;
        let file_name = format!("{key}.{FILE_EXTENSION}");
        let temp_name = format!("{file_name}.tmp");
        Ok(Self {
            dir,
            file_name,
            temp_name,
        })
    }

    /// Opens the slot named by the configured slot key.
    ///
    /// # Errors
    ///
    /// See [`FileTaskSlot::open`].
    pub fn from_config(dir_path: &Utf8Path, config: &TaskStoreConfig) -> TaskSlotResult<Self> {
        Self::open(dir_path, config.slot_key())
    }

    /// Returns the slot file name relative to the directory.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl fmt::Debug for FileTaskSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileTaskSlot")
            .field("file_name", &self.file_name)
            .finish_non_exhaustive()
    }
}

fn validate_key(key: &str) -> TaskSlotResult<()> {
    let is_valid = !key.trim().is_empty()
        && key != "."
        && key != ".."
        && !key.contains(['/', '\\'])
        && !key.chars().any(char::is_control);
    if is_valid {
        Ok(())
    } else {
        Err(TaskSlotError::InvalidKey(key.to_owned()))
    }
}

impl TaskSlot for FileTaskSlot {
    fn read(&self) -> TaskSlotResult<Option<String>> {
        match self.dir.read_to_string(&self.file_name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(TaskSlotError::io(err)),
        }
    }

    fn write(&self, contents: &str) -> TaskSlotResult<()> {
        self.dir
            .write(&self.temp_name, contents)
            .map_err(TaskSlotError::io)?;
        self.dir
            .rename(&self.temp_name, &self.dir, &self.file_name)
            .map_err(TaskSlotError::io)
    }
}
