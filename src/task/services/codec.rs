//! Encoding of the persisted task list.

use crate::task::domain::{PersistedTaskData, Task};

/// Serializes `tasks` as a JSON array.
///
/// # Errors
///
/// Returns the serializer error; the task types themselves always encode.
pub fn encode_tasks(tasks: &[Task], pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(tasks)
    } else {
        serde_json::to_string(tasks)
    }
}

/// Parses a persisted JSON array of tasks. A `null` blob decodes as empty.
///
/// # Errors
///
/// Returns the parser error when the blob is not a task array.
pub fn decode_tasks(blob: &str) -> serde_json::Result<Vec<Task>> {
    let records = decode_records(blob)?;
    Ok(records.into_iter().map(Task::from_persisted).collect())
}

/// Parses the stored records without reconstructing tasks.
pub(super) fn decode_records(blob: &str) -> serde_json::Result<Vec<PersistedTaskData>> {
    let records: Option<Vec<PersistedTaskData>> = serde_json::from_str(blob)?;
    Ok(records.unwrap_or_default())
}
