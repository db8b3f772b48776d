//! Taskboard: a personal task list with local persistence.
//!
//! This crate provides the data-access core behind a task-management UI:
//! an owned store that creates, updates and deletes tasks, mirrors the whole
//! list to a single persisted slot, and answers filter and statistics
//! queries. Presentation is left to the embedding application, which calls
//! the store mutators and renders the query results.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Task records and input types with no infrastructure
//!   dependencies
//! - **Ports**: The persisted slot contract
//! - **Adapters**: In-memory and file-backed slots, plus a manual clock
//!
//! # Modules
//!
//! - [`task`]: Task store, queries and persistence
//! - [`logging`]: Tracing subscriber setup

pub mod logging;
pub mod task;
