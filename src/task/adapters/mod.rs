//! Adapter implementations for the task ports.
//!
//! - [`memory`]: process-local slot for tests and embedding
//! - [`file`]: one JSON file per slot key in a directory
//! - [`clock`]: manually driven clock for deterministic timestamps

pub mod clock;
pub mod file;
pub mod memory;
