//! Task management for Taskboard.
//!
//! The module keeps one authoritative task list, mirrors it to a single
//! persisted slot, and answers filter and statistics queries over it. It
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Pure list queries in [`query`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The store service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod query;
pub mod services;
