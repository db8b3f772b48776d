//! Step definitions for task board behaviour scenarios.

pub mod then;
pub mod when;
pub mod world;
