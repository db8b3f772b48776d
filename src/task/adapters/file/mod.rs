//! Filesystem adapter implementations.

mod slot;

pub use slot::FileTaskSlot;
