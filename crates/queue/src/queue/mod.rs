//! Ordered, name-indexed task queue.
//!
//! Split into focused submodules:
//! - `core`: TaskQueue struct, constructor, locking and read accessors
//! - `insert`: head/tail/anchor-relative insertion and in-place replacement
//! - `remove`: removal and reset
//! - `execution`: in-order draining with partial-drain on failure

mod core;
mod execution;
mod insert;
mod remove;

pub use self::core::TaskQueue;
