//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! The doubles keep their state behind `RwLock` so a test can hold one
//! `Arc` while the manager holds another and inspect what happened.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
