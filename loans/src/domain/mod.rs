//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Value types for titles, users and loans
//! - `ports`: Trait definitions for the collaborators the loan manager relies on

pub mod entities;
pub mod ports;
