//! Domain ports (traits)
//!
//! Port traits define the collaborators the loan manager depends on.
//! Adapters provide concrete implementations of these traits.

pub mod notifier;
pub mod user_directory;

pub use notifier::Notifier;
pub use user_directory::UserDirectory;
