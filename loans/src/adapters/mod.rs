//! Adapters layer
//!
//! Implementations of port traits used by the loan desk binary.

pub mod directory;
pub mod notifier;

pub use directory::StaticUserDirectory;
pub use notifier::LogNotifier;
