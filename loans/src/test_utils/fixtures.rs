//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use std::sync::Arc;

use super::mocks::{MockUserDirectory, RecordingNotifier};
use crate::app::LoanManager;
use crate::domain::entities::{TitleId, UserId};

pub const ACTIVE_USER: &str = "user_active";
pub const INACTIVE_USER: &str = "user_inactive";
pub const SEEDED_TITLE: &str = "book1";
pub const SEEDED_COPIES: u32 = 10;

/// The title every seeded manager starts with
pub fn test_title() -> TitleId {
    TitleId::from(SEEDED_TITLE)
}

/// A title that is never registered
pub fn unknown_title() -> TitleId {
    TitleId::from("book25")
}

/// A user the mock directory reports as active
pub fn test_user() -> UserId {
    UserId::from(ACTIVE_USER)
}

/// A user the mock directory reports as inactive
pub fn inactive_user() -> UserId {
    UserId::from(INACTIVE_USER)
}

/// Test doubles plus a manager wired to them
pub struct ManagerHarness {
    pub manager: LoanManager<MockUserDirectory, RecordingNotifier>,
    pub users: Arc<MockUserDirectory>,
    pub notifier: Arc<RecordingNotifier>,
}

/// Manager with an empty catalog and only `ACTIVE_USER` active
pub fn empty_manager() -> ManagerHarness {
    let users = Arc::new(MockUserDirectory::new().with_active_user(ACTIVE_USER));
    let notifier = Arc::new(RecordingNotifier::new());
    let manager = LoanManager::new(users.clone(), notifier.clone());

    ManagerHarness {
        manager,
        users,
        notifier,
    }
}

/// Manager with `book1` registered at 10 copies
pub fn seeded_manager() -> ManagerHarness {
    let mut harness = empty_manager();
    harness.manager.add_book(test_title(), SEEDED_COPIES);
    harness
}
