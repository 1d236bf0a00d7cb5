//! Mock implementations of port traits
//!
//! In-memory doubles that record every interaction for later assertions.

use std::collections::HashSet;
use std::sync::RwLock;

use crate::domain::entities::UserId;
use crate::domain::ports::{Notifier, UserDirectory};

// ============================================================================
// Mock User Directory
// ============================================================================

/// User directory with a configurable set of active users.
/// Anyone not added with `with_active_user` is inactive.
#[derive(Default)]
pub struct MockUserDirectory {
    active: RwLock<HashSet<UserId>>,
    lookups: RwLock<Vec<UserId>>,
}

impl MockUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an active user
    pub fn with_active_user(self, user_id: &str) -> Self {
        self.active.write().unwrap().insert(UserId::from(user_id));
        self
    }

    pub fn deactivate(&self, user_id: &UserId) {
        self.active.write().unwrap().remove(user_id);
    }

    /// Every user id that was looked up, in call order
    pub fn lookups(&self) -> Vec<UserId> {
        self.lookups.read().unwrap().clone()
    }
}

impl UserDirectory for MockUserDirectory {
    fn is_user_active(&self, user_id: &UserId) -> bool {
        self.lookups.write().unwrap().push(user_id.clone());
        self.active.read().unwrap().contains(user_id)
    }
}

// ============================================================================
// Recording Notifier
// ============================================================================

/// Notifier that records every message instead of delivering it
#[derive(Default)]
pub struct RecordingNotifier {
    sent: RwLock<Vec<(UserId, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All `(user, message)` pairs sent so far, in order
    pub fn sent(&self) -> Vec<(UserId, String)> {
        self.sent.read().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.sent.read().unwrap().len()
    }

    /// Assert that exactly one notification was sent and that it matches
    pub fn assert_single(&self, user_id: &str, message: &str) {
        let sent = self.sent();
        assert_eq!(
            sent,
            vec![(UserId::from(user_id), message.to_string())],
            "expected exactly one notification"
        );
    }

    pub fn assert_none(&self) {
        assert!(
            self.sent().is_empty(),
            "expected no notifications, got {:?}",
            self.sent()
        );
    }

    pub fn clear(&self) {
        self.sent.write().unwrap().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify_user(&self, user_id: &UserId, message: &str) {
        self.sent
            .write()
            .unwrap()
            .push((user_id.clone(), message.to_string()));
    }
}
