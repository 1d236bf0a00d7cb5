//! Log notifier
//!
//! Delivers notifications as tracing events and keeps them in an outbox
//! until the desk drains and prints them.

use std::sync::{PoisonError, RwLock};

use crate::domain::entities::UserId;
use crate::domain::ports::Notifier;

#[derive(Debug, Default)]
pub struct LogNotifier {
    outbox: RwLock<Vec<(UserId, String)>>,
}

impl LogNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every pending notification, oldest first
    pub fn drain(&self) -> Vec<(UserId, String)> {
        let mut outbox = self.outbox.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *outbox)
    }

    pub fn pending(&self) -> usize {
        self.outbox
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Notifier for LogNotifier {
    fn notify_user(&self, user_id: &UserId, message: &str) {
        tracing::info!(user_id = %user_id, text = message, "Notification delivered");
        self.outbox
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((user_id.clone(), message.to_string()));
    }
}
