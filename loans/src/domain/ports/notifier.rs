//! Notifier port trait
//!
//! One-way message delivery to a user.

use crate::domain::entities::UserId;

/// Port trait for user notifications
///
/// Fire-and-forget: the loan manager never observes the outcome, so delivery
/// failures are the implementation's concern.
pub trait Notifier: Send + Sync {
    fn notify_user(&self, user_id: &UserId, message: &str);
}
