//! User directory port trait
//!
//! Answers whether a user may currently borrow.

use crate::domain::entities::UserId;

/// Port trait for user eligibility lookups
pub trait UserDirectory: Send + Sync {
    /// Whether the user's account is active.
    ///
    /// Implementations must not mutate anything the loan manager can observe.
    fn is_user_active(&self, user_id: &UserId) -> bool;
}
