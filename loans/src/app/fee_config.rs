//! Late fee configuration constants
//!
//! Rates, multipliers and the fixed notification texts used by the loan manager.

use crate::domain::entities::{LateFeeQuery, TitleId};
use crate::error::LoanError;

/// Fee charged per overdue day before modifiers
pub const BASE_LATE_FEE_PER_DAY: f64 = 0.50;

/// Per-day rate multiplier for best-selling titles
pub const BEST_SELLER_MULTIPLIER: f64 = 1.5;

/// Multiplier applied to the total for premium members (20% off)
pub const PREMIUM_MEMBER_MULTIPLIER: f64 = 0.8;

/// Sent when an inactive user tries to borrow
pub const INACTIVE_ACCOUNT_MESSAGE: &str = "Your account is not active.";

/// Notification text for a successful borrow
pub fn borrowed_message(title: &TitleId) -> String {
    format!("You have borrowed the book: {}", title)
}

/// Notification text for a successful return
pub fn returned_message(title: &TitleId) -> String {
    format!("You have returned the book: {}", title)
}

/// Compute the late fee for a query.
///
/// `days * base * (best seller ? 1.5 : 1) * (premium ? 0.8 : 1)`, evaluated
/// left to right. The negative-days check runs before anything else.
pub fn compute_late_fee(query: &LateFeeQuery) -> Result<f64, LoanError> {
    if query.overdue_days < 0 {
        return Err(LoanError::NegativeOverdueDays(query.overdue_days));
    }

    let mut fee = query.overdue_days as f64 * BASE_LATE_FEE_PER_DAY;
    if query.is_best_seller {
        fee *= BEST_SELLER_MULTIPLIER;
    }
    if query.is_premium_member {
        fee *= PREMIUM_MEMBER_MULTIPLIER;
    }

    Ok(fee)
}
