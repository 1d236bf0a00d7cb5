//! Loan domain entities
//!
//! A loan ties a title to the user currently holding it. Late fees are
//! computed from a `LateFeeQuery` rather than from a stored loan.

use serde::{Deserialize, Serialize};

use super::{TitleId, UserId};

/// An outstanding loan record
///
/// The manager keeps at most one of these per title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub title: TitleId,
    pub borrower: UserId,
}

/// Inputs to the late fee calculation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LateFeeQuery {
    /// Days past the due date. Negative values are rejected.
    pub overdue_days: i64,
    pub is_best_seller: bool,
    pub is_premium_member: bool,
}

impl LateFeeQuery {
    pub fn new(overdue_days: i64) -> Self {
        Self {
            overdue_days,
            ..Self::default()
        }
    }

    pub fn best_seller(mut self) -> Self {
        self.is_best_seller = true;
        self
    }

    pub fn premium_member(mut self) -> Self {
        self.is_premium_member = true;
        self
    }
}
