//! Loan manager service
//!
//! Owns the catalog (title -> available copies) and the loan records
//! (title -> current borrower). Eligibility checks go through the
//! `UserDirectory` port and user feedback through the `Notifier` port.
//!
//! Only one borrower is tracked per title. A second successful borrow of the
//! same title, while the first is still out, replaces the recorded borrower.

use std::collections::HashMap;
use std::sync::Arc;

use super::fee_config::{
    borrowed_message, compute_late_fee, returned_message, INACTIVE_ACCOUNT_MESSAGE,
};
use crate::domain::entities::{CatalogEntry, CatalogSnapshot, LateFeeQuery, Loan, TitleId, UserId};
use crate::domain::ports::{Notifier, UserDirectory};
use crate::error::LoanError;

/// Service tracking copy inventory and loans
pub struct LoanManager<UD, N>
where
    UD: UserDirectory,
    N: Notifier,
{
    users: Arc<UD>,
    notifier: Arc<N>,
    available: HashMap<TitleId, u32>,
    borrowed: HashMap<TitleId, UserId>,
}

impl<UD, N> LoanManager<UD, N>
where
    UD: UserDirectory,
    N: Notifier,
{
    pub fn new(users: Arc<UD>, notifier: Arc<N>) -> Self {
        Self {
            users,
            notifier,
            available: HashMap::new(),
            borrowed: HashMap::new(),
        }
    }

    // ========== Catalog ==========

    /// Register a title, replacing any previous copy count
    pub fn add_book(&mut self, title: TitleId, copies: u32) {
        tracing::debug!(title = %title, copies, "Registered title");
        self.available.insert(title, copies);
    }

    /// Available copies of a title, 0 if it was never registered
    pub fn available_copies(&self, title: &TitleId) -> u32 {
        self.available.get(title).copied().unwrap_or(0)
    }

    // ========== Loans ==========

    /// Try to lend one copy of `title` to `user_id`.
    ///
    /// Returns `false` without notifying when no copy is available, and
    /// `false` with an inactivity notice when the user is not active.
    pub fn borrow_book(&mut self, title: &TitleId, user_id: &UserId) -> bool {
        let copies = match self.available.get_mut(title) {
            Some(copies) if *copies > 0 => copies,
            _ => {
                tracing::debug!(title = %title, user_id = %user_id, "Borrow rejected: no copies available");
                return false;
            }
        };

        if !self.users.is_user_active(user_id) {
            tracing::debug!(title = %title, user_id = %user_id, "Borrow rejected: inactive account");
            self.notifier.notify_user(user_id, INACTIVE_ACCOUNT_MESSAGE);
            return false;
        }

        *copies -= 1;
        let remaining = *copies;
        if let Some(previous) = self.borrowed.insert(title.clone(), user_id.clone()) {
            tracing::debug!(title = %title, previous = %previous, "Replaced existing borrower");
        }

        tracing::info!(title = %title, user_id = %user_id, remaining, "Book borrowed");
        self.notifier.notify_user(user_id, &borrowed_message(title));
        true
    }

    /// Take back `title` from `user_id`.
    ///
    /// Returns `false`, changing nothing, unless `user_id` is the recorded
    /// borrower of `title`.
    pub fn return_book(&mut self, title: &TitleId, user_id: &UserId) -> bool {
        match self.borrowed.get(title) {
            Some(borrower) if borrower == user_id => {}
            Some(_) => {
                tracing::debug!(title = %title, user_id = %user_id, "Return rejected: borrowed by another user");
                return false;
            }
            None => {
                tracing::debug!(title = %title, user_id = %user_id, "Return rejected: no active loan");
                return false;
            }
        }

        self.borrowed.remove(title);
        let copies = self.available.entry(title.clone()).or_insert(0);
        *copies = copies.saturating_add(1);

        tracing::info!(title = %title, user_id = %user_id, remaining = *copies, "Book returned");
        self.notifier.notify_user(user_id, &returned_message(title));
        true
    }

    /// Current borrower of a title, if it is out on loan
    pub fn borrower_of(&self, title: &TitleId) -> Option<&UserId> {
        self.borrowed.get(title)
    }

    pub fn is_borrowed(&self, title: &TitleId) -> bool {
        self.borrowed.contains_key(title)
    }

    /// All outstanding loans, in no particular order
    pub fn loans(&self) -> impl Iterator<Item = Loan> + '_ {
        self.borrowed.iter().map(|(title, borrower)| Loan {
            title: title.clone(),
            borrower: borrower.clone(),
        })
    }

    /// Sorted copy of the catalog and loan records
    pub fn snapshot(&self) -> CatalogSnapshot {
        let mut titles: Vec<CatalogEntry> = self
            .available
            .iter()
            .map(|(title, copies)| CatalogEntry {
                title: title.clone(),
                available_copies: *copies,
            })
            .collect();
        titles.sort_by(|a, b| a.title.cmp(&b.title));

        let mut loans: Vec<Loan> = self.loans().collect();
        loans.sort_by(|a, b| a.title.cmp(&b.title));

        CatalogSnapshot { titles, loans }
    }

    // ========== Fees ==========

    /// Late fee for `overdue_days`, adjusted for best sellers and premium members.
    ///
    /// Fails with `LoanError::NegativeOverdueDays` before any computation
    /// when `overdue_days` is negative.
    pub fn calculate_dynamic_late_fee(
        &self,
        overdue_days: i64,
        is_best_seller: bool,
        is_premium_member: bool,
    ) -> Result<f64, LoanError> {
        self.late_fee(&LateFeeQuery {
            overdue_days,
            is_best_seller,
            is_premium_member,
        })
    }

    pub fn late_fee(&self, query: &LateFeeQuery) -> Result<f64, LoanError> {
        let fee = compute_late_fee(query)?;
        tracing::debug!(
            overdue_days = query.overdue_days,
            best_seller = query.is_best_seller,
            premium = query.is_premium_member,
            fee,
            "Computed late fee"
        );
        Ok(fee)
    }
}
