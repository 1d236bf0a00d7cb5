//! Library loan tracker
//!
//! Tracks per-title copy inventory and the current borrower of each title,
//! notifies users of borrow and return outcomes, and computes overdue fees.
//! Uses hexagonal (ports & adapters) architecture: the loan manager only sees
//! the `UserDirectory` and `Notifier` traits.

pub mod adapters;
pub mod app;
pub mod config;
pub mod desk;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod integration_tests;

pub use app::LoanManager;
pub use domain::entities::{LateFeeQuery, Loan, TitleId, UserId};
pub use domain::ports::{Notifier, UserDirectory};
pub use error::LoanError;
