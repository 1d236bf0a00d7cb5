//! Application layer
//!
//! Contains the loan manager and the fee rules it applies.

pub mod fee_config;
pub mod loan_service;

pub use fee_config::compute_late_fee;
pub use loan_service::LoanManager;
