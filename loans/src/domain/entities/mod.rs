//! Domain entities
//!
//! Value types shared by the loan manager, its ports and the desk front end.

pub mod catalog;
pub mod ids;
pub mod loan;

pub use catalog::{CatalogEntry, CatalogSnapshot};
pub use ids::{TitleId, UserId};
pub use loan::{LateFeeQuery, Loan};
