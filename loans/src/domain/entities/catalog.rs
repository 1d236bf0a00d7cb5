//! Catalog snapshot
//!
//! Read-only, serializable view of the manager's catalog and loan records.

use serde::{Deserialize, Serialize};

use super::{Loan, TitleId};

/// Available copies for one registered title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub title: TitleId,
    pub available_copies: u32,
}

/// Point-in-time copy of the catalog and the outstanding loans, sorted by title
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub titles: Vec<CatalogEntry>,
    pub loans: Vec<Loan>,
}

impl CatalogSnapshot {
    /// Available copies for a title in this snapshot, 0 when it is absent
    pub fn copies_of(&self, title: &TitleId) -> u32 {
        self.titles
            .iter()
            .find(|entry| &entry.title == title)
            .map(|entry| entry.available_copies)
            .unwrap_or(0)
    }
}
