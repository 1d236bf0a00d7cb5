//! Static user directory
//!
//! Active users come from configuration and never change at runtime.

use std::collections::HashSet;

use crate::domain::entities::UserId;
use crate::domain::ports::UserDirectory;

#[derive(Debug, Clone, Default)]
pub struct StaticUserDirectory {
    active: HashSet<UserId>,
}

impl StaticUserDirectory {
    pub fn new(active: impl IntoIterator<Item = UserId>) -> Self {
        Self {
            active: active.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

impl UserDirectory for StaticUserDirectory {
    fn is_user_active(&self, user_id: &UserId) -> bool {
        self.active.contains(user_id)
    }
}
