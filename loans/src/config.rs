use std::env;

use crate::domain::entities::{TitleId, UserId};
use crate::error::ConfigError;

#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Users the static directory reports as active (`LOANS_ACTIVE_USERS`)
    pub active_users: Vec<UserId>,
    /// Titles registered at start-up (`LOANS_SEED_CATALOG`, `title=copies,...`)
    pub seed_catalog: Vec<(TitleId, u32)>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_values(
            env::var("LOANS_ACTIVE_USERS").ok().as_deref(),
            env::var("LOANS_SEED_CATALOG").ok().as_deref(),
        )
    }

    fn from_values(
        active_users: Option<&str>,
        seed_catalog: Option<&str>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            active_users: split_list(active_users.unwrap_or_default())
                .map(UserId::from)
                .collect(),
            seed_catalog: split_list(seed_catalog.unwrap_or_default())
                .map(parse_seed_entry)
                .collect::<Result<_, _>>()?,
        })
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|item| !item.is_empty())
}

fn parse_seed_entry(entry: &str) -> Result<(TitleId, u32), ConfigError> {
    let invalid = |message: String| ConfigError::InvalidValue {
        key: "LOANS_SEED_CATALOG",
        message,
    };

    let (title, copies) = entry
        .split_once('=')
        .ok_or_else(|| invalid(format!("'{}' is not a title=copies pair", entry)))?;
    let title = title.trim();
    if title.is_empty() {
        return Err(invalid(format!("'{}' has an empty title", entry)));
    }
    let copies: u32 = copies
        .trim()
        .parse()
        .map_err(|e| invalid(format!("'{}': {}", entry, e)))?;

    Ok((TitleId::from(title), copies))
}
