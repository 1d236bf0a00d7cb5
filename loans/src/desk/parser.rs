//! Desk command parser
//!
//! Parses front-desk text commands like "borrow book1 alice" or "fee 14 premium".

use crate::domain::entities::{LateFeeQuery, TitleId, UserId};
use crate::error::ParseError;

/// Commands accepted by the loan desk
#[derive(Debug, Clone, PartialEq)]
pub enum DeskCommand {
    /// Register a title with a copy count
    Add { title: TitleId, copies: u32 },

    /// Show available copies of a title
    Copies { title: TitleId },

    /// Lend a title to a user
    Borrow { title: TitleId, user_id: UserId },

    /// Take a title back from a user
    Return { title: TitleId, user_id: UserId },

    /// Show who currently holds a title
    Who { title: TitleId },

    /// Quote a late fee
    Fee(LateFeeQuery),

    /// Dump catalog and loans as JSON
    Status,

    /// Get help on available commands
    Help,
}

/// Parse a desk command from one line of input
pub fn parse_command(input: &str) -> Result<DeskCommand, ParseError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ParseError::UnknownCommand("empty input".to_string()));
    }

    let parts: Vec<&str> = input.split_whitespace().collect();
    let command = parts[0].to_lowercase();
    let args = &parts[1..];

    match command.as_str() {
        "add" | "register" => {
            let [title, copies] = require_args::<2>(args, "add (usage: add <title> <copies>)")?;
            let copies: u32 = copies.parse()?;
            Ok(DeskCommand::Add {
                title: TitleId::from(title),
                copies,
            })
        }

        "copies" | "available" | "count" => {
            let [title] = require_args::<1>(args, "copies")?;
            Ok(DeskCommand::Copies {
                title: TitleId::from(title),
            })
        }

        "borrow" | "lend" | "checkout" => {
            let [title, user] = require_args::<2>(args, "borrow (usage: borrow <title> <user>)")?;
            Ok(DeskCommand::Borrow {
                title: TitleId::from(title),
                user_id: UserId::from(user),
            })
        }

        "return" | "checkin" => {
            let [title, user] = require_args::<2>(args, "return (usage: return <title> <user>)")?;
            Ok(DeskCommand::Return {
                title: TitleId::from(title),
                user_id: UserId::from(user),
            })
        }

        "who" | "borrower" => {
            let [title] = require_args::<1>(args, "who")?;
            Ok(DeskCommand::Who {
                title: TitleId::from(title),
            })
        }

        "fee" | "late-fee" => {
            let Some(days) = args.first() else {
                return Err(ParseError::MissingArgument(
                    "fee (usage: fee <days> [bestseller] [premium])".to_string(),
                ));
            };
            let mut query = LateFeeQuery::new(days.parse()?);

            for flag in &args[1..] {
                match flag.to_lowercase().as_str() {
                    "bestseller" | "best-seller" | "bs" => query.is_best_seller = true,
                    "premium" | "member" => query.is_premium_member = true,
                    other => {
                        return Err(ParseError::InvalidArgument(format!(
                            "'{}' (valid: bestseller, premium)",
                            other
                        )))
                    }
                }
            }

            Ok(DeskCommand::Fee(query))
        }

        "status" | "dump" => Ok(DeskCommand::Status),

        "help" | "?" | "commands" => Ok(DeskCommand::Help),

        _ => Err(ParseError::UnknownCommand(command)),
    }
}

/// Take exactly `N` arguments, ignoring any extras
fn require_args<'a, const N: usize>(
    args: &[&'a str],
    usage: &str,
) -> Result<[&'a str; N], ParseError> {
    args.get(..N)
        .and_then(|slice| <[&str; N]>::try_from(slice).ok())
        .ok_or_else(|| ParseError::MissingArgument(usage.to_string()))
}

/// Generate help text for available commands
pub fn help_text() -> String {
    r#"# Loan Desk Commands

## Catalog
- `add <title> <copies>` - Register a title (replaces any previous count)
- `copies <title>` - Show available copies
- `status` - Dump catalog and loans as JSON

## Loans
- `borrow <title> <user>` - Lend one copy to a user
- `return <title> <user>` - Take a copy back from its borrower
- `who <title>` - Show the current borrower

## Fees
- `fee <days>` - Quote a late fee
- `fee <days> bestseller premium` - Quote with modifiers

## Help
- `help` - Show this help message

---
Blank lines and lines starting with `#` are ignored.
"#
    .to_string()
}
