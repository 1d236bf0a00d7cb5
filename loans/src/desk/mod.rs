//! Loan desk
//!
//! Line-oriented front end over the loan manager: one command in, a few
//! lines of text out. Notifications raised by a command are printed right
//! after its result.

pub mod parser;

use std::io::{self, BufRead, Write};
use std::sync::Arc;

pub use parser::{help_text, parse_command, DeskCommand};

use crate::adapters::LogNotifier;
use crate::app::LoanManager;
use crate::domain::ports::UserDirectory;

pub struct Desk<UD>
where
    UD: UserDirectory,
{
    manager: LoanManager<UD, LogNotifier>,
    outbox: Arc<LogNotifier>,
}

impl<UD> Desk<UD>
where
    UD: UserDirectory,
{
    pub fn new(users: Arc<UD>, outbox: Arc<LogNotifier>) -> Self {
        Self {
            manager: LoanManager::new(users, outbox.clone()),
            outbox,
        }
    }

    pub fn manager(&self) -> &LoanManager<UD, LogNotifier> {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut LoanManager<UD, LogNotifier> {
        &mut self.manager
    }

    /// Handle one raw input line. Blank lines and `#` comments produce no output.
    pub fn handle_line(&mut self, line: &str) -> Vec<String> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Vec::new();
        }

        match parse_command(line) {
            Ok(command) => self.execute(command),
            Err(e) => {
                tracing::debug!(input = line, error = %e, "Rejected desk input");
                vec![format!("error: {}", e)]
            }
        }
    }

    pub fn execute(&mut self, command: DeskCommand) -> Vec<String> {
        let mut lines = match command {
            DeskCommand::Add { title, copies } => {
                let line = format!("added {} ({} copies)", title, copies);
                self.manager.add_book(title, copies);
                vec![line]
            }
            DeskCommand::Copies { title } => {
                vec![self.manager.available_copies(&title).to_string()]
            }
            DeskCommand::Borrow { title, user_id } => {
                let borrowed = self.manager.borrow_book(&title, &user_id);
                vec![if borrowed { "borrowed" } else { "rejected" }.to_string()]
            }
            DeskCommand::Return { title, user_id } => {
                let returned = self.manager.return_book(&title, &user_id);
                vec![if returned { "returned" } else { "rejected" }.to_string()]
            }
            DeskCommand::Who { title } => vec![self
                .manager
                .borrower_of(&title)
                .map(ToString::to_string)
                .unwrap_or_else(|| "none".to_string())],
            DeskCommand::Fee(query) => match self.manager.late_fee(&query) {
                Ok(fee) => vec![format!("{:.2}", fee)],
                Err(e) => vec![format!("error: {}", e)],
            },
            DeskCommand::Status => match serde_json::to_string(&self.manager.snapshot()) {
                Ok(json) => vec![json],
                Err(e) => vec![format!("error: {}", e)],
            },
            DeskCommand::Help => vec![help_text()],
        };

        lines.extend(
            self.outbox
                .drain()
                .into_iter()
                .map(|(user_id, message)| format!("notify {}: {}", user_id, message)),
        );
        lines
    }

    /// Process every line of `input`, writing results to `output`
    pub fn run<R, W>(&mut self, input: R, mut output: W) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        for line in input.lines() {
            for out in self.handle_line(&line?) {
                writeln!(output, "{}", out)?;
            }
        }
        output.flush()
    }
}
