//! Interactive command loop.

use super::messages::{self, error_message};
use super::parser::Command;
use crate::error::BookError;
use crate::models::UpcomingBirthday;
use crate::repositories::AddressBook;
use crate::services::{AddOutcome, ContactService};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and keep reading
    Reply(String),
    /// Print the text and stop
    Quit(String),
    /// Nothing to print
    Silent,
}

/// One interactive conversation over an address book.
pub struct Session {
    service: ContactService<AddressBook>,
    today: Option<NaiveDate>,
}

impl Session {
    pub fn new(service: ContactService<AddressBook>) -> Self {
        Self {
            service,
            today: None,
        }
    }

    /// Pin the date used for birthday checks and reports instead of the
    /// local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Read commands from `input` until exit or end of input.
    ///
    /// A line that is not valid UTF-8 is answered like an unknown command.
    pub fn run<I: BufRead, O: Write>(&mut self, input: I, mut output: O) -> Result<()> {
        writeln!(output, "{}", messages::WELCOME)?;

        let mut lines = input.lines();
        loop {
            write!(output, "{}", messages::PROMPT)?;
            output.flush()?;

            let line = match lines.next() {
                Some(Ok(line)) => line,
                Some(Err(err)) if err.kind() == io::ErrorKind::InvalidData => {
                    tracing::warn!(error = %err, "Unreadable input line");
                    writeln!(output, "{}", messages::INVALID_COMMAND)?;
                    continue;
                }
                Some(Err(err)) => return Err(err.into()),
                None => {
                    tracing::debug!("Input closed");
                    break;
                }
            };

            match self.execute(&line)? {
                Outcome::Reply(text) => writeln!(output, "{}", text)?,
                Outcome::Quit(text) => {
                    writeln!(output, "{}", text)?;
                    break;
                }
                Outcome::Silent => {}
            }
        }

        Ok(())
    }

    /// Execute a single input line.
    ///
    /// Contact errors become their user message; only output rendering
    /// failures are returned as errors.
    pub fn execute(&mut self, line: &str) -> Result<Outcome> {
        let outcome = Command::parse(line)
            .map_err(anyhow::Error::from)
            .and_then(|command| self.dispatch(command));

        match outcome {
            Ok(outcome) => Ok(outcome),
            Err(err) => match err.downcast::<BookError>() {
                Ok(err) => {
                    tracing::warn!(error = %err, "Command failed");
                    Ok(Outcome::Reply(error_message(&err)))
                }
                Err(err) => Err(err),
            },
        }
    }

    fn dispatch(&mut self, command: Command) -> Result<Outcome> {
        tracing::debug!(?command, "Executing command");

        let text = match command {
            Command::Exit => return Ok(Outcome::Quit(messages::GOODBYE.to_string())),
            Command::Empty => return Ok(Outcome::Silent),
            Command::Hello => messages::GREETING.to_string(),
            Command::Help => messages::HELP.to_string(),
            Command::All => self.service.repository().to_string(),
            Command::Add { name, phone } => {
                match self.service.add_contact(&name, phone.as_deref())? {
                    AddOutcome::Added => messages::CONTACT_ADDED.to_string(),
                    AddOutcome::Updated => messages::CONTACT_UPDATED.to_string(),
                }
            }
            Command::Change {
                name,
                old_phone,
                new_phone,
            } => {
                self.service.change_phone(&name, &old_phone, &new_phone)?;
                messages::PHONE_CHANGED.to_string()
            }
            Command::Phone { name } => self.service.contact(&name)?.to_string(),
            Command::RemovePhone { name, phone } => {
                self.service.remove_phone(&name, &phone)?;
                messages::PHONE_REMOVED.to_string()
            }
            Command::Delete { name } => {
                self.service.delete_contact(&name)?;
                messages::CONTACT_DELETED.to_string()
            }
            Command::AddBirthday { name, birthday } => {
                let today = self.today();
                self.service.add_birthday(&name, &birthday, today)?;
                messages::BIRTHDAY_ADDED.to_string()
            }
            Command::ShowBirthday { name } => self.service.show_birthday(&name)?,
            Command::Birthdays { days, json } => {
                let today = self.today();
                let upcoming = match days {
                    Some(days) => self.service.birthdays_within(today, days),
                    None => self.service.birthdays(today),
                };
                render_birthdays(&upcoming, json)?
            }
            Command::Unknown(token) => {
                tracing::debug!(%token, "Unknown command");
                messages::INVALID_COMMAND.to_string()
            }
        };

        Ok(Outcome::Reply(text))
    }
}

fn render_birthdays(upcoming: &[UpcomingBirthday], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(upcoming)?);
    }

    if upcoming.is_empty() {
        return Ok(messages::NO_UPCOMING_BIRTHDAYS.to_string());
    }

    Ok(upcoming
        .iter()
        .map(UpcomingBirthday::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}
