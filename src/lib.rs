//! Contact Book - an in-memory contact manager with birthday reminders.
//!
//! Contacts hold a name, any number of ten-digit phone numbers, and an
//! optional birthday. The birthday engine lists who to congratulate in the
//! coming days, moving weekend birthdays onto the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: Contact records and upcoming-birthday report entries
//! - **repositories**: The contact repository trait and the in-memory address book
//! - **services**: Upcoming-birthday engine and contact operations
//! - **cli**: Command parsing, user messages and the interactive loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

pub use cli::Session;
pub use config::Config;
pub use domain::{Birthday, FieldValue, Name, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::{ContactRecord, UpcomingBirthday};
pub use repositories::{AddressBook, ContactRepository};
pub use services::{
    upcoming_birthdays, AddOutcome, ContactService, DEFAULT_HORIZON_DAYS, MAX_HORIZON_DAYS,
};
