//! Interactive command line.
//!
//! Parses input lines into commands, runs them against a
//! [`ContactService`](crate::services::ContactService) and turns every
//! result or error into a line of text for the user.

pub mod messages;
mod parser;
mod session;

pub use parser::{parse_input, Command, JSON_FLAG};
pub use session::{Outcome, Session};
