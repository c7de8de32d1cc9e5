//! User-facing messages.
//!
//! All translation from error kinds to text shown to the user happens here.

use crate::error::BookError;

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const GREETING: &str = "How can I help you?";
pub const GOODBYE: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command.";

pub const CONTACT_ADDED: &str = "Contact added.";
pub const CONTACT_UPDATED: &str = "Contact updated.";
pub const CONTACT_DELETED: &str = "Contact deleted.";
pub const PHONE_CHANGED: &str = "Phone number changed successfully.";
pub const PHONE_REMOVED: &str = "Phone number removed.";
pub const BIRTHDAY_ADDED: &str = "Birthday added successfully.";
pub const NO_UPCOMING_BIRTHDAYS: &str = "No upcoming birthdays.";

pub const CONTACT_NOT_FOUND: &str = "Contact not found.";
pub const PHONE_NOT_FOUND: &str = "Phone number not found.";
pub const WRONG_ARGUMENTS: &str =
    "Invalid input. Please provide the correct number of arguments.";

pub const HELP: &str = "\
Commands:
  hello                              greet the assistant
  add <name> [phone]                 add a contact or a phone to it
  change <name> <old> <new>          replace a phone number
  phone <name>                       show a contact
  remove-phone <name> <phone>        remove a phone number
  delete <name>                      delete a contact
  all                                show every contact
  add-birthday <name> <DD.MM.YYYY>   set a birthday
  show-birthday <name>               show a birthday
  birthdays [days] [--json]          upcoming birthdays
  close | exit                       quit";

/// The fixed message shown for an error.
pub fn error_message(err: &BookError) -> String {
    match err {
        BookError::Validation(reason) => reason.to_string(),
        BookError::PhoneNotFound(_) => PHONE_NOT_FOUND.to_string(),
        BookError::RecordNotFound(_) => CONTACT_NOT_FOUND.to_string(),
        BookError::ArgumentCount { .. } => WRONG_ARGUMENTS.to_string(),
    }
}
