//! Data models for the contact book.

pub mod record;
pub mod upcoming;

pub use record::{ContactRecord, NO_BIRTHDAY};
pub use upcoming::{UpcomingBirthday, CONGRATULATION_FORMAT};
