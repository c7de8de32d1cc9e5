//! Application service layer.
//!
//! Services contain the business logic: the upcoming-birthday engine and
//! the contact operations the command line drives. They provide a clean
//! boundary between the CLI and the repository layer.

pub mod birthdays;
mod contact_service;

pub use birthdays::{
    adjust_for_weekend, anchor_to_year, congratulation_date, next_weekday, upcoming_birthdays,
    DEFAULT_HORIZON_DAYS, MAX_HORIZON_DAYS,
};
pub use contact_service::{AddOutcome, ContactService};
