//! Contact service layer.
//!
//! Business operations behind the interactive commands. Every operation
//! works on the service's own repository and reports failures as
//! [`BookError`] values.

use super::birthdays::upcoming_birthdays;
use crate::domain::{Birthday, PhoneNumber};
use crate::error::{BookError, BookResult};
use crate::models::{ContactRecord, UpcomingBirthday};
use crate::repositories::{AddressBook, ContactRepository};
use chrono::NaiveDate;

/// Result of [`ContactService::add_contact`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new record was created
    Added,
    /// An existing record received the phone number
    Updated,
}

/// Contact operations over a repository.
#[derive(Debug, Clone, Default)]
pub struct ContactService<R = AddressBook> {
    repo: R,
    horizon_days: u32,
}

impl<R: ContactRepository> ContactService<R> {
    /// Create a new contact service.
    ///
    /// # Arguments
    /// * `repo` - Repository holding the contact records
    /// * `horizon_days` - Default horizon for upcoming-birthday reports
    pub fn new(repo: R, horizon_days: u32) -> Self {
        Self { repo, horizon_days }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    fn record(&self, name: &str) -> BookResult<&ContactRecord> {
        self.repo
            .find(name)
            .ok_or_else(|| BookError::RecordNotFound(name.to_string()))
    }

    fn record_mut(&mut self, name: &str) -> BookResult<&mut ContactRecord> {
        self.repo
            .find_mut(name)
            .ok_or_else(|| BookError::RecordNotFound(name.to_string()))
    }

    /// Find or create the contact `name`, then append `phone` if given.
    ///
    /// A new contact is only stored once its phone number has validated.
    pub fn add_contact(&mut self, name: &str, phone: Option<&str>) -> BookResult<AddOutcome> {
        if let Some(record) = self.repo.find_mut(name) {
            if let Some(phone) = phone {
                record.add_phone(phone)?;
            }
            return Ok(AddOutcome::Updated);
        }

        let mut record = ContactRecord::new(name)?;
        if let Some(phone) = phone {
            record.add_phone(phone)?;
        }
        self.repo.add_record(record);
        Ok(AddOutcome::Added)
    }

    /// Replace `old` with `new` on the contact `name`.
    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> BookResult<()> {
        self.record_mut(name)?.edit_phone(old, new)
    }

    /// Remove `phone` from the contact `name`.
    pub fn remove_phone(&mut self, name: &str, phone: &str) -> BookResult<PhoneNumber> {
        self.record_mut(name)?.remove_phone(phone)
    }

    /// Look up the contact `name`.
    pub fn contact(&self, name: &str) -> BookResult<&ContactRecord> {
        self.record(name)
    }

    /// Delete the contact `name`.
    pub fn delete_contact(&mut self, name: &str) -> BookResult<ContactRecord> {
        self.repo
            .delete(name)
            .ok_or_else(|| BookError::RecordNotFound(name.to_string()))
    }

    /// Set the birthday of the contact `name`.
    ///
    /// The birthday must not be after `today`.
    pub fn add_birthday(
        &mut self,
        name: &str,
        birthday: &str,
        today: NaiveDate,
    ) -> BookResult<()> {
        let record = self.record_mut(name)?;
        record.set_birthday(Birthday::parse_as_of(birthday, today)?);
        Ok(())
    }

    /// The birthday of the contact `name`, as displayed to the user.
    pub fn show_birthday(&self, name: &str) -> BookResult<String> {
        Ok(self.record(name)?.birthday_display())
    }

    /// Upcoming birthdays using the configured horizon.
    pub fn birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.birthdays_within(today, self.horizon_days)
    }

    /// Upcoming birthdays within an explicit horizon.
    pub fn birthdays_within(&self, today: NaiveDate, horizon_days: u32) -> Vec<UpcomingBirthday> {
        upcoming_birthdays(&self.repo, today, horizon_days)
    }
}
