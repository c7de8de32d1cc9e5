//! Contact record: one person in the address book.

use crate::domain::{Birthday, Name, PhoneNumber};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown by [`ContactRecord::birthday_display`] when no birthday is set.
pub const NO_BIRTHDAY: &str = "Birthday: None";

/// A contact in the address book.
///
/// The name is the record's identity and never changes. Phone numbers keep
/// insertion order and may repeat; phone operations act on the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    name: Name,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create an empty record for `name`.
    pub fn new(name: impl Into<String>) -> BookResult<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone number.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> BookResult<()> {
        self.phones.push(PhoneNumber::new(phone)?);
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// # Errors
    ///
    /// `PhoneNotFound` if `old` is not on the record, or a validation error
    /// if `new` is malformed. The record is unchanged on error.
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> BookResult<()> {
        let position = self
            .position_of(old)
            .ok_or_else(|| BookError::PhoneNotFound(old.to_string()))?;
        self.phones[position].set(new)?;
        Ok(())
    }

    /// Find a phone number on the record.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Remove the first phone equal to `phone` and return it.
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<PhoneNumber> {
        let position = self
            .position_of(phone)
            .ok_or_else(|| BookError::PhoneNotFound(phone.to_string()))?;
        Ok(self.phones.remove(position))
    }

    /// Set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, birthday: impl Into<String>) -> BookResult<()> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// Set an already validated birthday.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// The birthday as `DD.MM.YYYY`, or [`NO_BIRTHDAY`].
    pub fn birthday_display(&self) -> String {
        match &self.birthday {
            Some(birthday) => birthday.to_string(),
            None => NO_BIRTHDAY.to_string(),
        }
    }

    fn position_of(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;
    use chrono::NaiveDate;

    fn record_with(phones: &[&str]) -> ContactRecord {
        let mut record = ContactRecord::new("Alice").unwrap();
        for phone in phones {
            record.add_phone(*phone).unwrap();
        }
        record
    }

    #[test]
    fn test_record_new() {
        let record = ContactRecord::new("Alice").unwrap();
        assert_eq!(record.name().as_str(), "Alice");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_record_rejects_empty_name() {
        assert_eq!(
            ContactRecord::new(""),
            Err(BookError::Validation(ValidationError::EmptyName))
        );
    }

    #[test]
    fn test_add_phone_keeps_order_and_duplicates() {
        let record = record_with(&["1111111111", "2222222222", "1111111111"]);
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["1111111111", "2222222222", "1111111111"]);
    }

    #[test]
    fn test_add_phone_rejects_invalid() {
        let mut record = record_with(&[]);
        let err = record.add_phone("12345").unwrap_err();
        assert!(matches!(
            err,
            BookError::Validation(ValidationError::InvalidPhone(_))
        ));
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_edit_phone_in_place() {
        let mut record = record_with(&["1111111111"]);
        record.edit_phone("1111111111", "2222222222").unwrap();
        assert_eq!(record.phones().len(), 1);
        assert_eq!(record.phones()[0].as_str(), "2222222222");
    }

    #[test]
    fn test_edit_phone_preserves_position() {
        let mut record = record_with(&["1111111111", "2222222222", "3333333333"]);
        record.edit_phone("2222222222", "4444444444").unwrap();
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["1111111111", "4444444444", "3333333333"]);
    }

    #[test]
    fn test_edit_phone_first_match_only() {
        let mut record = record_with(&["1111111111", "1111111111"]);
        record.edit_phone("1111111111", "2222222222").unwrap();
        assert_eq!(record.phones()[0].as_str(), "2222222222");
        assert_eq!(record.phones()[1].as_str(), "1111111111");
    }

    #[test]
    fn test_edit_phone_not_found() {
        let mut record = record_with(&["1111111111"]);
        assert_eq!(
            record.edit_phone("9999999999", "2222222222"),
            Err(BookError::PhoneNotFound("9999999999".to_string()))
        );
    }

    #[test]
    fn test_edit_phone_invalid_new_value_leaves_record() {
        let mut record = record_with(&["1111111111"]);
        assert!(record.edit_phone("1111111111", "abc").is_err());
        assert_eq!(record.phones()[0].as_str(), "1111111111");
    }

    #[test]
    fn test_find_phone() {
        let record = record_with(&["1111111111"]);
        assert_eq!(
            record.find_phone("1111111111").map(|p| p.as_str()),
            Some("1111111111")
        );
        assert!(record.find_phone("2222222222").is_none());
    }

    #[test]
    fn test_remove_phone() {
        let mut record = record_with(&["1234567890", "0987654321"]);
        let removed = record.remove_phone("1234567890").unwrap();
        assert_eq!(removed.as_str(), "1234567890");
        assert_eq!(record.phones().len(), 1);
        assert_eq!(record.phones()[0].as_str(), "0987654321");

        assert_eq!(
            record.remove_phone("1234567890"),
            Err(BookError::PhoneNotFound("1234567890".to_string()))
        );
    }

    #[test]
    fn test_add_birthday_overwrites() {
        let mut record = record_with(&[]);
        assert_eq!(record.birthday_display(), NO_BIRTHDAY);

        record.add_birthday("01.01.2000").unwrap();
        assert_eq!(record.birthday_display(), "01.01.2000");

        record.add_birthday("02.02.2002").unwrap();
        assert_eq!(record.birthday_display(), "02.02.2002");
        assert_eq!(
            record.birthday().map(|b| b.date()),
            NaiveDate::from_ymd_opt(2002, 2, 2)
        );
    }

    #[test]
    fn test_add_birthday_invalid_keeps_previous() {
        let mut record = record_with(&[]);
        record.add_birthday("01.01.2000").unwrap();
        assert!(record.add_birthday("31.02.2020").is_err());
        assert_eq!(record.birthday_display(), "01.01.2000");
    }

    #[test]
    fn test_display_excludes_birthday() {
        let mut record = record_with(&["1111111111", "2222222222"]);
        record.add_birthday("01.01.2000").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: Alice, phones: 1111111111; 2222222222"
        );
    }

    #[test]
    fn test_display_without_phones() {
        let record = record_with(&[]);
        assert_eq!(record.to_string(), "Contact name: Alice, phones: ");
    }

    #[test]
    fn test_record_serialization() {
        let mut record = record_with(&["1111111111"]);
        record.add_birthday("01.01.2000").unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Alice","phones":["1111111111"],"birthday":"01.01.2000"}"#
        );

        let parsed: ContactRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_record_deserialization_rejects_bad_phone() {
        let json = r#"{"name":"Alice","phones":["12"]}"#;
        let result: Result<ContactRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
