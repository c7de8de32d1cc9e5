//! Birthday value object.

use super::errors::ValidationError;
use super::{deserialize_field, serialize_field, FieldValue};
use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Input and display format of a birthday.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono alone accepts unpadded fields, so the shape is checked first.
static BIRTHDAY_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("birthday pattern is valid")
});

/// A validated birthday.
///
/// Parsed from `DD.MM.YYYY`, it must be a real calendar date that is not
/// after the day it was created. The original text is kept for display.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("01.01.2000").unwrap();
/// assert_eq!(birthday.as_str(), "01.01.2000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    date: NaiveDate,
    text: String,
}

impl Birthday {
    /// Create a new Birthday, checked against today's local date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the value is not a real
    /// `DD.MM.YYYY` date or lies in the future.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::parse_as_of(value, Local::now().date_naive())
    }

    /// Create a new Birthday, checked against an explicit reference day.
    pub fn parse_as_of(
        value: impl Into<String>,
        today: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let value = value.into();

        if !BIRTHDAY_SHAPE.is_match(&value) {
            return Err(ValidationError::InvalidBirthday(value));
        }

        let date = match NaiveDate::parse_from_str(&value, BIRTHDAY_FORMAT) {
            Ok(date) => date,
            Err(_) => return Err(ValidationError::InvalidBirthday(value)),
        };

        if date > today {
            return Err(ValidationError::InvalidBirthday(value));
        }

        Ok(Self {
            date,
            text: date.format(BIRTHDAY_FORMAT).to_string(),
        })
    }

    /// The birthday as a calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Get the birthday in `DD.MM.YYYY` form.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FieldValue for Birthday {
    fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::new(value)
    }

    fn as_str(&self) -> &str {
        &self.text
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_field(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_field(deserializer)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
