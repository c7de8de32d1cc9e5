//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! names, phone numbers, and birthdays. Each value object validates at
//! construction time, so an invalid value can never be stored in a record.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use name::Name;
pub use phone::PhoneNumber;

use serde::{Deserialize, Deserializer, Serializer};

/// Validation and text form shared by every contact field.
///
/// A field is parsed from user text and keeps a canonical string form.
/// Serde support for all fields goes through this trait, so a field read
/// back from JSON passes the same checks as one typed by the user.
pub trait FieldValue: Sized {
    /// Validate `value` and build the field.
    fn parse(value: &str) -> Result<Self, ValidationError>;

    /// The canonical string form of the value.
    fn as_str(&self) -> &str;
}

/// Serialize a field as its plain string form.
pub(crate) fn serialize_field<T, S>(field: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: FieldValue,
    S: Serializer,
{
    serializer.serialize_str(field.as_str())
}

/// Deserialize a field from a string, re-running its validation.
pub(crate) fn deserialize_field<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: FieldValue,
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    T::parse(&s).map_err(serde::de::Error::custom)
}
