//! Upcoming birthday report entries.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Format of a congratulation date in reports.
pub const CONGRATULATION_FORMAT: &str = "%Y.%m.%d";

/// One contact to congratulate, with the (weekend-adjusted) date to do it.
///
/// Produced fresh by each upcoming-birthday query; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Name of the contact
    pub name: String,

    /// Date to congratulate, `YYYY.MM.DD`
    pub congratulation_date: String,
}

impl UpcomingBirthday {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            congratulation_date: date.format(CONGRATULATION_FORMAT).to_string(),
        }
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.congratulation_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upcoming_birthday_format() {
        let entry = UpcomingBirthday::new("Alice", NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        assert_eq!(entry.congratulation_date, "2024.06.03");
        assert_eq!(entry.to_string(), "Alice: 2024.06.03");
    }

    #[test]
    fn test_upcoming_birthday_serialization() {
        let entry = UpcomingBirthday::new("Bob", NaiveDate::from_ymd_opt(2024, 12, 30).unwrap());
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"name":"Bob","congratulation_date":"2024.12.30"}"#
        );
    }
}
