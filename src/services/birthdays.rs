//! Upcoming birthday calculation.
//!
//! A birthday is moved onto the current calendar year (or the next one if
//! it has already passed), then shifted off the weekend onto the following
//! Monday. A contact is upcoming when that shifted date lies between today
//! and `horizon_days` ahead, both ends inclusive.
//!
//! February 29 birthdays are celebrated on February 28 in non-leap years.

use crate::models::UpcomingBirthday;
use crate::repositories::ContactRepository;
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Horizon used when none is configured.
pub const DEFAULT_HORIZON_DAYS: u32 = 7;

/// Longest horizon accepted for upcoming-birthday reports.
pub const MAX_HORIZON_DAYS: u32 = 366;

/// Place a birthday's month and day in `year`.
///
/// Returns `None` only when `year` is outside chrono's supported range.
pub fn anchor_to_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

/// First `weekday` strictly after `start`.
pub fn next_weekday(start: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let mut days_ahead = i64::from(weekday.num_days_from_monday())
        - i64::from(start.weekday().num_days_from_monday());
    if days_ahead <= 0 {
        days_ahead += 7;
    }
    start.checked_add_days(Days::new(days_ahead.unsigned_abs()))
}

/// Move a Saturday or Sunday onto the following Monday.
pub fn adjust_for_weekend(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => next_weekday(date, Weekday::Mon),
        _ => Some(date),
    }
}

/// The weekend-adjusted date of the next occurrence of `birthday` on or after `today`.
pub fn congratulation_date(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let mut candidate = anchor_to_year(birthday, today.year())?;
    if candidate < today {
        candidate = anchor_to_year(birthday, today.year() + 1)?;
    }
    adjust_for_weekend(candidate)
}

/// Contacts to congratulate within `horizon_days` of `today`.
///
/// Results follow the repository's iteration order. Records without a
/// birthday are skipped.
pub fn upcoming_birthdays<R>(repo: &R, today: NaiveDate, horizon_days: u32) -> Vec<UpcomingBirthday>
where
    R: ContactRepository + ?Sized,
{
    let horizon = i64::from(horizon_days);

    let upcoming: Vec<UpcomingBirthday> = repo
        .records()
        .filter_map(|record| {
            let birthday = record.birthday()?;
            let date = congratulation_date(birthday.date(), today)?;
            let days_away = date.signed_duration_since(today).num_days();

            tracing::trace!(
                contact = %record.name(),
                %date,
                days_away,
                "Checked birthday"
            );

            (0..=horizon)
                .contains(&days_away)
                .then(|| UpcomingBirthday::new(record.name().as_str(), date))
        })
        .collect();

    tracing::info!(
        %today,
        horizon_days,
        count = upcoming.len(),
        "Computed upcoming birthdays"
    );

    upcoming
}
