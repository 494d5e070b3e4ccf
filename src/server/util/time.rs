//! Calendar helpers shared by projections.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Whole years between `date_of_birth` and `today`.
///
/// # Arguments
/// - `date_of_birth` - Birth date, if known
/// - `today` - Reference date
///
/// # Returns
/// - `Some(i32)` - Age in completed years
/// - `None` - No birth date
pub fn age_on(date_of_birth: Option<NaiveDate>, today: NaiveDate) -> Option<i32> {
    let dob = date_of_birth?;
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    Some(age)
}

/// Current UTC calendar date.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// `dd.MM` label used for match day headings.
pub fn day_label(date: NaiveDate) -> String {
    date.format("%d.%m").to_string()
}

/// Kick-off time as `HH:MM` (UTC).
pub fn kickoff_label(match_date: DateTime<Utc>) -> String {
    match_date.format("%H:%M").to_string()
}

/// Whole days between two dates, ignoring direction.
pub fn day_distance(a: NaiveDate, b: NaiveDate) -> i64 {
    (a - b).num_days().abs()
}
