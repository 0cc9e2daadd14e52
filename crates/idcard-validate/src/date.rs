//! Birth date parsing and age derivation.

use chrono::{Datelike, NaiveDate};

/// Earliest accepted birth year.
const MIN_BIRTH_YEAR: i32 = 1900;

/// Parse the eight `YYYYMMDD` digits into a date, relative to `today`.
///
/// Accepts only real calendar dates (month lengths and leap years are
/// enforced by `NaiveDate`), with the year in `1900..=today's year` and
/// the date not in the future.
pub fn parse_birth_date(digits: &str, today: NaiveDate) -> Option<NaiveDate> {
    let year: i32 = digits.get(..4)?.parse().ok()?;
    let month: u32 = digits.get(4..6)?.parse().ok()?;
    let day: u32 = digits.get(6..8)?.parse().ok()?;

    if year < MIN_BIRTH_YEAR || year > today.year() {
        return None;
    }
    let birth_date = NaiveDate::from_ymd_opt(year, month, day)?;
    if birth_date > today {
        return None;
    }
    Some(birth_date)
}

/// Full years between the birth date and `today`.
///
/// The year difference is decremented when this year's birthday has not
/// arrived yet; a birthday falling on `today` counts as already passed.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}
