//! Birthday scheduling helpers.
//!
//! Celebrations never land on a weekend: a birthday that falls on Saturday
//! or Sunday is congratulated on the following Monday.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Return the next date after `date` that falls on `weekday`.
///
/// The result is always strictly later than `date`, so asking for the
/// weekday `date` already has yields the same weekday one week on.
pub fn find_next_weekday(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let mut days_ahead =
        weekday.num_days_from_monday() as i64 - date.weekday().num_days_from_monday() as i64;

    if days_ahead <= 0 {
        days_ahead += 7;
    }

    date + Duration::days(days_ahead)
}

/// Move a Saturday or Sunday forward to the next Monday.
///
/// Weekdays are returned unchanged.
pub fn adjust_for_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => find_next_weekday(date, Weekday::Mon),
        _ => date,
    }
}

/// Place a birthday's month and day in `year`.
///
/// February 29 is celebrated on February 28 in years without a leap day.
pub fn anniversary_in_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    birthday.with_year(year).or_else(|| {
        if birthday.month() == 2 && birthday.day() == 29 {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}

/// The next occurrence of `birthday` on or after `today`.
pub fn next_anniversary(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary_in_year(birthday, today.year())?;

    if this_year < today {
        anniversary_in_year(birthday, today.year() + 1)
    } else {
        Some(this_year)
    }
}
