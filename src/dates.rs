//! Calendar-aware date arithmetic used by the navigation state machine.
//!
//! Month and year arithmetic never overflows into the following month:
//! adding one month to January 31 lands on the last day of February.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::types::{DAYS_PER_WEEK, MONTHS_PER_YEAR};

/// Check if a year is a leap year according to Gregorian rules.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

/// Build a date, pulling the day back to the end of the month if needed.
pub fn date_clamped(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let day = day.clamp(1, days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Saturate at the limits of the representable range.
fn saturate(forward: bool) -> NaiveDate {
    if forward {
        NaiveDate::MAX
    } else {
        NaiveDate::MIN
    }
}

pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days))
        .unwrap_or_else(|| saturate(days > 0))
}

/// Add calendar months, keeping the day of month where the target month has it.
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let total = date.year() * MONTHS_PER_YEAR as i32 + date.month0() as i32 + months;
    let year = total.div_euclid(MONTHS_PER_YEAR as i32);
    let month = total.rem_euclid(MONTHS_PER_YEAR as i32) as u32 + 1;
    date_clamped(year, month, date.day()).unwrap_or_else(|| saturate(months > 0))
}

pub fn add_years(date: NaiveDate, years: i32) -> NaiveDate {
    add_months(date, years.saturating_mul(MONTHS_PER_YEAR as i32))
}

/// Same date moved to another month of its year.
pub fn with_month(date: NaiveDate, month: u32) -> NaiveDate {
    add_months(date, month as i32 - date.month() as i32)
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    add_days(date, 1 - date.day() as i64)
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    add_days(
        date,
        days_in_month(date.year(), date.month()) as i64 - date.day() as i64,
    )
}

/// Clamp a date into optional bounds; the minimum wins if they cross.
pub fn clamp_date(date: NaiveDate, min: Option<NaiveDate>, max: Option<NaiveDate>) -> NaiveDate {
    match (min, max) {
        (Some(min), _) if date < min => min,
        (_, Some(max)) if date > max => max,
        _ => date,
    }
}

pub fn within_bounds(date: NaiveDate, min: Option<NaiveDate>, max: Option<NaiveDate>) -> bool {
    min.is_none_or(|min| date >= min) && max.is_none_or(|max| date <= max)
}

pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

pub fn same_year(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year()
}

/// Number of blank cells before day 1 in a week row starting at `week_start`.
pub fn first_week_offset(date: NaiveDate, week_start: Weekday) -> usize {
    let first_day = first_of_month(date).weekday();
    (DAYS_PER_WEEK + first_day.num_days_from_monday() as usize
        - week_start.num_days_from_monday() as usize)
        % DAYS_PER_WEEK
}

/// Iterate over every day of the month containing `date`.
pub fn days_of_month(date: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    first_of_month(date)
        .iter_days()
        .take(days_in_month(date.year(), date.month()) as usize)
}
