//! Explicit Gregorian calendar arithmetic for the month grid.
//!
//! Every quantity the picker draws is computed by a named function instead of
//! relying on the overflow normalization of a date constructor: the length of
//! a month, the weekday its first day falls on, and the month reached by
//! stepping forwards or backwards. The functions are pure and total over the
//! proleptic Gregorian calendar, so they can be checked against `chrono` for
//! any year.
//!
//! # Functions
//!
//! - [`days_in_month`] — number of days in a month (28–31)
//! - [`first_weekday`] — weekday index of day 1 (0 = Sunday … 6 = Saturday)
//! - [`shift_month`] — step a `(year, month)` pair by whole months
//! - [`year_options`] — the 100 years offered by the year selector
//! - [`month_layout`] — leading blanks and day count for one grid

use chrono::NaiveDate;
use serde::Serialize;

/// Column headers of the day grid, starting on Sunday.
pub const WEEKDAY_LABELS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// How many years before the selected year the year selector starts.
pub const YEARS_BEFORE: i32 = 50;

/// How many entries the year selector offers.
pub const YEAR_OPTION_COUNT: usize = 100;

/// Whether `year` is a leap year in the proleptic Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`.
///
/// Returns 0 for a month outside 1-12.
///
/// # Examples
///
/// ```
/// use datetime_picker::calendar::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2), 29);
/// assert_eq!(days_in_month(2023, 2), 28);
/// assert_eq!(days_in_month(2024, 6), 30);
/// ```
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Weekday of the first day of `month` (1-12) in `year`, 0 = Sunday.
///
/// Uses Sakamoto's method with Euclidean division so negative years are
/// handled the same way as positive ones.
///
/// # Examples
///
/// ```
/// use datetime_picker::calendar::first_weekday;
///
/// // June 1 2024 was a Saturday, May 1 2024 a Wednesday.
/// assert_eq!(first_weekday(2024, 6), 6);
/// assert_eq!(first_weekday(2024, 5), 3);
/// ```
pub fn first_weekday(year: i32, month: u32) -> u32 {
    const MONTH_OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

    let month = month.clamp(1, 12);
    let y = if month < 3 { year as i64 - 1 } else { year as i64 };
    let raw = y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        + MONTH_OFFSETS[(month - 1) as usize]
        + 1;
    raw.rem_euclid(7) as u32
}

/// Step a `(year, month)` pair by `delta` months, wrapping year boundaries.
///
/// ```
/// use datetime_picker::calendar::shift_month;
///
/// assert_eq!(shift_month(2024, 1, -1), (2023, 12));
/// assert_eq!(shift_month(2024, 12, 1), (2025, 1));
/// ```
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let zero_based = month as i32 - 1 + delta;
    let year = year + zero_based.div_euclid(12);
    let month = zero_based.rem_euclid(12) as u32 + 1;
    (year, month)
}

/// The years offered by the year selector for a selected year `year`:
/// `year - 50 ..= year + 49`, ascending.
pub fn year_options(year: i32) -> Vec<i32> {
    let first = year - YEARS_BEFORE;
    (0..YEAR_OPTION_COUNT as i32).map(|i| first + i).collect()
}

/// English long name of `month` (1-12).
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month.clamp(1, 12) - 1) as usize]
}

/// Build a date, clamping `day` to the length of the target month.
///
/// Clamps rather than rolling over into the next month, so Feb 29 in a
/// common year gives Feb 28, not Mar 1.
///
/// Returns `None` only when the year is outside the range `chrono` supports.
pub fn clamped_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let last = days_in_month(year, month);
    NaiveDate::from_ymd_opt(year, month, day.clamp(1, last.max(1)))
}

/// Shape of one month in the 7-column grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthLayout {
    pub year: i32,
    pub month: u32,
    /// Blank cells before day 1, equal to [`first_weekday`].
    pub leading_blanks: u32,
    /// Day cells, equal to [`days_in_month`].
    pub days: u32,
}

/// Compute the grid layout for `month` of `year`.
pub fn month_layout(year: i32, month: u32) -> MonthLayout {
    MonthLayout {
        year,
        month,
        leading_blanks: first_weekday(year, month),
        days: days_in_month(year, month),
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
