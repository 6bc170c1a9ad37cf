//! Host-supplied configuration: the minimum selectable date-time and the
//! initial time of day.
//!
//! The host hands the widget strings (usually straight from a record, e.g. a
//! creation timestamp), so everything here is about turning those strings
//! into `chrono` values once, at construction.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{PickerError, Result};

/// Time of day the picker starts on when the host does not choose one.
pub const DEFAULT_TIME: &str = "12:30";

/// Display/parse format of the time input.
pub const TIME_FORMAT: &str = "%H:%M";

/// Naive layouts accepted for the minimum date, tried in order after RFC 3339.
const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

// ── PickerOptions ───────────────────────────────────────────────────────────

/// Configuration accepted from the host page.
///
/// Deserializes from camelCase JSON so a page can pass
/// `{"minimumDate": "2024-06-15T00:00"}` directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickerOptions {
    /// Earliest selectable date-time.
    pub minimum_date: String,
    /// Initial `"HH:MM"` value of the time input.
    #[serde(default = "default_time")]
    pub default_time: String,
}

fn default_time() -> String {
    DEFAULT_TIME.to_string()
}

impl PickerOptions {
    pub fn new(minimum_date: impl Into<String>) -> Self {
        Self {
            minimum_date: minimum_date.into(),
            default_time: default_time(),
        }
    }

    pub fn with_default_time(mut self, time: impl Into<String>) -> Self {
        self.default_time = time.into();
        self
    }

    /// Parse options from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::InvalidOptions`] if the JSON is malformed or
    /// lacks `minimumDate`.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PickerError::InvalidOptions(e.to_string()))
    }
}

// ── MinimumDate ─────────────────────────────────────────────────────────────

/// The lower bound every selection is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinimumDate {
    /// Selections must not be earlier than this local date-time.
    At(NaiveDateTime),
    /// No lower bound. Produced by lenient parsing of an unreadable string.
    Unbounded,
}

impl MinimumDate {
    /// Parse a minimum date, failing on unreadable input.
    ///
    /// Accepts RFC 3339 (converted to the local clock), naive
    /// `YYYY-MM-DDTHH:MM[:SS[.fff]]` or `YYYY-MM-DD HH:MM[:SS]`, and a bare
    /// `YYYY-MM-DD` (local midnight).
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::InvalidMinimumDate`] if none of the layouts match.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use datetime_picker::MinimumDate;
    ///
    /// let min = MinimumDate::parse("2024-06-15T08:30").unwrap();
    /// assert_eq!(min.day(), NaiveDate::from_ymd_opt(2024, 6, 15));
    /// assert!(MinimumDate::parse("not a date").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        parse_local_datetime(s)
            .map(MinimumDate::At)
            .ok_or_else(|| PickerError::InvalidMinimumDate(format!("'{}'", s)))
    }

    /// Parse a minimum date, falling back to [`MinimumDate::Unbounded`].
    ///
    /// An unreadable string disables the constraint instead of failing, which
    /// is how a browser date picker degrades when handed an invalid date.
    pub fn parse_lenient(s: &str) -> Self {
        match Self::parse(s) {
            Ok(min) => min,
            Err(e) => {
                warn!("{e}; minimum date constraint disabled");
                MinimumDate::Unbounded
            }
        }
    }

    /// Calendar day of the bound, if any.
    pub fn day(&self) -> Option<NaiveDate> {
        match self {
            MinimumDate::At(dt) => Some(dt.date()),
            MinimumDate::Unbounded => None,
        }
    }

    /// Whether `date` (taken at midnight) may be selected.
    ///
    /// Compares calendar days, so the bound's own day is selectable even when
    /// the bound lies later in that day; the time check then takes over.
    pub fn admits_day(&self, date: NaiveDate) -> bool {
        self.day().is_none_or(|min| date >= min)
    }

    /// Whether the combined `datetime` may be selected.
    pub fn admits(&self, datetime: NaiveDateTime) -> bool {
        match self {
            MinimumDate::At(min) => datetime >= *min,
            MinimumDate::Unbounded => true,
        }
    }
}

// ── Parsing helpers ─────────────────────────────────────────────────────────

/// Parse the accepted minimum-date layouts into a local naive date-time.
fn parse_local_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}

/// Parse a time-input value: `"HH:MM"`, or `"HH:MM:SS"` as some inputs send.
///
/// # Errors
///
/// Returns [`PickerError::InvalidTime`] if the value is not a valid time of day.
pub fn parse_time(s: &str) -> Result<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|e| PickerError::InvalidTime(format!("'{}': {}", s, e)))
}

/// Format a time of day the way the time input displays it.
pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

// ── Tests ───────────────────────────────────────────────────────────────────
