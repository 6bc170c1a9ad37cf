//! The picker state machine.
//!
//! [`DateTimePicker`] owns the selected day, the selected time of day and the
//! popover visibility. Every user interaction is a method taking `&mut self`;
//! an interaction that would move the selection before the minimum date is
//! discarded and reported as [`Transition::Rejected`], leaving the state as
//! it was. Nothing here raises an error once the picker exists.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};
use log::debug;

use crate::calendar::{clamped_date, days_in_month, shift_month};
use crate::error::Result;
use crate::options::{format_time, parse_time, MinimumDate, PickerOptions, DEFAULT_TIME};

/// Visibility of the calendar popover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Popover {
    #[default]
    Closed,
    Open,
}

/// Outcome of a constrained interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The new value was stored.
    Applied,
    /// The new value was discarded; state is unchanged.
    Rejected,
}

impl Transition {
    pub fn is_applied(self) -> bool {
        self == Transition::Applied
    }
}

/// Receives the combined date-time each time the user confirms.
pub type ConfirmCallback = Box<dyn FnMut(NaiveDateTime)>;

/// A date-and-time picker bounded below by a [`MinimumDate`].
pub struct DateTimePicker {
    minimum: MinimumDate,
    selected_date: NaiveDate,
    selected_time: NaiveTime,
    popover: Popover,
    on_confirm: Option<ConfirmCallback>,
}

impl fmt::Debug for DateTimePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateTimePicker")
            .field("minimum", &self.minimum)
            .field("selected_date", &self.selected_date)
            .field("selected_time", &self.selected_time)
            .field("popover", &self.popover)
            .field("on_confirm", &self.on_confirm.is_some())
            .finish()
    }
}

fn default_time() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 30, 0).unwrap_or(NaiveTime::MIN)
}

impl DateTimePicker {
    /// Create a closed picker showing `today` at the default time (12:30).
    ///
    /// `today` is taken as an argument so callers (and tests) decide what
    /// "now" is; [`DateTimePicker::from_options`] reads the local clock.
    pub fn new(minimum: MinimumDate, today: NaiveDate) -> Self {
        Self {
            minimum,
            selected_date: today,
            selected_time: default_time(),
            popover: Popover::Closed,
            on_confirm: None,
        }
    }

    /// Replace the initial time of day.
    pub fn with_default_time(mut self, time: NaiveTime) -> Self {
        self.selected_time = time;
        self
    }

    /// Build a picker from host options, anchored on today's local date.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PickerError::InvalidMinimumDate`] or
    /// [`crate::PickerError::InvalidTime`] if either option cannot be parsed.
    pub fn from_options(options: &PickerOptions) -> Result<Self> {
        let minimum = MinimumDate::parse(&options.minimum_date)?;
        let time = parse_time(&options.default_time)?;
        Ok(Self::new(minimum, local_today()).with_default_time(time))
    }

    /// Build a picker from host options without failing.
    ///
    /// An unreadable minimum date disables the constraint and an unreadable
    /// default time falls back to 12:30.
    pub fn from_options_lenient(options: &PickerOptions) -> Self {
        let minimum = MinimumDate::parse_lenient(&options.minimum_date);
        let time = parse_time(&options.default_time).unwrap_or_else(|e| {
            debug!("{e}; using default time {DEFAULT_TIME}");
            default_time()
        });
        Self::new(minimum, local_today()).with_default_time(time)
    }

    /// Register the callback invoked once per [`DateTimePicker::confirm`].
    ///
    /// Replaces any previously registered callback.
    pub fn on_confirm(&mut self, callback: impl FnMut(NaiveDateTime) + 'static) {
        self.on_confirm = Some(Box::new(callback));
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn minimum(&self) -> MinimumDate {
        self.minimum
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn selected_time(&self) -> NaiveTime {
        self.selected_time
    }

    pub fn popover(&self) -> Popover {
        self.popover
    }

    pub fn is_open(&self) -> bool {
        self.popover == Popover::Open
    }

    /// The selected day combined with the selected time.
    pub fn selected_datetime(&self) -> NaiveDateTime {
        self.selected_date.and_time(self.selected_time)
    }

    /// Whether `date` is greyed out and ignores clicks.
    pub fn is_day_disabled(&self, date: NaiveDate) -> bool {
        !self.minimum.admits_day(date)
    }

    // ── Interactions ────────────────────────────────────────────────────

    /// Open the popover if closed, close it if open.
    pub fn toggle(&mut self) {
        self.popover = match self.popover {
            Popover::Closed => Popover::Open,
            Popover::Open => Popover::Closed,
        };
    }

    /// Move the selection to the first day of the previous month.
    ///
    /// Navigation is not checked against the minimum date.
    pub fn previous_month(&mut self) {
        self.step_month(-1);
    }

    /// Move the selection to the first day of the next month.
    ///
    /// Navigation is not checked against the minimum date.
    pub fn next_month(&mut self) {
        self.step_month(1);
    }

    fn step_month(&mut self, delta: i32) {
        let (year, month) = shift_month(
            self.selected_date.year(),
            self.selected_date.month(),
            delta,
        );
        match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(first) => self.selected_date = first,
            None => debug!("month {year}-{month:02} is outside the supported range"),
        }
    }

    /// Select `year`, keeping month and day.
    ///
    /// The day is clamped when the target month is shorter, so Feb 29 becomes
    /// Feb 28. A browser `setFullYear` would roll over to Mar 1 instead.
    pub fn select_year(&mut self, year: i32) -> Transition {
        let candidate = clamped_date(year, self.selected_date.month(), self.selected_date.day());
        self.apply_date(candidate, "year")
    }

    /// Select `day` of the displayed month.
    ///
    /// Rejected when the day does not exist, is before the minimum's day, or
    /// when the selected time on that day would fall before the minimum.
    pub fn select_day(&mut self, day: u32) -> Transition {
        let (year, month) = (self.selected_date.year(), self.selected_date.month());
        let candidate = if (1..=days_in_month(year, month)).contains(&day) {
            NaiveDate::from_ymd_opt(year, month, day)
        } else {
            None
        };
        self.apply_date(candidate, "day")
    }

    fn apply_date(&mut self, candidate: Option<NaiveDate>, source: &str) -> Transition {
        let Some(date) = candidate else {
            debug!("rejected {source} selection: no such date");
            return Transition::Rejected;
        };
        if !self.minimum.admits_day(date) {
            debug!(
                "rejected {source} selection {date}: before minimum {:?}",
                self.minimum
            );
            return Transition::Rejected;
        }
        let combined = date.and_time(self.selected_time);
        if !self.minimum.admits(combined) {
            debug!(
                "rejected {source} selection {combined}: selected time is before minimum {:?}",
                self.minimum
            );
            return Transition::Rejected;
        }
        self.selected_date = date;
        Transition::Applied
    }

    /// Select a time of day from a time-input value such as `"08:00"`.
    ///
    /// Rejected when the value does not parse or when the selected day at
    /// that time falls before the minimum.
    pub fn select_time(&mut self, value: &str) -> Transition {
        let time = match parse_time(value) {
            Ok(time) => time,
            Err(e) => {
                debug!("rejected time selection: {e}");
                return Transition::Rejected;
            }
        };
        let combined = self.selected_date.and_time(time);
        if !self.minimum.admits(combined) {
            debug!(
                "rejected time selection {combined}: before minimum {:?}",
                self.minimum
            );
            return Transition::Rejected;
        }
        self.selected_time = time;
        Transition::Applied
    }

    /// Confirm the current selection.
    ///
    /// Closes the popover, invokes the confirm callback once and returns the
    /// confirmed date-time. Does nothing and returns `None` while the popover
    /// is closed, since the confirm button is only shown when it is open.
    pub fn confirm(&mut self) -> Option<NaiveDateTime> {
        if self.popover == Popover::Closed {
            return None;
        }
        self.popover = Popover::Closed;
        let value = self.selected_datetime();
        debug!(
            "confirmed {} {}",
            self.selected_date,
            format_time(self.selected_time)
        );
        if let Some(callback) = self.on_confirm.as_mut() {
            callback(value);
        }
        Some(value)
    }
}

/// Today's date on the local clock.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

// ── Tests ───────────────────────────────────────────────────────────────────
