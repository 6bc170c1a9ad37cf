//! # datetime-picker
//!
//! State, calendar math and view projection for a date-and-time picker
//! widget bounded by a minimum selectable date.
//!
//! The picker is a small state machine: the popover is either closed or
//! open, the selection is a calendar day plus a time of day, and every
//! interaction that would move the selection before the minimum is
//! discarded. Rendering is a pure function of state, so hosts (browser
//! bindings, terminal previewers, tests) only ever redraw from
//! [`DateTimePicker::render`].
//!
//! ## Modules
//!
//! - [`calendar`] — month lengths, first weekday, year options, grid layout
//! - [`options`] — host options, minimum-date and time parsing
//! - [`picker`] — the [`DateTimePicker`] state machine
//! - [`view`] — [`PickerView`] projection of picker state
//! - [`error`] — Error types

pub mod calendar;
pub mod error;
pub mod options;
pub mod picker;
pub mod view;

pub use calendar::{days_in_month, first_weekday, month_layout, year_options, MonthLayout};
pub use error::PickerError;
pub use options::{format_time, parse_time, MinimumDate, PickerOptions, DEFAULT_TIME};
pub use picker::{local_today, ConfirmCallback, DateTimePicker, Popover, Transition};
pub use view::{DayCell, PickerView, PopoverView};
