//! Pure projection of picker state into what the host draws.
//!
//! [`DateTimePicker::render`] never mutates the picker; a host (the wasm
//! bindings, the `dtpick` previewer, or a test) calls it after every
//! interaction and redraws from the returned [`PickerView`].

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::calendar::{month_layout, month_name, year_options, WEEKDAY_LABELS};
use crate::options::format_time;
use crate::picker::DateTimePicker;

/// Caption of the confirm button.
pub const CONFIRM_LABEL: &str = "Confirm Date & Time";

/// Caption above the time input.
pub const TIME_LABEL: &str = "Select Time:";

/// Everything needed to draw the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickerView {
    /// Trigger text, e.g. `"Thu Jun 20 2024 12:30"`.
    pub trigger_label: String,
    /// Present only while the popover is open.
    pub popover: Option<PopoverView>,
}

/// Contents of the open popover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopoverView {
    pub month_label: &'static str,
    pub year: i32,
    pub year_options: Vec<i32>,
    pub weekday_labels: [&'static str; 7],
    pub cells: Vec<DayCell>,
    pub time_label: &'static str,
    pub time_value: String,
    pub confirm_label: &'static str,
}

/// One slot of the 7-column day grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DayCell {
    /// Padding before day 1.
    Blank,
    Day {
        day: u32,
        /// Before the minimum date: greyed out and not clickable.
        disabled: bool,
        /// The selected day, highlighted. Never set on a disabled day.
        selected: bool,
    },
}

impl DayCell {
    /// Whether a click on this cell reaches [`DateTimePicker::select_day`].
    pub fn is_clickable(&self) -> bool {
        matches!(self, DayCell::Day { disabled: false, .. })
    }
}

impl DateTimePicker {
    /// Project the current state into a [`PickerView`].
    pub fn render(&self) -> PickerView {
        PickerView {
            trigger_label: self.trigger_label(),
            popover: self.is_open().then(|| self.render_popover()),
        }
    }

    /// The text on the trigger button: the selected day and time.
    pub fn trigger_label(&self) -> String {
        format!(
            "{} {}",
            self.selected_date().format("%a %b %d %Y"),
            format_time(self.selected_time())
        )
    }

    fn render_popover(&self) -> PopoverView {
        let selected = self.selected_date();
        PopoverView {
            month_label: month_name(selected.month()),
            year: selected.year(),
            year_options: year_options(selected.year()),
            weekday_labels: WEEKDAY_LABELS,
            cells: self.render_days(),
            time_label: TIME_LABEL,
            time_value: format_time(self.selected_time()),
            confirm_label: CONFIRM_LABEL,
        }
    }

    /// Day grid of the displayed month: leading blanks, then one cell per
    /// day, each checked against the minimum on its own.
    pub fn render_days(&self) -> Vec<DayCell> {
        let selected = self.selected_date();
        let layout = month_layout(selected.year(), selected.month());

        let blanks = (0..layout.leading_blanks).map(|_| DayCell::Blank);
        let days = (1..=layout.days).map(|day| {
            let disabled = NaiveDate::from_ymd_opt(layout.year, layout.month, day)
                .is_none_or(|date| self.is_day_disabled(date));
            DayCell::Day {
                day,
                disabled,
                selected: !disabled && day == selected.day(),
            }
        });
        blanks.chain(days).collect()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::MinimumDate;
    use crate::picker::Transition;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn picker(min: &str, today: NaiveDate) -> DateTimePicker {
        DateTimePicker::new(MinimumDate::parse(min).unwrap(), today)
    }

    fn day_cells(cells: &[DayCell]) -> Vec<(u32, bool, bool)> {
        cells
            .iter()
            .filter_map(|c| match *c {
                DayCell::Day {
                    day,
                    disabled,
                    selected,
                } => Some((day, disabled, selected)),
                DayCell::Blank => None,
            })
            .collect()
    }

    fn blank_count(cells: &[DayCell]) -> usize {
        cells.iter().take_while(|c| **c == DayCell::Blank).count()
    }

    #[test]
    fn test_closed_view_has_no_popover() {
        let p = picker("2024-06-15T00:00", date(2024, 6, 20));
        let view = p.render();
        assert_eq!(view.trigger_label, "Thu Jun 20 2024 12:30");
        assert!(view.popover.is_none());
    }

    #[test]
    fn test_trigger_label_pads_day() {
        let p = picker("2024-01-01", date(2024, 6, 1));
        assert_eq!(p.trigger_label(), "Sat Jun 01 2024 12:30");
    }

    #[test]
    fn test_open_view_header() {
        let mut p = picker("2024-06-15T00:00", date(2024, 6, 20));
        p.toggle();
        let popover = p.render().popover.unwrap();
        assert_eq!(popover.month_label, "June");
        assert_eq!(popover.year, 2024);
        assert_eq!(popover.weekday_labels, ["S", "M", "T", "W", "T", "F", "S"]);
        assert_eq!(popover.year_options.len(), 100);
        assert_eq!(popover.year_options[0], 1974);
        assert_eq!(popover.year_options[99], 2073);
        assert_eq!(popover.time_value, "12:30");
        assert_eq!(popover.confirm_label, "Confirm Date & Time");
    }

    #[test]
    fn test_june_2024_grid_with_minimum_on_fifteenth() {
        let mut p = picker("2024-06-15T00:00", date(2024, 6, 25));
        p.toggle();
        let cells = p.render_days();

        // June 1 2024 is a Saturday.
        assert_eq!(blank_count(&cells), 6);

        let days = day_cells(&cells);
        assert_eq!(days.len(), 30);
        for (day, disabled, _) in &days {
            assert_eq!(*disabled, *day < 15, "day {day}");
        }
        let selected: Vec<u32> = days.iter().filter(|d| d.2).map(|d| d.0).collect();
        assert_eq!(selected, vec![25]);

        // Clicking a disabled day is a no-op; an enabled one selects it.
        assert_eq!(p.select_day(10), Transition::Rejected);
        assert_eq!(p.selected_date(), date(2024, 6, 25));
        assert_eq!(p.select_day(20), Transition::Applied);
        assert_eq!(p.selected_date(), date(2024, 6, 20));
    }

    #[test]
    fn test_february_day_counts() {
        let leap = picker("2000-01-01", date(2024, 2, 10));
        assert_eq!(day_cells(&leap.render_days()).len(), 29);

        let common = picker("2000-01-01", date(2023, 2, 10));
        assert_eq!(day_cells(&common.render_days()).len(), 28);
    }

    #[test]
    fn test_wednesday_start_renders_three_blanks() {
        // May 2024 starts on a Wednesday.
        let p = picker("2000-01-01", date(2024, 5, 10));
        assert_eq!(blank_count(&p.render_days()), 3);
    }

    #[test]
    fn test_disabled_selected_day_is_not_highlighted() {
        let mut p = picker("2024-06-15T00:00", date(2024, 6, 20));
        p.previous_month();
        let days = day_cells(&p.render_days());
        assert!(days.iter().all(|(_, disabled, selected)| *disabled && !*selected));
    }

    #[test]
    fn test_clickable_cells() {
        let p = picker("2024-06-15T00:00", date(2024, 6, 20));
        let cells = p.render_days();
        let clickable: Vec<u32> = cells
            .iter()
            .filter(|c| c.is_clickable())
            .filter_map(|c| match c {
                DayCell::Day { day, .. } => Some(*day),
                DayCell::Blank => None,
            })
            .collect();
        assert_eq!(clickable, (15..=30).collect::<Vec<_>>());
        assert!(!DayCell::Blank.is_clickable());
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let mut p = picker("2024-06-15T00:00", date(2024, 6, 20));
        p.toggle();
        let json = serde_json::to_value(p.render()).unwrap();
        assert_eq!(json["triggerLabel"], "Thu Jun 20 2024 12:30");
        assert_eq!(json["popover"]["monthLabel"], "June");
        assert_eq!(json["popover"]["cells"][0]["kind"], "blank");
        assert_eq!(json["popover"]["cells"][6]["kind"], "day");
        assert_eq!(json["popover"]["cells"][6]["day"], 1);
        assert_eq!(json["popover"]["cells"][6]["disabled"], true);
    }
}
