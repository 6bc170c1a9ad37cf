//! Plain-text drawing of a [`PickerView`].

use datetime_picker::{DayCell, PickerView, PopoverView};

/// Legend printed under the grid.
pub const LEGEND: &str = "[n] selected  (n) unavailable";

/// Draw the whole widget: the trigger line, then the popover if open.
pub fn render_view(view: &PickerView) -> String {
    let mut out = format!("[ {} ]\n", view.trigger_label);
    if let Some(popover) = &view.popover {
        out.push_str(&render_popover(popover));
    }
    out
}

fn render_popover(popover: &PopoverView) -> String {
    let first = popover.year_options.first().copied().unwrap_or(popover.year);
    let last = popover.year_options.last().copied().unwrap_or(popover.year);

    let mut out = String::new();
    out.push_str(&format!(
        "< {} {} >  (years {first}-{last})\n",
        popover.month_label, popover.year
    ));
    out.push_str(&render_grid(&popover.weekday_labels, &popover.cells));
    out.push_str(&format!("{} {}\n", popover.time_label, popover.time_value));
    out.push_str(&format!("[ {} ]\n", popover.confirm_label));
    out
}

/// Draw the weekday header and the day cells, seven to a row.
pub fn render_grid(weekday_labels: &[&str; 7], cells: &[DayCell]) -> String {
    let mut out = String::new();
    let header: Vec<String> = weekday_labels.iter().map(|l| format!(" {l:>2} ")).collect();
    out.push_str(header.concat().trim_end());
    out.push('\n');

    for row in cells.chunks(7) {
        let line: String = row.iter().map(render_cell).collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out.push_str(LEGEND);
    out.push('\n');
    out
}

fn render_cell(cell: &DayCell) -> String {
    match *cell {
        DayCell::Blank => "    ".to_string(),
        DayCell::Day { day, disabled: true, .. } => format!("({day:>2})"),
        DayCell::Day { day, selected: true, .. } => format!("[{day:>2}]"),
        DayCell::Day { day, .. } => format!(" {day:>2} "),
    }
}
