//! `dtpick` — preview the datetime-picker widget in a terminal.
//!
//! ```text
//! dtpick grid --minimum 2024-06-15T00:00 --month 2024-06
//! dtpick run --minimum 2024-06-15T00:00 --today 2024-06-20 toggle day=10 day=25 time=08:00 confirm
//! ```

mod action;
mod render;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use datetime_picker::{
    local_today, parse_time, DateTimePicker, MinimumDate, PickerView, DEFAULT_TIME,
};
use log::info;
use serde::Serialize;

use action::{Action, Step};

#[derive(Parser)]
#[command(name = "dtpick", version, about = "Preview the datetime-picker widget")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the day grid of one month against a minimum date
    Grid {
        /// Earliest selectable date-time (e.g. 2024-06-15T00:00)
        #[arg(long)]
        minimum: String,

        /// Month to draw as YYYY-MM (defaults to the current month)
        #[arg(long)]
        month: Option<String>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Replay interactions and print the resulting widget
    Run {
        /// Earliest selectable date-time (e.g. 2024-06-15T00:00)
        #[arg(long)]
        minimum: String,

        /// Date the picker opens on as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        today: Option<String>,

        /// Initial time of day
        #[arg(long, default_value = DEFAULT_TIME)]
        time: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,

        /// Interactions: toggle, prev, next, confirm, year=N, day=N, time=HH:MM
        actions: Vec<String>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RunReport {
    steps: Vec<Step>,
    view: PickerView,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Grid {
            minimum,
            month,
            json,
        } => grid(&minimum, month.as_deref(), json),
        Command::Run {
            minimum,
            today,
            time,
            json,
            actions,
        } => run(&minimum, today.as_deref(), &time, json, &actions),
    }
}

fn parse_minimum(s: &str) -> Result<MinimumDate> {
    MinimumDate::parse(s).context("failed to parse --minimum")
}

fn parse_month(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
        .with_context(|| format!("invalid month '{s}', expected YYYY-MM"))
}

fn outcome_label(applied: bool) -> &'static str {
    if applied {
        "applied"
    } else {
        "rejected"
    }
}

fn grid(minimum: &str, month: Option<&str>, json: bool) -> Result<()> {
    let minimum = parse_minimum(minimum)?;
    let anchor = match month {
        Some(m) => parse_month(m)?,
        None => local_today(),
    };

    let picker = DateTimePicker::new(minimum, anchor);
    let cells = picker.render_days();

    if json {
        let out = serde_json::to_string_pretty(&cells).context("failed to serialize grid")?;
        println!("{out}");
    } else {
        print!(
            "{}",
            render::render_grid(&datetime_picker::calendar::WEEKDAY_LABELS, &cells)
        );
    }
    Ok(())
}

fn run(
    minimum: &str,
    today: Option<&str>,
    time: &str,
    json: bool,
    actions: &[String],
) -> Result<()> {
    let minimum = parse_minimum(minimum)?;
    let today = match today {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("invalid --today '{s}', expected YYYY-MM-DD"))?,
        None => local_today(),
    };
    let time = parse_time(time).context("failed to parse --time")?;
    let actions = actions
        .iter()
        .map(|a| a.parse::<Action>())
        .collect::<Result<Vec<_>>>()?;

    let mut picker = DateTimePicker::new(minimum, today).with_default_time(time);
    let steps: Vec<Step> = actions
        .iter()
        .map(|action| {
            let step = action.apply(&mut picker);
            info!("{} -> {}", step.action, outcome_label(step.applied));
            step
        })
        .collect();

    let report = RunReport {
        steps,
        view: picker.render(),
    };

    if json {
        let out = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        println!("{out}");
    } else {
        for step in &report.steps {
            let outcome = outcome_label(step.applied);
            match &step.confirmed {
                Some(value) => println!("{}: {outcome} {value}", step.action),
                None => println!("{}: {outcome}", step.action),
            }
        }
        print!("{}", render::render_view(&report.view));
    }
    Ok(())
}
