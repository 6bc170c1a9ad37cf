//! Scripted interactions for `dtpick run`.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context};
use datetime_picker::{DateTimePicker, Transition};
use serde::Serialize;

/// One user interaction, written on the command line as `toggle`, `prev`,
/// `next`, `confirm`, `year=N`, `day=N` or `time=HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Toggle,
    PreviousMonth,
    NextMonth,
    Year(i32),
    Day(u32),
    Time(String),
    Confirm,
}

impl FromStr for Action {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "toggle" => return Ok(Action::Toggle),
            "prev" => return Ok(Action::PreviousMonth),
            "next" => return Ok(Action::NextMonth),
            "confirm" => return Ok(Action::Confirm),
            _ => {}
        }

        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| anyhow!("unknown action '{s}'"))?;
        match key {
            "year" => Ok(Action::Year(
                value.parse().with_context(|| format!("invalid year in '{s}'"))?,
            )),
            "day" => Ok(Action::Day(
                value.parse().with_context(|| format!("invalid day in '{s}'"))?,
            )),
            "time" => Ok(Action::Time(value.to_string())),
            _ => bail!("unknown action '{s}'"),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Toggle => write!(f, "toggle"),
            Action::PreviousMonth => write!(f, "prev"),
            Action::NextMonth => write!(f, "next"),
            Action::Year(y) => write!(f, "year={y}"),
            Action::Day(d) => write!(f, "day={d}"),
            Action::Time(t) => write!(f, "time={t}"),
            Action::Confirm => write!(f, "confirm"),
        }
    }
}

/// What happened when an action was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub action: String,
    pub applied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmed: Option<String>,
}

impl Action {
    /// Apply the action to `picker`.
    pub fn apply(&self, picker: &mut DateTimePicker) -> Step {
        let mut confirmed = None;
        let outcome = match self {
            Action::Toggle => {
                picker.toggle();
                Transition::Applied
            }
            Action::PreviousMonth => {
                picker.previous_month();
                Transition::Applied
            }
            Action::NextMonth => {
                picker.next_month();
                Transition::Applied
            }
            Action::Year(year) => picker.select_year(*year),
            Action::Day(day) => picker.select_day(*day),
            Action::Time(value) => picker.select_time(value),
            Action::Confirm => match picker.confirm() {
                Some(value) => {
                    confirmed = Some(value.format("%Y-%m-%dT%H:%M").to_string());
                    Transition::Applied
                }
                None => Transition::Rejected,
            },
        };
        Step {
            action: self.to_string(),
            applied: outcome.is_applied(),
            confirmed,
        }
    }
}
