//! Error types for picker construction and input parsing.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PickerError {
    #[error("Invalid minimum date: {0}")]
    InvalidMinimumDate(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

pub type Result<T> = std::result::Result<T, PickerError>;
