use thiserror::Error;

/// Errors raised by the chip input component and its configuration layer
#[derive(Debug, Error)]
pub enum ChipInputError {
    #[error("Invalid container: {0}")]
    InvalidContainer(String),

    #[error("Invalid color for `{option}`: {value}")]
    InvalidColor { option: &'static str, value: String },

    #[error("Invalid outline style: {0} (expected solid, dashed, double or thick)")]
    InvalidOutlineStyle(String),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
