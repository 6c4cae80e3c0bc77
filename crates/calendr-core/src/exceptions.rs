use std::fmt;

/// Errors surfaced synchronously to callers of the engine's public operations.
/// Selecting a disabled date is not an error, it is silently ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum CalendarError {
    /// A required option field was not supplied
    MissingOption(&'static str),
    YearOutOfRange {
        year: i32,
        min: i32,
        max: i32,
    },
    /// Input could not be parsed as a calendar date
    InvalidDate(String),
    /// Host configuration value that cannot be interpreted
    Config(String),
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingOption(field) => write!(f, "Missing required option: {field}"),
            Self::YearOutOfRange { year, min, max } => {
                write!(f, "Year {year} is out of range: must be within [{min}, {max}]")
            }
            Self::InvalidDate(input) => write!(f, "Invalid date: '{input}'"),
            Self::Config(msg) => write!(f, "ConfigError: {msg}"),
        }
    }
}

impl std::error::Error for CalendarError {}
