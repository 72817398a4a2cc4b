//! Error type for user-supplied calendar input.

use chrono::NaiveDate;

/// Errors raised while turning command-line input into a calendar.
///
/// The navigation state machine itself never fails: out-of-range dates are
/// clamped and disabled dates are ignored.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalNavError {
    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid filter term: {0}")]
    InvalidFilter(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Minimum date {min} is after maximum date {max}")]
    InvertedBounds { min: NaiveDate, max: NaiveDate },
}
