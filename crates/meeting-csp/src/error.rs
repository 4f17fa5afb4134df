//! Error types for meeting-csp operations.

use chrono::NaiveDate;
use thiserror::Error;

/// Malformed solver input.
///
/// An unsatisfiable problem is not an error: [`crate::solve`] reports it as
/// `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CspError {
    #[error("Invalid meeting count: at least one meeting is required")]
    NoMeetings,

    #[error("Invalid date range: start {start} is after end {end}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid constraint: meeting {index} is out of range for {n_meetings} meetings")]
    MeetingOutOfRange { index: usize, n_meetings: usize },

    #[error("Unknown operator: '{0}'")]
    UnknownOperator(String),
}

pub type Result<T> = std::result::Result<T, CspError>;
