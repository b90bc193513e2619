//! Report error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// Invalid date range.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },

    /// Month outside 1..=12.
    #[error("Invalid month: {0}")]
    InvalidMonth(u32),

    /// Year that cannot be represented as a calendar date.
    #[error("Invalid year: {0}")]
    InvalidYear(i32),

    /// Stored account type label that is not recognized.
    #[error("Unknown account type: {0}")]
    UnknownAccountType(String),

    /// Stored balance nature label that is not recognized.
    #[error("Unknown balance nature: {0}")]
    UnknownBalanceNature(String),
}
