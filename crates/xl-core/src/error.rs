//! Error types for the divination engine.

use thiserror::Error;

/// Result type for divination operations.
pub type XlResult<T> = Result<T, XlError>;

/// Errors that can occur while preparing or running a divination.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XlError {
    /// Lunar month outside 1-12.
    #[error("month out of range: {0} (expected 1-12)")]
    MonthOutOfRange(u32),

    /// Lunar day outside 1 to the configured maximum.
    #[error("day out of range: {day} (expected 1-{max})")]
    DayOutOfRange {
        /// The rejected day.
        day: u32,
        /// The largest accepted day.
        max: u32,
    },

    /// Two-hour period outside 1-12.
    #[error("hour out of range: {0} (expected 1-12)")]
    HourOutOfRange(u32),

    /// A palace name that matches none of the six palaces.
    #[error("unknown palace: \"{0}\"")]
    UnknownPalace(String),

    /// A clock time string that could not be parsed.
    #[error("invalid clock time: \"{0}\" (expected HH:MM)")]
    InvalidClockTime(String),

    /// The external lunar calendar could not convert a date.
    #[error("calendar conversion failed: {0}")]
    Calendar(String),
}
