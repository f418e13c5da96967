//! Error type shared by the parsing boundary and the schedulers.

use thiserror::Error;

/// Errors that can occur while building a schedule.
///
/// Everything except `MalformedTimeRange` is a configuration-shape error: it is
/// detected before the first assignment and aborts the whole run. Malformed
/// availability entries are skipped by the schedulers; the variant only escapes
/// from direct calls to [`crate::TimeRange`] parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid range: {0}")]
    InvalidRange(String),
    #[error("No duties defined")]
    NoDutiesDefined,
    #[error("No eligible people")]
    NoEligiblePeople,
    #[error("Malformed time range: {0:?}")]
    MalformedTimeRange(String),
    #[error("Malformed date key: {0:?} (expected DD/MM)")]
    MalformedDateKey(String),
    #[error("Duplicate person: {0}")]
    DuplicatePerson(String),
    #[error("Duplicate cart: {0}")]
    DuplicateCart(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
