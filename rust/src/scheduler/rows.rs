//! Output rows and the finished schedule.

use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt;

use crate::calendar::{DateKey, Period};
use crate::time_range::TimeRange;

/// Why a seat has nobody in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnfilledReason {
    /// Nobody eligible and free was available.
    NoCandidate,
    /// One person was found but no acceptable partner.
    NeedsSecond,
}

/// One assignee position in a row.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Seat {
    Assigned(String),
    Unfilled(UnfilledReason),
}

impl Seat {
    pub fn is_unfilled(&self) -> bool {
        matches!(self, Seat::Unfilled(_))
    }

    /// The assignee's name, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Seat::Assigned(name) => Some(name.as_str()),
            Seat::Unfilled(_) => None,
        }
    }
}

/// Renders the legacy table markers: `-` for nobody available, `?` for a
/// missing partner.
impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Assigned(name) => f.write_str(name),
            Seat::Unfilled(UnfilledReason::NoCandidate) => f.write_str("-"),
            Seat::Unfilled(UnfilledReason::NeedsSecond) => f.write_str("?"),
        }
    }
}

/// One line of the schedule table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScheduleRow {
    /// A role filled (or not) for a week.
    Role {
        period: Period,
        role: String,
        seat: Seat,
    },
    /// A cart placed at a point for one time slot, with two seats.
    Station {
        date: NaiveDate,
        slot: TimeRange,
        cart: String,
        point: String,
        first: Seat,
        second: Seat,
    },
    /// A special date that replaces all assignments of its period.
    Special { period: Period, label: String },
}

impl ScheduleRow {
    /// `DD/MM - DD/MM` for weekly rows, `DD/MM` for daily rows.
    pub fn period_label(&self) -> String {
        match self {
            ScheduleRow::Role { period, .. } | ScheduleRow::Special { period, .. } => {
                period.label()
            }
            ScheduleRow::Station { date, .. } => DateKey::of(*date).to_string(),
        }
    }

    /// First day covered by the row.
    pub fn first_day(&self) -> NaiveDate {
        match self {
            ScheduleRow::Role { period, .. } | ScheduleRow::Special { period, .. } => period.start,
            ScheduleRow::Station { date, .. } => *date,
        }
    }

    pub fn is_special(&self) -> bool {
        matches!(self, ScheduleRow::Special { .. })
    }

    /// Seats carried by the row (none for special rows).
    pub fn seats(&self) -> Vec<&Seat> {
        match self {
            ScheduleRow::Role { seat, .. } => vec![seat],
            ScheduleRow::Station { first, second, .. } => vec![first, second],
            ScheduleRow::Special { .. } => vec![],
        }
    }

    /// Names assigned on this row.
    pub fn assignees(&self) -> Vec<&str> {
        self.seats().into_iter().filter_map(|s| s.name()).collect()
    }
}

/// Result of one scheduling run.
#[derive(Clone, Debug, Default)]
pub struct Schedule {
    /// Rows in period order.
    pub rows: Vec<ScheduleRow>,
    /// Final total assignments per person, in roster order.
    pub usage: Vec<(String, u32)>,
    pub metadata: HashMap<String, String>,
}

impl Schedule {
    /// Number of seats left unfilled across all rows.
    pub fn unfilled_seats(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|r| r.seats())
            .filter(|s| s.is_unfilled())
            .count()
    }

    /// Final usage count for `person` (0 if unknown).
    pub fn usage_of(&self, person: &str) -> u32 {
        self.usage
            .iter()
            .find(|(name, _)| name == person)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}
