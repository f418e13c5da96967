//! Calendar expansion: periods, time slots and short date keys.

use chrono::{Datelike, Days, NaiveDate};
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::fmt;

use crate::error::ScheduleError;
use crate::time_range::TimeRange;

/// Days in a role-mode period.
pub const DAYS_PER_WEEK: u64 = 7;

/// A half-open date interval `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    /// Last day inside the period.
    pub fn last_day(&self) -> NaiveDate {
        self.end.pred_opt().unwrap_or(self.start)
    }

    /// Days in the period, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d < end)
    }

    /// Compact label: `DD/MM` for a single day, `DD/MM - DD/MM` otherwise.
    pub fn label(&self) -> String {
        let last = self.last_day();
        if last == self.start {
            DateKey::of(self.start).to_string()
        } else {
            format!("{} - {}", DateKey::of(self.start), DateKey::of(last))
        }
    }
}

fn check_count(count: i64) -> Result<u64, ScheduleError> {
    if count < 1 {
        return Err(ScheduleError::InvalidRange(format!(
            "period count must be at least 1, got {}",
            count
        )));
    }
    Ok(count as u64)
}

fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate, ScheduleError> {
    date.checked_add_days(Days::new(days)).ok_or_else(|| {
        ScheduleError::InvalidRange(format!("{} + {} days is out of range", date, days))
    })
}

/// Expand `count` consecutive 7-day periods starting at `start`.
pub fn expand_weeks(start: NaiveDate, count: i64) -> Result<Vec<Period>, ScheduleError> {
    let count = check_count(count)?;
    let total = count
        .checked_mul(DAYS_PER_WEEK)
        .ok_or_else(|| ScheduleError::InvalidRange(format!("{} weeks is too many", count)))?;
    add_days(start, total)?;

    let mut periods = Vec::with_capacity(count as usize);
    let mut current = start;
    for _ in 0..count {
        let end = add_days(current, DAYS_PER_WEEK)?;
        periods.push(Period {
            start: current,
            end,
        });
        current = end;
    }
    Ok(periods)
}

/// Expand `weeks` weeks into single-day periods (`weeks * 7` of them).
pub fn expand_days(start: NaiveDate, weeks: i64) -> Result<Vec<Period>, ScheduleError> {
    let weeks = check_count(weeks)?;
    let total = weeks
        .checked_mul(DAYS_PER_WEEK)
        .ok_or_else(|| ScheduleError::InvalidRange(format!("{} weeks is too many", weeks)))?;
    // Validate the whole span up front so no partial expansion is returned.
    add_days(start, total)?;

    let mut periods = Vec::with_capacity(total as usize);
    let mut current = start;
    for _ in 0..total {
        let end = add_days(current, 1)?;
        periods.push(Period {
            start: current,
            end,
        });
        current = end;
    }
    Ok(periods)
}

/// Split a window into back-to-back slots of `duration` minutes.
///
/// Pure truncation: a trailing remainder shorter than `duration` is dropped.
pub fn split_into_slots(window: TimeRange, duration: u16) -> Vec<TimeRange> {
    let mut slots = Vec::new();
    if duration == 0 {
        return slots;
    }
    let mut current = window.start;
    while current + duration <= window.end {
        slots.push(TimeRange {
            start: current,
            end: current + duration,
        });
        current += duration;
    }
    slots
}

/// A year-less `DD/MM` key, as used for special dates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateKey {
    pub month: u32,
    pub day: u32,
}

impl DateKey {
    /// Key of a concrete date.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    /// Parse `DD/MM`. 29/02 is accepted.
    pub fn parse(text: &str) -> Result<Self, ScheduleError> {
        let malformed = || ScheduleError::MalformedDateKey(text.to_string());
        let (day, month) = text.trim().split_once('/').ok_or_else(malformed)?;
        let day: u32 = day.trim().parse().map_err(|_| malformed())?;
        let month: u32 = month.trim().parse().map_err(|_| malformed())?;
        // 2000 is a leap year, so this validates day-of-month for every key.
        NaiveDate::from_ymd_opt(2000, month, day).ok_or_else(malformed)?;
        Ok(Self { month, day })
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.day, self.month)
    }
}

/// Parse a start date given as `DD/MM/YYYY` or `DD/MM` (using `default_year`).
pub fn parse_start_date(text: &str, default_year: i32) -> Result<NaiveDate, ScheduleError> {
    let invalid = || ScheduleError::InvalidRange(format!("malformed start date {:?}", text));
    let parts: Vec<&str> = text.trim().split('/').map(|p| p.trim()).collect();
    let (day, month, year) = match parts.as_slice() {
        [day, month] => (*day, *month, None),
        [day, month, year] => (*day, *month, Some(*year)),
        _ => return Err(invalid()),
    };
    let day: u32 = day.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let year: i32 = match year {
        Some(y) => y.parse().map_err(|_| invalid())?,
        None => default_year,
    };
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Special-date labels keyed by `DD/MM`.
#[derive(Clone, Debug, Default)]
pub struct SpecialDates {
    labels: FxHashMap<DateKey, String>,
}

impl SpecialDates {
    /// Parse a `"DD/MM" -> label` record. Any bad key fails the whole record.
    pub fn from_record(record: &HashMap<String, String>) -> Result<Self, ScheduleError> {
        let mut labels = FxHashMap::default();
        for (key, label) in record {
            labels.insert(DateKey::parse(key)?, label.clone());
        }
        Ok(Self { labels })
    }

    pub fn insert(&mut self, key: DateKey, label: impl Into<String>) {
        self.labels.insert(key, label.into());
    }

    /// Label of the first day in `period` that carries a special date.
    pub fn lookup(&self, period: &Period) -> Option<&str> {
        if self.labels.is_empty() {
            return None;
        }
        period
            .days()
            .find_map(|day| self.labels.get(&DateKey::of(day)))
            .map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
