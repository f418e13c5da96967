//! Daily time windows and weekly availability maps.
//!
//! Everything here works in minutes since midnight. The textual `HH:MM-HH:MM`
//! form only exists at the boundary: records are parsed once into
//! [`TimeRange`] / [`WeeklyAvailability`] and the engine never touches strings.

use chrono::Weekday;
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ScheduleError;
use crate::log_checks;

/// Minutes in a day; the only valid `24:xx` endpoint is `24:00`.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A half-open window `[start, end)` within one day, in minutes since midnight.
///
/// Invariant: `start < end <= 24:00`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeRange {
    pub start: u16,
    pub end: u16,
}

impl TimeRange {
    /// Build a window from minute offsets.
    pub fn new(start: u16, end: u16) -> Result<Self, ScheduleError> {
        if start >= end || end > MINUTES_PER_DAY {
            return Err(ScheduleError::MalformedTimeRange(format!(
                "{}-{}",
                format_minutes(start),
                format_minutes(end)
            )));
        }
        Ok(Self { start, end })
    }

    /// Length of the window in minutes.
    #[inline]
    pub fn duration(&self) -> u16 {
        self.end - self.start
    }

    /// Half-open overlap: `start1 < end2 && start2 < end1`.
    ///
    /// Touching windows (`09:00-10:00` and `10:00-11:00`) do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            format_minutes(self.start),
            format_minutes(self.end)
        )
    }
}

impl FromStr for TimeRange {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ScheduleError::MalformedTimeRange(s.to_string());
        let (start, end) = s.split_once('-').ok_or_else(malformed)?;
        let start = parse_clock(start).ok_or_else(malformed)?;
        let end = parse_clock(end).ok_or_else(malformed)?;
        Self::new(start, end).map_err(|_| malformed())
    }
}

/// Parse `HH:MM` into minutes since midnight.
fn parse_clock(text: &str) -> Option<u16> {
    let (hours, minutes) = text.trim().split_once(':')?;
    if hours.is_empty() || minutes.len() != 2 {
        return None;
    }
    let hours: u16 = hours.parse().ok()?;
    let minutes: u16 = minutes.parse().ok()?;
    if minutes >= 60 || hours > 24 || (hours == 24 && minutes != 0) {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Format minutes since midnight as `HH:MM`.
pub fn format_minutes(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Resolve a day-name key from a roster record.
///
/// Accepts whatever `chrono` accepts (`Monday`, `mon`, any case) plus the
/// Portuguese names used by the legacy data files.
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    let trimmed = name.trim();
    if let Ok(day) = trimmed.parse::<Weekday>() {
        return Some(day);
    }
    let lowered = trimmed.to_lowercase();
    let base = lowered.strip_suffix("-feira").unwrap_or(&lowered);
    match base {
        "segunda" => Some(Weekday::Mon),
        "terça" | "terca" => Some(Weekday::Tue),
        "quarta" => Some(Weekday::Wed),
        "quinta" => Some(Weekday::Thu),
        "sexta" => Some(Weekday::Fri),
        "sábado" | "sabado" => Some(Weekday::Sat),
        "domingo" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Weekly availability: weekday -> ordered windows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeeklyAvailability {
    windows: FxHashMap<Weekday, Vec<TimeRange>>,
}

impl WeeklyAvailability {
    /// Parse a `day name -> ["HH:MM-HH:MM", ...]` record.
    ///
    /// Unknown day names and malformed ranges are skipped (and logged at CHECKS
    /// level) instead of failing the run; the owner simply has no availability
    /// through that entry. Keys are visited in sorted order so that two keys
    /// naming the same weekday merge deterministically.
    pub fn from_record(record: &HashMap<String, Vec<String>>, owner: &str, verbosity: u8) -> Self {
        let mut keys: Vec<&String> = record.keys().collect();
        keys.sort();

        let mut windows: FxHashMap<Weekday, Vec<TimeRange>> = FxHashMap::default();
        for key in keys {
            let Some(day) = parse_weekday(key) else {
                log_checks!(verbosity, "    Skipping {}: unknown day {:?}", owner, key);
                continue;
            };
            for text in &record[key] {
                match text.parse::<TimeRange>() {
                    Ok(range) => windows.entry(day).or_default().push(range),
                    Err(e) => {
                        log_checks!(verbosity, "    Skipping {} on {}: {}", owner, day, e);
                    }
                }
            }
        }

        Self { windows }
    }

    /// Add a window for a weekday (keeps insertion order).
    pub fn insert(&mut self, day: Weekday, range: TimeRange) {
        self.windows.entry(day).or_default().push(range);
    }

    /// Windows declared for a weekday, in declaration order.
    pub fn windows_on(&self, day: Weekday) -> &[TimeRange] {
        self.windows.get(&day).map(|w| w.as_slice()).unwrap_or(&[])
    }

    /// True if any window on `day` overlaps `slot`.
    pub fn covers(&self, day: Weekday, slot: &TimeRange) -> bool {
        self.windows_on(day).iter().any(|w| w.overlaps(slot))
    }

    /// True if no weekday has a usable window.
    pub fn is_empty(&self) -> bool {
        self.windows.values().all(|w| w.is_empty())
    }
}
