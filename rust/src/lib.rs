//! Rust implementation of the rota duty-assignment engine.
//!
//! This module provides the calendar, availability and fairness machinery behind
//! weekly role rosters and daily cart/point station schedules.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use chrono::NaiveDate;
use pyo3::prelude::*;
use std::collections::HashMap;

pub mod availability;
pub mod calendar;
mod config;
pub mod conflict;
pub mod error;
pub mod fairness;
pub mod interner;
pub mod logging;
mod models;
pub mod pairing;
pub mod scheduler;
pub mod time_range;

pub use calendar::{parse_start_date, DateKey, Period, SpecialDates};
pub use config::SchedulingConfig;
pub use error::ScheduleError;
pub use fairness::{KeepOrder, RandomShuffler, Shuffler};
pub use models::{Cart, Person, Point};
pub use scheduler::{
    Phase, RoleScheduler, Schedule, ScheduleRow, Seat, StationScheduler, UnfilledReason,
};
pub use time_range::{TimeRange, WeeklyAvailability};

/// One schedule row as seen from Python.
///
/// `kind` is `"role"`, `"station"` or `"special"`; fields that do not apply to
/// the kind are `None`. Seats are rendered with their table markers.
#[pyclass(name = "ScheduleRow")]
#[derive(Clone, Debug)]
pub struct PyScheduleRow {
    #[pyo3(get)]
    pub kind: String,
    /// `DD/MM - DD/MM` for weeks, `DD/MM` for days
    #[pyo3(get)]
    pub period: String,
    #[pyo3(get)]
    pub date: NaiveDate,
    #[pyo3(get)]
    pub role: Option<String>,
    #[pyo3(get)]
    pub cart: Option<String>,
    #[pyo3(get)]
    pub point: Option<String>,
    #[pyo3(get)]
    pub slot: Option<String>,
    #[pyo3(get)]
    pub first: Option<String>,
    #[pyo3(get)]
    pub second: Option<String>,
    #[pyo3(get)]
    pub label: Option<String>,
}

impl From<&ScheduleRow> for PyScheduleRow {
    fn from(row: &ScheduleRow) -> Self {
        let mut out = PyScheduleRow {
            kind: String::new(),
            period: row.period_label(),
            date: row.first_day(),
            role: None,
            cart: None,
            point: None,
            slot: None,
            first: None,
            second: None,
            label: None,
        };
        match row {
            ScheduleRow::Role { role, seat, .. } => {
                out.kind = "role".to_string();
                out.role = Some(role.clone());
                out.first = Some(seat.to_string());
            }
            ScheduleRow::Station {
                slot,
                cart,
                point,
                first,
                second,
                ..
            } => {
                out.kind = "station".to_string();
                out.slot = Some(slot.to_string());
                out.cart = Some(cart.clone());
                out.point = Some(point.clone());
                out.first = Some(first.to_string());
                out.second = Some(second.to_string());
            }
            ScheduleRow::Special { label, .. } => {
                out.kind = "special".to_string();
                out.label = Some(label.clone());
            }
        }
        out
    }
}

#[pymethods]
impl PyScheduleRow {
    fn __repr__(&self) -> String {
        match self.kind.as_str() {
            "role" => format!(
                "ScheduleRow(role, {}, {:?} -> {:?})",
                self.period,
                self.role.as_deref().unwrap_or_default(),
                self.first.as_deref().unwrap_or_default()
            ),
            "station" => format!(
                "ScheduleRow(station, {} {}, {:?} @ {:?}: {:?} / {:?})",
                self.period,
                self.slot.as_deref().unwrap_or_default(),
                self.cart.as_deref().unwrap_or_default(),
                self.point.as_deref().unwrap_or_default(),
                self.first.as_deref().unwrap_or_default(),
                self.second.as_deref().unwrap_or_default()
            ),
            _ => format!(
                "ScheduleRow(special, {}, {:?})",
                self.period,
                self.label.as_deref().unwrap_or_default()
            ),
        }
    }
}

fn to_py_err(e: ScheduleError) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(e.to_string())
}

fn special_dates_from(record: Option<HashMap<String, String>>) -> Result<SpecialDates, ScheduleError> {
    match record {
        Some(record) => SpecialDates::from_record(&record),
        None => Ok(SpecialDates::default()),
    }
}

/// Build a weekly role roster.
///
/// # Arguments
/// * `roles` - Role names, in the order rows should be listed
/// * `people` - Roster records; only `name` and `roles` are read
/// * `start` - First day of the first week
/// * `periods` - Number of weeks (>= 1)
/// * `special_dates` - `DD/MM` -> label; a week containing one is replaced by a single row
/// * `config` - Scheduling configuration (seed, verbosity)
///
/// # Returns
/// * List of ScheduleRow in week order, roles in declared order within a week
///
/// # Raises
/// * ValueError on an empty role list, nobody eligible, duplicate names,
///   a bad period count or a malformed special-date key
#[pyfunction]
#[pyo3(signature = (roles, people, start, periods, special_dates=None, config=None))]
fn generate_role_schedule(
    roles: Vec<String>,
    people: Vec<Person>,
    start: NaiveDate,
    periods: i64,
    special_dates: Option<HashMap<String, String>>,
    config: Option<SchedulingConfig>,
) -> PyResult<Vec<PyScheduleRow>> {
    let config = config.unwrap_or_default();
    let special_dates = special_dates_from(special_dates).map_err(to_py_err)?;
    let mut scheduler =
        RoleScheduler::new(&roles, &people, special_dates, start, periods, &config)
            .map_err(to_py_err)?;
    let mut shuffler = RandomShuffler::from_option(config.seed);
    let schedule = scheduler.schedule(&mut shuffler).map_err(to_py_err)?;
    Ok(schedule.rows.iter().map(PyScheduleRow::from).collect())
}

/// Build a daily cart/point station schedule.
///
/// # Arguments
/// * `carts` - Carts in priority order, each listing its points
/// * `points` - Point records with weekly opening windows
/// * `people` - Roster records; `availability`, `category` and `spouse` are read
/// * `start` - First day
/// * `weeks` - Number of weeks to cover (>= 1)
/// * `special_dates` - `DD/MM` -> label; such a day is replaced by a single row
/// * `config` - Scheduling configuration (slot length, pair tolerance, verbosity)
///
/// # Returns
/// * List of ScheduleRow, day by day, each day ordered by cart name and slot start
///
/// # Raises
/// * ValueError if no cart has a known point, nobody has availability,
///   names repeat, or the configuration is invalid
#[pyfunction]
#[pyo3(signature = (carts, points, people, start, weeks, special_dates=None, config=None))]
#[allow(clippy::too_many_arguments)]
fn generate_station_schedule(
    carts: Vec<Cart>,
    points: Vec<Point>,
    people: Vec<Person>,
    start: NaiveDate,
    weeks: i64,
    special_dates: Option<HashMap<String, String>>,
    config: Option<SchedulingConfig>,
) -> PyResult<Vec<PyScheduleRow>> {
    let config = config.unwrap_or_default();
    let special_dates = special_dates_from(special_dates).map_err(to_py_err)?;
    let mut scheduler = StationScheduler::new(
        &carts,
        &points,
        &people,
        special_dates,
        start,
        weeks,
        &config,
    )
    .map_err(to_py_err)?;
    let mut shuffler = RandomShuffler::from_option(config.seed);
    let schedule = scheduler.schedule(&mut shuffler).map_err(to_py_err)?;
    Ok(schedule.rows.iter().map(PyScheduleRow::from).collect())
}

/// Parse a `DD/MM` or `DD/MM/YYYY` start date, using `default_year` when the
/// year is omitted.
///
/// # Raises
/// * ValueError if the text is not a valid date
#[pyfunction]
#[pyo3(name = "parse_start_date")]
fn py_parse_start_date(text: &str, default_year: i32) -> PyResult<NaiveDate> {
    parse_start_date(text, default_year).map_err(to_py_err)
}

/// The rota.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Roster records
    m.add_class::<Person>()?;
    m.add_class::<Cart>()?;
    m.add_class::<Point>()?;
    m.add_class::<PyScheduleRow>()?;

    // Config types
    m.add_class::<SchedulingConfig>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(generate_role_schedule, m)?)?;
    m.add_function(wrap_pyfunction!(generate_station_schedule, m)?)?;
    m.add_function(wrap_pyfunction!(py_parse_start_date, m)?)?;

    Ok(())
}
