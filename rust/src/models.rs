//! Roster records handed to the engine by the host application.
//!
//! These mirror the persisted records loosely (string day names, `HH:MM-HH:MM`
//! ranges); the schedulers parse them into typed indexes before assigning.

use pyo3::prelude::*;
use std::collections::HashMap;

// Note: We use std HashMap here for PyO3 interface compatibility

/// A person on the roster.
///
/// Role scheduling reads `roles`; station scheduling reads `availability`,
/// `category` and `spouse`.
#[pyclass]
#[derive(Clone, Debug, Default)]
pub struct Person {
    #[pyo3(get, set)]
    pub name: String,
    #[pyo3(get, set)]
    pub roles: Vec<String>,
    /// Day name -> ["HH:MM-HH:MM", ...]
    #[pyo3(get, set)]
    pub availability: HashMap<String, Vec<String>>,
    #[pyo3(get, set)]
    pub category: Option<String>,
    #[pyo3(get, set)]
    pub spouse: Option<String>,
}

impl Person {
    /// A person eligible for the given roles.
    pub fn with_roles(name: &str, roles: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            ..Self::default()
        }
    }

    /// A person for station scheduling, with an optional category tag.
    pub fn with_category(name: &str, category: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            category: category.map(str::to_string),
            ..Self::default()
        }
    }

    /// Add availability windows for a day.
    pub fn available(mut self, day: &str, ranges: &[&str]) -> Self {
        self.availability
            .entry(day.to_string())
            .or_default()
            .extend(ranges.iter().map(|r| r.to_string()));
        self
    }

    /// Set the spouse reference (the other record must point back).
    pub fn married_to(mut self, spouse: &str) -> Self {
        self.spouse = Some(spouse.to_string());
        self
    }
}

#[pymethods]
impl Person {
    #[new]
    #[pyo3(signature = (name, roles=None, availability=None, category=None, spouse=None))]
    fn new(
        name: String,
        roles: Option<Vec<String>>,
        availability: Option<HashMap<String, Vec<String>>>,
        category: Option<String>,
        spouse: Option<String>,
    ) -> Self {
        Self {
            name,
            roles: roles.unwrap_or_default(),
            availability: availability.unwrap_or_default(),
            category,
            spouse,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Person(name={:?}, roles={}, days={}, spouse={:?})",
            self.name,
            self.roles.len(),
            self.availability.len(),
            self.spouse
        )
    }
}

/// A rolling cart that serves an ordered list of points.
#[pyclass]
#[derive(Clone, Debug, Default)]
pub struct Cart {
    #[pyo3(get, set)]
    pub name: String,
    #[pyo3(get, set)]
    pub points: Vec<String>,
}

impl Cart {
    pub fn with_points(name: &str, points: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            points: points.iter().map(|p| p.to_string()).collect(),
        }
    }
}

#[pymethods]
impl Cart {
    #[new]
    #[pyo3(signature = (name, points=None))]
    fn new(name: String, points: Option<Vec<String>>) -> Self {
        Self {
            name,
            points: points.unwrap_or_default(),
        }
    }

    fn __repr__(&self) -> String {
        format!("Cart(name={:?}, points={:?})", self.name, self.points)
    }
}

/// A location a cart can be placed at, with its weekly opening windows.
#[pyclass]
#[derive(Clone, Debug, Default)]
pub struct Point {
    #[pyo3(get, set)]
    pub name: String,
    /// Day name -> ["HH:MM-HH:MM", ...]
    #[pyo3(get, set)]
    pub availability: HashMap<String, Vec<String>>,
}

impl Point {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Add opening windows for a day.
    pub fn open(mut self, day: &str, ranges: &[&str]) -> Self {
        self.availability
            .entry(day.to_string())
            .or_default()
            .extend(ranges.iter().map(|r| r.to_string()));
        self
    }
}

#[pymethods]
impl Point {
    #[new]
    #[pyo3(signature = (name, availability=None))]
    fn new(name: String, availability: Option<HashMap<String, Vec<String>>>) -> Self {
        Self {
            name,
            availability: availability.unwrap_or_default(),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Point(name={:?}, days={})",
            self.name,
            self.availability.len()
        )
    }
}
