//! Configuration types for the roster engine.

use pyo3::prelude::*;

use crate::error::ScheduleError;
use crate::time_range::MINUTES_PER_DAY;

/// Configuration shared by role and station scheduling.
#[pyclass]
#[derive(Clone, Debug)]
pub struct SchedulingConfig {
    /// Station slot length in minutes (1..=1440)
    #[pyo3(get, set)]
    pub slot_minutes: u32,
    /// Maximum usage imbalance tolerated when forming a pair
    #[pyo3(get, set)]
    pub pair_tolerance: u32,
    /// Seed for the duty-order shuffle; None seeds from the clock
    #[pyo3(get, set)]
    pub seed: Option<u64>,
    /// Logging verbosity (0=silent, 1=changes, 2=checks, 3=debug)
    #[pyo3(get, set)]
    pub verbosity: u8,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            slot_minutes: 60,
            pair_tolerance: 2,
            seed: None,
            verbosity: 0,
        }
    }
}

impl SchedulingConfig {
    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.slot_minutes == 0 || self.slot_minutes > MINUTES_PER_DAY as u32 {
            return Err(ScheduleError::InvalidConfig(format!(
                "slot_minutes must be between 1 and {}, got {}",
                MINUTES_PER_DAY, self.slot_minutes
            )));
        }
        Ok(())
    }

    /// Slot length as minutes-of-day arithmetic expects it.
    ///
    /// Only meaningful after [`SchedulingConfig::validate`] succeeded.
    pub fn slot_duration(&self) -> u16 {
        self.slot_minutes.min(MINUTES_PER_DAY as u32) as u16
    }
}

#[pymethods]
impl SchedulingConfig {
    #[new]
    #[pyo3(signature = (
        slot_minutes=None,
        pair_tolerance=None,
        seed=None,
        verbosity=None
    ))]
    fn new(
        slot_minutes: Option<u32>,
        pair_tolerance: Option<u32>,
        seed: Option<u64>,
        verbosity: Option<u8>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            slot_minutes: slot_minutes.unwrap_or(defaults.slot_minutes),
            pair_tolerance: pair_tolerance.unwrap_or(defaults.pair_tolerance),
            seed,
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "SchedulingConfig(slot_minutes={}, pair_tolerance={}, seed={:?}, verbosity={})",
            self.slot_minutes, self.pair_tolerance, self.seed, self.verbosity
        )
    }
}
