//! Per-run working state shared by the role and station schedulers.

use rustc_hash::FxHashSet;

use crate::error::ScheduleError;
use crate::fairness::UsageCounters;
use crate::interner::{NameId, NameInterner};
use crate::log_debug;
use crate::models::Person;

/// Assembler phases.
///
/// `Idle -> Expanding -> PerPeriod -> {SpecialOverride | PerDuty} -> Emitting -> Done`,
/// or `Failed` when the run is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Expanding,
    PerPeriod,
    SpecialOverride,
    PerDuty,
    Emitting,
    Done,
    Failed,
}

/// Working state owned by one scheduler.
///
/// Names are interned when the scheduler is built; counters are reset at the
/// start of every run so nothing leaks between invocations.
#[derive(Clone, Debug)]
pub struct SchedulerContext {
    /// Person names -> ids, in roster order
    pub people: NameInterner,
    /// Duty names (roles or points) -> ids
    pub duties: NameInterner,
    pub counters: UsageCounters,
    pub phase: Phase,
    pub verbosity: u8,
}

impl SchedulerContext {
    pub fn new(verbosity: u8) -> Self {
        Self {
            people: NameInterner::default(),
            duties: NameInterner::default(),
            counters: UsageCounters::new(),
            phase: Phase::Idle,
            verbosity,
        }
    }

    /// Intern every person, rejecting duplicate names.
    pub fn intern_roster(&mut self, roster: &[Person]) -> Result<Vec<NameId>, ScheduleError> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut ids = Vec::with_capacity(roster.len());
        for person in roster {
            if !seen.insert(person.name.as_str()) {
                return Err(ScheduleError::DuplicatePerson(person.name.clone()));
            }
            ids.push(self.people.intern(&person.name));
        }
        Ok(ids)
    }

    /// Fresh counters for a new run.
    pub fn reset(&mut self) {
        self.counters = UsageCounters::new();
        self.phase = Phase::Idle;
    }

    /// Move to `phase`, logging the transition.
    pub fn enter(&mut self, phase: Phase) {
        if self.phase != phase {
            log_debug!(self.verbosity, "  Phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    /// Mark the run failed and hand the error back.
    pub fn fail(&mut self, err: ScheduleError) -> ScheduleError {
        self.enter(Phase::Failed);
        err
    }

    pub fn person_name(&self, id: NameId) -> String {
        self.people.resolve(id).unwrap_or_default().to_string()
    }

    /// Final totals for every person, in roster order.
    pub fn usage_tally(&self) -> Vec<(String, u32)> {
        self.people
            .iter()
            .map(|(id, name)| (name.to_string(), self.counters.total(id)))
            .collect()
    }
}
