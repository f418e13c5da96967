//! Availability index: who can take a duty in a given period or time slot.

use chrono::Weekday;
use rustc_hash::FxHashSet;

use crate::conflict::{CommitmentLedger, PeriodPlacements};
use crate::interner::NameId;
use crate::time_range::{TimeRange, WeeklyAvailability};

/// Role eligibility for the whole roster, in roster order.
#[derive(Clone, Debug, Default)]
pub struct RoleIndex {
    entries: Vec<(NameId, FxHashSet<NameId>)>,
}

impl RoleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a person with their eligible roles.
    pub fn push(&mut self, person: NameId, roles: FxHashSet<NameId>) {
        self.entries.push((person, roles));
    }

    /// People eligible for `role` and not yet placed this period, in roster order.
    pub fn candidates(&self, role: NameId, placements: &PeriodPlacements) -> Vec<NameId> {
        self.entries
            .iter()
            .filter(|(person, roles)| roles.contains(&role) && !placements.is_placed(*person))
            .map(|(person, _)| *person)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Weekly availability for the whole roster, in roster order.
#[derive(Clone, Debug, Default)]
pub struct SlotIndex {
    entries: Vec<(NameId, WeeklyAvailability)>,
}

impl SlotIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, person: NameId, availability: WeeklyAvailability) {
        self.entries.push((person, availability));
    }

    /// People with a window on `day` overlapping `slot`, and no overlapping
    /// commitment in `busy`, in roster order.
    pub fn candidates(&self, day: Weekday, slot: &TimeRange, busy: &CommitmentLedger) -> Vec<NameId> {
        self.entries
            .iter()
            .filter(|(person, availability)| {
                availability.covers(day, slot) && busy.is_free(*person, slot)
            })
            .map(|(person, _)| *person)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
