//! Conflict tracking: committed time windows per resource, and per-period placements.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::interner::NameId;
use crate::time_range::TimeRange;

/// Committed windows for one resource (a cart or a person) on one day.
///
/// Maintains the invariant that `windows` is always sorted by start and
/// contains no overlapping windows. This enables O(log n) lookups.
#[derive(Clone, Debug, Default)]
pub struct CommitmentSchedule {
    /// Sorted, non-overlapping, half-open windows.
    windows: Vec<TimeRange>,
}

impl CommitmentSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed windows in start order.
    pub fn windows(&self) -> &[TimeRange] {
        &self.windows
    }

    /// True if `range` overlaps no committed window.
    pub fn is_free(&self, range: &TimeRange) -> bool {
        // Leftmost window that ends after our start is the only candidate.
        let idx = self.windows.partition_point(|w| w.end <= range.start);
        match self.windows.get(idx) {
            Some(window) => !window.overlaps(range),
            None => true,
        }
    }

    /// Commit a window, merging with touching or overlapping neighbours.
    pub fn commit(&mut self, range: TimeRange) {
        let idx = self.windows.partition_point(|w| w.start < range.start);

        let mut new_start = range.start;
        let mut new_end = range.end;
        let mut merge_start = idx;
        let mut merge_end = idx;

        if idx > 0 {
            let prev = self.windows[idx - 1];
            if prev.end >= range.start {
                new_start = prev.start;
                new_end = new_end.max(prev.end);
                merge_start = idx - 1;
            }
        }

        while merge_end < self.windows.len() {
            let next = self.windows[merge_end];
            if next.start <= new_end {
                new_end = new_end.max(next.end);
                merge_end += 1;
            } else {
                break;
            }
        }

        if merge_start < merge_end {
            self.windows.drain(merge_start..merge_end);
        }
        self.windows.insert(
            merge_start,
            TimeRange {
                start: new_start,
                end: new_end,
            },
        );
    }
}

/// Commitment schedules keyed by resource id.
///
/// Station mode keeps one ledger for carts and one for people, both reset at
/// the start of each day.
#[derive(Clone, Debug, Default)]
pub struct CommitmentLedger {
    schedules: FxHashMap<NameId, CommitmentSchedule>,
}

impl CommitmentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `resource` has nothing committed that overlaps `range`.
    pub fn is_free(&self, resource: NameId, range: &TimeRange) -> bool {
        self.schedules
            .get(&resource)
            .map_or(true, |s| s.is_free(range))
    }

    pub fn commit(&mut self, resource: NameId, range: TimeRange) {
        self.schedules.entry(resource).or_default().commit(range);
    }

    /// Committed windows for `resource`, in start order.
    pub fn windows(&self, resource: NameId) -> &[TimeRange] {
        self.schedules
            .get(&resource)
            .map(|s| s.windows())
            .unwrap_or(&[])
    }

    pub fn clear(&mut self) {
        self.schedules.clear();
    }
}

/// People already placed in the current role-mode period.
#[derive(Clone, Debug, Default)]
pub struct PeriodPlacements {
    placed: FxHashSet<NameId>,
}

impl PeriodPlacements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a placement. Returns false if the person was already placed.
    pub fn place(&mut self, person: NameId) -> bool {
        self.placed.insert(person)
    }

    #[inline]
    pub fn is_placed(&self, person: NameId) -> bool {
        self.placed.contains(&person)
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// Start a new period.
    pub fn clear(&mut self) {
        self.placed.clear();
    }
}
