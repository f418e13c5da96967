//! Usage counters, least-used ranking and the injectable shuffle source.
//!
//! Ranking is deterministic: candidates are ordered by
//! `(uses of this duty, total uses)` with a stable sort, so equal keys keep
//! roster order. The only randomness in a run is the per-period duty order,
//! which goes through a [`Shuffler`] supplied by the caller.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

use crate::interner::NameId;

/// Per-run usage tallies.
///
/// Counters start at zero for every run and only ever increase.
#[derive(Clone, Debug, Default)]
pub struct UsageCounters {
    total: FxHashMap<NameId, u32>,
    per_duty: FxHashMap<(NameId, NameId), u32>,
}

impl UsageCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total assignments of `person` so far.
    #[inline]
    pub fn total(&self, person: NameId) -> u32 {
        self.total.get(&person).copied().unwrap_or(0)
    }

    /// Assignments of `person` to `duty` so far.
    #[inline]
    pub fn for_duty(&self, person: NameId, duty: NameId) -> u32 {
        self.per_duty.get(&(person, duty)).copied().unwrap_or(0)
    }

    /// Record one assignment of `person` to `duty`.
    pub fn record(&mut self, person: NameId, duty: NameId) {
        *self.total.entry(person).or_insert(0) += 1;
        *self.per_duty.entry((person, duty)).or_insert(0) += 1;
    }

    /// Mean total usage over `people` (0.0 for an empty slice).
    pub fn mean_total(&self, people: &[NameId]) -> f64 {
        if people.is_empty() {
            return 0.0;
        }
        let sum: u64 = people.iter().map(|&p| self.total(p) as u64).sum();
        sum as f64 / people.len() as f64
    }
}

/// Sort key for least-used ranking (lower = picked first).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FairnessKey {
    pub duty_uses: u32,
    pub total_uses: u32,
}

impl FairnessKey {
    pub fn of(counters: &UsageCounters, person: NameId, duty: NameId) -> Self {
        Self {
            duty_uses: counters.for_duty(person, duty),
            total_uses: counters.total(person),
        }
    }
}

impl Ord for FairnessKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.duty_uses
            .cmp(&other.duty_uses)
            .then(self.total_uses.cmp(&other.total_uses))
    }
}

impl PartialOrd for FairnessKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Rank candidates for `duty`, least-used first.
///
/// `candidates` must be in roster order; ties keep that order.
pub fn rank_for_duty(counters: &UsageCounters, candidates: &[NameId], duty: NameId) -> Vec<NameId> {
    let mut ranked = candidates.to_vec();
    ranked.sort_by_key(|&p| FairnessKey::of(counters, p, duty));
    ranked
}

/// Rank candidates by total usage only, least-used first (stable).
pub fn rank_by_total(counters: &UsageCounters, candidates: &[NameId]) -> Vec<NameId> {
    let mut ranked = candidates.to_vec();
    ranked.sort_by_key(|&p| counters.total(p));
    ranked
}

/// Source of the per-period duty order.
pub trait Shuffler {
    /// Permute `items` in place.
    fn shuffle<T>(&mut self, items: &mut [T]);
}

/// Uniform shuffle backed by a seedable `StdRng`.
#[derive(Clone, Debug)]
pub struct RandomShuffler {
    rng: StdRng,
}

impl RandomShuffler {
    /// Reproducible shuffler: the same seed always gives the same schedule.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Shuffler seeded from the current time.
    pub fn from_time() -> Self {
        let now = chrono::Utc::now();
        let seed = now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp_micros()) as u64;
        Self::seeded(seed)
    }

    /// Seeded when `seed` is given, time-seeded otherwise.
    pub fn from_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_time(),
        }
    }
}

impl Shuffler for RandomShuffler {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

/// Leaves the order untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeepOrder;

impl Shuffler for KeepOrder {
    fn shuffle<T>(&mut self, _items: &mut [T]) {}
}
