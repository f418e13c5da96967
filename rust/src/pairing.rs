//! Two-seat selection for station slots.
//!
//! Preference order:
//! 1. a spouse pair whose average usage stays within `tolerance` of the pool mean
//! 2. two people of the same category whose usage differs by at most `tolerance`
//! 3. the least-used person alone (second seat left open)
//!
//! Selection is greedy over the current counters; it never revisits earlier slots.

use rustc_hash::FxHashMap;

use crate::fairness::{rank_by_total, UsageCounters};
use crate::interner::NameId;

/// Pairing attributes of one person.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PairProfile {
    /// Interned category tag (e.g. sex). Untagged people match each other.
    pub category: Option<NameId>,
    /// Spouse, only set when the link is mutual.
    pub spouse: Option<NameId>,
}

/// Outcome of pairing for one slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairChoice {
    Spouses(NameId, NameId),
    SameCategory(NameId, NameId),
    Single(NameId),
    Empty,
}

impl PairChoice {
    /// People chosen, first seat first.
    pub fn people(&self) -> Vec<NameId> {
        match *self {
            PairChoice::Spouses(a, b) | PairChoice::SameCategory(a, b) => vec![a, b],
            PairChoice::Single(a) => vec![a],
            PairChoice::Empty => vec![],
        }
    }
}

/// Pick up to two people from `pool` (roster order).
pub fn select_pair(
    pool: &[NameId],
    counters: &UsageCounters,
    profiles: &FxHashMap<NameId, PairProfile>,
    tolerance: u32,
) -> PairChoice {
    if pool.is_empty() {
        return PairChoice::Empty;
    }

    let ranked = rank_by_total(counters, pool);
    let profile = |p: NameId| profiles.get(&p).copied().unwrap_or_default();

    let pool_mean = counters.mean_total(pool);
    for &person in &ranked {
        let Some(spouse) = profile(person).spouse else {
            continue;
        };
        if spouse == person || !pool.contains(&spouse) {
            continue;
        }
        let pair_mean = (counters.total(person) as f64 + counters.total(spouse) as f64) / 2.0;
        if pair_mean <= pool_mean + tolerance as f64 {
            return PairChoice::Spouses(person, spouse);
        }
    }

    for (i, &first) in ranked.iter().enumerate() {
        let category = profile(first).category;
        let first_uses = counters.total(first);
        let partner = ranked[i + 1..].iter().copied().find(|&second| {
            profile(second).category == category
                && first_uses.abs_diff(counters.total(second)) <= tolerance
        });
        if let Some(second) = partner {
            return PairChoice::SameCategory(first, second);
        }
    }

    PairChoice::Single(ranked[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    const MALE: NameId = 100;
    const FEMALE: NameId = 101;

    fn profiles(entries: &[(NameId, Option<NameId>, Option<NameId>)]) -> FxHashMap<NameId, PairProfile> {
        entries
            .iter()
            .map(|&(id, category, spouse)| (id, PairProfile { category, spouse }))
            .collect()
    }

    fn bump(counters: &mut UsageCounters, person: NameId, times: u32) {
        for _ in 0..times {
            counters.record(person, 0);
        }
    }

    #[test]
    fn test_empty_pool() {
        let choice = select_pair(&[], &UsageCounters::new(), &FxHashMap::default(), 2);
        assert_eq!(choice, PairChoice::Empty);
        assert!(choice.people().is_empty());
    }

    #[test]
    fn test_spouses_beat_same_category_pair() {
        // 0 and 1 are unrelated men; 2 and 3 are married.
        let profiles = profiles(&[
            (0, Some(MALE), None),
            (1, Some(MALE), None),
            (2, Some(FEMALE), Some(3)),
            (3, Some(MALE), Some(2)),
        ]);
        let choice = select_pair(&[0, 1, 2, 3], &UsageCounters::new(), &profiles, 2);
        assert_eq!(choice, PairChoice::Spouses(2, 3));
    }

    #[test]
    fn test_overused_spouses_fall_back_to_category() {
        let profiles = profiles(&[
            (0, Some(MALE), None),
            (1, Some(MALE), None),
            (2, Some(FEMALE), Some(3)),
            (3, Some(MALE), Some(2)),
        ]);
        let mut counters = UsageCounters::new();
        bump(&mut counters, 2, 5);
        bump(&mut counters, 3, 5);
        // Pool mean 2.5, pair mean 5.0 > 2.5 + 2.
        let choice = select_pair(&[0, 1, 2, 3], &counters, &profiles, 2);
        assert_eq!(choice, PairChoice::SameCategory(0, 1));
    }

    #[test]
    fn test_spouse_outside_pool_is_ignored() {
        let profiles = profiles(&[
            (0, Some(FEMALE), Some(9)),
            (1, Some(FEMALE), None),
        ]);
        let choice = select_pair(&[0, 1], &UsageCounters::new(), &profiles, 2);
        assert_eq!(choice, PairChoice::SameCategory(0, 1));
    }

    #[test]
    fn test_category_pair_respects_tolerance() {
        let profiles = profiles(&[
            (0, Some(MALE), None),
            (1, Some(MALE), None),
            (2, Some(FEMALE), None),
            (3, Some(FEMALE), None),
        ]);
        let mut counters = UsageCounters::new();
        bump(&mut counters, 1, 3);
        bump(&mut counters, 2, 1);
        bump(&mut counters, 3, 1);
        // Ranked: 0 (0), 2 (1), 3 (1), 1 (3). Man 0 cannot pair with man 1
        // (difference 3), so the women pair up.
        let choice = select_pair(&[0, 1, 2, 3], &counters, &profiles, 2);
        assert_eq!(choice, PairChoice::SameCategory(2, 3));
    }

    #[test]
    fn test_single_when_no_pair_fits() {
        let profiles = profiles(&[(0, Some(MALE), None), (1, Some(FEMALE), None)]);
        let mut counters = UsageCounters::new();
        bump(&mut counters, 0, 1);
        let choice = select_pair(&[0, 1], &counters, &profiles, 2);
        assert_eq!(choice, PairChoice::Single(1));
        assert_eq!(choice.people(), vec![1]);
    }

    #[test]
    fn test_untagged_people_pair_together() {
        let choice = select_pair(&[5, 6], &UsageCounters::new(), &FxHashMap::default(), 2);
        assert_eq!(choice, PairChoice::SameCategory(5, 6));
    }
}
