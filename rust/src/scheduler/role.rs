//! Weekly role scheduling.
//!
//! Each week every role gets the least-used eligible person who is not already
//! serving that week. Roles are visited in a freshly shuffled order each week so
//! no role always gets first pick, but rows come out in declared role order.

use chrono::NaiveDate;
use rustc_hash::FxHashSet;
use std::collections::HashMap;

use crate::availability::RoleIndex;
use crate::calendar::{expand_weeks, SpecialDates};
use crate::config::SchedulingConfig;
use crate::conflict::PeriodPlacements;
use crate::error::ScheduleError;
use crate::fairness::{rank_for_duty, Shuffler};
use crate::interner::NameId;
use crate::models::Person;
use crate::{log_changes, log_checks, log_debug};

use super::rows::{Schedule, ScheduleRow, Seat, UnfilledReason};
use super::state::{Phase, SchedulerContext};

/// Role-mode scheduler over a roster snapshot.
pub struct RoleScheduler {
    /// Roles in declared order (deduplicated)
    roles: Vec<(NameId, String)>,
    index: RoleIndex,
    special_dates: SpecialDates,
    start: NaiveDate,
    periods: i64,
    ctx: SchedulerContext,
}

impl RoleScheduler {
    /// Validate and index the inputs.
    ///
    /// Fails with `NoDutiesDefined` for an empty role list, `DuplicatePerson`
    /// for repeated names and `NoEligiblePeople` when nobody holds any of the
    /// listed roles. Roles a person holds that are not listed are ignored.
    pub fn new(
        roles: &[String],
        people: &[Person],
        special_dates: SpecialDates,
        start: NaiveDate,
        periods: i64,
        config: &SchedulingConfig,
    ) -> Result<Self, ScheduleError> {
        config.validate()?;
        let mut ctx = SchedulerContext::new(config.verbosity);

        let mut declared: Vec<(NameId, String)> = Vec::with_capacity(roles.len());
        for role in roles {
            if ctx.duties.get(role).is_none() {
                let id = ctx.duties.intern(role);
                declared.push((id, role.clone()));
            }
        }
        if declared.is_empty() {
            return Err(ScheduleError::NoDutiesDefined);
        }

        let ids = ctx.intern_roster(people)?;
        let mut index = RoleIndex::new();
        let mut anyone_eligible = false;
        for (person, id) in people.iter().zip(ids) {
            let eligible: FxHashSet<NameId> = person
                .roles
                .iter()
                .filter_map(|r| ctx.duties.get(r))
                .collect();
            if eligible.is_empty() {
                log_checks!(
                    ctx.verbosity,
                    "    {} holds none of the listed roles",
                    person.name
                );
            }
            anyone_eligible |= !eligible.is_empty();
            index.push(id, eligible);
        }
        if !anyone_eligible {
            return Err(ScheduleError::NoEligiblePeople);
        }

        Ok(Self {
            roles: declared,
            index,
            special_dates,
            start,
            periods,
            ctx,
        })
    }

    /// Current assembler phase.
    pub fn phase(&self) -> Phase {
        self.ctx.phase
    }

    /// Build the schedule. Counters start from zero on every call.
    pub fn schedule<S: Shuffler>(&mut self, shuffler: &mut S) -> Result<Schedule, ScheduleError> {
        self.ctx.reset();
        let verbosity = self.ctx.verbosity;

        self.ctx.enter(Phase::Expanding);
        let periods = expand_weeks(self.start, self.periods).map_err(|e| self.ctx.fail(e))?;

        let mut rows: Vec<ScheduleRow> = Vec::with_capacity(periods.len() * self.roles.len());
        let mut placements = PeriodPlacements::new();
        let mut overrides = 0usize;

        for period in &periods {
            self.ctx.enter(Phase::PerPeriod);
            log_changes!(verbosity, "Period: {}", period.label());

            if let Some(label) = self.special_dates.lookup(period) {
                self.ctx.enter(Phase::SpecialOverride);
                log_changes!(verbosity, "  Special date: {}", label);
                rows.push(ScheduleRow::Special {
                    period: *period,
                    label: label.to_string(),
                });
                overrides += 1;
                continue;
            }

            self.ctx.enter(Phase::PerDuty);
            placements.clear();

            let mut order: Vec<usize> = (0..self.roles.len()).collect();
            shuffler.shuffle(&mut order);
            log_debug!(verbosity, "  Duty order: {:?}", order);

            let mut seats: Vec<Seat> = vec![Seat::Unfilled(UnfilledReason::NoCandidate); self.roles.len()];
            for &slot in &order {
                let (role, role_name) = &self.roles[slot];
                let candidates = self.index.candidates(*role, &placements);
                let ranked = rank_for_duty(&self.ctx.counters, &candidates, *role);
                log_checks!(
                    verbosity,
                    "  Considering {} ({} candidates)",
                    role_name,
                    ranked.len()
                );

                match ranked.first() {
                    Some(&person) => {
                        placements.place(person);
                        self.ctx.counters.record(person, *role);
                        let name = self.ctx.person_name(person);
                        log_changes!(verbosity, "  Assigned {} to {}", name, role_name);
                        seats[slot] = Seat::Assigned(name);
                    }
                    None => {
                        log_changes!(verbosity, "  {} left unfilled", role_name);
                    }
                }
            }

            for ((_, role_name), seat) in self.roles.iter().zip(seats) {
                rows.push(ScheduleRow::Role {
                    period: *period,
                    role: role_name.clone(),
                    seat,
                });
            }
        }

        self.ctx.enter(Phase::Emitting);
        let mut metadata = HashMap::new();
        metadata.insert("mode".to_string(), "role".to_string());
        metadata.insert("periods".to_string(), periods.len().to_string());
        metadata.insert("special_overrides".to_string(), overrides.to_string());
        let schedule = Schedule {
            rows,
            usage: self.ctx.usage_tally(),
            metadata,
        };
        self.ctx.enter(Phase::Done);
        Ok(schedule)
    }
}
