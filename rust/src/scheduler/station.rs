//! Daily cart/point scheduling with two seats per slot.
//!
//! For every day, carts are walked in input order and each cart's points in
//! the cart's order. Each point's opening windows for that weekday are cut into
//! fixed slots; a slot is taken only if the cart is still free then, and its
//! seats go to available people through the pairing rules.

use chrono::{Datelike, NaiveDate};
use rustc_hash::FxHashMap;
use std::collections::HashMap;

use crate::availability::SlotIndex;
use crate::calendar::{expand_days, split_into_slots, SpecialDates};
use crate::config::SchedulingConfig;
use crate::conflict::CommitmentLedger;
use crate::error::ScheduleError;
use crate::fairness::Shuffler;
use crate::interner::{NameId, NameInterner};
use crate::models::{Cart, Person, Point};
use crate::pairing::{select_pair, PairChoice, PairProfile};
use crate::time_range::WeeklyAvailability;
use crate::{log_changes, log_checks, log_debug};

use super::rows::{Schedule, ScheduleRow, Seat, UnfilledReason};
use super::state::{Phase, SchedulerContext};

/// A point resolved against its record.
#[derive(Clone, Debug)]
struct StationPoint {
    duty: NameId,
    name: String,
    hours: WeeklyAvailability,
}

#[derive(Clone, Debug)]
struct StationCart {
    id: NameId,
    name: String,
    points: Vec<StationPoint>,
}

/// Station-mode scheduler over a roster snapshot.
pub struct StationScheduler {
    carts: Vec<StationCart>,
    index: SlotIndex,
    profiles: FxHashMap<NameId, PairProfile>,
    special_dates: SpecialDates,
    start: NaiveDate,
    weeks: i64,
    slot_minutes: u16,
    pair_tolerance: u32,
    ctx: SchedulerContext,
}

impl StationScheduler {
    /// Validate and index the inputs.
    ///
    /// Cart entries naming an unknown point are skipped. Fails with
    /// `DuplicateCart` when two carts share a name, `NoDutiesDefined` when no
    /// cart ends up with a point and `NoEligiblePeople` when no person has a
    /// usable availability window.
    /// Spouse links are honoured only when both records point at each other.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        carts: &[Cart],
        points: &[Point],
        people: &[Person],
        special_dates: SpecialDates,
        start: NaiveDate,
        weeks: i64,
        config: &SchedulingConfig,
    ) -> Result<Self, ScheduleError> {
        config.validate()?;
        let verbosity = config.verbosity;
        let mut ctx = SchedulerContext::new(verbosity);

        let mut point_records: FxHashMap<&str, &Point> = FxHashMap::default();
        for point in points {
            point_records.entry(point.name.as_str()).or_insert(point);
        }

        let mut cart_ids = NameInterner::with_capacity(carts.len());
        let mut resolved: Vec<StationCart> = Vec::with_capacity(carts.len());
        for cart in carts {
            if cart_ids.get(&cart.name).is_some() {
                return Err(ScheduleError::DuplicateCart(cart.name.clone()));
            }
            let mut cart_points = Vec::with_capacity(cart.points.len());
            for point_name in &cart.points {
                let Some(point) = point_records.get(point_name.as_str()) else {
                    log_checks!(
                        verbosity,
                        "    Skipping point {:?} on cart {}: no such point",
                        point_name,
                        cart.name
                    );
                    continue;
                };
                cart_points.push(StationPoint {
                    duty: ctx.duties.intern(&point.name),
                    name: point.name.clone(),
                    hours: WeeklyAvailability::from_record(&point.availability, &point.name, verbosity),
                });
            }
            resolved.push(StationCart {
                id: cart_ids.intern(&cart.name),
                name: cart.name.clone(),
                points: cart_points,
            });
        }
        if resolved.iter().all(|c| c.points.is_empty()) {
            return Err(ScheduleError::NoDutiesDefined);
        }

        let ids = ctx.intern_roster(people)?;
        let mut index = SlotIndex::new();
        let mut anyone_available = false;
        for (person, &id) in people.iter().zip(&ids) {
            let availability = WeeklyAvailability::from_record(&person.availability, &person.name, verbosity);
            anyone_available |= !availability.is_empty();
            index.push(id, availability);
        }
        if !anyone_available {
            return Err(ScheduleError::NoEligiblePeople);
        }

        let spouse_of: FxHashMap<&str, &str> = people
            .iter()
            .filter_map(|p| p.spouse.as_deref().map(|s| (p.name.as_str(), s)))
            .collect();
        let mut categories = NameInterner::default();
        let mut profiles: FxHashMap<NameId, PairProfile> = FxHashMap::default();
        for (person, &id) in people.iter().zip(&ids) {
            let spouse = match person.spouse.as_deref() {
                Some(spouse) if spouse_of.get(spouse) == Some(&person.name.as_str()) => {
                    ctx.people.get(spouse)
                }
                Some(spouse) => {
                    log_checks!(
                        verbosity,
                        "    Ignoring spouse link {} -> {}: not mutual",
                        person.name,
                        spouse
                    );
                    None
                }
                None => None,
            };
            profiles.insert(
                id,
                PairProfile {
                    category: person.category.as_deref().map(|c| categories.intern(c)),
                    spouse,
                },
            );
        }

        Ok(Self {
            carts: resolved,
            index,
            profiles,
            special_dates,
            start,
            weeks,
            slot_minutes: config.slot_duration(),
            pair_tolerance: config.pair_tolerance,
            ctx,
        })
    }

    /// Current assembler phase.
    pub fn phase(&self) -> Phase {
        self.ctx.phase
    }

    /// Build the schedule. Counters start from zero on every call.
    ///
    /// Station days have no shuffled step; the shuffler is accepted so both
    /// modes share one calling convention.
    pub fn schedule<S: Shuffler>(&mut self, _shuffler: &mut S) -> Result<Schedule, ScheduleError> {
        self.ctx.reset();
        let verbosity = self.ctx.verbosity;

        self.ctx.enter(Phase::Expanding);
        let days = expand_days(self.start, self.weeks).map_err(|e| self.ctx.fail(e))?;

        let mut rows: Vec<ScheduleRow> = Vec::new();
        let mut cart_busy = CommitmentLedger::new();
        let mut people_busy = CommitmentLedger::new();
        let mut overrides = 0usize;

        for day in &days {
            self.ctx.enter(Phase::PerPeriod);
            let date = day.start;
            let weekday = date.weekday();
            log_changes!(verbosity, "Day: {} ({})", day.label(), weekday);

            if let Some(label) = self.special_dates.lookup(day) {
                self.ctx.enter(Phase::SpecialOverride);
                log_changes!(verbosity, "  Special date: {}", label);
                rows.push(ScheduleRow::Special {
                    period: *day,
                    label: label.to_string(),
                });
                overrides += 1;
                continue;
            }

            self.ctx.enter(Phase::PerDuty);
            cart_busy.clear();
            people_busy.clear();
            let mut day_rows: Vec<ScheduleRow> = Vec::new();

            for cart in &self.carts {
                for point in &cart.points {
                    for window in point.hours.windows_on(weekday) {
                        for slot in split_into_slots(*window, self.slot_minutes) {
                            if !cart_busy.is_free(cart.id, &slot) {
                                log_checks!(
                                    verbosity,
                                    "    Skipping {} at {} {}: cart already placed",
                                    cart.name,
                                    point.name,
                                    slot
                                );
                                continue;
                            }

                            let pool = self.index.candidates(weekday, &slot, &people_busy);
                            let choice = select_pair(
                                &pool,
                                &self.ctx.counters,
                                &self.profiles,
                                self.pair_tolerance,
                            );
                            log_debug!(
                                verbosity,
                                "    {} {} {}: pool {} -> {:?}",
                                cart.name,
                                point.name,
                                slot,
                                pool.len(),
                                choice
                            );

                            for person in choice.people() {
                                self.ctx.counters.record(person, point.duty);
                                people_busy.commit(person, slot);
                            }
                            cart_busy.commit(cart.id, slot);

                            let (first, second) = match choice {
                                PairChoice::Spouses(a, b) | PairChoice::SameCategory(a, b) => (
                                    Seat::Assigned(self.ctx.person_name(a)),
                                    Seat::Assigned(self.ctx.person_name(b)),
                                ),
                                PairChoice::Single(a) => (
                                    Seat::Assigned(self.ctx.person_name(a)),
                                    Seat::Unfilled(UnfilledReason::NeedsSecond),
                                ),
                                PairChoice::Empty => (
                                    Seat::Unfilled(UnfilledReason::NoCandidate),
                                    Seat::Unfilled(UnfilledReason::NoCandidate),
                                ),
                            };
                            log_changes!(
                                verbosity,
                                "  {} {} {}: {} / {}",
                                slot,
                                cart.name,
                                point.name,
                                first,
                                second
                            );

                            day_rows.push(ScheduleRow::Station {
                                date,
                                slot,
                                cart: cart.name.clone(),
                                point: point.name.clone(),
                                first,
                                second,
                            });
                        }
                    }
                }
            }

            day_rows.sort_by(|a, b| station_order_key(a).cmp(&station_order_key(b)));
            rows.extend(day_rows);
        }

        self.ctx.enter(Phase::Emitting);
        let mut metadata = HashMap::new();
        metadata.insert("mode".to_string(), "station".to_string());
        metadata.insert("periods".to_string(), days.len().to_string());
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

/// Day rows are listed by cart name, then slot start.
fn station_order_key(row: &ScheduleRow) -> (&str, u16) {
    match row {
        ScheduleRow::Station { cart, slot, .. } => (cart.as_str(), slot.start),
        _ => ("", 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::DateKey;
    use crate::fairness::KeepOrder;
    use crate::time_range::TimeRange;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    // 2025-06-02 is a Monday.
    const MONDAY: (i32, u32, u32) = (2025, 6, 2);

    fn build(
        carts: &[Cart],
        points: &[Point],
        people: &[Person],
        config: &SchedulingConfig,
    ) -> Result<StationScheduler, ScheduleError> {
        let (y, m, day) = MONDAY;
        StationScheduler::new(
            carts,
            points,
            people,
            SpecialDates::default(),
            d(y, m, day),
            1,
            config,
        )
    }

    fn station_rows(schedule: &Schedule) -> Vec<(NaiveDate, TimeRange, &str, &str, &Seat, &Seat)> {
        schedule
            .rows
            .iter()
            .filter_map(|row| match row {
                ScheduleRow::Station {
                    date,
                    slot,
                    cart,
                    point,
                    first,
                    second,
                } => Some((*date, *slot, cart.as_str(), point.as_str(), first, second)),
                _ => None,
            })
            .collect()
    }

    fn tr(s: &str) -> TimeRange {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_points_is_no_duties() {
        let result = build(
            &[Cart::with_points("Cart 1", &["Nowhere"])],
            &[Point::named("Square").open("Monday", &["09:00-10:00"])],
            &[Person::with_category("Ana", Some("F")).available("Monday", &["09:00-10:00"])],
            &SchedulingConfig::default(),
        );
        assert!(matches!(result, Err(ScheduleError::NoDutiesDefined)));
    }

    #[test]
    fn test_no_availability_is_no_eligible_people() {
        let result = build(
            &[Cart::with_points("Cart 1", &["Square"])],
            &[Point::named("Square").open("Monday", &["09:00-10:00"])],
            &[
                Person::with_category("Ana", Some("F")),
                Person::with_category("Bia", Some("F")).available("Monday", &["broken"]),
            ],
            &SchedulingConfig::default(),
        );
        assert!(matches!(result, Err(ScheduleError::NoEligiblePeople)));
    }

    #[test]
    fn test_duplicate_cart_name_rejected() {
        let result = build(
            &[
                Cart::with_points("Cart 1", &["Square"]),
                Cart::with_points("Cart 1", &["Market"]),
            ],
            &[
                Point::named("Square").open("Monday", &["09:00-10:00"]),
                Point::named("Market").open("Monday", &["09:00-10:00"]),
            ],
            &[Person::with_category("Ana", Some("F")).available("Monday", &["09:00-10:00"])],
            &SchedulingConfig::default(),
        );
        assert!(matches!(
            result,
            Err(ScheduleError::DuplicateCart(name)) if name == "Cart 1"
        ));
    }

    #[test]
    fn test_zero_slot_minutes_rejected() {
        let config = SchedulingConfig {
            slot_minutes: 0,
            ..SchedulingConfig::default()
        };
        let result = build(
            &[Cart::with_points("Cart 1", &["Square"])],
            &[Point::named("Square").open("Monday", &["09:00-10:00"])],
            &[Person::with_category("Ana", Some("F")).available("Monday", &["09:00-10:00"])],
            &config,
        );
        assert!(matches!(result, Err(ScheduleError::InvalidConfig(_))));
    }

    #[test]
    fn test_single_window_single_slot() {
        let mut scheduler = build(
            &[Cart::with_points("Cart 1", &["Square"])],
            &[Point::named("Square").open("Monday", &["09:00-10:00"])],
            &[
                Person::with_category("Ana", Some("F")).available("Monday", &["08:00-10:00"]),
                Person::with_category("Bia", Some("F")).available("Monday", &["09:00-12:00"]),
            ],
            &SchedulingConfig::default(),
        )
        .unwrap();
        let schedule = scheduler.schedule(&mut KeepOrder).unwrap();

        let rows = station_rows(&schedule);
        assert_eq!(rows.len(), 1);
        let (date, slot, cart, point, first, second) = rows[0];
        assert_eq!(date, d(2025, 6, 2));
        assert_eq!(slot, tr("09:00-10:00"));
        assert_eq!((cart, point), ("Cart 1", "Square"));
        assert_eq!(first.name(), Some("Ana"));
        assert_eq!(second.name(), Some("Bia"));
        assert_eq!(scheduler.phase(), Phase::Done);
        assert_eq!(schedule.metadata["periods"], "7");
    }

    #[test]
    fn test_spouses_preferred() {
        let mut scheduler = build(
            &[Cart::with_points("Cart 1", &["Square"])],
            &[Point::named("Square").open("Monday", &["09:00-10:00"])],
            &[
                Person::with_category("Caio", Some("M")).available("Monday", &["09:00-10:00"]),
                Person::with_category("Davi", Some("M")).available("Monday", &["09:00-10:00"]),
                Person::with_category("Ana", Some("F"))
                    .available("Monday", &["09:00-10:00"])
                    .married_to("Beto"),
                Person::with_category("Beto", Some("M"))
                    .available("Monday", &["09:00-10:00"])
                    .married_to("Ana"),
            ],
            &SchedulingConfig::default(),
        )
        .unwrap();
        let schedule = scheduler.schedule(&mut KeepOrder).unwrap();
        let rows = station_rows(&schedule);
        assert_eq!(rows[0].4.name(), Some("Ana"));
        assert_eq!(rows[0].5.name(), Some("Beto"));
    }

    #[test]
    fn test_one_sided_spouse_link_ignored() {
        let mut scheduler = build(
            &[Cart::with_points("Cart 1", &["Square"])],
            &[Point::named("Square").open("Monday", &["09:00-10:00"])],
            &[
                Person::with_category("Ana", Some("F"))
                    .available("Monday", &["09:00-10:00"])
                    .married_to("Beto"),
                Person::with_category("Beto", Some("M")).available("Monday", &["09:00-10:00"]),
            ],
            &SchedulingConfig::default(),
        )
        .unwrap();
        let schedule = scheduler.schedule(&mut KeepOrder).unwrap();
        let rows = station_rows(&schedule);
        assert_eq!(rows[0].4.name(), Some("Ana"));
        assert_eq!(rows[0].5, &Seat::Unfilled(UnfilledReason::NeedsSecond));
    }

    #[test]
    fn test_empty_pool_marks_both_seats() {
        let mut scheduler = build(
            &[Cart::with_points("Cart 1", &["Square"])],
            &[Point::named("Square").open("Tuesday", &["09:00-10:00"])],
            &[Person::with_category("Ana", Some("F")).available("Monday", &["09:00-10:00"])],
            &SchedulingConfig::default(),
        )
        .unwrap();
        let schedule = scheduler.schedule(&mut KeepOrder).unwrap();
        let rows = station_rows(&schedule);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, d(2025, 6, 3));
        assert_eq!(rows[0].4, &Seat::Unfilled(UnfilledReason::NoCandidate));
        assert_eq!(rows[0].5, &Seat::Unfilled(UnfilledReason::NoCandidate));
        assert_eq!(schedule.unfilled_seats(), 2);
    }

    #[test]
    fn test_cart_not_double_booked_across_points() {
        // Both points of the same cart open at the same hour: only the first gets it.
        let mut scheduler = build(
            &[Cart::with_points("Cart 1", &["Square", "Market"])],
            &[
                Point::named("Square").open("Monday", &["09:00-11:00"]),
                Point::named("Market").open("Monday", &["10:00-12:00"]),
            ],
            &[
                Person::with_category("Ana", Some("F")).available("Monday", &["08:00-13:00"]),
                Person::with_category("Bia", Some("F")).available("Monday", &["08:00-13:00"]),
            ],
            &SchedulingConfig::default(),
        )
        .unwrap();
        let schedule = scheduler.schedule(&mut KeepOrder).unwrap();
        let rows = station_rows(&schedule);
        let placed: Vec<(TimeRange, &str)> = rows.iter().map(|r| (r.1, r.3)).collect();
        assert_eq!(
            placed,
            vec![
                (tr("09:00-10:00"), "Square"),
                (tr("10:00-11:00"), "Square"),
                (tr("11:00-12:00"), "Market"),
            ]
        );
    }

    #[test]
    fn test_person_not_in_two_carts_at_once() {
        let mut scheduler = build(
            &[
                Cart::with_points("Cart 1", &["Square"]),
                Cart::with_points("Cart 2", &["Market"]),
            ],
            &[
                Point::named("Square").open("Monday", &["09:00-10:00"]),
                Point::named("Market").open("Monday", &["09:00-10:00"]),
            ],
            &[
                Person::with_category("Ana", Some("F")).available("Monday", &["09:00-10:00"]),
                Person::with_category("Bia", Some("F")).available("Monday", &["09:00-10:00"]),
                Person::with_category("Caio", Some("M")).available("Monday", &["09:00-10:00"]),
            ],
            &SchedulingConfig::default(),
        )
        .unwrap();
        let schedule = scheduler.schedule(&mut KeepOrder).unwrap();
        let rows = station_rows(&schedule);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].2, "Cart 1");
        assert_eq!(rows[0].4.name(), Some("Ana"));
        assert_eq!(rows[0].5.name(), Some("Bia"));
        assert_eq!(rows[1].2, "Cart 2");
        assert_eq!(rows[1].4.name(), Some("Caio"));
        assert_eq!(rows[1].5, &Seat::Unfilled(UnfilledReason::NeedsSecond));
    }

    #[test]
    fn test_fairness_rotates_pairs() {
        let mut scheduler = build(
            &[Cart::with_points("Cart 1", &["Square"])],
            &[Point::named("Square").open("Monday", &["09:00-12:00"])],
            &[
                Person::with_category("Ana", Some("F")).available("Monday", &["09:00-12:00"]),
                Person::with_category("Bia", Some("F")).available("Monday", &["09:00-12:00"]),
                Person::with_category("Cris", Some("F")).available("Monday", &["09:00-12:00"]),
                Person::with_category("Duda", Some("F")).available("Monday", &["09:00-12:00"]),
            ],
            &SchedulingConfig::default(),
        )
        .unwrap();
        let schedule = scheduler.schedule(&mut KeepOrder).unwrap();
        let rows = station_rows(&schedule);
        let pairs: Vec<(Option<&str>, Option<&str>)> =
            rows.iter().map(|r| (r.4.name(), r.5.name())).collect();
        assert_eq!(
            pairs,
            vec![
                (Some("Ana"), Some("Bia")),
                (Some("Cris"), Some("Duda")),
                (Some("Ana"), Some("Bia")),
            ]
        );
        assert_eq!(schedule.usage_of("Ana"), 2);
        assert_eq!(schedule.usage_of("Duda"), 1);
    }

    #[test]
    fn test_day_rows_sorted_by_cart_then_time() {
        let mut scheduler = build(
            &[
                Cart::with_points("Cart B", &["Square"]),
                Cart::with_points("Cart A", &["Market"]),
            ],
            &[
                Point::named("Square").open("Monday", &["09:00-10:00"]),
                Point::named("Market").open("Monday", &["11:00-12:00", "08:00-09:00"]),
            ],
            &[Person::with_category("Ana", Some("F")).available("Monday", &["08:00-12:00"])],
            &SchedulingConfig::default(),
        )
        .unwrap();
        let schedule = scheduler.schedule(&mut KeepOrder).unwrap();
        let order: Vec<(&str, TimeRange)> = station_rows(&schedule)
            .iter()
            .map(|r| (r.2, r.1))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Cart A", tr("08:00-09:00")),
                ("Cart A", tr("11:00-12:00")),
                ("Cart B", tr("09:00-10:00")),
            ]
        );
    }

    #[test]
    fn test_malformed_point_hours_are_skipped() {
        let mut scheduler = build(
            &[Cart::with_points("Cart 1", &["Square"])],
            &[Point::named("Square").open("Monday", &["nine-ten", "10:00-11:00"])],
            &[Person::with_category("Ana", Some("F")).available("Monday", &["10:00-11:00"])],
            &SchedulingConfig::default(),
        )
        .unwrap();
        let schedule = scheduler.schedule(&mut KeepOrder).unwrap();
        let rows = station_rows(&schedule);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].1, tr("10:00-11:00"));
    }

    #[test]
    fn test_special_date_replaces_day() {
        let mut specials = SpecialDates::default();
        specials.insert(DateKey::parse("02/06").unwrap(), "Holiday");
        let mut scheduler = StationScheduler::new(
            &[Cart::with_points("Cart 1", &["Square"])],
            &[Point::named("Square").open("Monday", &["09:00-10:00"])],
            &[Person::with_category("Ana", Some("F")).available("Monday", &["09:00-10:00"])],
            specials,
            d(2025, 6, 2),
            2,
            &SchedulingConfig::default(),
        )
        .unwrap();
        let schedule = scheduler.schedule(&mut KeepOrder).unwrap();

        let first_monday: Vec<&ScheduleRow> = schedule
            .rows
            .iter()
            .filter(|r| r.first_day() == d(2025, 6, 2))
            .collect();
        assert_eq!(first_monday.len(), 1);
        assert!(first_monday[0].is_special());
        assert_eq!(station_rows(&schedule).len(), 1);
        assert_eq!(schedule.metadata["special_overrides"], "1");
    }

    #[test]
    fn test_no_overlapping_commitments() {
        let mut scheduler = StationScheduler::new(
            &[
                Cart::with_points("Cart 1", &["Square", "Market"]),
                Cart::with_points("Cart 2", &["Station"]),
            ],
            &[
                Point::named("Square").open("Monday", &["08:00-12:00"]).open("Wednesday", &["14:00-18:00"]),
                Point::named("Market").open("Monday", &["10:30-13:00"]),
                Point::named("Station").open("Monday", &["09:00-11:00"]).open("Wednesday", &["15:00-17:00"]),
            ],
            &[
                Person::with_category("Ana", Some("F")).available("Monday", &["08:00-13:00"]),
                Person::with_category("Bia", Some("F")).available("Monday", &["09:00-11:00"]).available("Wednesday", &["14:00-18:00"]),
                Person::with_category("Caio", Some("M")).available("Monday", &["08:00-10:00"]).married_to("Duda"),
                Person::with_category("Duda", Some("F")).available("Monday", &["08:00-13:00"]).married_to("Caio"),
                Person::with_category("Eli", Some("M")).available("Wednesday", &["14:00-18:00"]),
            ],
            SpecialDates::default(),
            d(2025, 6, 2),
            2,
            &SchedulingConfig {
                slot_minutes: 45,
                ..SchedulingConfig::default()
            },
        )
        .unwrap();
        let schedule = scheduler.schedule(&mut KeepOrder).unwrap();
        let rows = station_rows(&schedule);
        assert!(!rows.is_empty());

        for (i, a) in rows.iter().enumerate() {
            for b in &rows[i + 1..] {
                if a.0 != b.0 || !a.1.overlaps(&b.1) {
                    continue;
                }
                assert_ne!(a.2, b.2, "cart {} double-booked on {}", a.2, a.0);
                let names_a: Vec<&str> = [a.4, a.5].iter().filter_map(|s| s.name()).collect();
                for name in [b.4, b.5].iter().filter_map(|s| s.name()) {
                    assert!(!names_a.contains(&name), "{} double-booked on {}", name, a.0);
                }
            }
        }
    }

    #[test]
    fn test_fixed_input_is_deterministic() {
        let carts = [Cart::with_points("Cart 1", &["Square"])];
        let points = [Point::named("Square").open("Segunda", &["08:00-12:00"])];
        let people = [
            Person::with_category("Ana", Some("F")).available("Segunda", &["08:00-12:00"]),
            Person::with_category("Bia", Some("F")).available("Segunda", &["08:00-12:00"]),
            Person::with_category("Caio", Some("M")).available("Segunda", &["08:00-12:00"]),
        ];
        let mut scheduler = build(&carts, &points, &people, &SchedulingConfig::default()).unwrap();
        let first = scheduler.schedule(&mut KeepOrder).unwrap();
        let second = scheduler.schedule(&mut KeepOrder).unwrap();
        assert_eq!(first.rows, second.rows);
        assert_eq!(station_rows(&first).len(), 4);
    }
}
