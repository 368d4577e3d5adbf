//! Next-departure selection from a fixed daily schedule.

use chrono::Duration;

use crate::domain::{ServiceTime, TimeOfDay};
use crate::schedule::Schedule;

/// Outcome of looking up the next departures on a schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Departures {
    /// At least one departure remains today.
    Next {
        /// Departures in schedule order, never empty.
        times: Vec<TimeOfDay>,

        /// The schedule ran out before the requested count was reached.
        last_service: bool,
    },

    /// Nothing departs later today.
    NoFurtherService,
}

impl Departures {
    /// The selected departures; empty only for `NoFurtherService`.
    pub fn times(&self) -> &[TimeOfDay] {
        match self {
            Departures::Next { times, .. } => times,
            Departures::NoFurtherService => &[],
        }
    }

    /// True if no departure remains today.
    pub fn is_no_further_service(&self) -> bool {
        matches!(self, Departures::NoFurtherService)
    }

    /// True if these are the day's final departures.
    pub fn is_last_service(&self) -> bool {
        match self {
            Departures::Next { last_service, .. } => *last_service,
            Departures::NoFurtherService => true,
        }
    }
}

/// Select up to `count` departures after `reference + offset`.
///
/// Entries are taken as times on the reference's own date and must be
/// strictly later than the offset reference. The schedule is never wrapped
/// into the following day: if the offset carries the reference past
/// midnight, nothing on the reference date qualifies and the result is
/// [`Departures::NoFurtherService`]. A zero `count` selects nothing.
///
/// # Examples
///
/// ```
/// use commute_server::domain::ServiceTime;
/// use commute_server::planner::{Departures, select_next};
/// use commute_server::schedule::Schedule;
/// use chrono::{Duration, NaiveDate};
///
/// let schedule = Schedule::parse("leg", "leg", &["06:00", "06:20", "07:00"]).unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
///
/// let now = ServiceTime::parse_hhmm("06:10", date).unwrap();
/// let next = select_next(&schedule, now, Duration::zero(), 3);
/// assert_eq!(next.times().len(), 2);
/// assert!(next.is_last_service());
///
/// let late = ServiceTime::parse_hhmm("07:00", date).unwrap();
/// assert_eq!(select_next(&schedule, late, Duration::zero(), 3), Departures::NoFurtherService);
/// ```
pub fn select_next(
    schedule: &Schedule,
    reference: ServiceTime,
    offset: Duration,
    count: usize,
) -> Departures {
    let effective = reference + offset;
    let service_date = reference.date();

    let times: Vec<TimeOfDay> = schedule
        .times()
        .iter()
        .copied()
        .filter(|t| t.on(service_date) > effective)
        .take(count)
        .collect();

    if times.is_empty() {
        Departures::NoFurtherService
    } else {
        let last_service = times.len() < count;
        Departures::Next {
            times,
            last_service,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    prop_compose! {
        fn time_of_day()(hour in 0u32..24, minute in 0u32..60) -> TimeOfDay {
            TimeOfDay::from_hm(hour, minute).unwrap()
        }
    }

    prop_compose! {
        fn sorted_schedule()(times in prop::collection::vec(time_of_day(), 1..40)) -> Schedule {
            let mut times = times;
            times.sort();
            Schedule::new("prop", "prop", times).unwrap()
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    proptest! {
        /// At most `count` entries, each later than the reference, in order
        #[test]
        fn selection_bounded_later_and_ordered(
            schedule in sorted_schedule(),
            reference in time_of_day(),
            offset in 0i64..180,
            count in 1usize..6
        ) {
            let reference = reference.on(date());
            let effective = reference + Duration::minutes(offset);
            let d = select_next(&schedule, reference, Duration::minutes(offset), count);
            let times = d.times();

            prop_assert!(times.len() <= count);
            for t in times {
                prop_assert!(t.on(date()) > effective);
                prop_assert!(*t > effective.time_of_day());
            }
            for w in times.windows(2) {
                prop_assert!(w[0] <= w[1]);
            }
        }

        /// The selection is the qualifying prefix, and the tail flag is exact
        #[test]
        fn selection_matches_qualifying_count(
            schedule in sorted_schedule(),
            reference in time_of_day(),
            count in 1usize..6
        ) {
            let reference = reference.on(date());
            let qualifying = schedule
                .times()
                .iter()
                .filter(|t| **t > reference.time_of_day())
                .count();
            let d = select_next(&schedule, reference, Duration::zero(), count);

            prop_assert_eq!(d.times().len(), qualifying.min(count));
            prop_assert_eq!(d.is_no_further_service(), qualifying == 0);
            prop_assert_eq!(d.is_last_service(), qualifying < count);
        }

        /// Referencing the last entry always reports no further service
        #[test]
        fn last_entry_reference_is_terminal(schedule in sorted_schedule()) {
            let last = *schedule.times().last().unwrap();
            let d = select_next(&schedule, last.on(date()), Duration::zero(), 3);
            prop_assert_eq!(d, Departures::NoFurtherService);
        }
    }
}
