//! Itinerary builder for the single-leg express route.
//!
//! The rider needs a fixed access time to reach the boarding point, so
//! only departures after `now + access` are usable.

use tracing::debug;

use crate::domain::{ItineraryOption, RouteId, RouteResult, ServiceTime};
use crate::schedule::Schedule;

use super::config::ExpressRouteConfig;
use super::select::select_next;

/// The express route's schedule.
#[derive(Debug, Clone)]
pub struct ExpressRoute {
    schedule: Schedule,
}

impl ExpressRoute {
    /// Create a route from its schedule.
    pub fn new(schedule: Schedule) -> Self {
        Self { schedule }
    }

    /// Display name of the route.
    pub fn name(&self) -> &str {
        self.schedule.name()
    }

    /// Build the options reachable after `reference`.
    pub fn options(&self, reference: ServiceTime, config: &ExpressRouteConfig) -> RouteResult {
        let departures = select_next(
            &self.schedule,
            reference,
            config.access(),
            config.departures,
        );
        if departures.is_no_further_service() {
            debug!(reference = %reference, "no reachable express departure left today");
        }

        let options = departures
            .times()
            .iter()
            .map(|t| {
                let departure = t.resolve_after(reference);
                ItineraryOption::direct(reference, departure, departure + config.ride())
            })
            .collect();

        RouteResult {
            route: RouteId::Express,
            name: self.name().to_string(),
            options,
            no_further_service: departures.is_no_further_service(),
            last_service: departures.is_last_service(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Connection;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn at(s: &str) -> ServiceTime {
        ServiceTime::parse_hhmm(s, date()).unwrap()
    }

    fn route(times: &[&str]) -> ExpressRoute {
        ExpressRoute::new(Schedule::parse("route2", "Dangsan express", times).unwrap())
    }

    #[test]
    fn skips_departures_inside_access_time() {
        let r = route(&["07:10", "07:40", "07:55", "08:20", "08:45"]);
        let result = r.options(at("07:00"), &ExpressRouteConfig::default());

        assert_eq!(result.route, RouteId::Express);
        assert_eq!(result.name, "Dangsan express");

        let rows: Vec<_> = result
            .options
            .iter()
            .map(|o| {
                (
                    o.lead_time().num_minutes(),
                    o.departure.to_string(),
                    o.arrival.to_string(),
                )
            })
            .collect();
        assert_eq!(
            rows,
            [
                (55, "07:55".to_string(), "08:29".to_string()),
                (80, "08:20".to_string(), "08:54".to_string()),
                (105, "08:45".to_string(), "09:19".to_string()),
            ]
        );
        assert!(result.options.iter().all(|o| o.connection == Connection::Direct));
        assert!(!result.last_service);
    }

    #[test]
    fn departure_exactly_at_access_boundary_is_missed() {
        let r = route(&["07:45", "07:50"]);
        let result = r.options(at("07:00"), &ExpressRouteConfig::default());

        assert_eq!(result.len(), 1);
        assert_eq!(result.options[0].departure.to_string(), "07:50");
        assert!(result.last_service);
    }

    #[test]
    fn access_past_midnight_is_no_further_service() {
        // 23:45 + 45 is 00:30 tomorrow; 22:00 and 23:30 are not offered
        // as tomorrow's departures.
        let r = route(&["22:00", "23:30"]);
        let result = r.options(at("23:45"), &ExpressRouteConfig::default());

        assert!(result.is_empty());
        assert!(result.no_further_service);
    }

    #[test]
    fn arrival_after_midnight_keeps_date() {
        let r = route(&["23:50"]);
        let result = r.options(at("23:00"), &ExpressRouteConfig::default());

        let option = &result.options[0];
        assert_eq!(option.arrival.to_string(), "00:24");
        assert_eq!(option.arrival.date(), NaiveDate::from_ymd_opt(2024, 3, 16).unwrap());
        assert_eq!(option.total_duration().num_minutes(), 84);
    }

    #[test]
    fn custom_access_and_ride() {
        let r = route(&["07:10", "07:40"]);
        let config = ExpressRouteConfig::new(5, 20, 1);
        let result = r.options(at("07:00"), &config);

        assert_eq!(result.len(), 1);
        assert_eq!(result.options[0].arrival.to_string(), "07:30");
    }
}
