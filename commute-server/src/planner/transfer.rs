//! Itinerary builder for the two-leg transfer route.
//!
//! The rider boards the first leg, rides a fixed time to the interchange,
//! waits for the second leg and rides a fixed time to the destination.
//! Each of the next few first-leg departures is paired with the next few
//! connections that can be made from it.

use chrono::Duration;
use tracing::debug;

use crate::domain::{Interchange, ItineraryOption, RouteId, RouteResult, ServiceTime};
use crate::schedule::Schedule;

use super::config::TransferRouteConfig;
use super::select::select_next;

/// The transfer route's two schedules.
#[derive(Debug, Clone)]
pub struct TransferRoute {
    first_leg: Schedule,
    second_leg: Schedule,
}

impl TransferRoute {
    /// Create a route from its first and second leg schedules.
    pub fn new(first_leg: Schedule, second_leg: Schedule) -> Self {
        Self {
            first_leg,
            second_leg,
        }
    }

    /// Display name, taken from the first leg.
    pub fn name(&self) -> &str {
        self.first_leg.name()
    }

    /// Build the options available after `reference`.
    ///
    /// Options come out grouped by first-leg departure, earliest first, with
    /// each group's connections in schedule order. A first-leg departure
    /// whose interchange arrival has no connection left today contributes
    /// nothing.
    pub fn options(&self, reference: ServiceTime, config: &TransferRouteConfig) -> RouteResult {
        let departures = select_next(
            &self.first_leg,
            reference,
            Duration::zero(),
            config.departures,
        );

        let mut options = Vec::with_capacity(config.max_options());
        for t in departures.times() {
            let departure = t.resolve_after(reference);
            let interchange_arrival = departure + config.first_leg();

            let connections = select_next(
                &self.second_leg,
                departure,
                config.first_leg(),
                config.transfers,
            );
            if connections.is_no_further_service() {
                debug!(
                    departure = %departure,
                    interchange_arrival = %interchange_arrival,
                    "no connection left at interchange"
                );
                continue;
            }

            for u in connections.times() {
                let interchange = Interchange {
                    arrival: interchange_arrival,
                    departure: u.resolve_after(interchange_arrival),
                };
                let arrival = interchange.departure + config.second_leg();
                options.push(ItineraryOption::with_transfer(
                    reference,
                    departure,
                    interchange,
                    arrival,
                ));
            }
        }

        RouteResult {
            route: RouteId::Transfer,
            name: self.name().to_string(),
            options,
            no_further_service: departures.is_no_further_service(),
            last_service: departures.is_last_service(),
        }
    }
}
