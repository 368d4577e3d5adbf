//! Itinerary options produced by the route builders.
//!
//! An option is built once and then only read. Both route topologies share
//! the same record; what differs between them lives in [`Connection`], so
//! ranking code can treat every option alike.

use std::fmt;

use chrono::Duration;

use super::ServiceTime;

/// Identifies one of the two commuter routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteId {
    /// Two legs with a timed interchange.
    Transfer,
    /// One express leg reached after an access offset.
    Express,
}

impl RouteId {
    /// Stable key used in responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteId::Transfer => "route1",
            RouteId::Express => "route2",
        }
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interchange details for a two-leg option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interchange {
    /// When the first leg reaches the interchange.
    pub arrival: ServiceTime,

    /// When the connecting second leg departs.
    pub departure: ServiceTime,
}

impl Interchange {
    /// Time spent waiting at the interchange.
    pub fn wait(&self) -> Duration {
        self.departure.signed_duration_since(self.arrival)
    }
}

/// How an option reaches its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connection {
    Direct,
    Transfer(Interchange),
}

/// One fully resolved journey on a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItineraryOption {
    /// The reference instant this option was built against.
    pub reference: ServiceTime,

    /// Departure of the first scheduled leg.
    pub departure: ServiceTime,

    /// Arrival at the final destination.
    pub arrival: ServiceTime,

    pub connection: Connection,
}

impl ItineraryOption {
    /// A single-leg option.
    pub fn direct(reference: ServiceTime, departure: ServiceTime, arrival: ServiceTime) -> Self {
        Self {
            reference,
            departure,
            arrival,
            connection: Connection::Direct,
        }
    }

    /// A two-leg option changing at `interchange`.
    pub fn with_transfer(
        reference: ServiceTime,
        departure: ServiceTime,
        interchange: Interchange,
        arrival: ServiceTime,
    ) -> Self {
        Self {
            reference,
            departure,
            arrival,
            connection: Connection::Transfer(interchange),
        }
    }

    /// Time from the reference instant until the first departure.
    pub fn lead_time(&self) -> Duration {
        self.departure.signed_duration_since(self.reference)
    }

    /// Time from the reference instant until arrival.
    pub fn total_duration(&self) -> Duration {
        self.arrival.signed_duration_since(self.reference)
    }

    /// Departure of the leg that reaches the destination.
    pub fn final_departure(&self) -> ServiceTime {
        match &self.connection {
            Connection::Direct => self.departure,
            Connection::Transfer(interchange) => interchange.departure,
        }
    }

    /// Interchange details, if this option changes trains.
    pub fn interchange(&self) -> Option<&Interchange> {
        match &self.connection {
            Connection::Direct => None,
            Connection::Transfer(interchange) => Some(interchange),
        }
    }
}

/// The options one route builder produced for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteResult {
    pub route: RouteId,

    /// Display name of the route.
    pub name: String,

    /// Options in builder emission order.
    pub options: Vec<ItineraryOption>,

    /// True when the route's first leg has no departures left today.
    pub no_further_service: bool,

    /// True when fewer first-leg departures remain today than were asked for.
    pub last_service: bool,
}

impl RouteResult {
    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// True if the route produced no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn time(s: &str) -> ServiceTime {
        ServiceTime::parse_hhmm(s, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()).unwrap()
    }

    #[test]
    fn route_keys() {
        assert_eq!(RouteId::Transfer.to_string(), "route1");
        assert_eq!(RouteId::Express.to_string(), "route2");
    }

    #[test]
    fn transfer_option_durations() {
        let interchange = Interchange {
            arrival: time("06:42"),
            departure: time("06:50"),
        };
        let option = ItineraryOption::with_transfer(
            time("05:55"),
            time("06:00"),
            interchange,
            time("07:22"),
        );

        assert_eq!(option.lead_time(), Duration::minutes(5));
        assert_eq!(option.total_duration(), Duration::minutes(87));
        assert_eq!(option.interchange().unwrap().wait(), Duration::minutes(8));
        assert_eq!(option.final_departure(), time("06:50"));
    }

    #[test]
    fn direct_option_has_no_interchange() {
        let option = ItineraryOption::direct(time("07:00"), time("07:50"), time("08:24"));
        assert!(option.interchange().is_none());
        assert_eq!(option.lead_time(), Duration::minutes(50));
        assert_eq!(option.final_departure(), time("07:50"));
    }
}
