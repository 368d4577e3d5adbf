//! Fixed durations and fan-out counts for the two routes.

use chrono::Duration;

/// Parameters for the two-leg transfer route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRouteConfig {
    /// Ride time of the first leg, origin to interchange (minutes).
    pub first_leg_mins: i64,

    /// Ride time of the second leg, interchange to destination (minutes).
    pub second_leg_mins: i64,

    /// Number of first-leg departures to consider.
    pub departures: usize,

    /// Number of connecting departures to consider per first-leg departure.
    pub transfers: usize,
}

impl TransferRouteConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        first_leg_mins: i64,
        second_leg_mins: i64,
        departures: usize,
        transfers: usize,
    ) -> Self {
        Self {
            first_leg_mins,
            second_leg_mins,
            departures,
            transfers,
        }
    }

    /// Returns the first leg ride time as a Duration.
    pub fn first_leg(&self) -> Duration {
        Duration::minutes(self.first_leg_mins)
    }

    /// Returns the second leg ride time as a Duration.
    pub fn second_leg(&self) -> Duration {
        Duration::minutes(self.second_leg_mins)
    }

    /// Upper bound on the options one request can produce.
    pub fn max_options(&self) -> usize {
        self.departures * self.transfers
    }
}

impl Default for TransferRouteConfig {
    fn default() -> Self {
        Self {
            first_leg_mins: 42,
            second_leg_mins: 32,
            departures: 3,
            transfers: 2,
        }
    }
}

/// Parameters for the single-leg express route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressRouteConfig {
    /// Time needed to reach the boarding point (minutes).
    pub access_mins: i64,

    /// Ride time of the express leg (minutes).
    pub ride_mins: i64,

    /// Number of departures to consider.
    pub departures: usize,
}

impl ExpressRouteConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(access_mins: i64, ride_mins: i64, departures: usize) -> Self {
        Self {
            access_mins,
            ride_mins,
            departures,
        }
    }

    /// Returns the access time as a Duration.
    pub fn access(&self) -> Duration {
        Duration::minutes(self.access_mins)
    }

    /// Returns the ride time as a Duration.
    pub fn ride(&self) -> Duration {
        Duration::minutes(self.ride_mins)
    }
}

impl Default for ExpressRouteConfig {
    fn default() -> Self {
        Self {
            access_mins: 45,
            ride_mins: 34,
            departures: 3,
        }
    }
}

/// Configuration for the planner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlannerConfig {
    pub transfer: TransferRouteConfig,
    pub express: ExpressRouteConfig,
}
