//! Data transfer objects for web requests and responses.
//!
//! All times leave the server as "HH:MM"; dates stay internal.

use serde::{Deserialize, Serialize};

use crate::domain::{Connection, ItineraryOption, RouteResult, ServiceTime};
use crate::planner::{CommutePlan, Recommendation};

/// Query for the commute endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct CommuteQuery {
    /// Reference time in HH:MM format (defaults to now)
    pub now: Option<String>,
}

/// Response for the commute endpoint.
#[derive(Debug, Serialize)]
pub struct CommuteResponse {
    /// Reference time the options were computed against
    pub timestamp: String,

    /// Per-route options in builder order
    pub routes: RoutesResult,

    /// Options from both routes, earliest arrival first
    pub recommendations: Vec<RecommendationResult>,
}

/// Options for each route.
#[derive(Debug, Serialize)]
pub struct RoutesResult {
    pub route1: RouteOptionsResult,
    pub route2: RouteOptionsResult,
}

/// One route's options.
#[derive(Debug, Serialize)]
pub struct RouteOptionsResult {
    /// Route display name
    pub name: String,

    /// Whether the route's first leg has finished for the day
    pub no_further_service: bool,

    /// Whether these are the first leg's final departures today
    pub last_service: bool,

    pub options: Vec<OptionResult>,
}

/// An itinerary option.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OptionResult {
    Transfer(TransferOptionResult),
    Direct(DirectOptionResult),
}

/// A two-leg option with an interchange.
#[derive(Debug, Clone, Serialize)]
pub struct TransferOptionResult {
    /// Minutes until the first departure
    pub lead_time_mins: i64,

    /// First leg departure
    pub departure: String,

    /// Arrival at the interchange
    pub interchange_arrival: String,

    /// Minutes spent waiting at the interchange
    pub transfer_wait_mins: i64,

    /// Second leg departure
    pub transfer_departure: String,

    /// Arrival at the destination
    pub arrival: String,
}

/// A single-leg option.
#[derive(Debug, Clone, Serialize)]
pub struct DirectOptionResult {
    /// Minutes until departure, including access time
    pub lead_time_mins: i64,

    /// Departure
    pub departure: String,

    /// Arrival at the destination
    pub arrival: String,
}

/// A ranked option.
#[derive(Debug, Serialize)]
pub struct RecommendationResult {
    /// 1-based rank
    pub rank: usize,

    /// Route key ("route1" or "route2")
    pub route: &'static str,

    /// Index into that route's options
    pub option_index: usize,

    /// Arrival at the destination
    pub arrival_time: String,

    pub details: OptionResult,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl CommuteResponse {
    /// Create from a computed plan.
    pub fn from_plan(plan: &CommutePlan) -> Self {
        Self {
            timestamp: format_time(&plan.reference),
            routes: RoutesResult {
                route1: RouteOptionsResult::from_route(&plan.transfer),
                route2: RouteOptionsResult::from_route(&plan.express),
            },
            recommendations: plan
                .recommendations
                .iter()
                .map(RecommendationResult::from_recommendation)
                .collect(),
        }
    }
}

impl RouteOptionsResult {
    /// Create from a route's result.
    pub fn from_route(result: &RouteResult) -> Self {
        Self {
            name: result.name.clone(),
            no_further_service: result.no_further_service,
            last_service: result.last_service,
            options: result.options.iter().map(OptionResult::from_option).collect(),
        }
    }
}

impl OptionResult {
    /// Create from a domain option.
    pub fn from_option(option: &ItineraryOption) -> Self {
        let lead_time_mins = option.lead_time().num_minutes();
        let departure = format_time(&option.departure);
        let arrival = format_time(&option.arrival);

        match &option.connection {
            Connection::Direct => OptionResult::Direct(DirectOptionResult {
                lead_time_mins,
                departure,
                arrival,
            }),
            Connection::Transfer(interchange) => OptionResult::Transfer(TransferOptionResult {
                lead_time_mins,
                departure,
                interchange_arrival: format_time(&interchange.arrival),
                transfer_wait_mins: interchange.wait().num_minutes(),
                transfer_departure: format_time(&interchange.departure),
                arrival,
            }),
        }
    }
}

impl RecommendationResult {
    /// Create from a ranked option.
    pub fn from_recommendation(rec: &Recommendation) -> Self {
        Self {
            rank: rec.rank,
            route: rec.route.as_str(),
            option_index: rec.option_index,
            arrival_time: format_time(&rec.arrival),
            details: OptionResult::from_option(&rec.option),
        }
    }
}

/// Format a time as HH:MM.
fn format_time(time: &ServiceTime) -> String {
    time.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Interchange;
    use chrono::NaiveDate;
    use serde_json::json;

    fn at(s: &str) -> ServiceTime {
        ServiceTime::parse_hhmm(s, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()).unwrap()
    }

    #[test]
    fn transfer_option_json() {
        let option = ItineraryOption::with_transfer(
            at("05:55"),
            at("06:00"),
            Interchange {
                arrival: at("06:42"),
                departure: at("06:50"),
            },
            at("07:22"),
        );

        let value = serde_json::to_value(OptionResult::from_option(&option)).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "transfer",
                "lead_time_mins": 5,
                "departure": "06:00",
                "interchange_arrival": "06:42",
                "transfer_wait_mins": 8,
                "transfer_departure": "06:50",
                "arrival": "07:22"
            })
        );
    }

    #[test]
    fn direct_option_json() {
        let option = ItineraryOption::direct(at("05:55"), at("06:41"), at("07:15"));

        let value = serde_json::to_value(OptionResult::from_option(&option)).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "direct",
                "lead_time_mins": 46,
                "departure": "06:41",
                "arrival": "07:15"
            })
        );
    }

    #[test]
    fn route_json_carries_service_flags() {
        let result = RouteResult {
            route: crate::domain::RouteId::Express,
            name: "Dangsan express".to_string(),
            options: vec![ItineraryOption::direct(at("23:00"), at("23:50"), at("23:59"))],
            no_further_service: false,
            last_service: true,
        };

        let value = serde_json::to_value(RouteOptionsResult::from_route(&result)).unwrap();
        assert_eq!(value["name"], "Dangsan express");
        assert_eq!(value["no_further_service"], false);
        assert_eq!(value["last_service"], true);
        assert_eq!(value["options"][0]["type"], "direct");
    }

    #[test]
    fn format_time_hides_date() {
        let next_day = NaiveDate::from_ymd_opt(2024, 3, 16).unwrap();
        let time = ServiceTime::parse_hhmm("00:05", next_day).unwrap();
        assert_eq!(format_time(&time), "00:05");
    }
}
