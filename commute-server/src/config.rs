//! Server configuration read from the environment.
//!
//! | Variable               | Default               |
//! |------------------------|-----------------------|
//! | `COMMUTE_BIND`         | `127.0.0.1:3000`      |
//! | `COMMUTE_TIMETABLE`    | `data/timetable.json` |
//! | `COMMUTE_LEG1_MINS`    | 42                    |
//! | `COMMUTE_LEG2_MINS`    | 32                    |
//! | `COMMUTE_ACCESS_MINS`  | 45                    |
//! | `COMMUTE_EXPRESS_MINS` | 34                    |
//! | `COMMUTE_DEPARTURES`   | 3                     |
//! | `COMMUTE_TRANSFERS`    | 2                     |

use std::fmt::Display;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use crate::planner::{ExpressRouteConfig, PlannerConfig, TransferRouteConfig};

const DEFAULT_BIND: &str = "127.0.0.1:3000";
const DEFAULT_TIMETABLE: &str = "data/timetable.json";

/// Upper bound (exclusive) for every configured duration.
const MINUTES_PER_DAY: i64 = 24 * 60;

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("invalid {key}={value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    /// A fan-out count is zero
    #[error("{key} must be at least 1")]
    Zero { key: &'static str },

    /// A duration reaches a full day
    #[error("{key} must be under 1440 minutes, got {minutes}")]
    TooLong { key: &'static str, minutes: i64 },
}

/// Everything the server needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind: SocketAddr,

    /// Path to the timetable JSON file.
    pub timetable_path: PathBuf,

    pub planner: PlannerConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = PlannerConfig::default();

        let bind = match lookup("COMMUTE_BIND") {
            Some(value) => parse_value("COMMUTE_BIND", value)?,
            None => parse_value("COMMUTE_BIND", DEFAULT_BIND.to_string())?,
        };
        let timetable_path = lookup("COMMUTE_TIMETABLE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TIMETABLE));

        let transfer = TransferRouteConfig::new(
            minutes(&lookup, "COMMUTE_LEG1_MINS", defaults.transfer.first_leg_mins)?,
            minutes(&lookup, "COMMUTE_LEG2_MINS", defaults.transfer.second_leg_mins)?,
            count(&lookup, "COMMUTE_DEPARTURES", defaults.transfer.departures)?,
            count(&lookup, "COMMUTE_TRANSFERS", defaults.transfer.transfers)?,
        );
        let legs = transfer.first_leg_mins + transfer.second_leg_mins;
        if legs >= MINUTES_PER_DAY {
            return Err(ConfigError::TooLong {
                key: "COMMUTE_LEG1_MINS + COMMUTE_LEG2_MINS",
                minutes: legs,
            });
        }
        let express = ExpressRouteConfig::new(
            minutes(&lookup, "COMMUTE_ACCESS_MINS", defaults.express.access_mins)?,
            minutes(&lookup, "COMMUTE_EXPRESS_MINS", defaults.express.ride_mins)?,
            transfer.departures,
        );

        Ok(Self {
            bind,
            timetable_path,
            planner: PlannerConfig { transfer, express },
        })
    }
}

fn parse_value<T>(key: &'static str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    let parsed = value.trim().parse::<T>();
    parsed.map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value,
    })
}

/// A non-negative whole number of minutes, less than a day.
fn minutes<F>(lookup: &F, key: &'static str, default: i64) -> Result<i64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let minutes = match lookup(key) {
        Some(value) => i64::from(parse_value::<u32>(key, value)?),
        None => default,
    };
    if minutes >= MINUTES_PER_DAY {
        return Err(ConfigError::TooLong { key, minutes });
    }
    Ok(minutes)
}

/// A fan-out count of at least one.
fn count<F>(lookup: &F, key: &'static str, default: usize) -> Result<usize, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let n = match lookup(key) {
        Some(value) => parse_value::<usize>(key, value)?,
        None => default,
    };
    if n == 0 {
        return Err(ConfigError::Zero { key });
    }
    Ok(n)
}
