//! Static timetable storage.
//!
//! The timetable is a JSON object keyed by leg. Each leg lists its daily
//! departures as ascending "HH:MM" strings:
//!
//! ```json
//! {
//!   "route1-1": { "name": "Baekseok", "departures": ["05:32", "05:47"] },
//!   "route1-2": { "transfers": ["06:20", "06:31"] },
//!   "route2":   { "name": "Dangsan express", "express_train": ["06:41"] }
//! }
//! ```
//!
//! The list may be given under `times`, `departures`, `transfers` or
//! `express_train`. It is loaded and validated once at startup and never
//! modified afterwards.

mod error;

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::TimeOfDay;

pub use error::ScheduleError;

/// Leg key for the first leg of the transfer route.
pub const TRANSFER_FIRST_LEG: &str = "route1-1";

/// Leg key for the second leg of the transfer route.
pub const TRANSFER_SECOND_LEG: &str = "route1-2";

/// Leg key for the express route.
pub const EXPRESS_LEG: &str = "route2";

/// One leg's fixed daily departures, ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    name: String,
    times: Vec<TimeOfDay>,
}

impl Schedule {
    /// Create a schedule, checking it is non-empty and ascending.
    ///
    /// `key` is used for error reporting.
    pub fn new(
        key: &str,
        name: impl Into<String>,
        times: Vec<TimeOfDay>,
    ) -> Result<Self, ScheduleError> {
        if times.is_empty() {
            return Err(ScheduleError::EmptyLeg {
                key: key.to_string(),
            });
        }

        if let Some(index) = times.windows(2).position(|w| w[1] < w[0]) {
            return Err(ScheduleError::Unsorted {
                key: key.to_string(),
                index: index + 1,
                time: times[index + 1],
            });
        }

        Ok(Self {
            name: name.into(),
            times,
        })
    }

    /// Parse "HH:MM" strings into a schedule.
    ///
    /// # Examples
    ///
    /// ```
    /// use commute_server::schedule::Schedule;
    ///
    /// let schedule = Schedule::parse("route2", "Express", &["06:41", "07:05"]).unwrap();
    /// assert_eq!(schedule.len(), 2);
    ///
    /// assert!(Schedule::parse("route2", "Express", &["07:05", "06:41"]).is_err());
    /// assert!(Schedule::parse("route2", "Express", &["7:05"]).is_err());
    /// ```
    pub fn parse<S: AsRef<str>>(
        key: &str,
        name: impl Into<String>,
        times: &[S],
    ) -> Result<Self, ScheduleError> {
        let times = times
            .iter()
            .enumerate()
            .map(|(index, s)| {
                TimeOfDay::parse(s.as_ref()).map_err(|source| ScheduleError::InvalidTime {
                    key: key.to_string(),
                    index,
                    value: s.as_ref().to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(key, name, times)
    }

    /// Display name of the leg.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Departures in ascending order.
    pub fn times(&self) -> &[TimeOfDay] {
        &self.times
    }

    /// Number of departures per day.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always false for a validated schedule.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// A leg as it appears in the timetable file.
#[derive(Debug, Deserialize)]
struct LegEntry {
    #[serde(default)]
    name: Option<String>,

    #[serde(alias = "departures", alias = "transfers", alias = "express_train")]
    times: Vec<String>,
}

/// All legs of the static timetable, keyed by leg key.
#[derive(Debug, Clone, Default)]
pub struct Timetable {
    legs: HashMap<String, Schedule>,
}

impl Timetable {
    /// Load and validate a timetable file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScheduleError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ScheduleError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let timetable = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            legs = timetable.len(),
            "loaded timetable"
        );
        Ok(timetable)
    }

    /// Parse and validate a timetable from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ScheduleError> {
        let entries: HashMap<String, LegEntry> = serde_json::from_str(json)?;

        let mut legs = HashMap::with_capacity(entries.len());
        for (key, entry) in entries {
            let name = entry.name.unwrap_or_else(|| key.clone());
            let schedule = Schedule::parse(&key, name, &entry.times)?;
            debug!(leg = %key, departures = schedule.len(), "parsed leg");
            legs.insert(key, schedule);
        }

        Ok(Self { legs })
    }

    /// Look up a leg by key.
    pub fn get(&self, key: &str) -> Option<&Schedule> {
        self.legs.get(key)
    }

    /// Look up a leg the planner cannot do without.
    pub fn require(&self, key: &str) -> Result<&Schedule, ScheduleError> {
        self.get(key)
            .ok_or_else(|| ScheduleError::MissingLeg(key.to_string()))
    }

    /// Number of legs.
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// True if the timetable has no legs.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    const LEGACY_JSON: &str = r#"{
        "route1-1": { "departures": ["06:00", "06:20", "07:00"] },
        "route1-2": { "transfers": ["06:50", "07:10"] },
        "route2": { "name": "Dangsan express", "express_train": ["22:00", "23:30"] }
    }"#;

    #[test]
    fn parse_legacy_layout() {
        let timetable = Timetable::from_json(LEGACY_JSON).unwrap();

        assert_eq!(timetable.len(), 3);
        let first = timetable.require(TRANSFER_FIRST_LEG).unwrap();
        assert_eq!(first.len(), 3);
        assert_eq!(first.name(), "route1-1");
        assert_eq!(first.times()[1].to_string(), "06:20");

        let express = timetable.require(EXPRESS_LEG).unwrap();
        assert_eq!(express.name(), "Dangsan express");
    }

    #[test]
    fn parse_plain_times_key() {
        let timetable = Timetable::from_json(r#"{ "x": { "times": ["05:00"] } }"#).unwrap();
        assert_eq!(timetable.get("x").unwrap().len(), 1);
    }

    #[test]
    fn missing_leg_is_reported() {
        let timetable = Timetable::from_json(r#"{ "route2": { "times": ["05:00"] } }"#).unwrap();
        let err = timetable.require(TRANSFER_SECOND_LEG).unwrap_err();
        assert!(matches!(err, ScheduleError::MissingLeg(ref k) if k == "route1-2"));
    }

    #[test]
    fn malformed_time_is_fatal() {
        let err =
            Timetable::from_json(r#"{ "route2": { "times": ["05:00", "5:30"] } }"#).unwrap_err();
        match err {
            ScheduleError::InvalidTime { key, index, value, .. } => {
                assert_eq!(key, "route2");
                assert_eq!(index, 1);
                assert_eq!(value, "5:30");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unsorted_leg_is_fatal() {
        let err = Timetable::from_json(r#"{ "route2": { "times": ["05:00", "06:00", "05:30"] } }"#)
            .unwrap_err();
        assert!(matches!(err, ScheduleError::Unsorted { index: 2, .. }));
    }

    #[test]
    fn duplicate_times_are_accepted() {
        let schedule = Schedule::parse("k", "k", &["05:00", "05:00", "05:10"]).unwrap();
        assert_eq!(schedule.len(), 3);
    }

    #[test]
    fn empty_leg_is_fatal() {
        let err = Timetable::from_json(r#"{ "route2": { "times": [] } }"#).unwrap_err();
        assert!(matches!(err, ScheduleError::EmptyLeg { .. }));
    }

    #[test]
    fn missing_times_field_is_json_error() {
        let err = Timetable::from_json(r#"{ "route2": { "name": "x" } }"#).unwrap_err();
        assert!(matches!(err, ScheduleError::Json(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(LEGACY_JSON.as_bytes()).unwrap();

        let timetable = Timetable::load(file.path()).unwrap();
        assert_eq!(timetable.len(), 3);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = Timetable::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ScheduleError::Io { .. }));
    }

    #[test]
    fn bundled_timetable_is_valid() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/timetable.json");
        let timetable = Timetable::load(path).unwrap();

        for key in [TRANSFER_FIRST_LEG, TRANSFER_SECOND_LEG, EXPRESS_LEG] {
            assert!(timetable.require(key).is_ok(), "missing {key}");
        }
    }
}
