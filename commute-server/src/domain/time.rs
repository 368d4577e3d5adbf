//! Civil time handling for fixed daily timetables.
//!
//! Timetables list departures as "HH:MM" strings with no date. This module
//! provides [`TimeOfDay`] for those entries and [`ServiceTime`] for the
//! absolute instants they resolve to once a reference date is known,
//! including services that run past midnight.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day with minute precision and no date.
///
/// # Examples
///
/// ```
/// use commute_server::domain::TimeOfDay;
///
/// let t = TimeOfDay::parse("06:20").unwrap();
/// assert_eq!(t.to_string(), "06:20");
/// assert!(t < TimeOfDay::parse("07:00").unwrap());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Build from hour and minute, or `None` if out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Parse from strict "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use commute_server::domain::TimeOfDay;
    ///
    /// // Valid times
    /// assert!(TimeOfDay::parse("00:00").is_ok());
    /// assert!(TimeOfDay::parse("23:59").is_ok());
    ///
    /// // Invalid formats
    /// assert!(TimeOfDay::parse("1430").is_err());
    /// assert!(TimeOfDay::parse("7:05").is_err());
    /// assert!(TimeOfDay::parse("24:00").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        Self::from_hm(hour, minute).ok_or_else(|| TimeError::new("invalid time"))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Place this time on a specific date.
    pub fn on(self, date: NaiveDate) -> ServiceTime {
        ServiceTime::new(date, self)
    }

    /// Resolve to the first instant at or after `base` with this time of day.
    ///
    /// The time is placed on `base`'s date; if that is strictly earlier than
    /// `base`, it rolls forward one day. Every date assignment in the
    /// planner goes through here.
    ///
    /// # Examples
    ///
    /// ```
    /// use commute_server::domain::{ServiceTime, TimeOfDay};
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    /// let base = ServiceTime::parse_hhmm("23:30", date).unwrap();
    ///
    /// let later = TimeOfDay::parse("23:45").unwrap().resolve_after(base);
    /// assert_eq!(later.date(), date);
    ///
    /// let rolled = TimeOfDay::parse("00:10").unwrap().resolve_after(base);
    /// assert_eq!(rolled.date(), NaiveDate::from_ymd_opt(2024, 3, 16).unwrap());
    /// ```
    pub fn resolve_after(self, base: ServiceTime) -> ServiceTime {
        let same_day = self.on(base.date());
        if same_day < base {
            same_day + Duration::days(1)
        } else {
            same_day
        }
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// An absolute civil instant: a date plus a time of day.
///
/// Two departures at "00:30" may fall on different dates, so anything
/// compared across midnight is held as a `ServiceTime`.
///
/// # Examples
///
/// ```
/// use commute_server::domain::ServiceTime;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let time = ServiceTime::parse_hhmm("14:30", date).unwrap();
/// assert_eq!(time.to_string(), "14:30");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServiceTime {
    date: NaiveDate,
    time: TimeOfDay,
}

impl ServiceTime {
    /// Create a new ServiceTime from date and time components.
    pub fn new(date: NaiveDate, time: TimeOfDay) -> Self {
        Self { date, time }
    }

    /// Parse a time from "HH:MM" format with a given date.
    pub fn parse_hhmm(s: &str, date: NaiveDate) -> Result<Self, TimeError> {
        TimeOfDay::parse(s).map(|time| Self { date, time })
    }

    /// Build from a wall-clock datetime, discarding seconds.
    pub fn from_datetime(dt: NaiveDateTime) -> Self {
        let time = TimeOfDay(
            NaiveTime::from_hms_opt(dt.hour(), dt.minute(), 0).unwrap_or(NaiveTime::MIN),
        );
        Self {
            date: dt.date(),
            time,
        }
    }

    /// Returns the date component.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the time-of-day component.
    pub fn time_of_day(&self) -> TimeOfDay {
        self.time
    }

    /// Converts to a NaiveDateTime.
    pub fn to_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.time.0)
    }

    /// Add a duration to this time.
    ///
    /// Crossing midnight advances the date.
    ///
    /// # Examples
    ///
    /// ```
    /// use commute_server::domain::ServiceTime;
    /// use chrono::{Duration, NaiveDate};
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    /// let time = ServiceTime::parse_hhmm("23:30", date).unwrap();
    ///
    /// let later = time + Duration::minutes(42);
    /// assert_eq!(later.to_string(), "00:12");
    /// assert_eq!(later.date(), NaiveDate::from_ymd_opt(2024, 3, 16).unwrap());
    /// ```
    pub fn checked_add(&self, duration: Duration) -> Option<Self> {
        let dt = self.to_datetime().checked_add_signed(duration)?;
        Some(Self::from_datetime(dt))
    }

    /// Returns the duration between two times.
    ///
    /// Returns a negative duration if `other` is after `self`.
    pub fn signed_duration_since(&self, other: Self) -> Duration {
        self.to_datetime()
            .signed_duration_since(other.to_datetime())
    }

    /// Whole minutes elapsed since `other`.
    pub fn minutes_since(&self, other: Self) -> i64 {
        self.signed_duration_since(other).num_minutes()
    }
}

impl Add<Duration> for ServiceTime {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        self.checked_add(rhs).expect("time overflow")
    }
}

impl Ord for ServiceTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_datetime().cmp(&other.to_datetime())
    }
}

impl PartialOrd for ServiceTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for ServiceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServiceTime({} {})", self.date, self.time)
    }
}

impl fmt::Display for ServiceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.time, f)
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
