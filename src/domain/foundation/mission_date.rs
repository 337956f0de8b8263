//! Calendar-date value object for mission idempotency windows.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A calendar date (no time component) bounding how often a mission may
/// be credited.
///
/// "Daily" windows in this system derive purely from comparing mission
/// dates at call time; there are no timers or schedulers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MissionDate(NaiveDate);

impl MissionDate {
    /// Returns today's date in UTC.
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Creates a mission date from a NaiveDate.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Creates a mission date from year/month/day, for tests and fixtures.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Returns the inner NaiveDate.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Returns the following calendar date.
    pub fn next_day(&self) -> Self {
        Self(self.0.succ_opt().unwrap_or(self.0))
    }
}

impl fmt::Display for MissionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for MissionDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|e| ValidationError::invalid_format("date", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_iso_date() {
        let date = MissionDate::from_ymd(2025, 3, 7).unwrap();
        assert_eq!(date.to_string(), "2025-03-07");
    }

    #[test]
    fn parses_iso_date() {
        let date: MissionDate = "2025-03-07".parse().unwrap();
        assert_eq!(date, MissionDate::from_ymd(2025, 3, 7).unwrap());
    }

    #[test]
    fn rejects_malformed_date() {
        assert!("07/03/2025".parse::<MissionDate>().is_err());
        assert!("not-a-date".parse::<MissionDate>().is_err());
    }

    #[test]
    fn next_day_advances_one_calendar_day() {
        let date = MissionDate::from_ymd(2025, 2, 28).unwrap();
        assert_eq!(date.next_day(), MissionDate::from_ymd(2025, 3, 1).unwrap());
    }

    #[test]
    fn ordering_follows_calendar() {
        let earlier = MissionDate::from_ymd(2025, 1, 1).unwrap();
        let later = MissionDate::from_ymd(2025, 1, 2).unwrap();
        assert!(earlier < later);
    }
}
