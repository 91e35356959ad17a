// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Formats with an explicit offset that RFC 2822 and RFC 3339 parsing reject
const RELAXED_FORMATS: [&str; 1] = ["%Y-%m-%d %H:%M:%S %z"];

/// Formats without any zone information, read as UTC
const NAIVE_FORMATS: [&str; 3] = [
    "%a, %d %b %Y %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

/// A point in time, stored in UTC
///
/// The default value is the Unix epoch, which is what a freshly
/// default-constructed record carries until a caller sets a real date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The current time
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Build a timestamp from seconds since the Unix epoch
    pub fn from_unix_seconds(seconds: i64) -> Option<Self> {
        DateTime::from_timestamp(seconds, 0).map(Self)
    }

    pub fn unix_seconds(&self) -> i64 {
        self.0.timestamp()
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Render as RFC 2822, the format RSS `pubDate` elements use
    pub fn to_rfc2822(&self) -> String {
        self.0.to_rfc2822()
    }

    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }

    /// Parse a date string as found in podcast feeds
    ///
    /// Tries RFC 2822 first, then RFC 3339, then a few relaxed variants.
    /// Dates without a zone are read as UTC, and a bare `YYYY-MM-DD` date is
    /// taken as midnight UTC.
    pub fn parse(date_str: &str) -> Result<Self, ModelError> {
        let trimmed = date_str.trim();

        let rfc2822_error = match DateTime::parse_from_rfc2822(trimmed) {
            Ok(dt) => return Ok(dt.into()),
            Err(e) => e,
        };

        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(dt.into());
        }

        for format in RELAXED_FORMATS {
            if let Ok(dt) = DateTime::parse_from_str(trimmed, format) {
                return Ok(dt.into());
            }
        }

        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(Self(naive.and_utc()));
            }
        }

        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| Self(naive.and_utc()))
            .ok_or_else(|| ModelError::InvalidDate {
                date_str: date_str.to_string(),
                reason: rfc2822_error.to_string(),
            })
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self(dt.with_timezone(&Utc))
    }
}

impl FromStr for Timestamp {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unix_epoch() {
        assert_eq!(Timestamp::default().unix_seconds(), 0);
    }

    #[test]
    fn parses_rfc2822() {
        let ts = Timestamp::parse("Mon, 01 Jan 2024 12:00:00 +0000").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-01-01T12:00:00+00:00");
    }

    #[test]
    fn parses_rfc3339_and_normalizes_to_utc() {
        let ts = Timestamp::parse("2024-01-01T14:00:00+02:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-01-01T12:00:00+00:00");
    }

    #[test]
    fn parses_relaxed_space_separated_format() {
        let ts = Timestamp::parse("2024-01-15 08:30:00 +0000").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-01-15T08:30:00+00:00");
    }

    #[test]
    fn parses_rfc2822_without_zone_as_utc() {
        let ts = Timestamp::parse("Mon, 15 Jan 2024 08:30:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-01-15T08:30:00+00:00");
    }

    #[test]
    fn parses_iso_without_offset_as_utc() {
        let ts = Timestamp::parse("2024-01-15T08:30:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-01-15T08:30:00+00:00");

        let spaced = Timestamp::parse("2024-01-15 08:30:00").unwrap();
        assert_eq!(spaced, ts);
    }

    #[test]
    fn parses_bare_date_as_midnight() {
        let ts = Timestamp::parse("2024-03-05").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-03-05T00:00:00+00:00");
    }

    #[test]
    fn rejects_unparseable_date() {
        let result = Timestamp::parse("sometime last week");
        match result {
            Err(ModelError::InvalidDate { date_str, .. }) => {
                assert_eq!(date_str, "sometime last week")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rfc2822_output_parses_back() {
        let ts = Timestamp::from_unix_seconds(1_704_110_400).unwrap();
        assert_eq!(Timestamp::parse(&ts.to_rfc2822()).unwrap(), ts);
    }

    #[test]
    fn orders_chronologically() {
        let earlier = Timestamp::from_unix_seconds(100).unwrap();
        let later = Timestamp::from_unix_seconds(200).unwrap();
        assert!(earlier < later);
    }
}
