// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A non-negative length of time with nanosecond precision
///
/// Used for episode durations and for offsets into an episode
/// (chapter marks, transcript segments, contributor presence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timespan(Duration);

impl Timespan {
    pub const ZERO: Timespan = Timespan(Duration::ZERO);

    pub const fn from_secs(seconds: u64) -> Self {
        Self(Duration::from_secs(seconds))
    }

    pub const fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    pub const fn from_nanos(nanos: u64) -> Self {
        Self(Duration::from_nanos(nanos))
    }

    pub const fn as_secs(&self) -> u64 {
        self.0.as_secs()
    }

    pub const fn as_millis(&self) -> u128 {
        self.0.as_millis()
    }

    pub const fn as_duration(&self) -> Duration {
        self.0
    }

    /// Difference `self - earlier`, or `None` if `earlier` is later than `self`
    pub fn checked_sub(&self, earlier: Timespan) -> Option<Timespan> {
        self.0.checked_sub(earlier.0).map(Self)
    }

    /// Parse a duration in one of the forms feeds use for `itunes:duration`
    ///
    /// Accepts `HH:MM:SS`, `MM:SS` and plain seconds. The last component may
    /// carry up to nine fractional digits (`01:02:03.5`). Every component
    /// must be plain ASCII digits; signs and exponents are rejected.
    pub fn parse(value: &str) -> Result<Self, ModelError> {
        let invalid = || ModelError::InvalidTimespan {
            value: value.to_string(),
        };

        let parts: Vec<&str> = value.trim().split(':').collect();
        if parts.len() > 3 {
            return Err(invalid());
        }

        let (last, leading) = parts.split_last().ok_or_else(invalid)?;

        let (whole, fraction) = match last.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (*last, None),
        };
        let seconds = parse_digits(whole).ok_or_else(invalid)?;
        let nanos = match fraction {
            Some(fraction) => parse_nanos(fraction).ok_or_else(invalid)?,
            None => 0,
        };

        // Hours and minutes must be whole numbers
        let mut minutes: u64 = 0;
        for part in leading {
            let n = parse_digits(part).ok_or_else(invalid)?;
            minutes = minutes
                .checked_mul(60)
                .and_then(|m| m.checked_add(n))
                .ok_or_else(invalid)?;
        }

        let total_seconds = minutes
            .checked_mul(60)
            .and_then(|s| s.checked_add(seconds))
            .ok_or_else(invalid)?;

        Ok(Self(Duration::new(total_seconds, nanos)))
    }
}

/// Parse a non-empty run of ASCII digits
fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Parse 1 to 9 fractional digits as nanoseconds
fn parse_nanos(fraction: &str) -> Option<u32> {
    if fraction.len() > 9 {
        return None;
    }
    let digits = parse_digits(fraction)?;
    let scale = 10u64.pow(9 - fraction.len() as u32);
    u32::try_from(digits * scale).ok()
}

impl From<Duration> for Timespan {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

impl From<Timespan> for Duration {
    fn from(span: Timespan) -> Self {
        span.0
    }
}

impl FromStr for Timespan {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Timespan {
    /// Formats as `HH:MM:SS`, dropping sub-second precision
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0.as_secs();
        write!(
            f,
            "{:02}:{:02}:{:02}",
            total / 3600,
            (total % 3600) / 60,
            total % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hours_minutes_seconds() {
        let span = Timespan::parse("01:02:03").unwrap();
        assert_eq!(span.as_secs(), 3723);
    }

    #[test]
    fn parses_minutes_seconds() {
        let span = Timespan::parse("30:00").unwrap();
        assert_eq!(span.as_secs(), 1800);
    }

    #[test]
    fn parses_plain_seconds() {
        let span = Timespan::parse("5400").unwrap();
        assert_eq!(span.as_secs(), 5400);
    }

    #[test]
    fn parses_fractional_seconds() {
        let span = Timespan::parse("00:00:01.5").unwrap();
        assert_eq!(span.as_millis(), 1500);
    }

    #[test]
    fn parses_nanosecond_fractions() {
        let span = Timespan::parse("2.000000001").unwrap();
        assert_eq!(span.as_duration(), Duration::new(2, 1));
    }

    #[test]
    fn large_seconds_keep_full_precision() {
        let span = Timespan::parse("9007199254740993").unwrap();
        assert_eq!(span.as_secs(), 9_007_199_254_740_993);
    }

    #[test]
    fn rejects_overflowing_values() {
        assert!(Timespan::parse("18446744073709551616").is_err());
        assert!(Timespan::parse("307445734561825861:00").is_err());
    }

    #[test]
    fn rejects_signs_and_exponents() {
        for value in ["1e3", "+30:00", "30:+00", "+5", "1.5e2", "inf", "NaN"] {
            assert!(
                matches!(Timespan::parse(value), Err(ModelError::InvalidTimespan { .. })),
                "expected {value:?} to be rejected"
            );
        }
    }

    #[test]
    fn rejects_malformed_values() {
        for value in [
            "", "abc", "1:2:3:4", "-5", "10:-1", "1.5:00", "1.", ".5", "1.2.3", "1.1234567890",
        ] {
            assert!(
                matches!(Timespan::parse(value), Err(ModelError::InvalidTimespan { .. })),
                "expected {value:?} to be rejected"
            );
        }
    }

    #[test]
    fn displays_as_clock_time() {
        assert_eq!(Timespan::from_secs(3723).to_string(), "01:02:03");
        assert_eq!(Timespan::from_millis(59_999).to_string(), "00:00:59");
        assert_eq!(Timespan::ZERO.to_string(), "00:00:00");
    }

    #[test]
    fn checked_sub_refuses_negative_results() {
        let start = Timespan::from_secs(10);
        let end = Timespan::from_secs(25);
        assert_eq!(end.checked_sub(start), Some(Timespan::from_secs(15)));
        assert_eq!(start.checked_sub(end), None);
    }
}
