// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::time::Duration;

use chrono::NaiveDate;
use chrono::TimeDelta;
use klevusign_core::time::{now, parse_rfc3339, DateTime};
use klevusign_core::validate::{validate_single_or_list, HeaderValueSet};
use klevusign_core::{Error, Result, Validate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{TIMESTAMP_FUTURE_TOLERANCE, TIMESTAMP_PAST_TOLERANCE};

static ISO8601: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([0-9]{4})-([0-9]{2})-([0-9]{2})T[0-9]{2}:[0-9]{2}:[0-9]{2}(\.[0-9]+)?(Z|[+-][0-9]{2}:[0-9]{2})$",
    )
    .expect("timestamp pattern must be valid")
});

/// TimestampValidator checks `X-KLEVU-TIMESTAMP`.
///
/// The timestamp must be ISO-8601 with a timezone designator, e.g.
/// `2024-01-01T00:00:00.000Z`, and lie within
/// `[now - past_tolerance, now + future_tolerance]`.
#[derive(Debug, Clone)]
pub struct TimestampValidator {
    now: Option<DateTime>,
    future_tolerance: Duration,
    past_tolerance: Duration,
}

impl Default for TimestampValidator {
    fn default() -> Self {
        Self {
            now: None,
            future_tolerance: TIMESTAMP_FUTURE_TOLERANCE,
            past_tolerance: TIMESTAMP_PAST_TOLERANCE,
        }
    }
}

impl TimestampValidator {
    /// Create a validator with the default 60s future and 600s past tolerance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tolerated clock skew into the future.
    pub fn with_future_tolerance(mut self, tolerance: Duration) -> Self {
        self.future_tolerance = tolerance;
        self
    }

    /// Set the tolerated age of a timestamp.
    pub fn with_past_tolerance(mut self, tolerance: Duration) -> Self {
        self.past_tolerance = tolerance;
        self
    }

    /// Specify the time timestamps are compared against.
    ///
    /// # Note
    ///
    /// We should always take current time to validate requests.
    /// Only use this function for testing.
    pub fn with_now(mut self, now: DateTime) -> Self {
        self.now = Some(now);
        self
    }

    fn check(&self, value: &str) -> Result<()> {
        let Some(caps) = ISO8601.captures(value) else {
            return Err(Error::data_invalid(format!(
                "Timestamp header value {value} is not a valid ISO-8601 date"
            )));
        };

        let is_calendar_date = match (
            caps[1].parse::<i32>(),
            caps[2].parse::<u32>(),
            caps[3].parse::<u32>(),
        ) {
            (Ok(y), Ok(m), Ok(d)) => NaiveDate::from_ymd_opt(y, m, d).is_some(),
            _ => false,
        };
        if !is_calendar_date {
            return Err(Error::data_invalid(format!(
                "Timestamp header value {value} is not a valid calendar date"
            )));
        }

        let timestamp = parse_rfc3339(value).map_err(|err| {
            Error::data_invalid(format!("Timestamp header value {value} could not be parsed"))
                .with_source(err)
        })?;

        let now = self.now.unwrap_or_else(now);
        let skew = timestamp.signed_duration_since(now);
        if skew > to_delta(self.future_tolerance)? {
            return Err(Error::data_invalid(format!(
                "Timestamp header value {value} is more than {} seconds in the future",
                self.future_tolerance.as_secs()
            )));
        }
        if skew < -to_delta(self.past_tolerance)? {
            return Err(Error::data_invalid(format!(
                "Timestamp header value {value} is more than {} seconds in the past",
                self.past_tolerance.as_secs()
            )));
        }

        Ok(())
    }
}

fn to_delta(d: Duration) -> Result<TimeDelta> {
    TimeDelta::from_std(d).map_err(|err| {
        Error::config_invalid(format!("timestamp tolerance {d:?} is out of range")).with_source(err)
    })
}

impl Validate<HeaderValueSet> for TimestampValidator {
    fn validate(&self, value: &HeaderValueSet) -> Result<()> {
        validate_single_or_list(value, "Timestamp", |v| self.check(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use http::HeaderValue;
    use klevusign_core::time::format_iso8601_millis;
    use test_case::test_case;

    fn fixed_now() -> DateTime {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    fn validate_offset(offset_secs: i64) -> Result<()> {
        let ts = format_iso8601_millis(fixed_now() + TimeDelta::seconds(offset_secs));
        TimestampValidator::new()
            .with_now(fixed_now())
            .validate(&HeaderValueSet::from(
                HeaderValue::from_str(&ts).expect("must be valid header"),
            ))
    }

    #[test_case(0, true; "now")]
    #[test_case(59, true; "just inside future window")]
    #[test_case(60, true; "future boundary")]
    #[test_case(61, false; "too far in the future")]
    #[test_case(-599, true; "just inside past window")]
    #[test_case(-600, true; "past boundary")]
    #[test_case(-601, false; "too old")]
    fn test_window(offset_secs: i64, valid: bool) {
        assert_eq!(validate_offset(offset_secs).is_ok(), valid);
    }

    #[test_case("2024-01-01T12:00:00Z", true; "utc designator")]
    #[test_case("2024-01-01T12:00:00.123456Z", true; "fractional seconds")]
    #[test_case("2024-01-01T14:00:00+02:00", true; "positive offset")]
    #[test_case("2024-01-01T07:00:00-05:00", true; "negative offset")]
    #[test_case("2024-01-01 12:00:00Z", false; "space separator")]
    #[test_case("2024-01-01T12:00:00", false; "no timezone")]
    #[test_case("2024-01-01T12:00:00+0200", false; "offset without colon")]
    #[test_case("2023-02-29T12:00:00Z", false; "not a leap year")]
    #[test_case("2024-13-01T12:00:00Z", false; "month out of range")]
    #[test_case("2024-01-01T25:00:00Z", false; "hour out of range")]
    #[test_case("yesterday", false; "free text")]
    fn test_format(input: &'static str, valid: bool) {
        let result = TimestampValidator::new()
            .with_now(fixed_now())
            .with_past_tolerance(Duration::from_secs(366 * 24 * 3600))
            .validate(&HeaderValueSet::from(HeaderValue::from_static(input)));
        assert_eq!(result.is_ok(), valid, "{result:?}");
    }

    #[test]
    fn test_messages() {
        let err = TimestampValidator::new()
            .validate(&HeaderValueSet::Missing)
            .expect_err("must fail");
        assert_eq!(err.messages(), ["Timestamp header value is required"]);

        let err = validate_offset(61).expect_err("must fail");
        assert_eq!(
            err.messages(),
            ["Timestamp header value 2024-01-01T12:01:01.000Z is more than 60 seconds in the future"]
        );
    }

    #[test]
    fn test_custom_tolerance() {
        let ts = HeaderValueSet::from(HeaderValue::from_static("2024-01-01T11:00:00Z"));
        let validator = TimestampValidator::new().with_now(fixed_now());
        assert!(validator.validate(&ts).is_err());
        assert!(validator
            .with_past_tolerance(Duration::from_secs(3600))
            .validate(&ts)
            .is_ok());
    }
}
