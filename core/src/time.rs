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

//! Time related utils.

use crate::Error;
use chrono::Utc;

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<Utc>;

/// Create a new DateTime with current time.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into ISO 8601 with milliseconds: "2022-03-13T07:20:04.000Z"
pub fn format_iso8601_millis(t: DateTime) -> String {
    t.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Parse an RFC 3339 timestamp with any offset into UTC.
pub fn parse_rfc3339(s: &str) -> crate::Result<DateTime> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|v| v.with_timezone(&Utc))
        .map_err(|e| Error::data_invalid(format!("parse '{s}' as rfc3339 failed")).with_source(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};
    use test_case::test_case;

    #[test]
    fn test_format_iso8601_millis() {
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_iso8601_millis(t), "2024-01-01T00:00:00.000Z");
    }

    #[test_case("2024-01-01T00:00:00Z", (2024, 1, 1, 0, 0, 0); "utc")]
    #[test_case("2024-01-01T02:00:00+02:00", (2024, 1, 1, 0, 0, 0); "positive offset")]
    #[test_case("2023-12-31T19:30:00-04:30", (2024, 1, 1, 0, 0, 0); "negative offset")]
    #[test_case("2024-02-29T12:00:00.250Z", (2024, 2, 29, 12, 0, 0); "fraction on leap day")]
    fn test_parse_rfc3339(input: &str, expected: (i32, u32, u32, u32, u32, u32)) {
        let (y, mo, d, h, mi, s) = expected;
        let t = parse_rfc3339(input).expect("must parse");
        assert_eq!(
            t.with_nanosecond(0).expect("zero is a valid nanosecond"),
            Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
        );
    }

    #[test_case("2024-01-01"; "date only")]
    #[test_case("2024-01-01T00:00:00"; "no offset")]
    #[test_case("2024-02-30T00:00:00Z"; "not a calendar date")]
    #[test_case(""; "empty")]
    fn test_parse_rfc3339_invalid(input: &str) {
        let err = parse_rfc3339(input).expect_err("must fail");
        assert_eq!(err.kind(), crate::ErrorKind::DataInvalid);
    }
}
