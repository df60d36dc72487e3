// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FluxION.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Naive timestamp layouts accepted from the data access layer, tried in order.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Production metric carried by a series point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Solar,
    Wind,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Solar, Metric::Wind];

    /// Stable key used on the wire and in query strings
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Solar => "solar",
            Self::Wind => "wind",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "solar" => Some(Self::Solar),
            "wind" => Some(Self::Wind),
            _ => None,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single raw power measurement for one park (one CSV row).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// ISO-like local timestamp, as written in the source file
    pub datetime: String,
    /// Measured power (MW). `None` when the source cell was empty or not numeric.
    #[serde(rename = "MW", default)]
    pub mw: Option<f64>,
}

impl Reading {
    #[must_use]
    pub fn new(datetime: impl Into<String>, mw: f64) -> Self {
        Self {
            datetime: datetime.into(),
            mw: Some(mw),
        }
    }

    /// Start of the calendar hour this reading falls into, with its value.
    ///
    /// Returns `None` for malformed rows: unparseable timestamp, missing or
    /// non-finite measurement.
    #[must_use]
    pub fn hour_and_value(&self) -> Option<(NaiveDateTime, f64)> {
        let mw = self.mw.filter(|value| value.is_finite())?;
        let timestamp = parse_timestamp(&self.datetime)?;
        let hour = timestamp.date().and_hms_opt(timestamp.hour(), 0, 0)?;
        Some((hour, mw))
    }
}

/// Parse an ISO-like timestamp.
///
/// Accepts `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, `YYYY-MM-DDTHH[:MM[:SS[.fff]]]`
/// (also with a space separator) and RFC 3339 with an offset. Missing parts
/// default to the start of the period. Offsets are dropped: the wall-clock
/// time as written is kept.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_local());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| parse_truncated(raw))
}

/// Forms without minutes: `YYYY`, `YYYY-MM`, `YYYY-MM-DD` and `YYYY-MM-DDTHH`.
fn parse_truncated(raw: &str) -> Option<NaiveDateTime> {
    if let Some((day, hour)) = raw.split_once(['T', ' ']) {
        let hour = two_digits(hour)?;
        return NaiveDate::parse_from_str(day, "%Y-%m-%d")
            .ok()?
            .and_hms_opt(hour, 0, 0);
    }

    let date = match raw.len() {
        4 if raw.bytes().all(|b| b.is_ascii_digit()) => NaiveDate::from_ymd_opt(raw.parse().ok()?, 1, 1),
        7 => NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").ok(),
        _ => NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok(),
    }?;
    Some(date.and_time(NaiveTime::MIN))
}

fn two_digits(raw: &str) -> Option<u32> {
    if raw.len() == 2 && raw.bytes().all(|b| b.is_ascii_digit()) {
        raw.parse().ok()
    } else {
        None
    }
}

/// Parse a zero-padded 24-hour `HH:MM` time of day.
#[must_use]
pub fn parse_time_of_day(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert_eq!(
            parse_timestamp("2020-01-01T01:10:00"),
            Some(at(2020, 1, 1, 1, 10, 0))
        );
        assert_eq!(
            parse_timestamp("2020-01-01 01:10:30"),
            Some(at(2020, 1, 1, 1, 10, 30))
        );
        assert_eq!(
            parse_timestamp("2020-01-01T01:10"),
            Some(at(2020, 1, 1, 1, 10, 0))
        );
        assert_eq!(parse_timestamp("2020-06-15"), Some(at(2020, 6, 15, 0, 0, 0)));
        assert_eq!(
            parse_timestamp("2020-01-01T01:10:00.250"),
            Some(
                at(2020, 1, 1, 1, 10, 0)
                    .with_nanosecond(250_000_000)
                    .unwrap()
            )
        );
    }

    #[test]
    fn test_parse_timestamp_truncated_forms() {
        assert_eq!(parse_timestamp("2020-01-01T01"), Some(at(2020, 1, 1, 1, 0, 0)));
        assert_eq!(parse_timestamp("2020-03-15 07"), Some(at(2020, 3, 15, 7, 0, 0)));
        assert_eq!(parse_timestamp("2020-06"), Some(at(2020, 6, 1, 0, 0, 0)));
        assert_eq!(parse_timestamp("2020"), Some(at(2020, 1, 1, 0, 0, 0)));

        assert_eq!(parse_timestamp("2020-01-01T24"), None);
        assert_eq!(parse_timestamp("2020-01-01T1"), None);
        assert_eq!(parse_timestamp("2020-13"), None);
        assert_eq!(parse_timestamp("20201"), None);
        assert_eq!(parse_timestamp("-202"), None);
    }

    #[test]
    fn test_parse_timestamp_keeps_wall_clock_for_offsets() {
        assert_eq!(
            parse_timestamp("2020-01-01T23:30:00+02:00"),
            Some(at(2020, 1, 1, 23, 30, 0))
        );
        assert_eq!(
            parse_timestamp("2020-01-01T23:30:00Z"),
            Some(at(2020, 1, 1, 23, 30, 0))
        );
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("   "), None);
        assert_eq!(parse_timestamp("not a date"), None);
        assert_eq!(parse_timestamp("2020-13-01T00:00:00"), None);
        assert_eq!(parse_timestamp("2020-02-30"), None);
    }

    #[test]
    fn test_parse_time_of_day() {
        assert_eq!(
            parse_time_of_day("10:00"),
            NaiveTime::from_hms_opt(10, 0, 0)
        );
        assert_eq!(
            parse_time_of_day("23:59"),
            NaiveTime::from_hms_opt(23, 59, 0)
        );
        assert_eq!(parse_time_of_day("24:00"), None);
        assert_eq!(parse_time_of_day("noon"), None);
    }

    #[test]
    fn test_hour_and_value_truncates_to_hour() {
        let reading = Reading::new("2020-01-01T01:50:59", 20.0);
        assert_eq!(
            reading.hour_and_value(),
            Some((at(2020, 1, 1, 1, 0, 0), 20.0))
        );
    }

    #[test]
    fn test_hour_and_value_rejects_malformed_rows() {
        assert!(Reading::new("garbage", 1.0).hour_and_value().is_none());
        assert!(
            Reading::new("2020-01-01T00:00:00", f64::NAN)
                .hour_and_value()
                .is_none()
        );
        assert!(
            Reading::new("2020-01-01T00:00:00", f64::INFINITY)
                .hour_and_value()
                .is_none()
        );
        let missing = Reading {
            datetime: "2020-01-01T00:00:00".to_owned(),
            mw: None,
        };
        assert!(missing.hour_and_value().is_none());
    }

    #[test]
    fn test_reading_deserializes_csv_shape() {
        let reading: Reading =
            serde_json::from_str(r#"{"datetime":"2020-01-01T00:15:00","MW":3.5}"#).unwrap();
        assert_eq!(reading, Reading::new("2020-01-01T00:15:00", 3.5));

        let empty: Reading =
            serde_json::from_str(r#"{"datetime":"2020-01-01T00:15:00","MW":null}"#).unwrap();
        assert!(empty.mw.is_none());
    }

    #[test]
    fn test_metric_keys() {
        for metric in Metric::ALL {
            assert_eq!(Metric::from_key(metric.key()), Some(metric));
        }
        assert_eq!(Metric::from_key("combined"), None);
        assert_eq!(Metric::Wind.to_string(), "wind");
    }
}
