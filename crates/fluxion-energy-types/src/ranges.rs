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

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Key of the unbounded "All time" preset
pub const ALL_TIME_VALUE: &str = "all";

/// A selectable named preset (all time, a year or a quarter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRangeOption {
    /// Stable lookup key: `all`, `2020`, `2020-q1`, ...
    pub value: String,
    /// Display label: `All time`, `2020`, `Q1 2020`, ...
    pub label: String,
    /// First day covered (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,
    /// Last day covered (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
}

impl TimeRangeOption {
    #[must_use]
    pub fn all_time() -> Self {
        Self {
            value: ALL_TIME_VALUE.to_owned(),
            label: "All time".to_owned(),
            start: None,
            end: None,
        }
    }

    #[must_use]
    pub fn bounded(value: String, label: String, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            value,
            label,
            start: Some(start),
            end: Some(end),
        }
    }

    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// How the two days of a [`DateTimeWindow`] are interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowMode {
    /// One calendar day; `from_time`..`to_time` bound the time of day
    Single,
    /// `from` + `from_time` up to `to` + `to_time`
    #[default]
    Range,
}

/// An explicit user-chosen window, optionally with time-of-day granularity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeWindow {
    #[serde(default)]
    pub mode: WindowMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    /// `HH:MM`, defaults to `00:00`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_time: Option<String>,
    /// `HH:MM`, defaults to `23:59`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_time: Option<String>,
}

impl DateTimeWindow {
    #[must_use]
    pub fn single_day(day: NaiveDate) -> Self {
        Self {
            mode: WindowMode::Single,
            from: Some(day),
            to: Some(day),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn range(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            mode: WindowMode::Range,
            from: Some(from),
            to: Some(to),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_times(mut self, from_time: &str, to_time: &str) -> Self {
        self.from_time = Some(from_time.to_owned());
        self.to_time = Some(to_time.to_owned());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_time_has_no_bounds() {
        let all = TimeRangeOption::all_time();
        assert_eq!(all.value, "all");
        assert_eq!(all.label, "All time");
        assert!(all.is_unbounded());
    }

    #[test]
    fn test_time_range_wire_shape() {
        let q1 = TimeRangeOption::bounded(
            "2020-q1".to_owned(),
            "Q1 2020".to_owned(),
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2020, 3, 31).unwrap(),
        );
        assert_eq!(
            serde_json::to_value(&q1).unwrap(),
            serde_json::json!({
                "value": "2020-q1",
                "label": "Q1 2020",
                "start": "2020-01-01",
                "end": "2020-03-31",
            })
        );
        assert_eq!(
            serde_json::to_value(TimeRangeOption::all_time()).unwrap(),
            serde_json::json!({ "value": "all", "label": "All time" })
        );
    }

    #[test]
    fn test_window_deserializes_camel_case() {
        let window: DateTimeWindow = serde_json::from_str(
            r#"{"mode":"single","from":"2020-01-01","fromTime":"10:00","toTime":"14:00"}"#,
        )
        .unwrap();
        assert_eq!(window.mode, WindowMode::Single);
        assert_eq!(window.from, NaiveDate::from_ymd_opt(2020, 1, 1));
        assert_eq!(window.to, None);
        assert_eq!(window.from_time.as_deref(), Some("10:00"));
        assert_eq!(window.to_time.as_deref(), Some("14:00"));
    }

    #[test]
    fn test_window_defaults_to_range_mode() {
        let window: DateTimeWindow = serde_json::from_str("{}").unwrap();
        assert_eq!(window, DateTimeWindow::default());
        assert_eq!(window.mode, WindowMode::Range);
    }
}
