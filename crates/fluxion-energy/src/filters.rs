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

//! Range filters applied to an aggregated series.
//!
//! Both filters fail open: a selection they cannot resolve leaves the series
//! untouched, so an odd selection never blanks the chart.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use fluxion_energy_types::{
    ALL_TIME_VALUE, DateTimeWindow, Dated, TimeRangeOption, WindowMode, parse_time_of_day,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Keep the rows whose calendar day lies within the selected preset.
///
/// Bounds are whole days and inclusive on both ends. Input order is kept.
#[must_use]
pub fn apply_time_range_filter<T: Dated + Clone>(
    data: &[T],
    selected: &str,
    ranges: &[TimeRangeOption],
) -> Vec<T> {
    if selected == ALL_TIME_VALUE {
        return data.to_vec();
    }

    let Some(range) = ranges.iter().find(|range| range.value == selected) else {
        debug!(selected, "Unknown time range preset, leaving series unfiltered");
        return data.to_vec();
    };

    if range.is_unbounded() {
        return data.to_vec();
    }

    data.iter()
        .filter(|row| day_within(row.date().date(), range.start, range.end))
        .cloned()
        .collect()
}

fn day_within(day: NaiveDate, start: Option<NaiveDate>, end: Option<NaiveDate>) -> bool {
    start.is_none_or(|start| day >= start) && end.is_none_or(|end| day <= end)
}

/// Keep the rows within an explicit date-time window (inclusive).
///
/// The lower bound is `from` at `from_time` (default `00:00`). The upper
/// bound is `to_time` (default `23:59`) on `from` in single-day mode, or on
/// `to` (falling back to `from`) in range mode.
#[must_use]
pub fn apply_date_time_range_filter<T: Dated + Clone>(
    data: &[T],
    window: &DateTimeWindow,
) -> Vec<T> {
    let Some((lower, upper)) = window_bounds(window) else {
        return data.to_vec();
    };

    data.iter()
        .filter(|row| {
            let date = row.date();
            lower <= date && date <= upper
        })
        .cloned()
        .collect()
}

fn window_bounds(window: &DateTimeWindow) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let Some(from) = window.from else {
        debug!("Date-time window has no start day, leaving series unfiltered");
        return None;
    };

    let from_time = time_or_default(window.from_time.as_deref(), NaiveTime::MIN, "from_time");
    let to_time = time_or_default(window.to_time.as_deref(), end_of_day(), "to_time");
    let upper_day = match window.mode {
        WindowMode::Single => from,
        WindowMode::Range => window.to.unwrap_or(from),
    };

    Some((from.and_time(from_time), upper_day.and_time(to_time)))
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 0).unwrap_or(NaiveTime::MIN)
}

/// Malformed times fall back to the default bound.
fn time_or_default(raw: Option<&str>, default: NaiveTime, bound: &str) -> NaiveTime {
    let Some(raw) = raw else {
        return default;
    };
    parse_time_of_day(raw).unwrap_or_else(|| {
        warn!(bound, value = raw, "Invalid time of day, using default");
        default
    })
}

/// The caller's filter mode: a named preset or an explicit window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterSelection {
    Preset(String),
    DateTime(DateTimeWindow),
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self::Preset(ALL_TIME_VALUE.to_owned())
    }
}

impl FilterSelection {
    /// Run the filter matching this selection. `ranges` is only consulted
    /// for presets.
    #[must_use]
    pub fn apply<T: Dated + Clone>(&self, data: &[T], ranges: &[TimeRangeOption]) -> Vec<T> {
        match self {
            Self::Preset(selected) => apply_time_range_filter(data, selected, ranges),
            Self::DateTime(window) => apply_date_time_range_filter(data, window),
        }
    }
}
