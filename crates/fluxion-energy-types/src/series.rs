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

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::reading::Metric;

/// Rows that carry a timestamp and can therefore be range-filtered.
pub trait Dated {
    fn date(&self) -> NaiveDateTime;
}

/// Per-metric values of one row. Absent metrics are omitted on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricValues {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solar: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind: Option<f64>,
}

impl MetricValues {
    #[must_use]
    pub fn single(metric: Metric, value: f64) -> Self {
        let mut values = Self::default();
        values.set(metric, value);
        values
    }

    #[must_use]
    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Solar => self.solar,
            Metric::Wind => self.wind,
        }
    }

    pub fn set(&mut self, metric: Metric, value: f64) {
        match metric {
            Metric::Solar => self.solar = Some(value),
            Metric::Wind => self.wind = Some(value),
        }
    }

    /// Overlay the metrics present in `other` on top of `self`.
    pub fn merge(&mut self, other: &MetricValues) {
        for metric in Metric::ALL {
            if let Some(value) = other.get(metric) {
                self.set(metric, value);
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solar.is_none() && self.wind.is_none()
    }
}

/// One hourly row of a production series.
///
/// Serialized flat, e.g. `{"date":"2020-01-01T01:00:00","solar":15.0}`, so
/// that independently aggregated metrics line up by `date` after merging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    #[serde(with = "timestamp_format")]
    pub date: NaiveDateTime,
    #[serde(flatten)]
    pub values: MetricValues,
}

impl SeriesPoint {
    #[must_use]
    pub fn new(date: NaiveDateTime, values: MetricValues) -> Self {
        Self { date, values }
    }

    #[must_use]
    pub fn single(date: NaiveDateTime, metric: Metric, value: f64) -> Self {
        Self::new(date, MetricValues::single(metric, value))
    }

    #[must_use]
    pub fn value(&self, metric: Metric) -> Option<f64> {
        self.values.get(metric)
    }

    /// Fixed-width `YYYY-MM-DDTHH:MM:SS` form of the date.
    #[must_use]
    pub fn date_key(&self) -> String {
        self.date.format(timestamp_format::FORMAT).to_string()
    }
}

impl Dated for SeriesPoint {
    fn date(&self) -> NaiveDateTime {
        self.date
    }
}

/// Mean of the hourly values of one calendar day (table view).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAverage {
    pub day: NaiveDate,
    #[serde(flatten)]
    pub values: MetricValues,
    /// Number of hourly rows that contributed
    pub hours: u32,
}

impl Dated for DailyAverage {
    fn date(&self) -> NaiveDateTime {
        self.day.and_time(NaiveTime::MIN)
    }
}

mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        crate::reading::parse_timestamp(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
    }
}
