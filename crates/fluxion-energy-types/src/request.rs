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

use serde::{Deserialize, Serialize};

use crate::ranges::TimeRangeOption;
use crate::reading::Metric;
use crate::series::SeriesPoint;

/// Which parks a series is built from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesScope {
    AllParks,
    Park(String),
}

/// Metric(s) requested for a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricSelection {
    Solar,
    Wind,
    /// Solar and wind merged into one row per hour
    Combined,
}

impl MetricSelection {
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "solar" => Some(Self::Solar),
            "wind" => Some(Self::Wind),
            "combined" => Some(Self::Combined),
            _ => None,
        }
    }

    /// The single metric selected, `None` for [`MetricSelection::Combined`]
    #[must_use]
    pub fn metric(self) -> Option<Metric> {
        match self {
            Self::Solar => Some(Metric::Solar),
            Self::Wind => Some(Metric::Wind),
            Self::Combined => None,
        }
    }
}

impl From<Metric> for MetricSelection {
    fn from(metric: Metric) -> Self {
        match metric {
            Metric::Solar => Self::Solar,
            Metric::Wind => Self::Wind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesRequest {
    pub scope: SeriesScope,
    pub metric: MetricSelection,
}

impl SeriesRequest {
    #[must_use]
    pub fn all_parks(metric: MetricSelection) -> Self {
        Self {
            scope: SeriesScope::AllParks,
            metric,
        }
    }

    #[must_use]
    pub fn park(name: impl Into<String>, metric: MetricSelection) -> Self {
        Self {
            scope: SeriesScope::Park(name.into()),
            metric,
        }
    }
}

/// Aggregated series for one request, with the presets derived from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesResponse {
    pub park_name: String,
    pub data: Vec<SeriesPoint>,
    pub ranges: Vec<TimeRangeOption>,
}
