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

//! Shared data types for the FluxION park production dashboard.
//!
//! Everything here is plain data: raw readings as delivered by the data
//! access layer, hourly series points, selectable time range presets,
//! explicit date-time windows, and the park catalog configuration.

pub mod config;
pub mod park;
pub mod ranges;
pub mod reading;
pub mod request;
pub mod series;

// Re-export common types for convenience
pub use config::{CacheSettings, DashboardConfig, DisplaySettings};
pub use park::{EnergyType, ParkInfo};
pub use ranges::{ALL_TIME_VALUE, DateTimeWindow, TimeRangeOption, WindowMode};
pub use reading::{Metric, Reading, parse_time_of_day, parse_timestamp};
pub use request::{MetricSelection, SeriesRequest, SeriesResponse, SeriesScope};
pub use series::{DailyAverage, Dated, MetricValues, SeriesPoint};
