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

//! FluxION park production pipeline
//!
//! Turns raw per-park power readings into the hourly series shown by the
//! production dashboard.
//!
//! ## Features
//!
//! - **Hourly aggregation**: mean of all readings per calendar hour
//! - **Time range presets**: "All time", years and quarters derived from the data
//! - **Filtering**: by preset or by an explicit date-time window
//! - **Merging**: solar and wind series combined into one row per hour
//! - **Daily averages**: per-day means for the table view
//! - **Service**: resolves dashboard requests against a [`ReadingSource`]
//!
//! The pipeline functions are pure and never fail on malformed rows or
//! unknown selections. Bad rows are dropped and unknown selections leave the
//! series unfiltered.

pub mod aggregation;
pub mod cache;
pub mod daily;
pub mod error;
pub mod filters;
pub mod merge;
pub mod service;
pub mod source;
pub mod time_ranges;

pub use aggregation::aggregate_hourly;
pub use cache::SeriesCache;
pub use daily::daily_averages;
pub use error::{EnergyError, Result, SourceError};
pub use filters::{FilterSelection, apply_date_time_range_filter, apply_time_range_filter};
pub use merge::merge_series;
pub use service::{EnergyService, parse_series_request, view};
pub use source::{InMemorySource, ReadingSource};
pub use time_ranges::{build_time_ranges, build_time_ranges_from_dates};
