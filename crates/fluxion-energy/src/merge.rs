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

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use fluxion_energy_types::{MetricValues, SeriesPoint};

/// Combine independently aggregated series into one row per date.
///
/// Rows are matched on exact date equality. A date present in only one input
/// keeps the other metric absent. If both inputs carry the same metric for a
/// date, the wind input wins. Output is sorted ascending by date.
#[must_use]
pub fn merge_series(solar: &[SeriesPoint], wind: &[SeriesPoint]) -> Vec<SeriesPoint> {
    let mut merged: BTreeMap<NaiveDateTime, MetricValues> = BTreeMap::new();

    for point in solar.iter().chain(wind) {
        merged.entry(point.date).or_default().merge(&point.values);
    }

    merged
        .into_iter()
        .map(|(date, values)| SeriesPoint::new(date, values))
        .collect()
}
