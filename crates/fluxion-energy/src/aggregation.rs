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
use fluxion_energy_types::{Metric, Reading, SeriesPoint};
use tracing::debug;

/// Running sum of the readings of one hour
#[derive(Debug, Default, Clone, Copy)]
struct HourBucket {
    total: f64,
    count: u32,
}

impl HourBucket {
    fn add(&mut self, value: f64) {
        self.total += value;
        self.count += 1;
    }

    /// Empty buckets report 0 rather than disappearing.
    fn mean(self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total / f64::from(self.count)
        }
    }
}

/// Reduce raw readings to one mean value per calendar hour.
///
/// Readings with an unparseable timestamp or a missing/non-finite value are
/// skipped. The result is sorted ascending by hour and every point carries
/// only `metric`.
#[must_use]
pub fn aggregate_hourly(readings: &[Reading], metric: Metric) -> Vec<SeriesPoint> {
    let mut buckets: BTreeMap<NaiveDateTime, HourBucket> = BTreeMap::new();
    let mut skipped = 0_usize;

    for reading in readings {
        match reading.hour_and_value() {
            Some((hour, value)) => buckets.entry(hour).or_default().add(value),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!(
            %metric,
            skipped,
            total = readings.len(),
            "Skipped malformed readings during hourly aggregation"
        );
    }

    buckets
        .into_iter()
        .map(|(hour, bucket)| SeriesPoint::single(hour, metric, bucket.mean()))
        .collect()
}
