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

use chrono::NaiveDate;
use fluxion_energy_types::{DailyAverage, Metric, MetricValues, SeriesPoint};

#[derive(Debug, Default, Clone, Copy)]
struct MetricSum {
    total: f64,
    count: u32,
}

impl MetricSum {
    fn mean(self) -> Option<f64> {
        (self.count > 0).then(|| self.total / f64::from(self.count))
    }
}

#[derive(Debug, Default)]
struct DayAccumulator {
    solar: MetricSum,
    wind: MetricSum,
    hours: u32,
}

impl DayAccumulator {
    fn add(&mut self, values: &MetricValues) {
        self.hours += 1;
        for metric in Metric::ALL {
            if let Some(value) = values.get(metric) {
                let sum = match metric {
                    Metric::Solar => &mut self.solar,
                    Metric::Wind => &mut self.wind,
                };
                sum.total += value;
                sum.count += 1;
            }
        }
    }

    fn finish(self, day: NaiveDate) -> DailyAverage {
        DailyAverage {
            day,
            values: MetricValues {
                solar: self.solar.mean(),
                wind: self.wind.mean(),
            },
            hours: self.hours,
        }
    }
}

/// Mean of the hourly values of each calendar day, per metric.
///
/// A metric without any value on a day stays absent for that day rather
/// than averaging to zero.
#[must_use]
pub fn daily_averages(series: &[SeriesPoint]) -> Vec<DailyAverage> {
    let mut days: BTreeMap<NaiveDate, DayAccumulator> = BTreeMap::new();

    for point in series {
        days.entry(point.date.date()).or_default().add(&point.values);
    }

    days.into_iter()
        .map(|(day, accumulator)| accumulator.finish(day))
        .collect()
}
