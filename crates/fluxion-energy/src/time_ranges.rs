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

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use fluxion_energy_types::{Dated, TimeRangeOption, parse_timestamp};

/// Quarter number and its first month
const QUARTERS: [(u32, u32); 4] = [(1, 1), (2, 4), (3, 7), (4, 10)];

/// Build the preset catalog from the dates of an aggregated series.
///
/// Unparseable dates are ignored. The catalog always starts with "All time",
/// followed by every year present (ascending), each immediately followed by
/// its four quarters.
#[must_use]
pub fn build_time_ranges_from_dates<I, S>(dates: I) -> Vec<TimeRangeOption>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let years: BTreeSet<i32> = dates
        .into_iter()
        .filter_map(|date| parse_timestamp(date.as_ref()))
        .map(|date| date.year())
        .collect();
    ranges_for_years(&years)
}

/// Same as [`build_time_ranges_from_dates`] for already-typed rows.
#[must_use]
pub fn build_time_ranges<T: Dated>(data: &[T]) -> Vec<TimeRangeOption> {
    let years: BTreeSet<i32> = data.iter().map(|row| row.date().year()).collect();
    ranges_for_years(&years)
}

fn ranges_for_years(years: &BTreeSet<i32>) -> Vec<TimeRangeOption> {
    let mut ranges = Vec::with_capacity(1 + years.len() * 5);
    ranges.push(TimeRangeOption::all_time());

    for &year in years {
        if let Some(options) = year_ranges(year) {
            ranges.extend(options);
        }
    }

    ranges
}

/// The year option and its four quarters, `None` if the year is out of
/// chrono's representable range.
fn year_ranges(year: i32) -> Option<Vec<TimeRangeOption>> {
    let mut ranges = Vec::with_capacity(5);
    ranges.push(TimeRangeOption::bounded(
        year.to_string(),
        year.to_string(),
        NaiveDate::from_ymd_opt(year, 1, 1)?,
        NaiveDate::from_ymd_opt(year, 12, 31)?,
    ));

    for (quarter, start_month) in QUARTERS {
        let start = NaiveDate::from_ymd_opt(year, start_month, 1)?;
        let end = last_day_of_month(year, start_month + 2)?;
        ranges.push(TimeRangeOption::bounded(
            format!("{year}-q{quarter}"),
            format!("Q{quarter} {year}"),
            start,
            end,
        ));
    }

    Some(ranges)
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}
