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

//! Resolves dashboard series requests against a [`ReadingSource`].

use fluxion_energy_types::{
    DashboardConfig, EnergyType, Metric, MetricSelection, ParkInfo, Reading, SeriesPoint, SeriesRequest,
    SeriesResponse, SeriesScope,
};
use tracing::{debug, info, warn};

use crate::aggregation::aggregate_hourly;
use crate::cache::SeriesCache;
use crate::error::{EnergyError, Result, SourceError};
use crate::filters::FilterSelection;
use crate::merge::merge_series;
use crate::source::ReadingSource;
use crate::time_ranges::build_time_ranges;

/// Navigation prefix of the all-parks views
const ALL_PARKS_SLUG_PREFIX: &str = "all-parks-";

/// Parse the raw `mode`, `metric` and `park` query parameters.
///
/// The metric is validated first, then the mode; `mode=park` requires a
/// non-empty park name.
pub fn parse_series_request(
    mode: Option<&str>,
    metric: Option<&str>,
    park: Option<&str>,
) -> Result<SeriesRequest> {
    let metric = metric
        .and_then(MetricSelection::from_key)
        .ok_or(EnergyError::InvalidMetric)?;

    match mode {
        Some("all") => Ok(SeriesRequest::all_parks(metric)),
        Some("park") => {
            let park = park
                .filter(|name| !name.is_empty())
                .ok_or(EnergyError::MissingPark)?;
            Ok(SeriesRequest::park(park, metric))
        }
        _ => Err(EnergyError::InvalidMode),
    }
}

/// Apply the caller's filter selection to a resolved series.
#[must_use]
pub fn view(response: &SeriesResponse, selection: &FilterSelection) -> Vec<SeriesPoint> {
    selection.apply(&response.data, &response.ranges)
}

#[derive(Debug)]
pub struct EnergyService<S> {
    config: DashboardConfig,
    source: S,
    cache: SeriesCache,
}

impl<S: ReadingSource> EnergyService<S> {
    #[must_use]
    pub fn new(config: DashboardConfig, source: S) -> Self {
        let cache = SeriesCache::new(config.cache.ttl());
        Self {
            config,
            source,
            cache,
        }
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    #[must_use]
    pub fn parks(&self) -> &[ParkInfo] {
        &self.config.parks
    }

    /// Drop memoized series, e.g. after the underlying files changed
    pub fn invalidate_cache(&self) {
        self.cache.invalidate();
    }

    /// Map a navigation slug (`bemmel-solar`, `all-parks-total`, optionally
    /// with a leading `#`) to the request it shows.
    #[must_use]
    pub fn request_for_slug(&self, slug: &str) -> Option<SeriesRequest> {
        let slug = slug.trim_start_matches('#');

        if let Some(kind) = slug.strip_prefix(ALL_PARKS_SLUG_PREFIX) {
            let metric = match kind {
                "total" => MetricSelection::Combined,
                other => MetricSelection::from(Metric::from_key(other)?),
            };
            return Some(SeriesRequest::all_parks(metric));
        }

        self.config
            .parks
            .iter()
            .find(|park| park.slug() == slug)
            .map(|park| SeriesRequest::park(park.name.clone(), park.metric().into()))
    }

    /// Hourly series for a request, with its preset catalog.
    ///
    /// Results are memoized for the configured TTL.
    pub fn series(&self, request: &SeriesRequest) -> Result<SeriesResponse> {
        if let Some(cached) = self.cache.get(request) {
            return Ok(cached);
        }

        let response = self.resolve(request)?;
        self.cache.insert(request.clone(), response.clone());
        Ok(response)
    }

    fn resolve(&self, request: &SeriesRequest) -> Result<SeriesResponse> {
        info!(?request, "Resolving production series");

        let (park_name, data) = match &request.scope {
            SeriesScope::AllParks => (
                self.config.display.all_parks_label.clone(),
                self.all_parks_series(request.metric)?,
            ),
            SeriesScope::Park(name) => {
                let park = self
                    .config
                    .park(name)
                    .ok_or_else(|| EnergyError::UnknownPark(name.clone()))?;
                (park.name.clone(), self.park_series(park, request.metric)?)
            }
        };

        let ranges = build_time_ranges(&data);
        debug!(
            park = %park_name,
            points = data.len(),
            ranges = ranges.len(),
            "Resolved production series"
        );

        Ok(SeriesResponse {
            park_name,
            data,
            ranges,
        })
    }

    fn all_parks_series(&self, selection: MetricSelection) -> Result<Vec<SeriesPoint>> {
        if let Some(metric) = selection.metric() {
            return self.aggregate_parks_of(metric.into());
        }

        let solar = self.aggregate_parks_of(EnergyType::Solar)?;
        let wind = self.aggregate_parks_of(EnergyType::Wind)?;
        Ok(merge_series(&solar, &wind))
    }

    /// Pool the readings of every park of `energy_type` and aggregate them.
    /// Parks without data are skipped.
    fn aggregate_parks_of(&self, energy_type: EnergyType) -> Result<Vec<SeriesPoint>> {
        let mut readings: Vec<Reading> = Vec::new();

        for park in self.config.parks_of(energy_type) {
            match self.source.readings(&park.name) {
                Ok(park_readings) => readings.extend(park_readings),
                Err(SourceError::NotFound(name)) => {
                    warn!(park = %name, "No readings for park, skipping");
                }
                Err(err) => return Err(err.into()),
            }
        }

        Ok(aggregate_hourly(&readings, energy_type.metric()))
    }

    /// A park only produces its own metric. Asking a solar park for wind
    /// yields an empty series. `Combined` yields the park's own metric.
    fn park_series(&self, park: &ParkInfo, selection: MetricSelection) -> Result<Vec<SeriesPoint>> {
        let metric = park.metric();
        if selection.metric().is_some_and(|requested| requested != metric) {
            debug!(park = %park.name, ?selection, "Metric not produced by park");
            return Ok(Vec::new());
        }

        let readings = self.source.readings(&park.name)?;
        Ok(aggregate_hourly(&readings, metric))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::InMemorySource;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts every lookup before delegating to an in-memory source.
    #[derive(Debug)]
    struct CountingSource {
        inner: InMemorySource,
        calls: Arc<AtomicUsize>,
    }

    impl ReadingSource for CountingSource {
        fn readings(&self, park: &str) -> std::result::Result<Vec<Reading>, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.readings(park)
        }
    }

    /// Source whose backend is down.
    #[derive(Debug)]
    struct UnavailableSource;

    impl ReadingSource for UnavailableSource {
        fn readings(&self, _park: &str) -> std::result::Result<Vec<Reading>, SourceError> {
            Err(SourceError::Unavailable("down".to_owned()))
        }
    }

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("value present");
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn config() -> DashboardConfig {
        DashboardConfig::with_parks(vec![
            ParkInfo::new("Netterden", "Europe/Amsterdam", EnergyType::Wind),
            ParkInfo::new("Stadskanaal", "Europe/Bucharest", EnergyType::Solar),
            ParkInfo::new("Bemmel", "Europe/Vienna", EnergyType::Solar),
        ])
    }

    fn source() -> InMemorySource {
        InMemorySource::new()
            .with_park(
                "Netterden",
                vec![
                    Reading::new("2020-01-01T01:10:00", 4.0),
                    Reading::new("2020-01-01T02:10:00", 6.0),
                ],
            )
            .with_park(
                "Stadskanaal",
                vec![Reading::new("2020-01-01T01:20:00", 10.0)],
            )
            .with_park("Bemmel", vec![Reading::new("2020-01-01T01:40:00", 20.0)])
    }

    #[test]
    fn test_parse_series_request() {
        assert_eq!(
            parse_series_request(Some("all"), Some("combined"), None).unwrap(),
            SeriesRequest::all_parks(MetricSelection::Combined)
        );
        assert_eq!(
            parse_series_request(Some("park"), Some("wind"), Some("Netterden")).unwrap(),
            SeriesRequest::park("Netterden", MetricSelection::Wind)
        );
    }

    #[test]
    fn test_parse_series_request_errors() {
        assert!(matches!(
            parse_series_request(Some("all"), None, None),
            Err(EnergyError::InvalidMetric)
        ));
        assert!(matches!(
            parse_series_request(Some("bogus"), Some("total"), None),
            Err(EnergyError::InvalidMetric)
        ));
        assert!(matches!(
            parse_series_request(None, Some("solar"), None),
            Err(EnergyError::InvalidMode)
        ));
        assert!(matches!(
            parse_series_request(Some("park"), Some("solar"), None),
            Err(EnergyError::MissingPark)
        ));
        assert!(matches!(
            parse_series_request(Some("park"), Some("solar"), Some("")),
            Err(EnergyError::MissingPark)
        ));
    }

    #[test]
    fn test_all_parks_single_metric_pools_readings() {
        let service = EnergyService::new(config(), source());
        let response = service
            .series(&SeriesRequest::all_parks(MetricSelection::Solar))
            .unwrap();

        assert_eq!(response.park_name, "All Parks");
        assert_eq!(response.data.len(), 1);
        assert_close(response.data[0].value(Metric::Solar), 15.0);
        assert_eq!(response.data[0].value(Metric::Wind), None);
    }

    #[test]
    fn test_all_parks_combined_merges_metrics() {
        let service = EnergyService::new(config(), source());
        let response = service
            .series(&SeriesRequest::all_parks(MetricSelection::Combined))
            .unwrap();

        assert_eq!(response.data.len(), 2);
        assert_close(response.data[0].value(Metric::Solar), 15.0);
        assert_close(response.data[0].value(Metric::Wind), 4.0);
        assert_eq!(response.data[1].value(Metric::Solar), None);
        assert_close(response.data[1].value(Metric::Wind), 6.0);
        assert_eq!(response.ranges.len(), 6);
    }

    #[test]
    fn test_single_park() {
        let service = EnergyService::new(config(), source());
        let response = service
            .series(&SeriesRequest::park("Bemmel", MetricSelection::Solar))
            .unwrap();

        assert_eq!(response.park_name, "Bemmel");
        assert_eq!(response.data.len(), 1);
        assert_close(response.data[0].value(Metric::Solar), 20.0);
    }

    #[test]
    fn test_single_park_metric_mismatch_is_empty() {
        let service = EnergyService::new(config(), source());
        let response = service
            .series(&SeriesRequest::park("Bemmel", MetricSelection::Wind))
            .unwrap();

        assert_eq!(response.park_name, "Bemmel");
        assert!(response.data.is_empty());
        assert_eq!(response.ranges.len(), 1);
    }

    #[test]
    fn test_single_park_combined_uses_own_metric() {
        let service = EnergyService::new(config(), source());
        let response = service
            .series(&SeriesRequest::park("Netterden", MetricSelection::Combined))
            .unwrap();

        assert_eq!(response.data.len(), 2);
        assert!(response.data.iter().all(|point| point.value(Metric::Wind).is_some()));
    }

    #[test]
    fn test_unknown_park() {
        let service = EnergyService::new(config(), source());
        let result = service.series(&SeriesRequest::park("Atlantis", MetricSelection::Solar));
        assert!(matches!(result, Err(EnergyError::UnknownPark(name)) if name == "Atlantis"));
    }

    #[test]
    fn test_missing_park_data() {
        let service = EnergyService::new(
            config(),
            InMemorySource::new().with_park("Bemmel", vec![Reading::new("2020-01-01T00:00:00", 1.0)]),
        );

        let pooled = service
            .series(&SeriesRequest::all_parks(MetricSelection::Solar))
            .unwrap();
        assert_eq!(pooled.data.len(), 1);

        let single = service.series(&SeriesRequest::park("Stadskanaal", MetricSelection::Solar));
        assert!(matches!(
            single,
            Err(EnergyError::Source(SourceError::NotFound(_)))
        ));
    }

    #[test]
    fn test_request_for_slug() {
        let service = EnergyService::new(config(), source());

        assert_eq!(
            service.request_for_slug("#all-parks-total"),
            Some(SeriesRequest::all_parks(MetricSelection::Combined))
        );
        assert_eq!(
            service.request_for_slug("all-parks-wind"),
            Some(SeriesRequest::all_parks(MetricSelection::Wind))
        );
        assert_eq!(
            service.request_for_slug("#bemmel-solar"),
            Some(SeriesRequest::park("Bemmel", MetricSelection::Solar))
        );
        assert_eq!(service.request_for_slug("#bemmel-wind"), None);
        assert_eq!(service.request_for_slug("#all-parks-hydro"), None);
        assert_eq!(service.request_for_slug(""), None);
    }

    #[test]
    fn test_series_are_memoized() {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = CountingSource {
            inner: source(),
            calls: Arc::clone(&calls),
        };
        let service = EnergyService::new(config(), source);
        let request = SeriesRequest::park("Bemmel", MetricSelection::Solar);

        let first = service.series(&request).unwrap();
        let second = service.series(&request).unwrap();
        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        service.invalidate_cache();
        let third = service.series(&request).unwrap();
        assert_eq!(third, first);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unavailable_source_propagates() {
        let service = EnergyService::new(config(), UnavailableSource);

        for metric in [
            MetricSelection::Solar,
            MetricSelection::Wind,
            MetricSelection::Combined,
        ] {
            let pooled = service.series(&SeriesRequest::all_parks(metric));
            assert!(matches!(
                pooled,
                Err(EnergyError::Source(SourceError::Unavailable(reason))) if reason == "down"
            ));
        }

        let single = service.series(&SeriesRequest::park("Bemmel", MetricSelection::Solar));
        assert!(matches!(
            single,
            Err(EnergyError::Source(SourceError::Unavailable(_)))
        ));
        assert!(service.cache.is_empty());
    }

    #[test]
    fn test_view_applies_selection() {
        let service = EnergyService::new(config(), source());
        let response = service
            .series(&SeriesRequest::all_parks(MetricSelection::Wind))
            .unwrap();

        let all = view(&response, &FilterSelection::default());
        assert_eq!(all, response.data);

        let q2 = view(&response, &FilterSelection::Preset("2020-q2".to_owned()));
        assert!(q2.is_empty());
    }
}
