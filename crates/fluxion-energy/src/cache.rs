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

use std::collections::HashMap;
use std::time::{Duration, Instant};

use fluxion_energy_types::{SeriesRequest, SeriesResponse};
use parking_lot::RwLock;
use tracing::debug;

#[derive(Debug, Clone)]
struct CachedSeries {
    stored_at: Instant,
    response: SeriesResponse,
}

/// Time-limited memo of resolved series, keyed by request.
#[derive(Debug)]
pub struct SeriesCache {
    ttl: Duration,
    entries: RwLock<HashMap<SeriesRequest, CachedSeries>>,
}

impl SeriesCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Cached response for `request`, if still fresh
    #[must_use]
    pub fn get(&self, request: &SeriesRequest) -> Option<SeriesResponse> {
        let entries = self.entries.read();
        match entries.get(request) {
            Some(cached) if cached.stored_at.elapsed() < self.ttl => {
                debug!(?request, "Series cache hit");
                Some(cached.response.clone())
            }
            Some(_) => {
                debug!(?request, "Series cache entry expired");
                None
            }
            None => None,
        }
    }

    pub fn insert(&self, request: SeriesRequest, response: SeriesResponse) {
        let mut entries = self.entries.write();
        entries.retain(|_, cached| cached.stored_at.elapsed() < self.ttl);
        entries.insert(
            request,
            CachedSeries {
                stored_at: Instant::now(),
                response,
            },
        );
    }

    /// Drop every cached series
    pub fn invalidate(&self) {
        self.entries.write().clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
