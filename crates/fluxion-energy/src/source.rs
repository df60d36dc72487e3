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

use fluxion_energy_types::Reading;

use crate::error::SourceError;

/// Trait for data sources that provide raw park readings.
/// This is where CSV files, HTTP endpoints or databases plug in.
pub trait ReadingSource: Send + Sync {
    /// All readings recorded for a park, in any order
    fn readings(&self, park: &str) -> Result<Vec<Reading>, SourceError>;
}

/// Readings held in memory, keyed by park name.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    parks: HashMap<String, Vec<Reading>>,
}

impl InMemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`InMemorySource::insert`]
    #[must_use]
    pub fn with_park(mut self, park: impl Into<String>, readings: Vec<Reading>) -> Self {
        self.insert(park, readings);
        self
    }

    /// Replace the readings stored for a park
    pub fn insert(&mut self, park: impl Into<String>, readings: Vec<Reading>) {
        self.parks.insert(park.into(), readings);
    }
}

impl ReadingSource for InMemorySource {
    fn readings(&self, park: &str) -> Result<Vec<Reading>, SourceError> {
        self.parks
            .get(park)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(park.to_owned()))
    }
}
