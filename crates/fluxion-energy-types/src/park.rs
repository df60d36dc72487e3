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

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::reading::Metric;

/// Kind of production site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnergyType {
    Solar,
    Wind,
}

impl EnergyType {
    /// Metric produced by parks of this type
    #[must_use]
    pub fn metric(self) -> Metric {
        match self {
            Self::Solar => Metric::Solar,
            Self::Wind => Metric::Wind,
        }
    }
}

impl From<Metric> for EnergyType {
    fn from(metric: Metric) -> Self {
        match metric {
            Metric::Solar => Self::Solar,
            Metric::Wind => Self::Wind,
        }
    }
}

impl fmt::Display for EnergyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solar => f.write_str("Solar"),
            Self::Wind => f.write_str("Wind"),
        }
    }
}

/// A physical production site (one row of `park_info.csv`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkInfo {
    #[serde(alias = "park_name")]
    pub name: String,
    /// IANA timezone name, e.g. `Europe/Amsterdam`
    pub timezone: String,
    pub energy_type: EnergyType,
}

impl ParkInfo {
    #[must_use]
    pub fn new(name: impl Into<String>, timezone: impl Into<String>, energy_type: EnergyType) -> Self {
        Self {
            name: name.into(),
            timezone: timezone.into(),
            energy_type,
        }
    }

    #[must_use]
    pub fn metric(&self) -> Metric {
        self.energy_type.metric()
    }

    /// Navigation key, e.g. `bemmel-solar`
    #[must_use]
    pub fn slug(&self) -> String {
        format!("{}-{}", self.name.to_lowercase(), self.metric())
    }
}
