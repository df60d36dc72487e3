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

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::park::{EnergyType, ParkInfo};

/// Dashboard configuration, loaded from TOML.
///
/// ```toml
/// [[parks]]
/// name = "Bemmel"
/// timezone = "Europe/Vienna"
/// energy_type = "Solar"
///
/// [cache]
/// ttl_secs = 3600
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub parks: Vec<ParkInfo>,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSettings {
    /// How long an aggregated series stays valid (seconds)
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Park name reported for series spanning every park
    #[serde(default = "default_all_parks_label")]
    pub all_parks_label: String,
}

fn default_ttl_secs() -> u64 {
    3600
}

fn default_all_parks_label() -> String {
    "All Parks".to_owned()
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            all_parks_label: default_all_parks_label(),
        }
    }
}

impl CacheSettings {
    #[must_use]
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl DashboardConfig {
    /// Configuration with the given parks and default settings
    #[must_use]
    pub fn with_parks(parks: Vec<ParkInfo>) -> Self {
        Self {
            parks,
            cache: CacheSettings::default(),
            display: DisplaySettings::default(),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).with_context(|| "Failed to parse dashboard config TOML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.parks.is_empty() {
            bail!("parks must contain at least one park");
        }

        let mut seen = HashSet::new();
        for park in &self.parks {
            if park.name.trim().is_empty() {
                bail!("park names must not be empty");
            }
            if !seen.insert(park.name.as_str()) {
                bail!("duplicate park name: {}", park.name);
            }
            if park.timezone.parse::<chrono_tz::Tz>().is_err() {
                bail!("park {} has unknown timezone: {}", park.name, park.timezone);
            }
        }

        if self.cache.ttl_secs == 0 {
            bail!("cache.ttl_secs must be greater than zero");
        }
        Ok(())
    }

    #[must_use]
    pub fn park(&self, name: &str) -> Option<&ParkInfo> {
        self.parks.iter().find(|park| park.name == name)
    }

    pub fn parks_of(&self, energy_type: EnergyType) -> impl Iterator<Item = &ParkInfo> {
        self.parks
            .iter()
            .filter(move |park| park.energy_type == energy_type)
    }
}
