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

//! Error types for the energy pipeline

use thiserror::Error;

/// Failures reported by a [`crate::ReadingSource`]
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("no readings available for park: {0}")]
    NotFound(String),

    #[error("reading source unavailable: {0}")]
    Unavailable(String),
}

/// Request-level failures. The pipeline itself never produces these.
#[derive(Debug, Error)]
pub enum EnergyError {
    #[error("invalid metric")]
    InvalidMetric,

    #[error("invalid mode")]
    InvalidMode,

    #[error("missing park")]
    MissingPark,

    #[error("unknown park: {0}")]
    UnknownPark(String),

    #[error("reading source error: {0}")]
    Source(#[from] SourceError),
}

pub type Result<T> = std::result::Result<T, EnergyError>;
