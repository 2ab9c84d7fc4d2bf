//! Projection model configuration.

use serde::{Deserialize, Serialize};

/// Coefficients of the linear impact projection model.
///
/// The defaults are the calibrated model: a 1% China tariff move costs
/// the ASX 200 0.20% and lifts USD/AUD 0.15%; global tariffs weigh in at
/// 0.15% and 0.10% respectively. Sector and instrument impacts scale the
/// entity's own sensitivity by the per-region weights.
///
/// Configs are passed explicitly into the projection functions; there is
/// no global state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// ASX 200 response per percentage point of China tariff.
    pub asx200_china_weight: f64,
    /// ASX 200 response per percentage point of global tariff.
    pub asx200_global_weight: f64,
    /// USD/AUD response per percentage point of China tariff.
    pub usdaud_china_weight: f64,
    /// USD/AUD response per percentage point of global tariff.
    pub usdaud_global_weight: f64,
    /// Sensitivity-scaled entity response per point of China tariff.
    pub entity_china_weight: f64,
    /// Sensitivity-scaled entity response per point of global tariff.
    pub entity_global_weight: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            asx200_china_weight: 0.20,
            asx200_global_weight: 0.15,
            usdaud_china_weight: 0.15,
            usdaud_global_weight: 0.10,
            entity_china_weight: 0.1,
            entity_global_weight: 0.05,
        }
    }
}

impl ProjectionConfig {
    /// Creates a config with the default calibrated coefficients.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
