//! Impact projection functions.
//!
//! Pure, deterministic transformations from a scenario's two tariff
//! inputs to market, sector, and instrument impact figures.
//!
//! ## Formulas
//!
//! Market (not rounded at this layer):
//! ```text
//! asx200 = -(w_ac * china + w_ag * global)
//! usdaud =   w_uc * china + w_ug * global
//! ```
//!
//! Sector/instrument (rounded to 1 decimal):
//! ```text
//! impact = -(s * china * w_ec + s * global * w_eg)
//! ```
//!
//! where `s` is the entity's tariff sensitivity. Negative tariff inputs
//! are not rejected here; validation is the lifecycle's responsibility.

use std::collections::HashMap;

use tariffscope_core::types::{instrument_catalog, MarketImpact, Sector, TariffLevels};

use crate::config::ProjectionConfig;

/// Rounds a percentage to one decimal place, the display precision used
/// for every sector and instrument entry.
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Projects the market index impacts for a pair of tariff levels.
///
/// Linear and homogeneous in both inputs: for non-negative tariffs the
/// ASX 200 impact is always ≤ 0 and the USD/AUD impact always ≥ 0, and
/// zero tariffs are a fixed point. No rounding is applied.
#[must_use]
pub fn project_market_impact(config: &ProjectionConfig, levels: TariffLevels) -> MarketImpact {
    MarketImpact {
        asx200: -(config.asx200_china_weight * levels.china
            + config.asx200_global_weight * levels.global),
        usdaud: config.usdaud_china_weight * levels.china
            + config.usdaud_global_weight * levels.global,
    }
}

/// Projects the impact for a sector with the given sensitivity
/// coefficient (0.3–1.3 scale), rounded to 1 decimal.
#[must_use]
pub fn project_sector_impact(
    config: &ProjectionConfig,
    sensitivity: f64,
    levels: TariffLevels,
) -> f64 {
    round1(-(sensitivity * levels.china * config.entity_china_weight
        + sensitivity * levels.global * config.entity_global_weight))
}

/// Projects the impact for an instrument with the given tariff
/// sensitivity (0–10 scale), rounded to 1 decimal.
///
/// Same formula shape as [`project_sector_impact`]; the scales differ
/// only because instrument sensitivities are calibrated per company.
#[must_use]
pub fn project_instrument_impact(
    config: &ProjectionConfig,
    sensitivity: f64,
    levels: TariffLevels,
) -> f64 {
    round1(-(sensitivity * levels.china * config.entity_china_weight
        + sensitivity * levels.global * config.entity_global_weight))
}

/// The full derived output for one scenario: market impact plus fresh
/// per-sector and per-instrument entries.
///
/// Returned as a value object for the store to merge into its tables;
/// the projector never mutates shared state.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioProjection {
    /// Projected market index impacts.
    pub market: MarketImpact,
    /// Impact per sector (%, 1 decimal).
    pub sectors: HashMap<Sector, f64>,
    /// Impact per instrument symbol (%, 1 decimal).
    pub instruments: HashMap<String, f64>,
}

/// Projects a scenario's tariff levels across the market, every known
/// sector, and every cataloged instrument.
#[must_use]
pub fn project_scenario(config: &ProjectionConfig, levels: TariffLevels) -> ScenarioProjection {
    let sectors = Sector::all()
        .iter()
        .map(|&sector| {
            (
                sector,
                project_sector_impact(config, sector.sensitivity(), levels),
            )
        })
        .collect();

    let instruments = instrument_catalog()
        .iter()
        .map(|instrument| {
            (
                instrument.symbol.clone(),
                project_instrument_impact(config, instrument.tariff_sensitivity, levels),
            )
        })
        .collect();

    ScenarioProjection {
        market: project_market_impact(config, levels),
        sectors,
        instruments,
    }
}
