//! Core domain types for tariff scenario analytics.
//!
//! - [`Scenario`], [`ScenarioId`], [`TariffLevels`], [`MarketImpact`]:
//!   the scenario record and its inputs/derived figures
//! - [`Sector`]: the fixed GICS sector set with tariff sensitivities
//! - [`Instrument`], [`ExposureLevel`]: the fixed ASX instrument catalog

mod instrument;
mod scenario;
mod sector;

pub use instrument::{instrument_catalog, ExposureLevel, Instrument};
pub use scenario::{MarketImpact, Scenario, ScenarioId, TariffLevels};
pub use sector::Sector;
