//! # TariffScope Analytics
//!
//! Pure impact projection model for tariff scenario analytics.
//!
//! This crate maps a scenario's two tariff inputs (China tariff %,
//! global tariff %) to market, sector, and instrument impact figures,
//! and provides the predefined scenario catalog, the seeded impact
//! tables, and comparison helpers built on top of them.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: all inputs explicit, no I/O, no hidden state
//! - **Value-object tables**: projections are returned as values and
//!   merged by the owner, never written through shared globals
//! - **Config-driven coefficients**: the linear model's weights live in
//!   [`ProjectionConfig`], defaulting to the calibrated values
//!
//! ## Quick Start
//!
//! ```rust
//! use tariffscope_analytics::prelude::*;
//! use tariffscope_core::types::TariffLevels;
//!
//! let config = ProjectionConfig::default();
//! let impact = project_market_impact(&config, TariffLevels::new(15.0, 5.0));
//! assert_eq!(impact.asx200, -3.75);
//!
//! let tables = SectorImpactTable::seeded();
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Projection model coefficients
//! - [`projection`] - The pure projection functions
//! - [`scenarios`] - The predefined scenario catalog
//! - [`tables`] - Sector and instrument impact table value objects
//! - [`compare`] - Scenario comparison and classification helpers

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod compare;
pub mod config;
pub mod projection;
pub mod scenarios;
pub mod tables;

// Re-export main types and functions at crate root
pub use compare::{
    best_sectors, compare_instruments, compare_market, compare_sectors, rank_sectors,
    scenario_implications, worst_sectors, ImpactSeverity, InstrumentDelta, MarketComparison,
    ProbabilityBand, SectorDelta, SensitivityBand,
};
pub use config::ProjectionConfig;
pub use projection::{
    project_instrument_impact, project_market_impact, project_scenario, project_sector_impact,
    round1, ScenarioProjection,
};
pub use tables::{merge_projection, InstrumentImpactTable, InstrumentImpacts, SectorImpactTable};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::compare::{
        compare_instruments, compare_market, compare_sectors, ImpactSeverity, ProbabilityBand,
        SensitivityBand,
    };
    pub use crate::config::ProjectionConfig;
    pub use crate::projection::{
        project_instrument_impact, project_market_impact, project_scenario,
        project_sector_impact, ScenarioProjection,
    };
    pub use crate::scenarios::predefined;
    pub use crate::tables::{InstrumentImpactTable, SectorImpactTable};
}
