//! # TariffScope Core
//!
//! Core types, storage ports, and errors for the TariffScope tariff
//! scenario analytics library.
//!
//! This crate provides the foundational building blocks used throughout
//! TariffScope:
//!
//! - **Types**: Domain types like [`Scenario`], [`TariffLevels`],
//!   [`MarketImpact`], [`Sector`] and [`Instrument`]
//! - **Ports**: The [`ScenarioRepository`] persistence seam
//! - **Errors**: The shared [`TariffError`] type
//!
//! ## Design Philosophy
//!
//! - **Explicit over implicit**: derived impact figures are plain data,
//!   recomputed by callers rather than cached behind accessors
//! - **Closed reference sets**: sectors and instruments are fixed enums
//!   and a fixed catalog, so impact tables can be proven complete
//! - **Synchronous ports**: the scenario lifecycle is single-threaded and
//!   runs to completion per call, so storage is a plain trait
//!
//! ## Example
//!
//! ```rust
//! use tariffscope_core::prelude::*;
//!
//! let levels = TariffLevels::new(15.0, 5.0);
//! let scenario = Scenario::new("custom-1", "Test scenario")
//!     .with_tariff_levels(levels)
//!     .with_probability(0.2);
//!
//! assert_eq!(scenario.tariff_levels.china, 15.0);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod traits;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{TariffError, TariffResult};
    pub use crate::traits::{ScenarioRepository, CUSTOM_SCENARIOS_KEY};
    pub use crate::types::{
        ExposureLevel, Instrument, MarketImpact, Scenario, ScenarioId, Sector, TariffLevels,
    };
}

// Re-export commonly used types at crate root
pub use error::{TariffError, TariffResult};
pub use traits::ScenarioRepository;
pub use types::{
    ExposureLevel, Instrument, MarketImpact, Scenario, ScenarioId, Sector, TariffLevels,
};
