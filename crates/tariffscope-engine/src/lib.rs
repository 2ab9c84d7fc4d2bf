//! # TariffScope Engine
//!
//! Scenario store and lifecycle orchestration.
//!
//! The [`ScenarioStore`] owns the predefined scenario catalog, the
//! user-defined custom scenarios, and both impact tables, and persists
//! the custom collection through an injected
//! [`ScenarioRepository`](tariffscope_core::ScenarioRepository) port.
//! The lifecycle operations (`create_custom_scenario`,
//! `update_custom_scenario`, `delete_custom_scenario`) validate input,
//! invoke the projection model, and write through the port.
//!
//! Execution is single-threaded and synchronous: every operation runs
//! to completion within one call, so callers observe each transition as
//! atomic.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tariffscope_engine::{ScenarioInput, ScenarioStore};
//! use tariffscope_ext_file::MemoryScenarioRepository;
//!
//! let mut store = ScenarioStore::open(Box::new(MemoryScenarioRepository::new()));
//! let scenario = store.create_custom_scenario(
//!     ScenarioInput::new("Escalation", 15.0, 5.0, 0.2),
//! )?;
//! assert_eq!(scenario.market_impact.asx200, -3.75);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

mod lifecycle;
mod store;

pub use lifecycle::ScenarioInput;
pub use store::ScenarioStore;
