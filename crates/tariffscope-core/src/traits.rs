//! Storage ports for scenario persistence.
//!
//! The scenario lifecycle persists the custom-scenario collection through
//! the [`ScenarioRepository`] trait, so file, embedded-database, or
//! in-memory backends can be substituted without touching the projection
//! or lifecycle code.
//!
//! Writes are wholesale: `save` replaces the entire collection under a
//! single fixed key. There are no partial or merge writes.

use crate::error::TariffResult;
use crate::types::Scenario;

/// Fixed storage key under which the custom-scenario collection is
/// persisted, in every backend that is key-addressed.
pub const CUSTOM_SCENARIOS_KEY: &str = "custom_scenarios";

/// Persistence port for the custom-scenario collection.
///
/// The predefined catalog is never persisted; implementations only see
/// custom scenarios. Operations are synchronous: the lifecycle runs to
/// completion within a single call and nothing mutates the collection
/// concurrently.
pub trait ScenarioRepository: Send + Sync {
    /// Reads the persisted collection.
    ///
    /// An absent key (fresh store) loads as an empty collection. Corrupt
    /// or unreadable data is surfaced as an error; the caller decides
    /// whether to recover (the store substitutes an empty collection).
    fn load(&self) -> TariffResult<Vec<Scenario>>;

    /// Serializes and writes the full collection, overwriting prior
    /// content.
    fn save(&self, scenarios: &[Scenario]) -> TariffResult<()>;
}
