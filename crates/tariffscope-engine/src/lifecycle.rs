//! Custom-scenario lifecycle: validated create, update, and delete.
//!
//! Each mutation validates its input, recomputes the derived market
//! impact and the scenario's sector/instrument table entries through
//! the projection model, and persists the whole custom collection
//! wholesale. Validation failures leave state untouched.
//!
//! Per custom scenario the lifecycle is `nonexistent -> active` on
//! create, `active -> active` on update, and `active -> deleted`
//! (terminal) on delete.

use chrono::Utc;

use tariffscope_analytics::{merge_projection, project_scenario};
use tariffscope_core::{Scenario, ScenarioId, TariffError, TariffLevels, TariffResult};

use crate::store::ScenarioStore;

/// Raw caller input for creating or updating a custom scenario, as
/// collected by whatever UI layer sits above the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioInput {
    /// Display name; must be non-blank.
    pub name: String,
    /// Free-text description; may be empty.
    pub description: String,
    /// China tariff level (%); must be finite.
    pub china_tariff: f64,
    /// Global tariff level (%); must be finite.
    pub global_tariff: f64,
    /// Likelihood in [0, 1] by convention; must be finite.
    pub probability: f64,
}

impl ScenarioInput {
    /// Creates an input with an empty description.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        china_tariff: f64,
        global_tariff: f64,
        probability: f64,
    ) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            china_tariff,
            global_tariff,
            probability,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    fn validate(&self) -> TariffResult<()> {
        if self.name.trim().is_empty() {
            return Err(TariffError::invalid_scenario("name must not be empty"));
        }
        if !self.china_tariff.is_finite() {
            return Err(TariffError::invalid_scenario(format!(
                "china tariff is not a finite number: {}",
                self.china_tariff
            )));
        }
        if !self.global_tariff.is_finite() {
            return Err(TariffError::invalid_scenario(format!(
                "global tariff is not a finite number: {}",
                self.global_tariff
            )));
        }
        if !self.probability.is_finite() {
            return Err(TariffError::invalid_scenario(format!(
                "probability is not a finite number: {}",
                self.probability
            )));
        }
        Ok(())
    }

    fn tariff_levels(&self) -> TariffLevels {
        TariffLevels::new(self.china_tariff, self.global_tariff)
    }
}

impl ScenarioStore {
    /// Creates a custom scenario from validated input.
    ///
    /// On success the new scenario carries a freshly generated unique
    /// id and projected market impact, both impact tables carry entries
    /// for it across every sector and instrument, and the collection is
    /// persisted. Validation failures leave state untouched.
    pub fn create_custom_scenario(&mut self, input: ScenarioInput) -> TariffResult<Scenario> {
        input.validate()?;

        let id = self.next_custom_id();
        let levels = input.tariff_levels();
        let projection = project_scenario(&self.config, levels);

        let scenario = Scenario::new(id.clone(), input.name)
            .with_description(input.description)
            .with_tariff_levels(levels)
            .with_probability(input.probability)
            .with_market_impact(projection.market);

        self.custom.push(scenario.clone());
        merge_projection(
            &mut self.sector_impacts,
            &mut self.instrument_impacts,
            &id,
            &projection,
        );
        self.persist()?;

        tracing::info!(id = %id, name = %scenario.name, "Custom scenario created");
        Ok(scenario)
    }

    /// Updates an existing custom scenario in place, preserving its id.
    ///
    /// Recomputes the market impact and overwrites the scenario's
    /// sector/instrument table entries, then persists. Fails with
    /// `ScenarioNotFound` for unknown ids and for predefined ids, which
    /// are never valid update targets.
    pub fn update_custom_scenario(
        &mut self,
        id: &str,
        input: ScenarioInput,
    ) -> TariffResult<Scenario> {
        input.validate()?;

        let index = self
            .custom
            .iter()
            .position(|s| s.id.as_str() == id)
            .ok_or_else(|| TariffError::scenario_not_found(id))?;

        let levels = input.tariff_levels();
        let projection = project_scenario(&self.config, levels);

        let scenario = Scenario::new(self.custom[index].id.clone(), input.name)
            .with_description(input.description)
            .with_tariff_levels(levels)
            .with_probability(input.probability)
            .with_market_impact(projection.market);

        self.custom[index] = scenario.clone();
        merge_projection(
            &mut self.sector_impacts,
            &mut self.instrument_impacts,
            &scenario.id,
            &projection,
        );
        self.persist()?;

        tracing::info!(id = %scenario.id, name = %scenario.name, "Custom scenario updated");
        Ok(scenario)
    }

    /// Deletes the custom scenario with the given id and persists.
    ///
    /// Returns `false` (no-op, nothing persisted) when the id does not
    /// match a custom scenario. Table entries for the deleted id are
    /// left in place; they are unreachable once the id no longer
    /// resolves.
    pub fn delete_custom_scenario(&mut self, id: &str) -> TariffResult<bool> {
        let Some(index) = self.custom.iter().position(|s| s.id.as_str() == id) else {
            return Ok(false);
        };

        self.custom.remove(index);
        self.persist()?;

        tracing::info!(id, "Custom scenario deleted");
        Ok(true)
    }

    /// Generates a timestamp-based id unique among the current custom
    /// scenarios.
    fn next_custom_id(&self) -> ScenarioId {
        let mut millis = Utc::now().timestamp_millis();
        loop {
            let candidate = ScenarioId::new(format!("custom-{millis}"));
            if !self.custom.iter().any(|s| s.id == candidate) {
                return candidate;
            }
            // Two creates inside one millisecond; bump until free.
            millis += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tariffscope_core::types::Sector;
    use tariffscope_core::ScenarioRepository;

    /// Repository that fails every operation, for soft-fail coverage.
    struct FailingRepository;

    impl ScenarioRepository for FailingRepository {
        fn load(&self) -> TariffResult<Vec<Scenario>> {
            Err(TariffError::serialization_error("corrupt payload"))
        }

        fn save(&self, _scenarios: &[Scenario]) -> TariffResult<()> {
            Err(TariffError::storage_error("disk full"))
        }
    }

    /// Repository that accepts everything and remembers nothing.
    struct SinkRepository;

    impl ScenarioRepository for SinkRepository {
        fn load(&self) -> TariffResult<Vec<Scenario>> {
            Ok(Vec::new())
        }

        fn save(&self, _scenarios: &[Scenario]) -> TariffResult<()> {
            Ok(())
        }
    }

    fn store() -> ScenarioStore {
        ScenarioStore::open(Box::new(SinkRepository))
    }

    #[test]
    fn test_create_computes_market_impact() {
        let mut store = store();
        let scenario = store
            .create_custom_scenario(ScenarioInput::new("Test", 15.0, 5.0, 0.2))
            .unwrap();

        assert_eq!(scenario.market_impact.asx200, -3.75);
        assert_eq!(scenario.market_impact.usdaud, 2.75);
        assert!(scenario.id.is_custom());
        assert_eq!(store.custom_scenarios().len(), 1);
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let mut store = store();
        let err = store
            .create_custom_scenario(ScenarioInput::new("   ", 15.0, 5.0, 0.2))
            .unwrap_err();

        assert!(matches!(err, TariffError::InvalidScenario { .. }));
        assert!(store.custom_scenarios().is_empty());
    }

    #[test]
    fn test_create_rejects_non_finite_numbers() {
        let mut store = store();
        for input in [
            ScenarioInput::new("Test", f64::NAN, 5.0, 0.2),
            ScenarioInput::new("Test", 15.0, f64::INFINITY, 0.2),
            ScenarioInput::new("Test", 15.0, 5.0, f64::NAN),
        ] {
            assert!(store.create_custom_scenario(input).is_err());
        }
        assert!(store.custom_scenarios().is_empty());
    }

    #[test]
    fn test_create_populates_tables() {
        let mut store = store();
        let scenario = store
            .create_custom_scenario(ScenarioInput::new("Test", 10.0, 5.0, 0.2))
            .unwrap();

        // Materials sensitivity 1.2: -(1.2 + 0.3) = -1.5
        assert_eq!(
            store.sector_impacts().get(Sector::Materials, &scenario.id),
            Some(-1.5)
        );
        // BHP sensitivity 8.5: -(8.5 + 2.125) -> -10.6
        assert_eq!(
            store.instrument_impacts().get("BHP.AX", &scenario.id),
            Some(-10.6)
        );
    }

    #[test]
    fn test_update_recomputes_and_preserves_id() {
        let mut store = store();
        let created = store
            .create_custom_scenario(ScenarioInput::new("Test", 15.0, 5.0, 0.2))
            .unwrap();

        let updated = store
            .update_custom_scenario(
                created.id.as_str(),
                ScenarioInput::new("Test2", 25.0, 10.0, 0.3),
            )
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Test2");
        assert_eq!(updated.market_impact.asx200, -6.5);
        assert_eq!(store.custom_scenarios().len(), 1);

        let fetched = store.get_scenario_by_id(created.id.as_str()).unwrap();
        assert_eq!(fetched.name, "Test2");
    }

    #[test]
    fn test_update_rejects_predefined_ids() {
        let mut store = store();
        let err = store
            .update_custom_scenario("baseline", ScenarioInput::new("Hijack", 1.0, 1.0, 0.1))
            .unwrap_err();

        assert!(matches!(err, TariffError::ScenarioNotFound { .. }));
        assert_eq!(
            store.get_scenario_by_id("baseline").unwrap().name,
            "Baseline (Current Tariffs)"
        );
    }

    #[test]
    fn test_update_unknown_id() {
        let mut store = store();
        let err = store
            .update_custom_scenario("custom-404", ScenarioInput::new("Nope", 1.0, 1.0, 0.1))
            .unwrap_err();
        assert!(matches!(err, TariffError::ScenarioNotFound { .. }));
    }

    #[test]
    fn test_delete_then_lookup_returns_none() {
        let mut store = store();
        let created = store
            .create_custom_scenario(ScenarioInput::new("Test", 15.0, 5.0, 0.2))
            .unwrap();

        assert!(store.delete_custom_scenario(created.id.as_str()).unwrap());
        assert!(store.get_scenario_by_id(created.id.as_str()).is_none());
        assert!(!store.delete_custom_scenario(created.id.as_str()).unwrap());
    }

    #[test]
    fn test_delete_leaves_table_entries() {
        let mut store = store();
        let created = store
            .create_custom_scenario(ScenarioInput::new("Test", 10.0, 5.0, 0.2))
            .unwrap();
        store.delete_custom_scenario(created.id.as_str()).unwrap();

        // Retained behavior: entries for the dead id stay in the tables.
        assert_eq!(
            store.sector_impacts().get(Sector::Materials, &created.id),
            Some(-1.5)
        );
    }

    #[test]
    fn test_generated_ids_unique() {
        let mut store = store();
        let a = store
            .create_custom_scenario(ScenarioInput::new("A", 1.0, 1.0, 0.1))
            .unwrap();
        let b = store
            .create_custom_scenario(ScenarioInput::new("B", 2.0, 2.0, 0.1))
            .unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_load_failure_recovers_empty() {
        let store = ScenarioStore::open(Box::new(FailingRepository));
        assert!(store.custom_scenarios().is_empty());
        assert_eq!(store.predefined_scenarios().len(), 5);
    }

    #[test]
    fn test_save_failure_propagates() {
        let mut store = ScenarioStore::open(Box::new(FailingRepository));
        let err = store
            .create_custom_scenario(ScenarioInput::new("Test", 15.0, 5.0, 0.2))
            .unwrap_err();
        assert!(matches!(err, TariffError::StorageError { .. }));
    }

    #[test]
    fn test_get_scenario_prefers_predefined() {
        let store = store();
        assert_eq!(
            store.get_scenario_by_id("trade-war").unwrap().name,
            "Full Trade War"
        );
        assert!(store.get_scenario_by_id("custom-0").is_none());
    }
}
