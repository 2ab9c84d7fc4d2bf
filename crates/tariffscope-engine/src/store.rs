//! The scenario store: owned state and collaborator reads.

use tariffscope_analytics::{
    merge_projection, project_scenario, scenarios::predefined, InstrumentImpactTable,
    ProjectionConfig, SectorImpactTable,
};
use tariffscope_core::{Scenario, ScenarioRepository, TariffResult};

/// Owns the scenario catalog, the custom-scenario collection, and the
/// impact tables; persists the custom collection through the injected
/// repository.
///
/// Predefined scenarios and their table entries are seeded fresh on
/// every construction and never persisted. Custom scenarios survive
/// across sessions via the repository.
pub struct ScenarioStore {
    pub(crate) predefined: Vec<Scenario>,
    pub(crate) custom: Vec<Scenario>,
    pub(crate) sector_impacts: SectorImpactTable,
    pub(crate) instrument_impacts: InstrumentImpactTable,
    pub(crate) repository: Box<dyn ScenarioRepository>,
    pub(crate) config: ProjectionConfig,
}

impl ScenarioStore {
    /// Opens a store over the given repository with the default
    /// projection coefficients.
    ///
    /// Seeds the predefined catalog and tables, then loads the persisted
    /// custom collection. A load failure (corrupt or unreadable data) is
    /// recovered locally: the error is logged and an empty collection is
    /// substituted, never surfaced to the caller.
    #[must_use]
    pub fn open(repository: Box<dyn ScenarioRepository>) -> Self {
        Self::open_with_config(repository, ProjectionConfig::default())
    }

    /// Opens a store with explicit projection coefficients.
    #[must_use]
    pub fn open_with_config(
        repository: Box<dyn ScenarioRepository>,
        config: ProjectionConfig,
    ) -> Self {
        let custom = match repository.load() {
            Ok(scenarios) => scenarios,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load custom scenarios, starting empty");
                Vec::new()
            }
        };

        let mut store = Self {
            predefined: predefined::all(),
            custom: Vec::new(),
            sector_impacts: SectorImpactTable::seeded(),
            instrument_impacts: InstrumentImpactTable::seeded(),
            repository,
            config,
        };

        // Re-project each loaded scenario so the table completeness
        // invariant holds from the first read.
        for scenario in custom {
            let projection = project_scenario(&store.config, scenario.tariff_levels);
            merge_projection(
                &mut store.sector_impacts,
                &mut store.instrument_impacts,
                &scenario.id,
                &projection,
            );
            store.custom.push(scenario);
        }

        tracing::info!(
            predefined = store.predefined.len(),
            custom = store.custom.len(),
            "Scenario store opened"
        );
        store
    }

    /// The immutable predefined catalog, in escalation order.
    #[must_use]
    pub fn predefined_scenarios(&self) -> &[Scenario] {
        &self.predefined
    }

    /// The current custom-scenario collection, in creation order.
    #[must_use]
    pub fn custom_scenarios(&self) -> &[Scenario] {
        &self.custom
    }

    /// Looks up a scenario by id: predefined first, then custom.
    #[must_use]
    pub fn get_scenario_by_id(&self, id: &str) -> Option<&Scenario> {
        self.predefined
            .iter()
            .find(|s| s.id.as_str() == id)
            .or_else(|| self.custom.iter().find(|s| s.id.as_str() == id))
    }

    /// The sector impact table. Complete for every live scenario id;
    /// sufficient for a UI layer to render all sector displays without
    /// computing impacts itself.
    #[must_use]
    pub fn sector_impacts(&self) -> &SectorImpactTable {
        &self.sector_impacts
    }

    /// The instrument impact table, same completeness guarantee.
    #[must_use]
    pub fn instrument_impacts(&self) -> &InstrumentImpactTable {
        &self.instrument_impacts
    }

    /// The projection coefficients this store was opened with.
    #[must_use]
    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Writes the full custom collection through the repository.
    pub(crate) fn persist(&self) -> TariffResult<()> {
        self.repository.save(&self.custom)
    }
}
