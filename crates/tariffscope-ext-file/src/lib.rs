//! # TariffScope Ext File
//!
//! File-based and in-memory scenario storage for the TariffScope engine.
//!
//! This crate provides the default repository implementations:
//! - JSON-file repository for simple single-user persistence
//! - In-memory repository for testing and ephemeral sessions
//!
//! For embedded database storage, use the redb extension.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tariffscope_core::{Scenario, ScenarioRepository, TariffError, TariffResult};

/// Scenario repository backed by a single JSON file.
///
/// The whole custom collection is written as one JSON array on every
/// save. A missing file reads as an empty collection; a file that
/// cannot be parsed reads as a serialization error, which callers
/// treat as recoverable.
pub struct JsonFileScenarioRepository {
    path: PathBuf,
}

impl JsonFileScenarioRepository {
    /// Create a repository writing to the given file path.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The file this repository reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScenarioRepository for JsonFileScenarioRepository {
    fn load(&self) -> TariffResult<Vec<Scenario>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(TariffError::storage_error(e.to_string())),
        };

        serde_json::from_str(&contents).map_err(|e| TariffError::serialization_error(e.to_string()))
    }

    fn save(&self, scenarios: &[Scenario]) -> TariffResult<()> {
        let json = serde_json::to_string(scenarios)
            .map_err(|e| TariffError::serialization_error(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| TariffError::storage_error(e.to_string()))?;
            }
        }

        fs::write(&self.path, json).map_err(|e| TariffError::storage_error(e.to_string()))
    }
}

/// In-memory scenario repository for testing and ephemeral sessions.
///
/// Nothing survives the process; saves replace the held collection
/// wholesale, mirroring the file repository's contract.
#[derive(Default)]
pub struct MemoryScenarioRepository {
    scenarios: RwLock<Vec<Scenario>>,
}

impl MemoryScenarioRepository {
    /// Create an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-seeded with scenarios.
    #[must_use]
    pub fn with_scenarios(scenarios: Vec<Scenario>) -> Self {
        Self {
            scenarios: RwLock::new(scenarios),
        }
    }
}

impl ScenarioRepository for MemoryScenarioRepository {
    fn load(&self) -> TariffResult<Vec<Scenario>> {
        let guard = self
            .scenarios
            .read()
            .map_err(|_| TariffError::storage_error("repository lock poisoned"))?;
        Ok(guard.clone())
    }

    fn save(&self, scenarios: &[Scenario]) -> TariffResult<()> {
        let mut guard = self
            .scenarios
            .write()
            .map_err(|_| TariffError::storage_error("repository lock poisoned"))?;
        *guard = scenarios.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tariffscope_core::{MarketImpact, TariffLevels};

    fn sample_scenario(id: &str) -> Scenario {
        Scenario::new(id, "Sample")
            .with_description("A sample scenario")
            .with_tariff_levels(TariffLevels::new(15.0, 5.0))
            .with_probability(0.2)
            .with_market_impact(MarketImpact::new(-3.75, 2.75))
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileScenarioRepository::new(dir.path().join("scenarios.json"));
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileScenarioRepository::new(dir.path().join("scenarios.json"));

        let scenarios = vec![sample_scenario("custom-1"), sample_scenario("custom-2")];
        repo.save(&scenarios).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded, scenarios);
    }

    #[test]
    fn test_save_replaces_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileScenarioRepository::new(dir.path().join("scenarios.json"));

        repo.save(&[sample_scenario("custom-1"), sample_scenario("custom-2")])
            .unwrap();
        repo.save(&[sample_scenario("custom-3")]).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id.as_str(), "custom-3");
    }

    #[test]
    fn test_corrupt_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenarios.json");
        std::fs::write(&path, "{not json").unwrap();

        let repo = JsonFileScenarioRepository::new(&path);
        let err = repo.load().unwrap_err();
        assert!(matches!(err, TariffError::SerializationError { .. }));
        assert!(err.is_recoverable_on_load());
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/state/scenarios.json");

        let repo = JsonFileScenarioRepository::new(&path);
        repo.save(&[sample_scenario("custom-1")]).unwrap();
        assert_eq!(repo.load().unwrap().len(), 1);
    }

    #[test]
    fn test_memory_round_trip() {
        let repo = MemoryScenarioRepository::new();
        assert!(repo.load().unwrap().is_empty());

        repo.save(&[sample_scenario("custom-1")]).unwrap();
        let loaded = repo.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id.as_str(), "custom-1");
    }

    #[test]
    fn test_memory_seeded() {
        let repo = MemoryScenarioRepository::with_scenarios(vec![sample_scenario("custom-9")]);
        assert_eq!(repo.load().unwrap().len(), 1);
    }
}
