//! # TariffScope Ext Redb
//!
//! Embedded scenario storage using redb for the TariffScope engine.
//!
//! The custom scenario collection is stored as one JSON array under a
//! fixed key, matching the wholesale save/load contract of the other
//! repository implementations.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::path::Path;
use std::sync::Arc;

use redb::{Database, TableDefinition};

use tariffscope_core::traits::CUSTOM_SCENARIOS_KEY;
use tariffscope_core::{Scenario, ScenarioRepository, TariffError, TariffResult};

const SCENARIOS: TableDefinition<&str, &[u8]> = TableDefinition::new("scenarios");

/// Redb-based scenario repository.
pub struct RedbScenarioRepository {
    db: Arc<Database>,
}

impl RedbScenarioRepository {
    /// Create a repository over an already-open database.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Open or create a database file at the given path.
    pub fn open(path: impl AsRef<Path>) -> TariffResult<Self> {
        let db = Database::create(path).map_err(|e| TariffError::storage_error(e.to_string()))?;
        Ok(Self::new(Arc::new(db)))
    }
}

impl ScenarioRepository for RedbScenarioRepository {
    fn load(&self) -> TariffResult<Vec<Scenario>> {
        let read_txn = self
            .db
            .begin_read()
            .map_err(|e| TariffError::storage_error(e.to_string()))?;

        let table = match read_txn.open_table(SCENARIOS) {
            Ok(t) => t,
            Err(redb::TableError::TableDoesNotExist(_)) => return Ok(Vec::new()),
            Err(e) => return Err(TariffError::storage_error(e.to_string())),
        };

        match table.get(CUSTOM_SCENARIOS_KEY) {
            Ok(Some(data)) => serde_json::from_slice(data.value())
                .map_err(|e| TariffError::serialization_error(e.to_string())),
            Ok(None) => Ok(Vec::new()),
            Err(e) => Err(TariffError::storage_error(e.to_string())),
        }
    }

    fn save(&self, scenarios: &[Scenario]) -> TariffResult<()> {
        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| TariffError::storage_error(e.to_string()))?;
        {
            let mut table = write_txn
                .open_table(SCENARIOS)
                .map_err(|e| TariffError::storage_error(e.to_string()))?;

            let bytes = serde_json::to_vec(scenarios)
                .map_err(|e| TariffError::serialization_error(e.to_string()))?;

            table
                .insert(CUSTOM_SCENARIOS_KEY, bytes.as_slice())
                .map_err(|e| TariffError::storage_error(e.to_string()))?;
        }
        write_txn
            .commit()
            .map_err(|e| TariffError::storage_error(e.to_string()))?;
        Ok(())
    }
}
