//! Error types for the TariffScope library.
//!
//! This module defines the error types used throughout TariffScope,
//! providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for TariffScope operations.
pub type TariffResult<T> = Result<T, TariffError>;

/// The main error type for TariffScope operations.
#[derive(Error, Debug, Clone)]
pub enum TariffError {
    /// Scenario input failed validation.
    #[error("Invalid scenario: {reason}")]
    InvalidScenario {
        /// Description of what's invalid.
        reason: String,
    },

    /// Scenario id did not resolve to a custom scenario.
    #[error("Scenario not found: {id}")]
    ScenarioNotFound {
        /// Identifier of the missing scenario.
        id: String,
    },

    /// Serialization or deserialization of persisted state failed.
    #[error("Serialization error: {reason}")]
    SerializationError {
        /// Description of the failure.
        reason: String,
    },

    /// Storage backend failure (I/O, database).
    #[error("Storage error: {reason}")]
    StorageError {
        /// Description of the failure.
        reason: String,
    },
}

impl TariffError {
    /// Creates an invalid scenario error.
    #[must_use]
    pub fn invalid_scenario(reason: impl Into<String>) -> Self {
        Self::InvalidScenario {
            reason: reason.into(),
        }
    }

    /// Creates a scenario not found error.
    #[must_use]
    pub fn scenario_not_found(id: impl Into<String>) -> Self {
        Self::ScenarioNotFound { id: id.into() }
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization_error(reason: impl Into<String>) -> Self {
        Self::SerializationError {
            reason: reason.into(),
        }
    }

    /// Creates a storage error.
    #[must_use]
    pub fn storage_error(reason: impl Into<String>) -> Self {
        Self::StorageError {
            reason: reason.into(),
        }
    }

    /// Returns true if this error recovers softly on load: corrupt
    /// persisted data substitutes an empty collection.
    #[must_use]
    pub fn is_recoverable_on_load(&self) -> bool {
        matches!(
            self,
            Self::SerializationError { .. } | Self::StorageError { .. }
        )
    }
}
