//! Scenario repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ScenarioId};
use crate::domain::scenario::Scenario;

/// Repository port for scenario persistence.
#[async_trait]
pub trait ScenarioRepository: Send + Sync {
    /// Save a new scenario.
    async fn save(&self, scenario: &Scenario) -> Result<(), DomainError>;

    /// Update an existing scenario.
    ///
    /// # Errors
    ///
    /// - `ScenarioNotFound` if the scenario doesn't exist
    async fn update(&self, scenario: &Scenario) -> Result<(), DomainError>;

    /// Find a scenario by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &ScenarioId) -> Result<Option<Scenario>, DomainError>;

    /// All scenarios, in insertion order.
    async fn find_all(&self) -> Result<Vec<Scenario>, DomainError>;

    /// Delete a scenario by ID. Deleting an absent scenario is a no-op.
    async fn delete(&self, id: &ScenarioId) -> Result<(), DomainError>;
}
