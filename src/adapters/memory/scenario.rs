//! In-memory scenario repository.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ScenarioId};
use crate::domain::scenario::Scenario;
use crate::ports::ScenarioRepository;

/// In-memory implementation of the `ScenarioRepository` port.
///
/// Same storage discipline as the other in-memory repositories:
/// snapshot, modify, swap back in whole. Concurrent updates to the same
/// scenario resolve last writer wins.
#[derive(Debug, Clone, Default)]
pub struct InMemoryScenarioRepository {
    items: Arc<RwLock<Vec<Scenario>>>,
}

impl InMemoryScenarioRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored scenarios. Useful in tests.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }
}

#[async_trait]
impl ScenarioRepository for InMemoryScenarioRepository {
    async fn save(&self, scenario: &Scenario) -> Result<(), DomainError> {
        let mut items = self.items.read().await.clone();
        items.push(scenario.clone());
        *self.items.write().await = items;
        Ok(())
    }

    async fn update(&self, scenario: &Scenario) -> Result<(), DomainError> {
        let mut items = self.items.read().await.clone();
        let slot = items
            .iter_mut()
            .find(|s| s.id == scenario.id)
            .ok_or_else(|| DomainError::scenario_not_found(&scenario.id))?;
        *slot = scenario.clone();
        *self.items.write().await = items;
        Ok(())
    }

    async fn find_by_id(&self, id: &ScenarioId) -> Result<Option<Scenario>, DomainError> {
        Ok(self.items.read().await.iter().find(|s| &s.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Scenario>, DomainError> {
        Ok(self.items.read().await.clone())
    }

    async fn delete(&self, id: &ScenarioId) -> Result<(), DomainError> {
        let mut items = self.items.read().await.clone();
        items.retain(|s| &s.id != id);
        *self.items.write().await = items;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn scenario(name: &str) -> Scenario {
        Scenario::new(name, "", "Harbor upgrade", "estimator")
    }

    #[tokio::test]
    async fn save_and_find_round_trip() {
        let repo = InMemoryScenarioRepository::new();
        let s = scenario("Base case");

        repo.save(&s).await.unwrap();

        assert_eq!(repo.find_by_id(&s.id).await.unwrap(), Some(s));
    }

    #[tokio::test]
    async fn update_of_missing_scenario_errs() {
        let repo = InMemoryScenarioRepository::new();
        let err = repo.update(&scenario("Ghost")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ScenarioNotFound);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let repo = InMemoryScenarioRepository::new();
        let s = scenario("Base case");
        repo.save(&s).await.unwrap();

        repo.delete(&s.id).await.unwrap();
        repo.delete(&s.id).await.unwrap();

        assert_eq!(repo.len().await, 0);
    }
}
