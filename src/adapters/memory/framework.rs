//! In-memory framework repository.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, FrameworkId};
use crate::domain::framework::Framework;
use crate::ports::FrameworkRepository;

/// In-memory implementation of the `FrameworkRepository` port.
///
/// Updates snapshot the collection, modify it, and swap it back in
/// whole; concurrent updates to the same framework resolve last writer
/// wins.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFrameworkRepository {
    items: Arc<RwLock<Vec<Framework>>>,
}

impl InMemoryFrameworkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored frameworks. Useful in tests.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// True if no frameworks are stored.
    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl FrameworkRepository for InMemoryFrameworkRepository {
    async fn save(&self, framework: &Framework) -> Result<(), DomainError> {
        let mut items = self.items.read().await.clone();
        items.push(framework.clone());
        *self.items.write().await = items;
        Ok(())
    }

    async fn update(&self, framework: &Framework) -> Result<(), DomainError> {
        let mut items = self.items.read().await.clone();
        let slot = items
            .iter_mut()
            .find(|f| f.id == framework.id)
            .ok_or_else(|| DomainError::framework_not_found(&framework.id))?;
        *slot = framework.clone();
        *self.items.write().await = items;
        Ok(())
    }

    async fn find_by_id(&self, id: &FrameworkId) -> Result<Option<Framework>, DomainError> {
        Ok(self.items.read().await.iter().find(|f| &f.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Framework>, DomainError> {
        Ok(self.items.read().await.clone())
    }

    async fn delete(&self, id: &FrameworkId) -> Result<(), DomainError> {
        let mut items = self.items.read().await.clone();
        items.retain(|f| &f.id != id);
        *self.items.write().await = items;
        Ok(())
    }
}
