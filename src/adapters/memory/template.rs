//! In-memory scenario template repository.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, TemplateId};
use crate::domain::scenario::ScenarioTemplate;
use crate::ports::TemplateRepository;

/// In-memory implementation of the `TemplateRepository` port.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplateRepository {
    items: Arc<RwLock<Vec<ScenarioTemplate>>>,
}

impl InMemoryTemplateRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TemplateRepository for InMemoryTemplateRepository {
    async fn save(&self, template: &ScenarioTemplate) -> Result<(), DomainError> {
        let mut items = self.items.read().await.clone();
        items.push(template.clone());
        *self.items.write().await = items;
        Ok(())
    }

    async fn update(&self, template: &ScenarioTemplate) -> Result<(), DomainError> {
        let mut items = self.items.read().await.clone();
        let slot = items
            .iter_mut()
            .find(|t| t.id == template.id)
            .ok_or_else(|| DomainError::template_not_found(&template.id))?;
        *slot = template.clone();
        *self.items.write().await = items;
        Ok(())
    }

    async fn find_by_id(&self, id: &TemplateId) -> Result<Option<ScenarioTemplate>, DomainError> {
        Ok(self.items.read().await.iter().find(|t| &t.id == id).cloned())
    }

    async fn find_all(&self, category: Option<&str>) -> Result<Vec<ScenarioTemplate>, DomainError> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .filter(|t| category.map_or(true, |c| t.category == c))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn template(name: &str, category: &str) -> ScenarioTemplate {
        ScenarioTemplate::new(name, category, HashMap::new())
    }

    #[tokio::test]
    async fn category_filter_narrows_results() {
        let repo = InMemoryTemplateRepository::new();
        repo.save(&template("Marine works", "construction")).await.unwrap();
        repo.save(&template("Software RFP", "technology")).await.unwrap();

        let all = repo.find_all(None).await.unwrap();
        assert_eq!(all.len(), 2);

        let construction = repo.find_all(Some("construction")).await.unwrap();
        assert_eq!(construction.len(), 1);
        assert_eq!(construction[0].name, "Marine works");

        let none = repo.find_all(Some("marine")).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn update_persists_usage_count() {
        let repo = InMemoryTemplateRepository::new();
        let mut t = template("Marine works", "construction");
        repo.save(&t).await.unwrap();

        t.record_usage();
        repo.update(&t).await.unwrap();

        let found = repo.find_by_id(&t.id).await.unwrap().unwrap();
        assert_eq!(found.usage_count, 1);
    }

    #[tokio::test]
    async fn update_of_missing_template_errs() {
        let repo = InMemoryTemplateRepository::new();
        let err = repo.update(&template("Ghost", "misc")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::TemplateNotFound);
    }
}
