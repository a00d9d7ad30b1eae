//! Scenario template repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, TemplateId};
use crate::domain::scenario::ScenarioTemplate;

/// Repository port for scenario template persistence.
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    /// Save a new template.
    async fn save(&self, template: &ScenarioTemplate) -> Result<(), DomainError>;

    /// Update an existing template (usage counts included).
    ///
    /// # Errors
    ///
    /// - `TemplateNotFound` if the template doesn't exist
    async fn update(&self, template: &ScenarioTemplate) -> Result<(), DomainError>;

    /// Find a template by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &TemplateId) -> Result<Option<ScenarioTemplate>, DomainError>;

    /// Templates, optionally filtered by category label.
    async fn find_all(&self, category: Option<&str>) -> Result<Vec<ScenarioTemplate>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn TemplateRepository) {}
    }
}
