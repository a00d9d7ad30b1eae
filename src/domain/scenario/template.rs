//! Scenario templates - reusable default criterion values.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{CriterionId, TemplateId, Timestamp};
use crate::domain::framework::CriterionValue;

/// A named bundle of default criterion values that can be applied to a
/// scenario. Applying a template merges its defaults over the
/// scenario's existing values (template wins) and bumps `usage_count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioTemplate {
    pub id: TemplateId,
    pub name: String,
    pub category: String,
    pub default_values: HashMap<CriterionId, CriterionValue>,
    pub usage_count: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ScenarioTemplate {
    /// Creates a new template with zero uses.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        default_values: HashMap<CriterionId, CriterionValue>,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id: TemplateId::new(),
            name: name.into(),
            category: category.into(),
            default_values,
            usage_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Records one application of this template.
    pub fn record_usage(&mut self) {
        self.usage_count += 1;
        self.updated_at = Timestamp::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_template_starts_unused() {
        let template = ScenarioTemplate::new("Infrastructure", "construction", HashMap::new());
        assert_eq!(template.usage_count, 0);
    }

    #[test]
    fn record_usage_increments() {
        let mut template = ScenarioTemplate::new("T", "c", HashMap::new());
        template.record_usage();
        template.record_usage();
        assert_eq!(template.usage_count, 2);
    }
}
