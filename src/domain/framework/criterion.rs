//! Criterion - a single weighted, typed question within a framework.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Category, CriterionId};

/// Declared value type of a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Boolean,
    Numeric,
    Categorical,
    Text,
}

/// A raw answer supplied for a criterion.
///
/// Values are loosely typed at the edge of the system; the tag makes the
/// runtime dispatch in the normalizer exhaustive and auditable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionValue {
    Boolean(bool),
    Numeric(f64),
    Categorical(String),
    Text(String),
}

impl CriterionValue {
    /// Convenience constructor for categorical values.
    pub fn categorical(value: impl Into<String>) -> Self {
        CriterionValue::Categorical(value.into())
    }

    /// Convenience constructor for free-text values.
    pub fn text(value: impl Into<String>) -> Self {
        CriterionValue::Text(value.into())
    }
}

/// A single weighted evaluation criterion within a framework.
///
/// The weight is category-relative: it is this criterion's share of its
/// category's score, not of the overall score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: CriterionId,
    pub label: String,
    pub category: Category,
    pub weight: f64,
    pub data_type: DataType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub possible_values: Option<Vec<String>>,
}

impl Criterion {
    /// Creates a criterion with no bounds or value list.
    pub fn new(
        label: impl Into<String>,
        category: Category,
        weight: f64,
        data_type: DataType,
    ) -> Self {
        Self {
            id: CriterionId::new(),
            label: label.into(),
            category,
            weight,
            data_type,
            min_value: None,
            max_value: None,
            possible_values: None,
        }
    }

    /// Sets the numeric bounds used for linear rescaling.
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min_value = Some(min);
        self.max_value = Some(max);
        self
    }

    /// Sets the ordered list of allowed categorical values.
    pub fn with_possible_values(mut self, values: Vec<impl Into<String>>) -> Self {
        self.possible_values = Some(values.into_iter().map(Into::into).collect());
        self
    }
}
