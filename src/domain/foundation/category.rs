//! The five fixed evaluation categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five fixed groupings that criteria are organized under.
///
/// Note: a *high* score in the `Risk` category represents *low* risk.
/// The category is scored as risk mitigation strength; the combined
/// risk level computation inverts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Financial,
    Strategic,
    Operational,
    Risk,
    Market,
}

impl Category {
    /// All categories in the canonical order used by scoring and
    /// comparison matrices.
    pub const ALL: [Category; 5] = [
        Category::Financial,
        Category::Strategic,
        Category::Operational,
        Category::Risk,
        Category::Market,
    ];

    /// Returns the display label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Financial => "financial",
            Category::Strategic => "strategic",
            Category::Operational => "operational",
            Category::Risk => "risk",
            Category::Market => "market",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_has_five_categories_in_fixed_order() {
        assert_eq!(Category::ALL.len(), 5);
        assert_eq!(Category::ALL[0], Category::Financial);
        assert_eq!(Category::ALL[4], Category::Market);
    }

    #[test]
    fn category_serializes_snake_case() {
        let json = serde_json::to_string(&Category::Operational).unwrap();
        assert_eq!(json, "\"operational\"");
    }

    #[test]
    fn category_displays_label() {
        assert_eq!(Category::Risk.to_string(), "risk");
    }
}
