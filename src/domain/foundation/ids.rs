//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

uuid_id!(
    /// Unique identifier for a decision framework.
    FrameworkId
);

uuid_id!(
    /// Unique identifier for a scenario under evaluation.
    ScenarioId
);

uuid_id!(
    /// Unique identifier for a criterion within a framework.
    CriterionId
);

uuid_id!(
    /// Unique identifier for a scenario template.
    TemplateId
);

uuid_id!(
    /// Unique identifier for a saved scenario comparison.
    ComparisonId
);

uuid_id!(
    /// Unique identifier for a recorded decision.
    HistoryId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        assert_ne!(FrameworkId::new(), FrameworkId::new());
        assert_ne!(ScenarioId::new(), ScenarioId::new());
    }

    #[test]
    fn id_round_trips_through_string() {
        let id = ScenarioId::new();
        let parsed: ScenarioId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn id_serializes_transparently() {
        let id = CriterionId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }

    #[test]
    fn id_from_invalid_string_fails() {
        assert!("not-a-uuid".parse::<FrameworkId>().is_err());
    }
}
