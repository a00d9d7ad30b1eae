//! Normalizer - converts raw criterion values onto the common 0-100 scale.

use crate::domain::foundation::Score;
use crate::domain::framework::{Criterion, CriterionValue, DataType};

/// Neutral default substituted for text values, unlisted categorical
/// values, and declared-type/supplied-value mismatches. Leniency, not
/// an error.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Normalization of raw criterion values.
pub struct Normalizer;

impl Normalizer {
    /// Normalizes a raw value for a criterion onto [0, 100].
    ///
    /// # Rules
    /// - Boolean: true -> 100, false -> 0
    /// - Numeric with both bounds: linear rescale, clamped to [0, 100]
    /// - Numeric without bounds: the raw value clamped to [0, 100]
    /// - Categorical with a declared value list: index / (len - 1) * 100;
    ///   a single-entry list maps its entry to 100; unlisted values -> 50
    /// - Categorical without a list, text, or a value whose variant does
    ///   not match the declared data type -> 50
    pub fn normalize(value: &CriterionValue, criterion: &Criterion) -> Score {
        match (criterion.data_type, value) {
            (DataType::Boolean, CriterionValue::Boolean(flag)) => {
                if *flag {
                    Score::MAX
                } else {
                    Score::ZERO
                }
            }
            (DataType::Numeric, CriterionValue::Numeric(raw)) => {
                Self::normalize_numeric(*raw, criterion)
            }
            (DataType::Categorical, CriterionValue::Categorical(raw)) => {
                Self::normalize_categorical(raw, criterion)
            }
            (DataType::Text, CriterionValue::Text(_)) => Score::new(NEUTRAL_SCORE),
            // Declared type and supplied value disagree.
            _ => Score::new(NEUTRAL_SCORE),
        }
    }

    fn normalize_numeric(raw: f64, criterion: &Criterion) -> Score {
        match (criterion.min_value, criterion.max_value) {
            (Some(min), Some(max)) if max > min => {
                let rescaled = (raw - min) / (max - min) * 100.0;
                Score::new(rescaled)
            }
            // Degenerate or missing bounds: assume the raw value is
            // already percentage-like.
            _ => Score::new(raw),
        }
    }

    fn normalize_categorical(raw: &str, criterion: &Criterion) -> Score {
        let Some(values) = criterion.possible_values.as_deref() else {
            return Score::new(NEUTRAL_SCORE);
        };

        match values.iter().position(|v| v == raw) {
            Some(_) if values.len() == 1 => Score::MAX,
            Some(index) => Score::new(index as f64 / (values.len() - 1) as f64 * 100.0),
            None => Score::new(NEUTRAL_SCORE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Category;
    use proptest::prelude::*;

    fn numeric_criterion(min: Option<f64>, max: Option<f64>) -> Criterion {
        let mut c = Criterion::new("n", Category::Financial, 10.0, DataType::Numeric);
        c.min_value = min;
        c.max_value = max;
        c
    }

    fn categorical_criterion(values: Option<Vec<&str>>) -> Criterion {
        let mut c = Criterion::new("c", Category::Market, 10.0, DataType::Categorical);
        c.possible_values = values.map(|v| v.into_iter().map(String::from).collect());
        c
    }

    #[test]
    fn boolean_true_is_100_false_is_0() {
        let criterion = Criterion::new("b", Category::Risk, 10.0, DataType::Boolean);
        assert_eq!(
            Normalizer::normalize(&CriterionValue::Boolean(true), &criterion).value(),
            100.0
        );
        assert_eq!(
            Normalizer::normalize(&CriterionValue::Boolean(false), &criterion).value(),
            0.0
        );
    }

    #[test]
    fn numeric_rescales_linearly_within_bounds() {
        let criterion = numeric_criterion(Some(0.0), Some(200.0));
        let score = Normalizer::normalize(&CriterionValue::Numeric(50.0), &criterion);
        assert_eq!(score.value(), 25.0);
    }

    #[test]
    fn numeric_out_of_range_clamps_instead_of_failing() {
        let criterion = numeric_criterion(Some(10.0), Some(20.0));
        assert_eq!(
            Normalizer::normalize(&CriterionValue::Numeric(5.0), &criterion).value(),
            0.0
        );
        assert_eq!(
            Normalizer::normalize(&CriterionValue::Numeric(25.0), &criterion).value(),
            100.0
        );
    }

    #[test]
    fn numeric_without_bounds_clamps_raw_value() {
        let criterion = numeric_criterion(None, None);
        assert_eq!(
            Normalizer::normalize(&CriterionValue::Numeric(73.5), &criterion).value(),
            73.5
        );
        assert_eq!(
            Normalizer::normalize(&CriterionValue::Numeric(140.0), &criterion).value(),
            100.0
        );
        assert_eq!(
            Normalizer::normalize(&CriterionValue::Numeric(-3.0), &criterion).value(),
            0.0
        );
    }

    #[test]
    fn numeric_with_degenerate_bounds_falls_back_to_raw_clamp() {
        let criterion = numeric_criterion(Some(50.0), Some(50.0));
        assert_eq!(
            Normalizer::normalize(&CriterionValue::Numeric(80.0), &criterion).value(),
            80.0
        );
    }

    #[test]
    fn categorical_maps_position_on_the_ordered_list() {
        let criterion = categorical_criterion(Some(vec!["low", "medium", "high"]));
        assert_eq!(
            Normalizer::normalize(&CriterionValue::categorical("low"), &criterion).value(),
            0.0
        );
        assert_eq!(
            Normalizer::normalize(&CriterionValue::categorical("medium"), &criterion).value(),
            50.0
        );
        assert_eq!(
            Normalizer::normalize(&CriterionValue::categorical("high"), &criterion).value(),
            100.0
        );
    }

    #[test]
    fn categorical_unlisted_value_defaults_to_neutral() {
        let criterion = categorical_criterion(Some(vec!["low", "high"]));
        assert_eq!(
            Normalizer::normalize(&CriterionValue::categorical("unknown"), &criterion).value(),
            NEUTRAL_SCORE
        );
    }

    #[test]
    fn categorical_without_declared_values_is_neutral() {
        let criterion = categorical_criterion(None);
        assert_eq!(
            Normalizer::normalize(&CriterionValue::categorical("anything"), &criterion).value(),
            NEUTRAL_SCORE
        );
    }

    #[test]
    fn categorical_single_entry_list_maps_match_to_100() {
        let criterion = categorical_criterion(Some(vec!["only"]));
        assert_eq!(
            Normalizer::normalize(&CriterionValue::categorical("only"), &criterion).value(),
            100.0
        );
    }

    #[test]
    fn text_is_always_neutral() {
        let criterion = Criterion::new("t", Category::Operational, 10.0, DataType::Text);
        assert_eq!(
            Normalizer::normalize(&CriterionValue::text("free form notes"), &criterion).value(),
            NEUTRAL_SCORE
        );
    }

    #[test]
    fn mismatched_value_variant_is_neutral() {
        let criterion = numeric_criterion(Some(0.0), Some(100.0));
        assert_eq!(
            Normalizer::normalize(&CriterionValue::Boolean(true), &criterion).value(),
            NEUTRAL_SCORE
        );
    }

    proptest! {
        #[test]
        fn normalized_scores_stay_in_bounds(
            raw in -1e6f64..1e6,
            min in -1e3f64..1e3,
            span in 0.0f64..1e3,
        ) {
            let criterion = numeric_criterion(Some(min), Some(min + span));
            let score = Normalizer::normalize(&CriterionValue::Numeric(raw), &criterion);
            prop_assert!(score.value() >= 0.0 && score.value() <= 100.0);
        }

        #[test]
        fn categorical_scores_stay_in_bounds(index in 0usize..20, len in 1usize..20) {
            let values: Vec<String> = (0..len).map(|i| format!("v{}", i)).collect();
            let refs: Vec<&str> = values.iter().map(String::as_str).collect();
            let criterion = categorical_criterion(Some(refs));
            let raw = format!("v{}", index);
            let score = Normalizer::normalize(&CriterionValue::categorical(raw), &criterion);
            prop_assert!(score.value() >= 0.0 && score.value() <= 100.0);
        }
    }
}
