//! Comparator - side-by-side comparison of already-analyzed scenarios.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Category, ComparisonId, DomainError, ScenarioId, Score, Timestamp};
use crate::domain::scenario::{Recommendation, Scenario};

/// Minimum number of analyzed scenarios required for a comparison.
pub const MIN_SCENARIOS_FOR_COMPARISON: usize = 2;

/// Uniform per-category weight applied to matrix scores.
///
/// Deliberately independent of each scenario's own framework weighting
/// scheme: every compared scenario gets the same 20% per category, which
/// keeps cross-framework comparisons on one footing. Whether that was
/// the right call is an open question recorded in DESIGN.md; do not
/// silently replace it with per-framework weights.
pub const COMPARISON_CATEGORY_WEIGHT: f64 = 0.2;

/// One scenario's row in the comparison matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixEntry {
    pub scenario_id: ScenarioId,
    pub name: String,
    /// Category scores in the fixed `Category::ALL` order.
    pub scores: Vec<Score>,
    pub overall_score: Score,
    pub recommendation: Recommendation,
}

/// A scenario's position in the overall ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub scenario_id: ScenarioId,
    /// 1-based position after a stable descending sort by overall score.
    pub rank: u32,
    pub score: Score,
}

/// Structured side-by-side view of the compared scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonMatrix {
    /// Fixed category order shared by every `scores` vector.
    pub criteria: Vec<Category>,
    pub scenarios: Vec<MatrixEntry>,
    /// Matrix scores scaled by the uniform per-category weight, row per
    /// scenario, parallel to `criteria`.
    pub weighted_scores: Vec<Vec<Score>>,
    pub rankings: Vec<Ranking>,
}

/// Kind of comparison insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonInsightKind {
    /// The top-ranked scenario overall.
    BestOverall,
    /// The scenario leading one category.
    CategoryLeader,
}

/// Qualitative impact attached to a comparison insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonImpact {
    High,
    Medium,
    Low,
}

/// A comparison-level insight with its numeric basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonInsight {
    pub kind: ComparisonInsightKind,
    /// `None` for overall insights, the category for leader insights.
    pub category: Option<Category>,
    pub scenario_id: ScenarioId,
    pub scenario_name: String,
    pub basis: Score,
    pub impact: ComparisonImpact,
    /// Confidence percentage attached to the insight.
    pub confidence: u8,
}

/// Templated comparison recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ComparisonRecommendation {
    /// Focus on the top-ranked scenario.
    FocusTopRanked { rank: u32 },
    /// Review low performers for improvement potential.
    ReviewUnderperformers,
    /// Run sensitivity analysis on the critical factors.
    RunSensitivityAnalysis,
}

/// The full output of comparing a set of scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonOutcome {
    pub matrix: ComparisonMatrix,
    pub insights: Vec<ComparisonInsight>,
    pub recommendations: Vec<ComparisonRecommendation>,
}

/// A persisted comparison record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub id: ComparisonId,
    pub scenario_ids: Vec<ScenarioId>,
    pub matrix: ComparisonMatrix,
    pub insights: Vec<ComparisonInsight>,
    pub recommendations: Vec<ComparisonRecommendation>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ScenarioComparison {
    /// Wraps a comparison outcome into a persistable record.
    pub fn from_outcome(outcome: ComparisonOutcome) -> Self {
        let now = Timestamp::now();
        Self {
            id: ComparisonId::new(),
            scenario_ids: outcome
                .matrix
                .scenarios
                .iter()
                .map(|entry| entry.scenario_id)
                .collect(),
            matrix: outcome.matrix,
            insights: outcome.insights,
            recommendations: outcome.recommendations,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Multi-scenario comparison over existing analysis results.
pub struct Comparator;

impl Comparator {
    /// Compares two or more already-analyzed scenarios.
    ///
    /// Matrix scores are read from each scenario's stored
    /// `analysis_results`; nothing is re-scored here.
    ///
    /// # Errors
    ///
    /// `ValidationFailed` if fewer than two scenarios are supplied.
    pub fn compare(scenarios: &[Scenario]) -> Result<ComparisonOutcome, DomainError> {
        if scenarios.len() < MIN_SCENARIOS_FOR_COMPARISON {
            return Err(DomainError::validation(
                "At least 2 valid scenarios are required for comparison",
            ));
        }

        let matrix = Self::build_matrix(scenarios);
        let insights = Self::insights(&matrix);
        let recommendations = Self::recommendations(&matrix);

        Ok(ComparisonOutcome {
            matrix,
            insights,
            recommendations,
        })
    }

    fn build_matrix(scenarios: &[Scenario]) -> ComparisonMatrix {
        let entries: Vec<MatrixEntry> = scenarios
            .iter()
            .map(|scenario| MatrixEntry {
                scenario_id: scenario.id,
                name: scenario.name.clone(),
                scores: Category::ALL
                    .into_iter()
                    .map(|category| scenario.analysis_results.category_scores.get(category))
                    .collect(),
                overall_score: scenario.analysis_results.overall_score,
                recommendation: scenario.analysis_results.recommendation,
            })
            .collect();

        let weighted_scores = entries
            .iter()
            .map(|entry| {
                entry
                    .scores
                    .iter()
                    .map(|score| Score::new(score.value() * COMPARISON_CATEGORY_WEIGHT))
                    .collect()
            })
            .collect();

        let rankings = Self::rank(&entries);

        ComparisonMatrix {
            criteria: Category::ALL.to_vec(),
            scenarios: entries,
            weighted_scores,
            rankings,
        }
    }

    /// Stable descending sort by overall score; ties keep input order.
    fn rank(entries: &[MatrixEntry]) -> Vec<Ranking> {
        let mut ranked: Vec<(ScenarioId, Score)> = entries
            .iter()
            .map(|entry| (entry.scenario_id, entry.overall_score))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        ranked
            .into_iter()
            .enumerate()
            .map(|(index, (scenario_id, score))| Ranking {
                scenario_id,
                rank: index as u32 + 1,
                score,
            })
            .collect()
    }

    fn insights(matrix: &ComparisonMatrix) -> Vec<ComparisonInsight> {
        let mut insights = Vec::new();

        if let Some(best) = matrix.rankings.first() {
            if let Some(entry) = matrix
                .scenarios
                .iter()
                .find(|entry| entry.scenario_id == best.scenario_id)
            {
                insights.push(ComparisonInsight {
                    kind: ComparisonInsightKind::BestOverall,
                    category: None,
                    scenario_id: best.scenario_id,
                    scenario_name: entry.name.clone(),
                    basis: best.score,
                    impact: ComparisonImpact::High,
                    confidence: 90,
                });
            }
        }

        for (index, category) in matrix.criteria.iter().enumerate() {
            // Strict `>` keeps the earliest maximum on ties.
            let leader = matrix.scenarios.iter().reduce(|best, current| {
                if current.scores[index].value() > best.scores[index].value() {
                    current
                } else {
                    best
                }
            });

            if let Some(leader) = leader {
                insights.push(ComparisonInsight {
                    kind: ComparisonInsightKind::CategoryLeader,
                    category: Some(*category),
                    scenario_id: leader.scenario_id,
                    scenario_name: leader.name.clone(),
                    basis: leader.scores[index],
                    impact: ComparisonImpact::Medium,
                    confidence: 85,
                });
            }
        }

        insights
    }

    fn recommendations(matrix: &ComparisonMatrix) -> Vec<ComparisonRecommendation> {
        let mut recommendations = Vec::new();

        if let Some(top) = matrix.rankings.first() {
            recommendations.push(ComparisonRecommendation::FocusTopRanked { rank: top.rank });
        }

        if matrix.rankings.len() > 2 {
            recommendations.push(ComparisonRecommendation::ReviewUnderperformers);
        }

        recommendations.push(ComparisonRecommendation::RunSensitivityAnalysis);

        recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Score;
    use crate::domain::scenario::{CategoryScores, RiskLevel};

    fn analyzed_scenario(name: &str, overall: f64, scores: CategoryScores) -> Scenario {
        let mut scenario = Scenario::new(name, "", "P", "u");
        let mut result = crate::domain::scenario::AnalysisResult::placeholder();
        result.overall_score = Score::new(overall);
        result.category_scores = scores;
        result.recommendation = Recommendation::ConditionalBid;
        result.risk_level = RiskLevel::Medium;
        scenario.record_analysis(result);
        scenario
    }

    fn flat_scores(value: f64) -> CategoryScores {
        CategoryScores::from_fn(|_| Score::new(value))
    }

    #[test]
    fn fewer_than_two_scenarios_is_a_validation_error() {
        let single = vec![analyzed_scenario("A", 50.0, flat_scores(50.0))];
        let err = Comparator::compare(&single).unwrap_err();
        assert_eq!(err.code, crate::domain::foundation::ErrorCode::ValidationFailed);
    }

    #[test]
    fn matrix_reads_category_scores_in_fixed_order() {
        let mut scores = flat_scores(10.0);
        scores.market = Score::new(99.0);
        let scenarios = vec![
            analyzed_scenario("A", 50.0, scores),
            analyzed_scenario("B", 40.0, flat_scores(40.0)),
        ];

        let outcome = Comparator::compare(&scenarios).unwrap();
        assert_eq!(outcome.matrix.criteria, Category::ALL.to_vec());
        // Market is the last column.
        assert_eq!(outcome.matrix.scenarios[0].scores[4].value(), 99.0);
    }

    #[test]
    fn weighted_scores_apply_uniform_twenty_percent() {
        let scenarios = vec![
            analyzed_scenario("A", 50.0, flat_scores(50.0)),
            analyzed_scenario("B", 40.0, flat_scores(40.0)),
        ];

        let outcome = Comparator::compare(&scenarios).unwrap();
        for weighted in &outcome.matrix.weighted_scores[0] {
            assert_eq!(weighted.value(), 10.0); // 50 * 0.2
        }
    }

    #[test]
    fn ranking_is_stable_for_ties() {
        // Input order [90, 70, 90]: first 90 ranks 1, second 90 ranks 2.
        let scenarios = vec![
            analyzed_scenario("first", 90.0, flat_scores(90.0)),
            analyzed_scenario("middle", 70.0, flat_scores(70.0)),
            analyzed_scenario("second", 90.0, flat_scores(90.0)),
        ];
        let ids: Vec<_> = scenarios.iter().map(|s| s.id).collect();

        let outcome = Comparator::compare(&scenarios).unwrap();
        let rankings = &outcome.matrix.rankings;

        assert_eq!(rankings[0].scenario_id, ids[0]);
        assert_eq!(rankings[0].rank, 1);
        assert_eq!(rankings[1].scenario_id, ids[2]);
        assert_eq!(rankings[1].rank, 2);
        assert_eq!(rankings[2].scenario_id, ids[1]);
        assert_eq!(rankings[2].rank, 3);
    }

    #[test]
    fn best_overall_insight_names_the_top_scenario() {
        let scenarios = vec![
            analyzed_scenario("loser", 30.0, flat_scores(30.0)),
            analyzed_scenario("winner", 80.0, flat_scores(80.0)),
        ];
        let winner_id = scenarios[1].id;

        let outcome = Comparator::compare(&scenarios).unwrap();
        let best = &outcome.insights[0];

        assert_eq!(best.kind, ComparisonInsightKind::BestOverall);
        assert_eq!(best.scenario_id, winner_id);
        assert_eq!(best.scenario_name, "winner");
        assert_eq!(best.impact, ComparisonImpact::High);
        assert_eq!(best.confidence, 90);
        assert!(best.category.is_none());
    }

    #[test]
    fn one_category_leader_insight_per_category() {
        let scenarios = vec![
            analyzed_scenario("A", 50.0, flat_scores(50.0)),
            analyzed_scenario("B", 40.0, flat_scores(40.0)),
        ];

        let outcome = Comparator::compare(&scenarios).unwrap();
        let leaders: Vec<_> = outcome
            .insights
            .iter()
            .filter(|i| i.kind == ComparisonInsightKind::CategoryLeader)
            .collect();

        assert_eq!(leaders.len(), 5);
        let categories: Vec<_> = leaders.iter().filter_map(|i| i.category).collect();
        assert_eq!(categories, Category::ALL.to_vec());
    }

    #[test]
    fn category_leader_ties_resolve_to_first_in_input_order() {
        let scenarios = vec![
            analyzed_scenario("first", 50.0, flat_scores(50.0)),
            analyzed_scenario("tied", 50.0, flat_scores(50.0)),
        ];
        let first_id = scenarios[0].id;

        let outcome = Comparator::compare(&scenarios).unwrap();
        for leader in outcome
            .insights
            .iter()
            .filter(|i| i.kind == ComparisonInsightKind::CategoryLeader)
        {
            assert_eq!(leader.scenario_id, first_id);
        }
    }

    #[test]
    fn two_scenarios_skip_the_underperformer_review() {
        let scenarios = vec![
            analyzed_scenario("A", 50.0, flat_scores(50.0)),
            analyzed_scenario("B", 40.0, flat_scores(40.0)),
        ];

        let outcome = Comparator::compare(&scenarios).unwrap();
        assert_eq!(
            outcome.recommendations,
            vec![
                ComparisonRecommendation::FocusTopRanked { rank: 1 },
                ComparisonRecommendation::RunSensitivityAnalysis,
            ]
        );
    }

    #[test]
    fn three_scenarios_include_the_underperformer_review() {
        let scenarios = vec![
            analyzed_scenario("A", 50.0, flat_scores(50.0)),
            analyzed_scenario("B", 40.0, flat_scores(40.0)),
            analyzed_scenario("C", 30.0, flat_scores(30.0)),
        ];

        let outcome = Comparator::compare(&scenarios).unwrap();
        assert!(outcome
            .recommendations
            .contains(&ComparisonRecommendation::ReviewUnderperformers));
    }

    #[test]
    fn from_outcome_preserves_scenario_order() {
        let scenarios = vec![
            analyzed_scenario("A", 50.0, flat_scores(50.0)),
            analyzed_scenario("B", 40.0, flat_scores(40.0)),
        ];
        let ids: Vec<_> = scenarios.iter().map(|s| s.id).collect();

        let outcome = Comparator::compare(&scenarios).unwrap();
        let record = ScenarioComparison::from_outcome(outcome);
        assert_eq!(record.scenario_ids, ids);
    }
}
