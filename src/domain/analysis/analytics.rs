//! Analytics - aggregates over recorded decisions.
//!
//! Pure functions over caller-supplied history; the reference point for
//! trend windows is an explicit timestamp so results are reproducible.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::history::{DecisionHistory, DecisionOutcome};
use crate::domain::scenario::Recommendation;

/// Number of trailing calendar months covered by the trend analysis.
pub const TREND_MONTHS: u32 = 6;

/// Per-month slice of the decision trend, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrend {
    /// Calendar month, formatted `YYYY-MM`.
    pub period: String,
    pub decisions: usize,
    /// Mean accuracy over the month's records (0 when none carry one).
    pub accuracy: f64,
    /// Percentage of the month's decisions that were won.
    pub win_rate: f64,
}

/// Aggregated decision analytics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionAnalytics {
    pub total_decisions: usize,
    pub bid_decisions: usize,
    pub no_bid_decisions: usize,
    pub conditional_decisions: usize,
    /// Win percentage over decisions with a settled outcome.
    pub win_rate: f64,
    /// Mean accuracy over decisions that carry an accuracy measure.
    pub average_accuracy: f64,
    pub trend: Vec<MonthlyTrend>,
}

/// Computation of decision analytics from history records.
pub struct AnalyticsCalculator;

impl AnalyticsCalculator {
    /// Aggregates history records into analytics, with trend windows
    /// anchored at `now`.
    pub fn analyze(history: &[DecisionHistory], now: Timestamp) -> DecisionAnalytics {
        let total_decisions = history.len();
        let bid_decisions = Self::count_decision(history, Recommendation::Bid);
        let no_bid_decisions = Self::count_decision(history, Recommendation::NoBid);
        let conditional_decisions = Self::count_decision(history, Recommendation::ConditionalBid);

        // Pending outcomes are excluded from the win rate.
        let settled: Vec<&DecisionHistory> = history
            .iter()
            .filter(|h| matches!(h.outcome, Some(o) if o != DecisionOutcome::Pending))
            .collect();
        let won = settled
            .iter()
            .filter(|h| h.outcome == Some(DecisionOutcome::Won))
            .count();
        let win_rate = if settled.is_empty() {
            0.0
        } else {
            won as f64 / settled.len() as f64 * 100.0
        };

        let with_accuracy: Vec<f64> = history.iter().filter_map(|h| h.accuracy).collect();
        let average_accuracy = if with_accuracy.is_empty() {
            0.0
        } else {
            with_accuracy.iter().sum::<f64>() / with_accuracy.len() as f64
        };

        DecisionAnalytics {
            total_decisions,
            bid_decisions,
            no_bid_decisions,
            conditional_decisions,
            win_rate,
            average_accuracy,
            trend: Self::trend(history, now),
        }
    }

    fn count_decision(history: &[DecisionHistory], decision: Recommendation) -> usize {
        history.iter().filter(|h| h.decision == decision).count()
    }

    /// Trailing calendar-month buckets, oldest first.
    fn trend(history: &[DecisionHistory], now: Timestamp) -> Vec<MonthlyTrend> {
        let (now_year, now_month) = now.year_month();
        let mut trend = Vec::with_capacity(TREND_MONTHS as usize);

        for offset in (0..TREND_MONTHS).rev() {
            let months_back = offset as i32;
            // 0-based month arithmetic, then back to 1-based.
            let absolute = now_year * 12 + (now_month as i32 - 1) - months_back;
            let year = absolute.div_euclid(12);
            let month = absolute.rem_euclid(12) as u32 + 1;

            let in_month: Vec<&DecisionHistory> = history
                .iter()
                .filter(|h| h.decision_date.year_month() == (year, month))
                .collect();

            let decisions = in_month.len();
            let accuracy = if decisions == 0 {
                0.0
            } else {
                in_month.iter().map(|h| h.accuracy.unwrap_or(0.0)).sum::<f64>() / decisions as f64
            };
            let month_won = in_month
                .iter()
                .filter(|h| h.outcome == Some(DecisionOutcome::Won))
                .count();
            let win_rate = if decisions == 0 {
                0.0
            } else {
                month_won as f64 / decisions as f64 * 100.0
            };

            trend.push(MonthlyTrend {
                period: format!("{:04}-{:02}", year, month),
                decisions,
                accuracy,
                win_rate,
            });
        }

        trend
    }
}
