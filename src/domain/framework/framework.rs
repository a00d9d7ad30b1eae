//! Framework aggregate: a reusable configuration of weighted criteria,
//! category weights, and bid/no-bid thresholds.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Category, FrameworkId, Score, Timestamp};
use crate::domain::scenario::Recommendation;

use super::Criterion;

/// Category weighting scheme: five non-negative percentages summing
/// to 100 (enforced by the framework validator, not the constructor).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightingScheme {
    pub financial: f64,
    pub strategic: f64,
    pub operational: f64,
    pub risk: f64,
    pub market: f64,
}

impl WeightingScheme {
    /// Returns the weight for a category.
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Financial => self.financial,
            Category::Strategic => self.strategic,
            Category::Operational => self.operational,
            Category::Risk => self.risk,
            Category::Market => self.market,
        }
    }

    /// Sum of the five category weights.
    pub fn total(&self) -> f64 {
        self.financial + self.strategic + self.operational + self.risk + self.market
    }

    /// An even 20/20/20/20/20 split.
    pub fn uniform() -> Self {
        Self {
            financial: 20.0,
            strategic: 20.0,
            operational: 20.0,
            risk: 20.0,
            market: 20.0,
        }
    }
}

/// Bid / no-bid score thresholds on the 0-100 overall scale.
///
/// `bid` must exceed `no_bid`; the framework validator reports the
/// violation rather than the constructor failing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub bid: f64,
    pub no_bid: f64,
}

impl Thresholds {
    /// Creates a new threshold pair.
    pub fn new(bid: f64, no_bid: f64) -> Self {
        Self { bid, no_bid }
    }

    /// Classifies an overall score against these thresholds.
    ///
    /// Callers pass the *rounded* overall score; classification is part
    /// of the published scoring contract and must match what is stored.
    pub fn classify(&self, overall: Score) -> Recommendation {
        if overall.value() >= self.bid {
            Recommendation::Bid
        } else if overall.value() <= self.no_bid {
            Recommendation::NoBid
        } else {
            Recommendation::ConditionalBid
        }
    }
}

/// A reusable bid/no-bid decision framework.
///
/// Immutable once referenced by a completed analysis except through
/// explicit update; analyses are frozen copies, never live views, so
/// updating a framework does not re-score prior results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Framework {
    pub id: FrameworkId,
    pub name: String,
    pub criteria: Vec<Criterion>,
    pub weighting_scheme: WeightingScheme,
    pub thresholds: Thresholds,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Framework {
    /// Creates a new framework.
    pub fn new(
        name: impl Into<String>,
        criteria: Vec<Criterion>,
        weighting_scheme: WeightingScheme,
        thresholds: Thresholds,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id: FrameworkId::new(),
            name: name.into(),
            criteria,
            weighting_scheme,
            thresholds,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the criteria belonging to a category, in declaration order.
    pub fn criteria_in(&self, category: Category) -> impl Iterator<Item = &Criterion> {
        self.criteria.iter().filter(move |c| c.category == category)
    }
}
