//! Chart-ready view derivation.
//!
//! Pure functions that turn a validated [`AnalysisResult`] into the data the
//! presentation layer renders: an overall summary, a distribution breakdown,
//! and a bounded ranked list. Everything here is recomputed in full on every
//! invocation and holds no state across calls.

pub mod distribution;
pub mod ranked;

pub use distribution::DistributionSlice;
pub use ranked::{RankedScore, RANKED_VIEW_LIMIT};

use serde::{Deserialize, Serialize};

use crate::models::analysis::AnalysisResult;
use crate::models::sentiment::SentimentCategory;

/// Classification of the collection-wide sentiment score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallSummary {
    /// Raw score as reported by the server.
    pub score: f64,
    pub category: SentimentCategory,
    pub label: String,
    pub color: String,
    pub emoji: String,
}

impl OverallSummary {
    /// Build a summary by classifying a score.
    pub fn from_score(score: f64) -> Self {
        let category = SentimentCategory::classify(score);
        Self {
            score,
            category,
            label: category.label().to_string(),
            color: category.color().to_string(),
            emoji: category.emoji().to_string(),
        }
    }
}

/// Complete dashboard dataset for one analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub summary: OverallSummary,
    pub distribution: Vec<DistributionSlice>,
    pub ranked: Vec<RankedScore>,
}

/// Derive all dashboard views from an analysis result.
pub fn build_views(result: &AnalysisResult) -> DashboardData {
    DashboardData {
        summary: OverallSummary::from_score(result.overall_sentiment),
        distribution: distribution::build_distribution(result),
        ranked: ranked::build_ranked(result),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_from_score() {
        let summary = OverallSummary::from_score(0.34);
        assert_eq!(summary.score, 0.34);
        assert_eq!(summary.category, SentimentCategory::Positive);
        assert_eq!(summary.label, "Positive");
        assert_eq!(summary.color, "#22c55e");
        assert_eq!(summary.emoji, "🙂");
    }
}
