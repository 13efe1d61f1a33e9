//! Ranked per-item scores for the bar chart.

use serde::{Deserialize, Serialize};

use crate::models::analysis::AnalysisResult;
use crate::models::sentiment::SentimentCategory;

/// Maximum number of entries in the ranked view.
pub const RANKED_VIEW_LIMIT: usize = 10;

/// One bar of the ranked score chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedScore {
    /// 1-based position, following server order.
    pub rank: usize,
    /// Polarity score of this item.
    pub sentiment: f64,
    /// Display color (hex), classified from this item's own score.
    pub color: String,
}

/// Take the first [`RANKED_VIEW_LIMIT`] detailed results in server order.
///
/// Shorter inputs yield shorter output; an empty result set yields an empty
/// view.
pub fn build_ranked(result: &AnalysisResult) -> Vec<RankedScore> {
    result
        .detailed_results
        .iter()
        .take(RANKED_VIEW_LIMIT)
        .enumerate()
        .map(|(index, record)| RankedScore {
            rank: index + 1,
            sentiment: record.sentiment,
            color: SentimentCategory::classify(record.sentiment)
                .color()
                .to_string(),
        })
        .collect()
}
