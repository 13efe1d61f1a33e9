//! Sentiment classification bands.
//!
//! Maps a continuous sentiment score (nominally in [-1, 1]) to one of five
//! discrete categories via fixed thresholds. The band table is a static,
//! process-wide constant; classification is total and pure.

use serde::{Deserialize, Serialize};

/// Display color for positive categories.
pub const COLOR_POSITIVE: &str = "#22c55e";
/// Display color for the neutral category.
pub const COLOR_NEUTRAL: &str = "#f59e0b";
/// Display color for negative categories.
pub const COLOR_NEGATIVE: &str = "#ef4444";

/// Discrete sentiment category derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentCategory {
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    VeryNegative,
}

/// One row of the classification table.
#[derive(Debug, Clone, Copy)]
pub struct SentimentBand {
    /// Exclusive lower bound; scores strictly above it fall in this band.
    pub floor: f64,
    pub category: SentimentCategory,
}

/// Threshold table, evaluated top-down; the first band whose floor the score
/// strictly exceeds wins. Scores at or below every floor are `VeryNegative`,
/// so the five bands partition the whole line with no gaps or overlaps.
pub static SENTIMENT_BANDS: [SentimentBand; 4] = [
    SentimentBand {
        floor: 0.5,
        category: SentimentCategory::VeryPositive,
    },
    SentimentBand {
        floor: 0.2,
        category: SentimentCategory::Positive,
    },
    SentimentBand {
        floor: -0.2,
        category: SentimentCategory::Neutral,
    },
    SentimentBand {
        floor: -0.5,
        category: SentimentCategory::Negative,
    },
];

impl SentimentCategory {
    /// Classify a score into its band.
    ///
    /// Total over all floats: out-of-range values fall into the nearest
    /// boundary band, and anything that compares greater than no floor
    /// (including NaN) lands in `VeryNegative`.
    pub fn classify(score: f64) -> Self {
        for band in &SENTIMENT_BANDS {
            if score > band.floor {
                return band.category;
            }
        }
        SentimentCategory::VeryNegative
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryPositive => "Very Positive",
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
            Self::VeryNegative => "Very Negative",
        }
    }

    /// Display color. Five labels share three colors: both positive bands
    /// are green and both negative bands are red.
    pub fn color(&self) -> &'static str {
        match self {
            Self::VeryPositive | Self::Positive => COLOR_POSITIVE,
            Self::Neutral => COLOR_NEUTRAL,
            Self::Negative | Self::VeryNegative => COLOR_NEGATIVE,
        }
    }

    /// Emoji glyph for the category.
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::VeryPositive => "😄",
            Self::Positive => "🙂",
            Self::Neutral => "😐",
            Self::Negative => "🙁",
            Self::VeryNegative => "😔",
        }
    }
}
