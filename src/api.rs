//! Public API surface for the sentiment pipeline.
//!
//! This file consolidates the crate's public types and entry points.
//! All DTO types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::analysis::{
    parse_analysis, AnalysisRequest, AnalysisResult, DetailedRecord,
};
pub use crate::models::sentiment::{
    SentimentBand, SentimentCategory, COLOR_NEGATIVE, COLOR_NEUTRAL, COLOR_POSITIVE,
    SENTIMENT_BANDS,
};
pub use crate::upload::{
    AnalyzerClient, AnalyzerConfig, ConfigError, UploadError, UploadResult,
};
pub use crate::views::{
    build_views, DashboardData, DistributionSlice, OverallSummary, RankedScore,
    RANKED_VIEW_LIMIT,
};
