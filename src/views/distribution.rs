//! Distribution breakdown for the pie chart.

use serde::{Deserialize, Serialize};

use crate::models::analysis::AnalysisResult;
use crate::models::sentiment::{COLOR_NEGATIVE, COLOR_NEUTRAL, COLOR_POSITIVE};

/// One slice of the sentiment distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSlice {
    /// Category name, label-cased for display.
    pub name: String,
    /// Percentage share as reported by the server, passed through as-is.
    pub percentage: f64,
    /// Display color (hex).
    pub color: String,
}

/// Build one slice per entry of the server's distribution map.
///
/// Slice order follows the map's iteration order; consumers must not rely on
/// it beyond display.
pub fn build_distribution(result: &AnalysisResult) -> Vec<DistributionSlice> {
    result
        .sentiment_distribution
        .iter()
        .map(|(name, percentage)| DistributionSlice {
            name: label_case(name),
            percentage: *percentage,
            color: slice_color(name).to_string(),
        })
        .collect()
}

/// Slices are colored by name: positive is green, negative is red, anything
/// else is amber.
fn slice_color(name: &str) -> &'static str {
    match name {
        "positive" => COLOR_POSITIVE,
        "negative" => COLOR_NEGATIVE,
        _ => COLOR_NEUTRAL,
    }
}

/// Uppercase the first letter, leave the rest untouched.
fn label_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_case() {
        assert_eq!(label_case("positive"), "Positive");
        assert_eq!(label_case("very negative"), "Very negative");
        assert_eq!(label_case(""), "");
    }

    #[test]
    fn test_slice_colors() {
        assert_eq!(slice_color("positive"), COLOR_POSITIVE);
        assert_eq!(slice_color("negative"), COLOR_NEGATIVE);
        assert_eq!(slice_color("neutral"), COLOR_NEUTRAL);
        assert_eq!(slice_color("mixed"), COLOR_NEUTRAL);
    }
}
