//! Analysis request/response data model and response validation.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::upload::UploadError;

/// One document collection queued for submission.
///
/// Immutable once constructed; discarded after a request completes or a new
/// selection replaces it. An empty payload means "no file selected".
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    file_name: String,
    bytes: Vec<u8>,
}

impl AnalysisRequest {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Load a document from disk.
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document")
            .to_string();
        Ok(Self { file_name, bytes })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Validated response from the analysis endpoint.
///
/// Lives for the current render cycle only; a new submission replaces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Aggregate polarity of the whole collection, nominally in [-1, 1].
    /// The range is not enforced; downstream classification clamps into the
    /// nearest boundary band.
    pub overall_sentiment: f64,
    /// Category name → percentage share. The server may omit this entirely.
    #[serde(default)]
    pub sentiment_distribution: BTreeMap<String, f64>,
    /// Per-item scores in server order. Required; a response without it is
    /// rejected as malformed.
    pub detailed_results: Vec<DetailedRecord>,
}

/// One analyzed item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedRecord {
    /// Item identifier assigned by the server, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Source text echoed back by the server, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Polarity score, nominally in [-1, 1]; not range-checked.
    pub sentiment: f64,
    /// Server-side coarse category, if any. Passed through untouched; the
    /// local classifier is the source of truth for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Validate a raw response body.
///
/// Fails with [`UploadError::MalformedResponse`] when the body is empty, not
/// JSON, or lacks a required field — the error message names the offending
/// JSON path. Numeric ranges of individual scores are deliberately not
/// checked; out-of-range values pass through to the classifier.
pub fn parse_analysis(body: &str) -> Result<AnalysisResult, UploadError> {
    let mut de = serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(&mut de)
        .map_err(|e| UploadError::malformed(e.to_string()))
}
