//! Sentiment analysis CLI.
//!
//! Submits a document to the configured analysis endpoint and prints the
//! derived dashboard views as JSON.
//!
//! # Usage
//!
//! ```bash
//! sentiment-analyze reviews.csv
//! ```
//!
//! # Environment Variables
//!
//! - `SENTIMENT_API_URL`: Analysis endpoint URL (overrides analyzer.toml)
//! - `SENTIMENT_TIMEOUT_MS`: Submission timeout in milliseconds
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use sentiment_insights::api::{build_views, AnalysisRequest, AnalyzerClient, AnalyzerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    let path = env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: sentiment-analyze <document>"))?;

    let mut config = match AnalyzerConfig::from_default_location() {
        Ok(config) => config,
        Err(e) => {
            debug!("using default configuration: {}", e);
            AnalyzerConfig::default()
        }
    };
    if let Ok(url) = env::var("SENTIMENT_API_URL") {
        config.endpoint_url = url;
    }
    if let Some(timeout_ms) = env::var("SENTIMENT_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse().ok())
    {
        config.timeout_ms = timeout_ms;
    }

    let request = AnalysisRequest::from_path(&path).await?;
    info!(
        file = %request.file_name(),
        endpoint = %config.endpoint_url,
        "analyzing document"
    );

    let client = AnalyzerClient::new(config)?;
    let result = client.submit(&request).await?;
    info!(
        records = result.detailed_results.len(),
        overall = result.overall_sentiment,
        "analysis complete"
    );

    let views = build_views(&result);
    println!("{}", serde_json::to_string_pretty(&views)?);

    Ok(())
}
