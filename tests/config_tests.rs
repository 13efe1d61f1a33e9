//! Tests for configuration loading and request construction.

use std::io::Write;

use sentiment_insights::api::{AnalysisRequest, AnalyzerConfig, ConfigError};

#[test]
fn from_file_reads_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "endpoint_url = \"https://sentiment.example.com/analyze\"\ntimeout_ms = 2500"
    )
    .unwrap();

    let config = AnalyzerConfig::from_file(file.path()).unwrap();
    assert_eq!(config.endpoint_url, "https://sentiment.example.com/analyze");
    assert_eq!(config.timeout_ms, 2_500);
}

#[test]
fn from_file_applies_defaults_for_omitted_fields() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "timeout_ms = 1000").unwrap();

    let config = AnalyzerConfig::from_file(file.path()).unwrap();
    assert_eq!(config.endpoint_url, "http://localhost:8000/analyze");
    assert_eq!(config.timeout_ms, 1_000);
}

#[test]
fn from_file_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AnalyzerConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn from_file_invalid_toml_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "timeout_ms = \"not a number\"").unwrap();

    let err = AnalyzerConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[tokio::test]
async fn request_from_path_loads_bytes_and_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reviews.csv");
    tokio::fs::write(&path, b"id,text\n1,fine\n").await.unwrap();

    let request = AnalysisRequest::from_path(&path).await.unwrap();
    assert_eq!(request.file_name(), "reviews.csv");
    assert_eq!(request.bytes(), b"id,text\n1,fine\n");
    assert!(!request.is_empty());
}

#[tokio::test]
async fn request_from_missing_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AnalysisRequest::from_path(dir.path().join("absent.csv"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}
