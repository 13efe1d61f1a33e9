//! Cancellable, timed submission of documents to the analysis endpoint.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use tracing::{debug, info, warn};

use super::config::AnalyzerConfig;
use super::error::{UploadError, UploadResult};
use crate::models::analysis::{parse_analysis, AnalysisRequest, AnalysisResult};

/// Client for the external sentiment-analysis service.
///
/// At most one submission is in flight at a time: a second concurrent
/// [`submit`](AnalyzerClient::submit) is rejected deterministically with
/// [`UploadError::SubmissionInProgress`] rather than queued.
#[derive(Debug)]
pub struct AnalyzerClient {
    http: reqwest::Client,
    config: AnalyzerConfig,
    in_flight: AtomicBool,
}

/// Releases the single-flight flag on every exit path from `submit`.
struct FlightGuard<'a>(&'a AtomicBool);

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl AnalyzerClient {
    /// Create a client with the given configuration.
    pub fn new(config: AnalyzerConfig) -> UploadResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| UploadError::network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            config,
            in_flight: AtomicBool::new(false),
        })
    }

    /// Create a client with default configuration.
    pub fn with_defaults() -> UploadResult<Self> {
        Self::new(AnalyzerConfig::default())
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Whether a submission is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submit a document collection for analysis.
    ///
    /// Issues exactly one multipart POST carrying the document as a `file`
    /// part, with no authentication headers. The request runs under a
    /// cancellation window of `timeout_ms`; if it elapses before response
    /// headers arrive, the request is aborted and the submission fails with
    /// [`UploadError::Timeout`]. On success the raw body is validated into
    /// an [`AnalysisResult`].
    pub async fn submit(&self, request: &AnalysisRequest) -> UploadResult<AnalysisResult> {
        if request.is_empty() {
            return Err(UploadError::NoFileSelected);
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(UploadError::SubmissionInProgress);
        }
        let _guard = FlightGuard(&self.in_flight);

        info!(
            file = %request.file_name(),
            bytes = request.len(),
            endpoint = %self.config.endpoint_url,
            "submitting document for analysis"
        );

        let form = Form::new().part(
            "file",
            Part::bytes(request.bytes().to_vec()).file_name(request.file_name().to_string()),
        );

        let send = self
            .http
            .post(&self.config.endpoint_url)
            .multipart(form)
            .send();

        // The window covers the in-flight request only. Once response headers
        // arrive the timer is disarmed; body reads below run untimed, so the
        // timer can never fire after completion. On elapse the send future is
        // dropped, which aborts the underlying connection.
        let timeout = Duration::from_millis(self.config.timeout_ms);
        let response = match tokio::time::timeout(timeout, send).await {
            Err(_) => {
                warn!(
                    timeout_ms = self.config.timeout_ms,
                    "analysis request cancelled by timeout"
                );
                return Err(UploadError::Timeout {
                    timeout_ms: self.config.timeout_ms,
                });
            }
            Ok(Err(e)) if e.is_timeout() => {
                return Err(UploadError::Timeout {
                    timeout_ms: self.config.timeout_ms,
                })
            }
            Ok(Err(e)) => return Err(UploadError::network(e.to_string())),
            Ok(Ok(response)) => response,
        };

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| UploadError::network(e.to_string()))?;
            warn!(status = status.as_u16(), "analysis endpoint rejected the submission");
            return Err(UploadError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| UploadError::network(e.to_string()))?;
        debug!(bytes = body.len(), "received analysis response");

        parse_analysis(&body)
    }
}
