//! Document submission to the external analysis endpoint.
//!
//! Owns the request lifecycle: a cancellable, timed multipart POST with a
//! single-flight guard, plus the configuration and error taxonomy for it.
//! Response validation lives in [`crate::models::analysis`]; this module
//! hands the raw body over and returns the validated result.

pub mod client;
pub mod config;
pub mod error;

pub use client::AnalyzerClient;
pub use config::{AnalyzerConfig, ConfigError};
pub use error::{UploadError, UploadResult};
