//! # Sentiment Insights
//!
//! Client-side processing pipeline for an external sentiment-analysis
//! service. The crate submits a document collection to the remote endpoint,
//! validates the returned payload, classifies continuous sentiment scores
//! into discrete categories, and derives chart-ready aggregate views for a
//! presentation layer.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Consolidated public API surface (DTOs and entry points)
//! - [`models`]: Domain data model — analysis requests/results and the
//!   sentiment classification bands
//! - [`upload`]: Cancellable, timed submission to the analysis endpoint
//! - [`views`]: Pure derivation of summary, distribution, and ranked views
//!
//! Control flow: `upload` → response validation (`models::analysis`) →
//! `views` (invoking the classifier per record). Rendering is owned by the
//! consumer; this crate emits pure serializable data, never markup.

pub mod api;
pub mod models;
pub mod upload;
pub mod views;
