//! Prometheus metrics backend for the line encoder.
//!
//! This crate provides a [`PrometheusMetrics`] implementation of [`lpx_core::EncoderMetrics`].
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use lpx_core::{BufferSink, LineEncoder};
//! use lpx_prometheus::PrometheusMetrics;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let metrics = PrometheusMetrics::new()?;
//!
//! let encoder = LineEncoder::builder()
//!     .host("edge-01")
//!     .metrics(Arc::new(metrics.clone()))
//!     .build(Arc::new(BufferSink::default()));
//!
//! // Expose via the application's /metrics endpoint:
//! // let encoder = prometheus::TextEncoder::new();
//! // encoder.encode(&metrics.gather(), &mut response_buffer)?;
//! # let _ = encoder;
//! # Ok(())
//! # }
//! ```
//!
//! ## HTTP Server
//! This crate does NOT provide HTTP server for `/metrics` endpoint.

mod backend;
pub use backend::PrometheusMetrics;

pub use prometheus::{Encoder, Registry, TextEncoder};
