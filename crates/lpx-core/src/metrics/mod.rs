//! Metrics collection abstraction for the encoder.
//!
//! Backends (prometheus, statsd, etc) implement [`EncoderMetrics`] and are injected via
//! [`crate::LineEncoderBuilder::metrics`].
mod backend;
pub use backend::{EncoderMetrics, MetricsHandle};

mod noop;
pub use noop::NoOpMetrics;

use std::sync::Arc;

/// Create a no-op metrics handle.
#[inline]
pub fn noop_metrics() -> MetricsHandle {
    Arc::new(NoOpMetrics)
}
