use std::sync::Arc;

use prometheus::{CounterVec, Opts, Registry, proto::MetricFamily};

use lpx_core::EncoderMetrics;

/// Prometheus metrics backend for the line encoder.
///
/// ## Metrics
/// - `lpx_lines_written_total{measurement}` - Counter of lines written to the sink
/// - `lpx_bytes_written_total{measurement}` - Counter of bytes written to the sink
/// - `lpx_lines_suppressed_total{measurement}` - Counter of records with no tagged fields
/// - `lpx_encode_errors_total{measurement, error_kind}` - Counter of failed encode calls
///
/// ## Label cardinality
/// `measurement` is bounded by the measurement names the application uses.
/// `error_kind` is one of "unsupported_type", "value_too_large", "sink_write".
#[derive(Clone)]
pub struct PrometheusMetrics {
    lines_written: CounterVec,
    bytes_written: CounterVec,
    lines_suppressed: CounterVec,
    encode_errors: CounterVec,
    registry: Arc<Registry>,
}

impl PrometheusMetrics {
    /// Create a new prometheus metrics backend with custom registry.
    pub fn new_with_registry(registry: Arc<Registry>) -> Result<Self, prometheus::Error> {
        let lines_written = CounterVec::new(
            Opts::new("lines_written_total", "Total number of lines written").namespace("lpx"),
            &["measurement"],
        )?;
        registry.register(Box::new(lines_written.clone()))?;

        let bytes_written = CounterVec::new(
            Opts::new("bytes_written_total", "Total number of bytes written").namespace("lpx"),
            &["measurement"],
        )?;
        registry.register(Box::new(bytes_written.clone()))?;

        let lines_suppressed = CounterVec::new(
            Opts::new(
                "lines_suppressed_total",
                "Total number of records that produced no fields",
            )
            .namespace("lpx"),
            &["measurement"],
        )?;
        registry.register(Box::new(lines_suppressed.clone()))?;

        let encode_errors = CounterVec::new(
            Opts::new("encode_errors_total", "Total failed encode calls").namespace("lpx"),
            &["measurement", "error_kind"],
        )?;
        registry.register(Box::new(encode_errors.clone()))?;

        Ok(Self {
            lines_written,
            bytes_written,
            lines_suppressed,
            encode_errors,
            registry,
        })
    }

    /// Create a new prometheus metrics backend with default registry.
    pub fn new() -> Result<Self, prometheus::Error> {
        Self::new_with_registry(Arc::new(Registry::new()))
    }

    /// Gather all metrics for exposition.
    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }

    /// Get reference to underlying prometheus registry.
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}

impl EncoderMetrics for PrometheusMetrics {
    fn record_line_written(&self, measurement: &str, bytes: usize) {
        self.lines_written.with_label_values(&[measurement]).inc();
        self.bytes_written
            .with_label_values(&[measurement])
            .inc_by(bytes as f64);
    }

    fn record_line_suppressed(&self, measurement: &str) {
        self.lines_suppressed.with_label_values(&[measurement]).inc();
    }

    fn record_encode_error(&self, measurement: &str, error_kind: &str) {
        self.encode_errors
            .with_label_values(&[measurement, error_kind])
            .inc();
    }
}
