use std::sync::Arc;

/// Encoder metrics collection interface.
///
/// This trait abstracts metrics collection across different backends.
/// Implementations are injected through the encoder builder and called once per encode call.
pub trait EncoderMetrics: Send + Sync + 'static {
    /// Record a line written to the sink.
    ///
    /// # Arguments
    /// - `measurement`: Measurement name the line was written under
    /// - `bytes`: Length of the line, including the trailing newline
    fn record_line_written(&self, measurement: &str, bytes: usize);
    /// Record a call whose record contributed no fields.
    ///
    /// An empty write still reached the sink; no line was produced.
    fn record_line_suppressed(&self, measurement: &str);
    /// Record a failed encode call.
    ///
    /// # Arguments
    /// - `measurement`: Measurement name of the failed call
    /// - `error_kind`: Error category, see [`crate::EncodeError::kind`]
    fn record_encode_error(&self, measurement: &str, error_kind: &str);
}

/// Shared handle to metrics backend.
pub type MetricsHandle = Arc<dyn EncoderMetrics>;
