use crate::metrics::backend::EncoderMetrics;

/// No-op metrics backend that compiles to nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMetrics;

impl EncoderMetrics for NoOpMetrics {
    #[inline(always)]
    fn record_line_written(&self, _: &str, _: usize) {}

    #[inline(always)]
    fn record_line_suppressed(&self, _: &str) {}

    #[inline(always)]
    fn record_encode_error(&self, _: &str, _: &str) {}
}
