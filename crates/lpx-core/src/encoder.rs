use std::{borrow::Cow, fmt};

use lpx_model::{FieldSet, Record, Tags};
use tracing::{debug, trace};

use crate::{
    clock::{ClockHandle, system_clock},
    config::EncoderConfig,
    convert::TypeMode,
    error::{EncodeError, EncodeResult},
    extract::extract_fields,
    host::{HostResolver, discover_host},
    line::format_line,
    metrics::{MetricsHandle, noop_metrics},
    sink::SinkHandle,
};

/// Encodes records into line protocol and writes them to a sink.
///
/// The host identifier is fixed at construction. The encoder holds no per-call
/// state, so one instance (or its clones) can serve many threads; writes are
/// serialized only as far as the sink serializes them.
#[derive(Clone)]
pub struct LineEncoder {
    host: String,
    default_tags: Tags,
    sink: SinkHandle,
    clock: ClockHandle,
    metrics: MetricsHandle,
}

impl LineEncoder {
    /// Create an encoder writing to `sink`, with the host discovered from the OS.
    pub fn new(sink: SinkHandle) -> Self {
        Self::builder().build(sink)
    }

    /// Create an encoder writing to `sink` under an explicit host.
    pub fn with_hostname(sink: SinkHandle, host: impl Into<String>) -> Self {
        Self::builder().host(host).build(sink)
    }

    /// Create an encoder from configuration.
    pub fn from_config(cfg: &EncoderConfig, sink: SinkHandle) -> Self {
        let mut builder = Self::builder().tags(cfg.tags.clone());
        if let Some(host) = &cfg.host {
            builder = builder.host(host.clone());
        }
        builder.build(sink)
    }

    pub fn builder() -> LineEncoderBuilder {
        LineEncoderBuilder::default()
    }

    /// Host identifier put on every line.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Tags added to every line.
    pub fn default_tags(&self) -> &Tags {
        &self.default_tags
    }

    /// Writes `record` as one line under measurement `prefix`, with integer type suffixes.
    ///
    /// A record without tagged fields results in an empty write. Conversion
    /// errors abort the call before anything reaches the sink.
    pub fn encode<R>(&self, prefix: &str, record: &R, tags: &Tags) -> EncodeResult<()>
    where
        R: Record + ?Sized,
    {
        self.encode_with_mode(prefix, record, tags, TypeMode::Static)
    }

    /// Like [`LineEncoder::encode`], but integers are written without the `i` suffix.
    pub fn encode_without_types<R>(&self, prefix: &str, record: &R, tags: &Tags) -> EncodeResult<()>
    where
        R: Record + ?Sized,
    {
        self.encode_with_mode(prefix, record, tags, TypeMode::Untyped)
    }

    /// Writes already rendered field values as one line under measurement `prefix`.
    ///
    /// Values are not converted or checked; keys are escaped and sorted as usual.
    pub fn encode_map(&self, prefix: &str, fields: &FieldSet, tags: &Tags) -> EncodeResult<()> {
        self.write(prefix, fields, tags)
    }

    /// Renders `record` into a line without writing it.
    ///
    /// Returns an empty string when the record has no tagged fields. Nothing is
    /// written, so nothing is recorded in metrics either, failures included.
    pub fn render<R>(
        &self,
        prefix: &str,
        record: &R,
        tags: &Tags,
        mode: TypeMode,
    ) -> EncodeResult<String>
    where
        R: Record + ?Sized,
    {
        let fields = extract_fields(record, mode)?;
        Ok(self.render_map(prefix, &fields, tags))
    }

    /// Renders already rendered field values into a line without writing it.
    pub fn render_map(&self, prefix: &str, fields: &FieldSet, tags: &Tags) -> String {
        let tags = self.merge_tags(tags);
        format_line(prefix, &self.host, &tags, fields, self.clock.as_ref())
    }

    fn encode_with_mode<R>(
        &self,
        prefix: &str,
        record: &R,
        tags: &Tags,
        mode: TypeMode,
    ) -> EncodeResult<()>
    where
        R: Record + ?Sized,
    {
        let fields = extract_fields(record, mode).map_err(|e| self.failed(prefix, e))?;
        self.write(prefix, &fields, tags)
    }

    fn write(&self, prefix: &str, fields: &FieldSet, tags: &Tags) -> EncodeResult<()> {
        let line = self.render_map(prefix, fields, tags);

        self.sink
            .write_line(line.as_bytes())
            .map_err(|e| self.failed(prefix, EncodeError::Sink(e)))?;

        if line.is_empty() {
            trace!(measurement = prefix, "record has no tagged fields, nothing written");
            self.metrics.record_line_suppressed(prefix);
        } else {
            trace!(
                measurement = prefix,
                fields = fields.len(),
                bytes = line.len(),
                "line written"
            );
            self.metrics.record_line_written(prefix, line.len());
        }
        Ok(())
    }

    fn merge_tags<'a>(&self, tags: &'a Tags) -> Cow<'a, Tags> {
        if self.default_tags.is_empty() {
            Cow::Borrowed(tags)
        } else {
            Cow::Owned(self.default_tags.merged(tags))
        }
    }

    fn failed(&self, prefix: &str, err: EncodeError) -> EncodeError {
        debug!(measurement = prefix, kind = err.kind(), error = %err, "encode failed");
        self.metrics.record_encode_error(prefix, err.kind());
        err
    }
}

impl fmt::Debug for LineEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineEncoder")
            .field("host", &self.host)
            .field("default_tags", &self.default_tags)
            .field("sink", &"<handle>")
            .field("clock", &"<handle>")
            .field("metrics", &"<handle>")
            .finish()
    }
}

/// Builder for [`LineEncoder`].
///
/// Host precedence: an explicit [`host`](Self::host), then a
/// [`host_resolver`](Self::host_resolver), then OS discovery. The resolver runs
/// once, inside [`build`](Self::build).
#[derive(Default)]
pub struct LineEncoderBuilder {
    host: Option<String>,
    resolver: Option<HostResolver>,
    tags: Tags,
    clock: Option<ClockHandle>,
    metrics: Option<MetricsHandle>,
}

impl LineEncoderBuilder {
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn host_resolver(mut self, resolver: HostResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Tags added to every line.
    pub fn tags(mut self, tags: Tags) -> Self {
        self.tags = tags;
        self
    }

    /// Clock for the trailing line timestamp. Defaults to the wall clock.
    pub fn clock(mut self, clock: ClockHandle) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Metrics backend. Defaults to no-op.
    pub fn metrics(mut self, metrics: MetricsHandle) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn build(self, sink: SinkHandle) -> LineEncoder {
        let host = match (self.host, self.resolver) {
            (Some(host), _) => host,
            (None, Some(resolve)) => resolve(),
            (None, None) => discover_host(),
        };
        debug!(host = %host, "line encoder ready");

        LineEncoder {
            host,
            default_tags: self.tags,
            sink,
            clock: self.clock.unwrap_or_else(system_clock),
            metrics: self.metrics.unwrap_or_else(noop_metrics),
        }
    }
}
