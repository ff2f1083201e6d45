//! Line protocol encoder.
//!
//! [`LineEncoder`] turns a [`Record`](lpx_model::Record) plus a tag set into one
//! line of InfluxDB line protocol and writes it to a [`LineSink`]:
//!
//! ```text
//! <measurement>,host=<host>[,<tag>=<value>...] <field>=<value>[,...] <unix-nanos>
//! ```
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//!
//! use lpx_core::{BufferSink, FixedClock, LineEncoder};
//! use lpx_model::{Field, Tags};
//!
//! # fn main() -> Result<(), lpx_core::EncodeError> {
//! let sink = Arc::new(BufferSink::default());
//! let encoder = LineEncoder::builder()
//!     .host("edge-01")
//!     .clock(Arc::new(FixedClock(1_000)))
//!     .build(sink.clone());
//!
//! let mut tags = Tags::new();
//! tags.insert("iface", "eth0");
//! encoder.encode("net", &vec![Field::new("rx", 42u64)], &tags)?;
//!
//! assert_eq!(sink.contents(), "net,host=edge-01,iface=eth0 rx=42i 1000\n");
//! # Ok(())
//! # }
//! ```

mod clock;
pub use clock::{Clock, ClockHandle, FixedClock, SystemClock, system_clock};

mod config;
pub use config::EncoderConfig;

pub mod convert;
pub use convert::{MAX_STRING_LEN, TypeMode};

mod encoder;
pub use encoder::{LineEncoder, LineEncoderBuilder};

mod error;
pub use error::{EncodeError, EncodeResult};

pub mod escape;

mod extract;
pub use extract::extract_fields;

mod host;
pub use host::{HostResolver, UNKNOWN_HOST, discover_host};

mod line;
pub use line::format_line;

pub mod metrics;
pub use metrics::{EncoderMetrics, MetricsHandle, NoOpMetrics, noop_metrics};

mod sink;
pub use sink::{BufferSink, LineSink, SinkHandle, WriterSink};
