use std::{
    io::{self, Write},
    sync::{Arc, Mutex, MutexGuard},
};

/// Destination for encoded lines.
///
/// Each call receives one complete line, or an empty slice when a record
/// produced no fields. Implementations must write the whole buffer or fail.
pub trait LineSink: Send + Sync + 'static {
    fn write_line(&self, line: &[u8]) -> io::Result<()>;
}

/// Shared handle to a sink.
pub type SinkHandle = Arc<dyn LineSink>;

impl<S: LineSink + ?Sized> LineSink for Arc<S> {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        (**self).write_line(line)
    }
}

/// Adapts any [`Write`] into a sink, serializing writes through a mutex.
#[derive(Debug, Default)]
pub struct WriterSink<W> {
    inner: Mutex<W>,
}

impl<W: Write + Send + 'static> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: Mutex::new(writer),
        }
    }

    /// Lock the underlying writer.
    pub fn lock(&self) -> MutexGuard<'_, W> {
        self.inner.lock().unwrap_or_else(|p| p.into_inner())
    }
}

impl<W: Write + Send + 'static> LineSink for WriterSink<W> {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        self.lock().write_all(line)
    }
}

/// In-memory sink collecting every written byte.
pub type BufferSink = WriterSink<Vec<u8>>;

impl WriterSink<Vec<u8>> {
    /// Copy of everything written so far, as text.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
