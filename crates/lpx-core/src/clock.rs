use std::sync::Arc;

use time::OffsetDateTime;

/// Source of the trailing line timestamp.
pub trait Clock: Send + Sync + 'static {
    /// Current time in nanoseconds since the Unix epoch.
    fn now_unix_nanos(&self) -> i128;
}

/// Shared handle to a clock.
pub type ClockHandle = Arc<dyn Clock>;

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now_unix_nanos(&self) -> i128 {
        OffsetDateTime::now_utc().unix_timestamp_nanos()
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i128);

impl Clock for FixedClock {
    #[inline]
    fn now_unix_nanos(&self) -> i128 {
        self.0
    }
}

/// Create a wall clock handle.
#[inline]
pub fn system_clock() -> ClockHandle {
    Arc::new(SystemClock)
}
