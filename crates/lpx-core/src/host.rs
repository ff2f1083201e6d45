use std::sync::Arc;

use tracing::debug;

/// Host reported when discovery yields nothing usable.
pub const UNKNOWN_HOST: &str = "unknown";

/// Function resolving the host identifier once, at encoder construction.
pub type HostResolver = Arc<dyn Fn() -> String + Send + Sync>;

/// Queries the operating system for this machine's host name.
///
/// Never fails: an error or an empty name falls back to [`UNKNOWN_HOST`].
pub fn discover_host() -> String {
    match hostname::get() {
        Ok(name) => {
            let name = name.to_string_lossy().trim().to_string();
            if name.is_empty() {
                debug!("OS reported an empty hostname");
                UNKNOWN_HOST.to_string()
            } else {
                name
            }
        }
        Err(e) => {
            debug!(error = %e, "Failed to query hostname.");
            UNKNOWN_HOST.to_string()
        }
    }
}
