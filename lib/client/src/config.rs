//! Client configuration
//!
//! The base URL and timeouts are threaded through the client constructor
//! instead of living in any process-global state; pointing the library at
//! a different deployment means constructing a client with a different
//! config.

use std::time::Duration;
use url::Url;

/// Budget for one predict call, matching the demo's 5 second limit.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Budget for the health probe.
pub const DEFAULT_HEALTH_TIMEOUT: Duration = Duration::from_millis(3000);

/// Configuration for [`crate::api::ModelApiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the hosted prediction service. [`ClientConfig::new`]
    /// guarantees the path ends in `/`, so endpoint paths joined onto it
    /// resolve under the base rather than replacing its last segment.
    pub base_url: Url,
    /// Timeout applied to predict and batch calls. On expiry the in-flight
    /// request is dropped, which cancels the underlying connection.
    pub timeout: Duration,
    /// Independent, shorter timeout for the health probe.
    pub health_timeout: Duration,
}

impl ClientConfig {
    /// Config with the default timeouts.
    ///
    /// A base URL without a trailing slash gets one, so a service mounted
    /// under a path prefix (`http://host/api`) keeps that prefix when
    /// endpoint paths are joined.
    pub fn new(mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            health_timeout: DEFAULT_HEALTH_TIMEOUT,
        }
    }
}
