use std::time::Duration;

use super::location::Location;

const DEFAULT_NAMESPACE: &str = "cipherlite";

/// Construction-time configuration for [`Engine`](super::Engine).
///
/// ```rust
/// use cipherlite::{EngineOptions, Location};
///
/// let options = EngineOptions::new(Location::Memory, "secret")
///     .namespace("my-app");
/// # let _ = options;
/// ```
#[derive(Debug, Clone)]
pub struct EngineOptions {
    pub(crate) location: Location,
    pub(crate) key: String,
    pub(crate) namespace: String,
    pub(crate) delay: Option<Duration>,
}

impl EngineOptions {
    #[must_use]
    pub fn new(location: Location, key: impl Into<String>) -> Self {
        Self {
            location,
            key: key.into(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            delay: None,
        }
    }

    /// Directory name under the per-user data directory for
    /// [`Location::File`] targets.
    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Test seam: block the calling thread for `delay` before every engine
    /// operation. Not for production use.
    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}
