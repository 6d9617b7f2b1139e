use crate::services::source::{with_deadline, ProfileDirectory, SourceError};
use std::sync::Arc;
use std::time::Duration;

/// Resolves a user's declared location from an external profile directory
#[derive(Clone)]
pub struct LocationResolver {
    directory: Arc<dyn ProfileDirectory>,
    timeout: Duration,
}

impl LocationResolver {
    pub fn new(directory: Arc<dyn ProfileDirectory>, timeout: Duration) -> Self {
        Self { directory, timeout }
    }

    /// Declared location for `handle`, if any
    ///
    /// A blank handle, a failed lookup and a profile without a location all
    /// yield `None`; absence means the caller has to ask the user.
    pub async fn resolve_location(&self, handle: &str) -> Option<String> {
        let handle = handle.trim();
        if handle.is_empty() {
            return None;
        }

        match with_deadline(self.timeout, self.directory.lookup_location(handle)).await {
            Ok(Some(location)) if !location.trim().is_empty() => Some(location.trim().to_string()),
            Ok(_) => {
                tracing::debug!("Profile {} declares no location", handle);
                None
            }
            Err(SourceError::NotFound(_)) => {
                tracing::debug!("Profile {} not found", handle);
                None
            }
            Err(e) => {
                tracing::warn!("Location lookup for {} failed: {}", handle, e);
                None
            }
        }
    }
}
