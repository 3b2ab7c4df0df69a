use std::sync::Arc;

use crate::config::RemoteConfig;
use crate::error::ConfigError;
use crate::remote::{HttpRevisionApi, RevisionApi};
use crate::session::SessionCoordinator;

/// Assembles app-facing services around one shared `RevisionApi`.
#[derive(Clone)]
pub struct AppServices {
    coordinator: Arc<SessionCoordinator>,
}

impl AppServices {
    /// Build services backed by the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the HTTP client cannot be built.
    pub fn http(config: RemoteConfig) -> Result<Self, ConfigError> {
        let api: Arc<dyn RevisionApi> = Arc::new(HttpRevisionApi::new(config)?);
        Ok(Self::with_api(api))
    }

    /// Build services around any `RevisionApi`, e.g. a test double.
    #[must_use]
    pub fn with_api(api: Arc<dyn RevisionApi>) -> Self {
        Self {
            coordinator: Arc::new(SessionCoordinator::new(api)),
        }
    }

    #[must_use]
    pub fn coordinator(&self) -> Arc<SessionCoordinator> {
        Arc::clone(&self.coordinator)
    }
}
