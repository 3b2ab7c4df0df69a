use std::sync::Arc;

use services::{AppServices, SessionCoordinator};

use crate::opener::{LinkOpener, ScriptLinkOpener};

pub trait UiApp: Send + Sync {
    fn coordinator(&self) -> Arc<SessionCoordinator>;
}

impl UiApp for AppServices {
    fn coordinator(&self) -> Arc<SessionCoordinator> {
        AppServices::coordinator(self)
    }
}

#[derive(Clone)]
pub struct AppContext {
    coordinator: Arc<SessionCoordinator>,
    link_opener: Arc<dyn LinkOpener>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            coordinator: app.coordinator(),
            link_opener: Arc::new(ScriptLinkOpener),
        }
    }

    #[must_use]
    pub fn with_link_opener(mut self, link_opener: Arc<dyn LinkOpener>) -> Self {
        self.link_opener = link_opener;
        self
    }

    #[must_use]
    pub fn coordinator(&self) -> Arc<SessionCoordinator> {
        Arc::clone(&self.coordinator)
    }

    #[must_use]
    pub fn link_opener(&self) -> Arc<dyn LinkOpener> {
        Arc::clone(&self.link_opener)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
