use std::sync::Arc;

use revision_core::model::{GenerationOutcome, ProgressSnapshot};
use url::Url;

use crate::error::RemoteError;
use crate::generation::{GenerationTrigger, PageGenerationFlow};
use crate::remote::RevisionApi;

/// A single pending progress fetch.
///
/// Consumed by `run`, so one handle means at most one request.
#[must_use = "a progress refresh does nothing until `run` is awaited"]
pub struct ProgressRefresh {
    api: Arc<dyn RevisionApi>,
}

impl ProgressRefresh {
    /// # Errors
    ///
    /// Returns the `RemoteError` from `RevisionApi::fetch_progress`.
    pub async fn run(self) -> Result<ProgressSnapshot, RemoteError> {
        self.api.fetch_progress().await
    }
}

/// Result of `SessionCoordinator::generate`.
pub struct GenerationReport {
    pub trigger: GenerationTrigger,
    /// Present only after a successful generation.
    pub refresh: Option<ProgressRefresh>,
}

impl GenerationReport {
    #[must_use]
    pub fn outcome(&self) -> Option<&GenerationOutcome> {
        self.trigger.outcome()
    }
}

/// Ties page generation to progress so the two stay eventually consistent.
pub struct SessionCoordinator {
    api: Arc<dyn RevisionApi>,
    generation: PageGenerationFlow,
}

impl SessionCoordinator {
    #[must_use]
    pub fn new(api: Arc<dyn RevisionApi>) -> Self {
        let generation = PageGenerationFlow::new(Arc::clone(&api));
        Self { api, generation }
    }

    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.generation.is_busy()
    }

    /// Runs the generation flow. A successful generation comes back with a
    /// progress refresh for the caller to run once the page is on screen.
    pub async fn generate(&self) -> GenerationReport {
        let trigger = self.generation.trigger().await;
        let refresh = matches!(
            trigger,
            GenerationTrigger::Completed(GenerationOutcome::Success(_))
        )
        .then(|| self.refresh_progress());

        GenerationReport { trigger, refresh }
    }

    pub fn refresh_progress(&self) -> ProgressRefresh {
        ProgressRefresh {
            api: Arc::clone(&self.api),
        }
    }

    #[must_use]
    pub fn resolve_image_url(&self, reference: &str) -> Url {
        self.api.resolve_image_url(reference)
    }
}
