use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use revision_core::model::GenerationOutcome;
use tracing::debug;

use crate::remote::RevisionApi;

/// What happened when the user asked for a page.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationTrigger {
    /// A generation was already in flight; nothing was sent.
    Busy,
    Completed(GenerationOutcome),
}

impl GenerationTrigger {
    #[must_use]
    pub fn outcome(&self) -> Option<&GenerationOutcome> {
        match self {
            Self::Busy => None,
            Self::Completed(outcome) => Some(outcome),
        }
    }
}

/// Single user-triggered generation with a busy guard.
///
/// Generation is a mutating pick on the server, so at most one request is
/// in flight at a time and repeated triggers while busy are dropped.
pub struct PageGenerationFlow {
    api: Arc<dyn RevisionApi>,
    busy: AtomicBool,
}

impl PageGenerationFlow {
    #[must_use]
    pub fn new(api: Arc<dyn RevisionApi>) -> Self {
        Self {
            api,
            busy: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub async fn trigger(&self) -> GenerationTrigger {
        let Some(_guard) = BusyGuard::acquire(&self.busy) else {
            debug!("generation already in flight; ignoring trigger");
            return GenerationTrigger::Busy;
        };

        GenerationTrigger::Completed(self.api.generate_page().await)
    }
}

/// Clears the busy flag on drop, so a cancelled request never leaves the
/// flow stuck in `Requesting`.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
