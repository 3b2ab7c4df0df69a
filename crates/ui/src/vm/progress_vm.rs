use revision_core::model::ProgressSnapshot;
use revision_core::progress::{ColorTier, MessageTier};
use services::RemoteError;

use crate::views::{ViewError, ViewState};

/// How responses to overlapping loads are applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadOrdering {
    /// Every response is applied in arrival order; the last one to land wins.
    #[default]
    LastArrived,
    /// Only the response to the most recently issued load is applied.
    LatestIssued,
}

/// Issued by `ProgressVm::begin_load`, handed back to `ProgressVm::finish`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadApplied {
    Applied,
    Stale,
}

/// Owns the progress snapshot shown by every view that displays progress.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressVm {
    state: ViewState<ProgressSnapshot>,
    last_snapshot: Option<ProgressSnapshot>,
    ordering: LoadOrdering,
    issued: u64,
}

impl Default for ProgressVm {
    fn default() -> Self {
        Self::new(LoadOrdering::default())
    }
}

impl ProgressVm {
    #[must_use]
    pub fn new(ordering: LoadOrdering) -> Self {
        Self {
            state: ViewState::Idle,
            last_snapshot: None,
            ordering,
            issued: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> &ViewState<ProgressSnapshot> {
        &self.state
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued += 1;
        self.state = ViewState::Loading;
        LoadTicket(self.issued)
    }

    pub fn finish(
        &mut self,
        ticket: LoadTicket,
        result: Result<ProgressSnapshot, RemoteError>,
    ) -> LoadApplied {
        if self.ordering == LoadOrdering::LatestIssued && ticket.0 != self.issued {
            return LoadApplied::Stale;
        }

        self.state = match result {
            Ok(snapshot) => {
                self.last_snapshot = Some(snapshot);
                ViewState::Ready(snapshot)
            }
            Err(err) => ViewState::Error(ViewError::from(&err)),
        };
        LoadApplied::Applied
    }

    /// Clears an error after the user acknowledged it, falling back to the
    /// last good snapshot if there is one.
    pub fn dismiss_error(&mut self) {
        if let ViewState::Error(_) = self.state {
            self.state = self
                .last_snapshot
                .map_or(ViewState::Idle, ViewState::Ready);
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<ViewError> {
        match self.state {
            ViewState::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Snapshot to display: the current one, or the last good one while a
    /// reload is pending or has failed.
    #[must_use]
    pub fn snapshot(&self) -> Option<ProgressSnapshot> {
        match self.state {
            ViewState::Ready(snapshot) => Some(snapshot),
            _ => self.last_snapshot,
        }
    }

    #[must_use]
    pub fn color_tier(&self) -> Option<ColorTier> {
        self.snapshot()
            .map(|snapshot| ColorTier::for_percentage(snapshot.completion_percentage))
    }

    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        self.snapshot()
            .map(|snapshot| MessageTier::for_percentage(snapshot.completion_percentage).message())
    }
}
