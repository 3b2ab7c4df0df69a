use services::{ErrorKind, RemoteError};

/// Failure shown to the user. Both kinds read the same on screen; the
/// distinction is kept for logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Network,
    Protocol,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        "Failed to load progress data"
    }
}

impl From<&RemoteError> for ViewError {
    fn from(err: &RemoteError) -> Self {
        match err.kind() {
            ErrorKind::Network => Self::Network,
            ErrorKind::Protocol => Self::Protocol,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}
