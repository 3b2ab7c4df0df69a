use crate::model::PageSelection;

/// Result of asking the remote service for a new page.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    Success(PageSelection),
    Failure { message: String },
}

impl GenerationOutcome {
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub fn selection(&self) -> Option<&PageSelection> {
        match self {
            Self::Success(selection) => Some(selection),
            Self::Failure { .. } => None,
        }
    }
}
