/// Loading state of the image for the page currently on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ImageLoadState {
    #[default]
    Pending,
    Loaded,
    Failed,
}

impl ImageLoadState {
    #[must_use]
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub fn is_failed(self) -> bool {
        matches!(self, Self::Failed)
    }
}
