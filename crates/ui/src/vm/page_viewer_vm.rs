use revision_core::model::{ImageLoadState, PageSelection};
use tracing::warn;
use url::Url;

/// Image lifecycle for one displayed page.
///
/// `Pending -> Loaded`, `Pending -> Failed`, `Failed -> Pending` (retry).
/// Anything else is ignored. Retrying is always a user action.
#[derive(Clone, Debug, PartialEq)]
pub struct PageViewerVm {
    selection: PageSelection,
    image_url: Url,
    image: ImageLoadState,
    attempt: u32,
    history: Vec<ImageLoadState>,
}

impl PageViewerVm {
    #[must_use]
    pub fn new(selection: PageSelection, image_url: Url) -> Self {
        Self {
            selection,
            image_url,
            image: ImageLoadState::Pending,
            attempt: 0,
            history: vec![ImageLoadState::Pending],
        }
    }

    #[must_use]
    pub fn selection(&self) -> &PageSelection {
        &self.selection
    }

    #[must_use]
    pub fn image_url(&self) -> &Url {
        &self.image_url
    }

    #[must_use]
    pub fn image_state(&self) -> ImageLoadState {
        self.image
    }

    /// Bumped on every retry; used as the image element key to force a refetch.
    #[must_use]
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Every state entered so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ImageLoadState] {
        &self.history
    }

    /// The word-by-word action is available whenever a link exists,
    /// regardless of the image state.
    #[must_use]
    pub fn word_by_word_link(&self) -> Option<&Url> {
        self.selection.word_by_word_link()
    }

    pub fn image_loaded(&mut self) -> bool {
        self.transition(ImageLoadState::Pending, ImageLoadState::Loaded)
    }

    pub fn image_failed(&mut self, reason: &str) -> bool {
        let changed = self.transition(ImageLoadState::Pending, ImageLoadState::Failed);
        if changed {
            warn!(
                page = %self.selection.page_number(),
                url = %self.image_url,
                attempt = self.attempt,
                reason,
                "page image failed to load"
            );
        }
        changed
    }

    pub fn retry(&mut self) -> bool {
        let changed = self.transition(ImageLoadState::Failed, ImageLoadState::Pending);
        if changed {
            self.attempt += 1;
        }
        changed
    }

    fn transition(&mut self, from: ImageLoadState, to: ImageLoadState) -> bool {
        if self.image != from {
            return false;
        }
        self.image = to;
        self.history.push(to);
        true
    }
}
