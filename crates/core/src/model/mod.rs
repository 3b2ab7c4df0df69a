mod image;
mod outcome;
mod page;
mod selection;
mod snapshot;

pub use image::ImageLoadState;
pub use outcome::GenerationOutcome;
pub use page::{PAGE_COUNT, PageError, PageNumber};
pub use selection::PageSelection;
pub use snapshot::ProgressSnapshot;
