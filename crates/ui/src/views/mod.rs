mod alert;
mod home;
mod page_viewer;
mod progress;
mod progress_store;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use alert::ErrorAlert;
pub use home::HomeView;
pub use page_viewer::PageViewerView;
pub use progress::{ProgressBar, ProgressView};
pub use progress_store::{
    apply_progress_refresh, spawn_progress_refresh, use_progress_store,
    use_progress_store_provider,
};
pub use state::{ViewError, ViewState};
