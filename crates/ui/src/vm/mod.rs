mod page_viewer_vm;
mod progress_vm;

pub use page_viewer_vm::PageViewerVm;
pub use progress_vm::{LoadApplied, LoadOrdering, LoadTicket, ProgressVm};
