use dioxus::prelude::*;
use dioxus::core::spawn_forever;
use services::ProgressRefresh;
use tracing::debug;

use crate::vm::{LoadApplied, ProgressVm};

/// Provides the progress slot shared by every view below the caller.
pub fn use_progress_store_provider() -> Signal<ProgressVm> {
    use_context_provider(|| Signal::new(ProgressVm::default()))
}

#[must_use]
pub fn use_progress_store() -> Signal<ProgressVm> {
    use_context::<Signal<ProgressVm>>()
}

/// Runs one progress fetch against the shared slot.
///
/// Spawned with `spawn_forever` so leaving the screen does not cancel the
/// request; the result is only applied while the slot is still alive.
pub async fn apply_progress_refresh(mut progress: Signal<ProgressVm>, refresh: ProgressRefresh) {
    let ticket = match progress.try_write() {
        Ok(mut vm) => vm.begin_load(),
        Err(_) => {
            debug!("progress store gone before load started");
            return;
        }
    };

    let result = refresh.run().await;

    match progress.try_write() {
        Ok(mut vm) => {
            if vm.finish(ticket, result) == LoadApplied::Stale {
                debug!(?ticket, "discarded stale progress response");
            }
        }
        Err(_) => debug!("progress store gone; dropping response"),
    }
}

/// Starts a progress load that outlives the calling view.
pub fn spawn_progress_refresh(progress: Signal<ProgressVm>, refresh: ProgressRefresh) {
    let _ = spawn_forever(apply_progress_refresh(progress, refresh));
}
