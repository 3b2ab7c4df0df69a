use dioxus::prelude::*;
use dioxus_router::Link;
use revision_core::model::ProgressSnapshot;
use revision_core::progress::ColorTier;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ErrorAlert, spawn_progress_refresh, use_progress_store};

#[component]
pub fn ProgressView() -> Element {
    let ctx = use_context::<AppContext>();
    let coordinator = ctx.coordinator();
    let mut progress = use_progress_store();

    let coordinator_for_mount = coordinator.clone();
    use_hook(move || spawn_progress_refresh(progress, coordinator_for_mount.refresh_progress()));

    let on_refresh = move |_| spawn_progress_refresh(progress, coordinator.refresh_progress());

    let vm = progress.read().clone();
    let snapshot = vm.snapshot();
    let show_spinner = vm.is_loading() && snapshot.is_none();
    let tier = vm.color_tier();
    let message = vm.message();
    let error = vm.error();

    rsx! {
        div { class: "page progress",
            div { class: "page-header",
                h2 { "Your Progress" }
                p { class: "subtitle", "Track your journey through the Quran" }
            }

            if show_spinner {
                p { class: "loading", "Loading progress..." }
            } else if let Some(snapshot) = snapshot {
                ProgressDetails { snapshot, tier }
                if let Some(message) = message {
                    section { class: "card message-card",
                        p { class: "message", "{message}" }
                    }
                }
            }

            div { class: "actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: vm.is_loading(),
                    onclick: on_refresh,
                    "Refresh Progress"
                }
                Link { class: "btn", to: Route::Home {}, "Back to Home" }
            }

            if let Some(err) = error {
                ErrorAlert {
                    title: "Could not load progress.",
                    message: err.message(),
                    on_dismiss: move |()| progress.write().dismiss_error(),
                }
            }
        }
    }
}

#[component]
fn ProgressDetails(snapshot: ProgressSnapshot, tier: Option<ColorTier>) -> Element {
    let tier_class = tier.map_or("neutral", ColorTier::as_str);

    rsx! {
        section { class: "card progress-card",
            h3 { "Overall Progress" }
            ProgressBar { width: snapshot.bar_width(), tier }
            p { class: "progress-text",
                "{snapshot.revised_count} of {snapshot.total_count} pages completed"
            }
            p { class: "percentage tier-{tier_class}", "{snapshot.percentage_label()}%" }
        }

        section { class: "card stats-card",
            h3 { "Statistics" }
            dl { class: "stats",
                dt { "Pages Completed:" }
                dd { "{snapshot.revised_count}" }

                dt { "Pages Remaining:" }
                dd { "{snapshot.remaining_count()}" }

                dt { "Total Pages:" }
                dd { "{snapshot.total_count}" }
            }
        }
    }
}

#[component]
pub fn ProgressBar(width: f64, tier: Option<ColorTier>) -> Element {
    let tier_class = tier.map_or("primary", ColorTier::as_str);

    rsx! {
        div { class: "progress-bar",
            div {
                class: "progress-fill tier-{tier_class}",
                style: "width: {width}%;",
            }
        }
    }
}
