use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};
use revision_core::model::PageSelection;

use crate::views::{HomeView, PageViewerView, ProgressView, use_progress_store_provider};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/page/:selection", PageViewerView)] PageViewer { selection: PageSelection },
        #[route("/progress", ProgressView)] Progress {},
}

#[component]
fn Layout() -> Element {
    use_progress_store_provider();

    rsx! {
        div { class: "app",
            header { class: "app-header",
                h1 { "Quranic Arabic Revision" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
