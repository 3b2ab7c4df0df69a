use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use revision_core::model::{GenerationOutcome, PageSelection, ProgressSnapshot};
use services::{AppServices, RemoteConfig, RemoteError, RevisionApi};
use tokio::sync::Notify;
use url::Url;

use crate::context::{UiApp, build_app_context};
use crate::opener::{LinkOpener, OpenLinkError};
use crate::routes::Route;
use crate::views::{HomeView, PageViewerView, ProgressView, use_progress_store_provider};

pub struct FakeApi {
    config: RemoteConfig,
    outcome: GenerationOutcome,
    progress: Option<ProgressSnapshot>,
    gate: Option<Arc<Notify>>,
    generate_calls: AtomicUsize,
    progress_calls: AtomicUsize,
}

impl FakeApi {
    pub fn new(progress: Option<ProgressSnapshot>) -> Self {
        Self {
            config: RemoteConfig::new("http://localhost:5001").expect("config"),
            outcome: GenerationOutcome::failure("no pages available"),
            progress,
            gate: None,
            generate_calls: AtomicUsize::new(0),
            progress_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_outcome(mut self, outcome: GenerationOutcome) -> Self {
        self.outcome = outcome;
        self
    }

    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn generate_calls(&self) -> usize {
        self.generate_calls.load(Ordering::SeqCst)
    }

    pub fn progress_calls(&self) -> usize {
        self.progress_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RevisionApi for FakeApi {
    async fn generate_page(&self) -> GenerationOutcome {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.outcome.clone()
    }

    async fn fetch_progress(&self) -> Result<ProgressSnapshot, RemoteError> {
        self.progress_calls.fetch_add(1, Ordering::SeqCst);
        self.progress
            .ok_or_else(|| RemoteError::Transport("connection refused".into()))
    }

    fn resolve_image_url(&self, reference: &str) -> Url {
        self.config.resolve(reference)
    }
}

/// Records every link it is asked to open and answers with `result`.
pub struct FakeLinkOpener {
    result: Result<(), OpenLinkError>,
    opened: Mutex<Vec<Url>>,
}

impl FakeLinkOpener {
    pub fn new(result: Result<(), OpenLinkError>) -> Self {
        Self {
            result,
            opened: Mutex::new(Vec::new()),
        }
    }

    pub fn opened(&self) -> Vec<Url> {
        self.opened.lock().expect("opened lock").clone()
    }
}

#[async_trait(?Send)]
impl LinkOpener for FakeLinkOpener {
    async fn open(&self, link: &Url) -> Result<(), OpenLinkError> {
        self.opened.lock().expect("opened lock").push(link.clone());
        self.result.clone()
    }
}

/// Callbacks registered by views so tests can fire them without DOM events.
#[derive(Clone, Default)]
pub(crate) struct ViewTestHandles {
    generate: Rc<RefCell<Option<Callback<()>>>>,
    open_link: Rc<RefCell<Option<Callback<()>>>>,
}

impl ViewTestHandles {
    pub(crate) fn register_generate(&self, generate: Callback<()>) {
        *self.generate.borrow_mut() = Some(generate);
    }

    pub(crate) fn register_open_link(&self, open_link: Callback<()>) {
        *self.open_link.borrow_mut() = Some(open_link);
    }

    pub(crate) fn generate(&self) -> Callback<()> {
        (*self.generate.borrow()).expect("generate registered")
    }

    pub(crate) fn open_link(&self) -> Callback<()> {
        (*self.open_link.borrow()).expect("open link registered")
    }
}

#[derive(Clone, PartialEq)]
pub enum ViewKind {
    /// The real router, starting at home.
    App,
    Home,
    Progress,
    PageViewer(PageSelection),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<AppServices>,
    link_opener: Arc<FakeLinkOpener>,
    view: ViewKind,
    handles: ViewTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let link_opener = props.link_opener.clone();
    use_context_provider(|| build_app_context(&app).with_link_opener(link_opener));
    use_context_provider(|| props.view.clone());
    use_context_provider(|| props.handles.clone());
    use_progress_store_provider();
    match &props.view {
        ViewKind::App => rsx! { Router::<Route> {} },
        _ => rsx! { Router::<TestRoute> {} },
    }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    match use_context::<ViewKind>() {
        ViewKind::App | ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Progress => rsx! { ProgressView {} },
        ViewKind::PageViewer(selection) => rsx! { PageViewerView { selection } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub api: Arc<FakeApi>,
    pub link_opener: Arc<FakeLinkOpener>,
    pub handles: ViewTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    /// Fires a registered view callback inside the dom's runtime.
    pub fn fire(&mut self, callback: Callback<()>) {
        self.dom.in_runtime(|| callback.call(()));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, progress: Option<ProgressSnapshot>) -> ViewHarness {
    setup_view_harness_with(view, FakeApi::new(progress), FakeLinkOpener::new(Ok(())))
}

pub fn setup_view_harness_with(
    view: ViewKind,
    api: FakeApi,
    link_opener: FakeLinkOpener,
) -> ViewHarness {
    let api = Arc::new(api);
    let link_opener = Arc::new(link_opener);
    let handles = ViewTestHandles::default();
    let app = Arc::new(AppServices::with_api(api.clone()));
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            link_opener: link_opener.clone(),
            view,
            handles: handles.clone(),
        },
    );
    ViewHarness {
        dom,
        api,
        link_opener,
        handles,
    }
}
