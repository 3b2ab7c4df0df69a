use std::sync::Arc;

use revision_core::model::{GenerationOutcome, PageNumber, PageSelection, ProgressSnapshot};
use tokio::sync::Notify;
use url::Url;

use super::test_harness::{
    FakeApi, FakeLinkOpener, ViewHarness, ViewKind, setup_view_harness, setup_view_harness_with,
};
use crate::opener::OpenLinkError;

fn page_42(link: Option<&str>) -> PageSelection {
    PageSelection::new(
        PageNumber::new(42).unwrap(),
        "An-Nisa",
        "/images/42.png",
        link.map(|raw| Url::parse(raw).unwrap()),
    )
    .unwrap()
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_progress_line() {
    let snapshot = ProgressSnapshot::new(151, 604, 25.0);
    let mut harness = setup_view_harness(ViewKind::Home, Some(snapshot));
    harness.settle().await;

    let html = harness.render();
    let expected = "151 of 604 pages completed (25%)";
    assert!(html.contains(expected), "missing {expected} in {html}");
    assert!(html.contains("Generate Random Page"), "missing button in {html}");
    assert_eq!(harness.api.progress_calls(), 1);
}

async fn drive(harness: &mut ViewHarness, rounds: usize) {
    for _ in 0..rounds {
        harness.drive_async().await;
    }
}

#[tokio::test(flavor = "current_thread")]
async fn home_generation_success_navigates_then_refreshes_once() {
    let snapshot = ProgressSnapshot::new(151, 604, 25.0);
    let api = FakeApi::new(Some(snapshot)).with_outcome(GenerationOutcome::Success(page_42(None)));
    let mut harness = setup_view_harness_with(ViewKind::App, api, FakeLinkOpener::new(Ok(())));
    harness.settle().await;
    assert_eq!(harness.api.progress_calls(), 1);

    let generate = harness.handles.generate();
    harness.fire(generate);
    drive(&mut harness, 3).await;

    let html = harness.render();
    assert!(html.contains("Page 42"), "did not navigate: {html}");
    assert!(html.contains("An-Nisa"), "missing titles in {html}");
    assert!(!html.contains("Generate Random Page"), "still on home: {html}");
    assert_eq!(harness.api.generate_calls(), 1);
    assert_eq!(harness.api.progress_calls(), 2);
}

#[tokio::test(flavor = "current_thread")]
async fn home_generation_failure_alerts_without_navigating() {
    let snapshot = ProgressSnapshot::new(151, 604, 25.0);
    let mut harness = setup_view_harness(ViewKind::App, Some(snapshot));
    harness.settle().await;

    let generate = harness.handles.generate();
    harness.fire(generate);
    drive(&mut harness, 3).await;

    let html = harness.render();
    assert!(html.contains("Could not generate a page."), "missing alert in {html}");
    assert!(html.contains("no pages available"), "missing server message in {html}");
    assert!(html.contains("Generate Random Page"), "left home: {html}");
    assert!(!html.contains("page-image"), "navigated anyway: {html}");
    assert_eq!(harness.api.generate_calls(), 1);
    assert_eq!(harness.api.progress_calls(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn home_second_click_keeps_button_busy_until_first_request_finishes() {
    let gate = Arc::new(Notify::new());
    let api = FakeApi::new(None).gated(gate.clone());
    let mut harness = setup_view_harness_with(ViewKind::Home, api, FakeLinkOpener::new(Ok(())));
    harness.settle().await;

    let generate = harness.handles.generate();
    harness.fire(generate);
    harness.fire(generate);
    drive(&mut harness, 2).await;

    let html = harness.render();
    assert!(html.contains("Generating..."), "button re-enabled early: {html}");
    assert_eq!(harness.api.generate_calls(), 1);

    gate.notify_one();
    drive(&mut harness, 3).await;

    let html = harness.render();
    assert!(html.contains("Generate Random Page"), "button stuck busy: {html}");
    assert!(html.contains("no pages available"), "missing failure in {html}");
    assert_eq!(harness.api.generate_calls(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn progress_view_smoke_renders_statistics_and_message() {
    let snapshot = ProgressSnapshot::new(151, 604, 25.0);
    let mut harness = setup_view_harness(ViewKind::Progress, Some(snapshot));
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("151 of 604 pages completed"), "missing count in {html}");
    assert!(html.contains("25%"), "missing percentage in {html}");
    assert!(html.contains("453"), "missing remaining pages in {html}");
    assert!(html.contains("Good start! Keep going!"), "missing message in {html}");
    assert!(!html.contains("halfway"), "wrong tier in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn progress_view_smoke_renders_error_alert() {
    let mut harness = setup_view_harness(ViewKind::Progress, None);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Error"), "missing alert title in {html}");
    assert!(
        html.contains("Failed to load progress data"),
        "missing error in {html}"
    );
    assert!(html.contains("Refresh Progress"), "missing refresh in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn page_viewer_smoke_hides_missing_word_by_word_link() {
    let mut harness = setup_view_harness(ViewKind::PageViewer(page_42(None)), None);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Page 42"), "missing page title in {html}");
    assert!(html.contains("An-Nisa"), "missing titles in {html}");
    assert!(
        html.contains("http://localhost:5001/images/42.png"),
        "missing resolved image in {html}"
    );
    assert!(html.contains("Loading page..."), "missing pending state in {html}");
    assert!(!html.contains("Word-by-Word"), "unexpected link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn page_viewer_smoke_shows_word_by_word_link() {
    let selection = page_42(Some("https://example.org/wbw/42"));
    let mut harness = setup_view_harness(ViewKind::PageViewer(selection), None);
    harness.rebuild();

    let html = harness.render();
    assert!(
        html.contains("View Word-by-Word Translation"),
        "missing link in {html}"
    );
    assert!(html.contains("https://example.org/wbw/42"), "missing href in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn page_viewer_alerts_when_word_by_word_link_fails_to_open() {
    let selection = page_42(Some("https://example.org/wbw/42"));
    let mut harness = setup_view_harness_with(
        ViewKind::PageViewer(selection),
        FakeApi::new(None),
        FakeLinkOpener::new(Err(OpenLinkError::Blocked)),
    );
    harness.rebuild();

    let open_link = harness.handles.open_link();
    harness.fire(open_link);
    drive(&mut harness, 2).await;

    let html = harness.render();
    assert!(
        html.contains("Could not open the word-by-word translation link"),
        "missing alert in {html}"
    );
    assert!(html.contains("the link was blocked"), "missing reason in {html}");
    let opened = harness.link_opener.opened();
    assert_eq!(opened.len(), 1);
    assert_eq!(opened[0].as_str(), "https://example.org/wbw/42");
}

#[tokio::test(flavor = "current_thread")]
async fn page_viewer_opens_word_by_word_link_quietly() {
    let selection = page_42(Some("https://example.org/wbw/42"));
    let mut harness = setup_view_harness(ViewKind::PageViewer(selection), None);
    harness.rebuild();

    let open_link = harness.handles.open_link();
    harness.fire(open_link);
    drive(&mut harness, 2).await;

    let html = harness.render();
    assert!(!html.contains("alertdialog"), "unexpected alert in {html}");
    assert_eq!(harness.link_opener.opened().len(), 1);
}
