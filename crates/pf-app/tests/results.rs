mod common;

use std::sync::Arc;

use parking_lot::Mutex;
use pf_core::events::events::{FetchFailed, PageLoaded};
use pf_core::NavigateOptions;
use pf_data::{AppConfig, FilterProfile, Filters, PageOutcome, SkipReason};
use pf_views::{LayoutMode, Region, Template, UiEvent};

use common::*;

const RESULTS: &str = "results/no_map=true&neighborhoods=3";

fn page_url(page: u32) -> String {
    format!("parks/search?no_map=true&neighborhoods=3&page={}", page)
}

fn paged_harness() -> Harness {
    let h = harness();
    h.fetcher.respond(&page_url(1), park_page("p1", 3, 3));
    h.fetcher.respond(&page_url(2), park_page("p2", 2, 3));
    h.fetcher.respond(&page_url(3), park_page("p3", 1, 3));
    h
}

fn result_count(h: &Harness) -> usize {
    h.app
        .with_view(Region::Main, |view| view.as_results().map(|r| r.item_count()))
        .flatten()
        .unwrap_or(0)
}

#[tokio::test]
async fn test_search_submit_navigates_to_results() {
    let h = paged_harness();
    h.app.start("").await.unwrap();

    h.app
        .handle_ui_event(UiEvent::SearchSubmitted(Filters::new(Some(3), None)))
        .await
        .unwrap();

    assert_eq!(h.app.active_view_type(Region::Main), Some("ResultsView"));
    assert_eq!(h.fetcher.requests().last(), Some(&page_url(1)));
    assert_eq!(result_count(&h), 3);
}

#[tokio::test]
async fn test_next_pages_append_in_order_until_exhausted() {
    let h = paged_harness();
    h.app.start(RESULTS).await.unwrap();

    let pages = Arc::new(Mutex::new(Vec::new()));
    let sink = pages.clone();
    h.app
        .context()
        .events
        .subscribe_fn(move |e: &PageLoaded| sink.lock().push((e.page, e.item_count)));

    h.app.handle_ui_event(UiEvent::NextPage).await.unwrap();
    h.app.handle_ui_event(UiEvent::NextPage).await.unwrap();
    assert_eq!(result_count(&h), 6);
    assert_eq!(
        rendered_item_titles(&h.renderer),
        vec!["Park p1 1", "Park p1 2", "Park p1 3", "Park p2 1", "Park p2 2", "Park p3 1"]
    );

    let layouts: Vec<LayoutMode> = h
        .renderer
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            RenderCall::Append(_, _, layout) => Some(layout),
            _ => None,
        })
        .collect();
    assert_eq!(layouts, vec![LayoutMode::FitAll, LayoutMode::Append, LayoutMode::Append]);

    let requests_before = h.fetcher.requests().len();
    let outcome = h.app.next_page().await.unwrap();
    assert_eq!(outcome, Some(PageOutcome::Skipped(SkipReason::Exhausted)));
    assert_eq!(h.fetcher.requests().len(), requests_before);
    assert_eq!(*pages.lock(), vec![(2, 5), (3, 6)]);
}

#[tokio::test]
async fn test_previous_page_replaces_items() {
    let h = paged_harness();
    h.app.start(RESULTS).await.unwrap();
    h.app.next_page().await.unwrap();
    h.app.next_page().await.unwrap();

    h.app.handle_ui_event(UiEvent::PreviousPage).await.unwrap();

    assert_eq!(result_count(&h), 2);
    let replaced = h.renderer.calls().into_iter().any(|call| {
        matches!(call, RenderCall::Replace(_, ref items) if items.len() == 2)
    });
    assert!(replaced);
    assert_eq!(h.fetcher.requests().last(), Some(&page_url(2)));

    let page = h
        .app
        .with_view(Region::Main, |view| view.as_results().map(|r| r.current_page()))
        .flatten();
    assert_eq!(page, Some(2));
}

#[tokio::test]
async fn test_previous_at_first_page_is_noop() {
    let h = paged_harness();
    h.app.start(RESULTS).await.unwrap();

    let outcome = h.app.previous_page().await.unwrap();
    assert_eq!(outcome, Some(PageOutcome::Skipped(SkipReason::AtFirstPage)));
    assert_eq!(result_count(&h), 3);
}

#[tokio::test]
async fn test_failed_next_page_is_reported_and_retryable() {
    let h = paged_harness();
    h.fetcher.respond(&page_url(2), serde_json::json!({ "pages": 3 }));
    h.app.start(RESULTS).await.unwrap();

    let failures = Arc::new(Mutex::new(Vec::new()));
    let sink = failures.clone();
    h.app
        .context()
        .events
        .subscribe_fn(move |e: &FetchFailed| sink.lock().push(e.context.clone()));

    let err = h.app.handle_ui_event(UiEvent::NextPage).await.unwrap_err();
    assert!(err.data_error().map(|e| e.is_parse()).unwrap_or(false));
    assert_eq!(*failures.lock(), vec!["results".to_string()]);

    let notices: Vec<Option<String>> = h
        .renderer
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            RenderCall::Notice(_, message) => Some(message),
            _ => None,
        })
        .collect();
    assert_eq!(notices, vec![Some(pf_app::FAILURE_MESSAGE.to_string())]);
    assert_eq!(h.app.active_view_type(Region::Main), Some("ResultsView"));
    assert_eq!(result_count(&h), 3);
    let page_error = h
        .app
        .with_view(Region::Main, |view| {
            view.as_results().and_then(|r| r.page_error().map(str::to_string))
        })
        .flatten();
    assert_eq!(page_error.as_deref(), Some(pf_app::FAILURE_MESSAGE));

    h.fetcher.respond(&page_url(2), park_page("p2", 2, 3));
    let outcome = h.app.next_page().await.unwrap();
    assert!(matches!(outcome, Some(PageOutcome::Appended { page: 2, .. })));
    assert_eq!(result_count(&h), 5);
    let cleared = h
        .renderer
        .calls()
        .into_iter()
        .any(|call| matches!(call, RenderCall::Notice(_, None)));
    assert!(cleared);
}

#[tokio::test]
async fn test_page_response_after_navigation_is_discarded() {
    let h = paged_harness();
    h.app.start(RESULTS).await.unwrap();
    let open = h.fetcher.gate(&page_url(2));

    let (paged, ()) = tokio::join!(h.app.next_page(), async {
        let route = h
            .app
            .navigate("about", NavigateOptions::trigger())
            .unwrap()
            .unwrap();
        h.app.dispatch(route).await.unwrap();
        open.send(()).unwrap();
    });

    assert_eq!(paged.unwrap(), None);
    assert_eq!(h.app.active_view_type(Region::Main), Some("AboutView"));
}

#[tokio::test]
async fn test_leaving_results_drops_collection() {
    let h = paged_harness();
    h.app.start(RESULTS).await.unwrap();
    h.app.visit("about").await.unwrap();

    let outcome = h.app.next_page().await.unwrap();
    assert_eq!(outcome, Some(PageOutcome::Skipped(SkipReason::NotLoaded)));
    assert_eq!(h.fetcher.requests().len(), 1);
}

#[tokio::test]
async fn test_malformed_results_show_failure_view() {
    let h = harness();
    h.fetcher.respond(&page_url(1), serde_json::json!({ "results": [] }));

    let failures = Arc::new(Mutex::new(Vec::new()));
    let sink = failures.clone();
    h.app
        .context()
        .events
        .subscribe_fn(move |e: &FetchFailed| sink.lock().push(e.context.clone()));

    let err = h.app.start(RESULTS).await.unwrap_err();

    assert!(err.data_error().map(|e| e.is_parse()).unwrap_or(false));
    assert_eq!(h.app.active_view_type(Region::Main), Some("FailureView"));
    assert_eq!(
        h.renderer.last_render_of(Template::Failure).unwrap()["message"],
        pf_app::FAILURE_MESSAGE
    );
    assert!(!h.renderer.loading_visible());
    assert_eq!(*failures.lock(), vec!["results".to_string()]);
}

#[tokio::test]
async fn test_server_error_shows_failure_view() {
    let h = harness();
    h.fetcher.fail(&page_url(1), 503);

    let err = h.app.start(RESULTS).await.unwrap_err();

    assert!(!err.data_error().unwrap().is_parse());
    assert_eq!(h.app.active_view_type(Region::Main), Some("FailureView"));
}

#[tokio::test]
async fn test_flat_profile_fetches_once() {
    let config = AppConfig {
        profile: FilterProfile::activities(),
        ..Default::default()
    };
    let h = harness_with(config);
    h.fetcher.respond(
        "parks/search?no_map=true&neighborhoods=3",
        park_page("all", 4, 1),
    );

    h.app.start(RESULTS).await.unwrap();
    assert_eq!(result_count(&h), 4);

    let outcome = h.app.next_page().await.unwrap();
    assert_eq!(outcome, Some(PageOutcome::Skipped(SkipReason::Flat)));
    assert_eq!(h.fetcher.requests().len(), 1);
}
