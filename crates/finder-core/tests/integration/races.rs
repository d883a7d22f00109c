//! Overlapping fetches: only the latest user intent may reach the state.

use std::sync::Arc;

use finder_core::{Completion, Error, SearchSession, ServiceFailureKind};

use crate::common::{page_of, GatedSearchService, PanickingSearchService};

#[tokio::test]
async fn test_late_page_two_response_is_discarded() {
    let service = Arc::new(GatedSearchService::new());
    let first = service.gate("Helsinki", 1);
    let second = service.gate("Helsinki", 2);
    let third = service.gate("Helsinki", 3);

    let mut session = SearchSession::new(service.clone());
    assert!(session.submit("Helsinki"));
    first.send(Ok(page_of("p1", 10, 25))).unwrap();
    assert_eq!(session.next_completion().await, Some(Completion::Applied));

    assert!(session.go_to_page(2).unwrap());
    assert!(session.go_to_page(3).unwrap());
    assert_eq!(session.state().page, 3);
    assert!(session.state().loading);

    third.send(Ok(page_of("p3", 5, 25))).unwrap();
    assert_eq!(session.next_completion().await, Some(Completion::Applied));
    assert_eq!(session.state().results, page_of("p3", 5, 25).companies);
    assert!(!session.state().loading);

    second.send(Ok(page_of("p2", 10, 25))).unwrap();
    assert_eq!(session.next_completion().await, Some(Completion::Discarded));

    let state = session.state();
    assert_eq!(state.page, 3);
    assert_eq!(state.total, 25);
    assert_eq!(state.results, page_of("p3", 5, 25).companies);
    assert!(!state.loading);
}

#[tokio::test]
async fn test_early_stale_response_never_shows() {
    let service = Arc::new(GatedSearchService::new());
    let first = service.gate("Helsinki", 1);
    let second = service.gate("Helsinki", 2);
    let third = service.gate("Helsinki", 3);

    let mut session = SearchSession::new(service.clone());
    session.submit("Helsinki");
    first.send(Ok(page_of("p1", 10, 25))).unwrap();
    session.settle().await;

    session.go_to_page(2).unwrap();
    session.go_to_page(3).unwrap();

    // Page 2 finishes first but is already superseded.
    second.send(Ok(page_of("p2", 10, 25))).unwrap();
    assert_eq!(session.next_completion().await, Some(Completion::Discarded));
    assert_eq!(session.state().results, page_of("p1", 10, 25).companies);
    assert!(session.state().loading);

    third.send(Ok(page_of("p3", 5, 25))).unwrap();
    assert_eq!(session.next_completion().await, Some(Completion::Applied));
    assert_eq!(session.state().results, page_of("p3", 5, 25).companies);
}

#[tokio::test]
async fn test_new_search_supersedes_previous_term() {
    let service = Arc::new(GatedSearchService::new());
    let helsinki = service.gate("Helsinki", 1);
    let turku = service.gate("Turku", 1);

    let mut session = SearchSession::new(service.clone());
    session.submit("Helsinki");
    session.submit("Turku");

    turku.send(Ok(page_of("turku", 3, 3))).unwrap();
    helsinki.send(Ok(page_of("helsinki", 10, 99))).unwrap();
    session.settle().await;

    let state = session.state();
    assert_eq!(state.committed_term, "Turku");
    assert_eq!(state.total, 3);
    assert_eq!(state.results, page_of("turku", 3, 3).companies);
    assert!(!state.loading);
}

#[tokio::test]
async fn test_clear_discards_in_flight_fetch() {
    let service = Arc::new(GatedSearchService::new());
    let gate = service.gate("Helsinki", 1);

    let mut session = SearchSession::new(service.clone());
    session.submit("Helsinki");
    session.clear();
    assert!(!session.state().loading);

    gate.send(Ok(page_of("h", 10, 25))).unwrap();
    assert_eq!(session.next_completion().await, Some(Completion::Discarded));

    let state = session.state();
    assert_eq!(state.committed_term, "");
    assert_eq!(state.total, 0);
    assert!(state.results.is_empty());
    assert!(!state.has_searched);
}

#[tokio::test]
async fn test_stale_failure_leaves_loading_set() {
    let service = Arc::new(GatedSearchService::new());
    let first = service.gate("Helsinki", 1);
    let second = service.gate("Helsinki", 2);
    let third = service.gate("Helsinki", 3);

    let mut session = SearchSession::new(service.clone());
    session.submit("Helsinki");
    first.send(Ok(page_of("p1", 10, 25))).unwrap();
    session.settle().await;

    session.go_to_page(2).unwrap();
    session.go_to_page(3).unwrap();

    second
        .send(Err(Error::service(ServiceFailureKind::Timeout, "slow")))
        .unwrap();
    assert_eq!(session.next_completion().await, Some(Completion::Discarded));
    assert!(session.state().loading);

    drop(third);
    assert_eq!(session.next_completion().await, Some(Completion::Failed));
    assert!(!session.state().loading);
    assert_eq!(session.state().results, page_of("p1", 10, 25).companies);
}

#[tokio::test]
async fn test_panicking_service_clears_loading() {
    let mut session = SearchSession::new(Arc::new(PanickingSearchService));
    session.submit("Helsinki");

    assert_eq!(session.next_completion().await, Some(Completion::Failed));
    assert!(!session.state().loading);
    assert_eq!(session.next_completion().await, None);
}

#[tokio::test]
async fn test_latest_fetch_panics_after_stale_fetch_finishes() {
    let service = Arc::new(GatedSearchService::new());
    let first = service.gate("Helsinki", 1);
    let second = service.gate("Helsinki", 2);
    service.panic_on("Helsinki", 2);

    let mut session = SearchSession::new(service.clone());
    session.submit("Helsinki");
    session.go_to_page(2).unwrap();

    first.send(Ok(page_of("p1", 10, 25))).unwrap();
    assert_eq!(session.next_completion().await, Some(Completion::Discarded));
    assert!(session.state().loading);

    second.send(Ok(page_of("p2", 10, 25))).unwrap();
    assert_eq!(session.next_completion().await, Some(Completion::Failed));
    assert!(!session.state().loading);
    assert_eq!(session.state().page, 2);
    assert!(session.state().results.is_empty());

    assert_eq!(session.next_completion().await, None);
    assert_eq!(session.pending(), 0);
}

#[tokio::test]
async fn test_latest_fetch_panics_before_stale_fetch_finishes() {
    let service = Arc::new(GatedSearchService::new());
    let first = service.gate("Helsinki", 1);
    let second = service.gate("Helsinki", 2);
    service.panic_on("Helsinki", 2);

    let mut session = SearchSession::new(service.clone());
    session.submit("Helsinki");
    session.go_to_page(2).unwrap();

    second.send(Ok(page_of("p2", 10, 25))).unwrap();
    assert_eq!(session.next_completion().await, Some(Completion::Failed));
    assert!(!session.state().loading);
    assert_eq!(session.pending(), 1);

    first.send(Ok(page_of("p1", 10, 25))).unwrap();
    assert_eq!(session.next_completion().await, Some(Completion::Discarded));
    assert!(!session.state().loading);
    assert!(session.state().results.is_empty());

    assert_eq!(session.next_completion().await, None);
}

#[tokio::test]
async fn test_stale_fetch_panics_while_latest_is_pending() {
    let service = Arc::new(GatedSearchService::new());
    let first = service.gate("Helsinki", 1);
    let second = service.gate("Helsinki", 2);
    service.panic_on("Helsinki", 1);

    let mut session = SearchSession::new(service.clone());
    session.submit("Helsinki");
    session.go_to_page(2).unwrap();

    first.send(Ok(page_of("p1", 10, 25))).unwrap();
    assert_eq!(session.next_completion().await, Some(Completion::Discarded));
    assert!(session.state().loading);

    second.send(Ok(page_of("p2", 10, 25))).unwrap();
    assert_eq!(session.next_completion().await, Some(Completion::Applied));
    assert!(!session.state().loading);
    assert_eq!(session.state().results, page_of("p2", 10, 25).companies);
}
