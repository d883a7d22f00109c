//! End-to-end flows against the in-memory directory.

use std::sync::Arc;

use finder_core::{
    Company, MockSearchService, PageMarker, SearchQuery, SearchSession, ServiceFailureKind,
};

use crate::common::companies;

fn directory() -> Vec<Company> {
    let mut all = companies("hel", "Helsinki", 25);
    all.extend(companies("tku", "Turku", 3));
    all
}

#[tokio::test]
async fn test_helsinki_scenario() {
    let service = Arc::new(MockSearchService::new(directory()));
    let mut session = SearchSession::new(service.clone());

    session.submit("Helsinki");
    session.settle().await;

    let state = session.state();
    assert_eq!(state.page, 1);
    assert_eq!(state.total, 25);
    assert_eq!(state.total_pages(), 3);
    assert_eq!(state.results.len(), 10);
    assert_eq!(state.results[0].id, "hel-0");
    assert_eq!(
        session.markers(),
        vec![PageMarker::Page(1), PageMarker::Page(2), PageMarker::Page(3)]
    );

    session.go_to_page(2).unwrap();
    session.settle().await;

    let state = session.state();
    assert_eq!(state.page, 2);
    assert_eq!(state.total, 25);
    assert_eq!(state.results.len(), 10);
    assert_eq!(state.results[0].id, "hel-10");

    assert_eq!(
        service.calls(),
        vec![SearchQuery::new("Helsinki", 1), SearchQuery::new("Helsinki", 2)]
    );
}

#[tokio::test]
async fn test_input_submit_and_navigation() {
    let service = Arc::new(MockSearchService::new(directory()));
    let mut session = SearchSession::new(service.clone());

    session.set_query_input("Helsinki");
    assert!(session.submit_input());
    session.settle().await;

    assert!(!session.previous_page());
    assert!(session.next_page());
    session.settle().await;
    assert!(session.next_page());
    session.settle().await;

    assert_eq!(session.state().page, 3);
    assert_eq!(session.state().results.len(), 5);
    assert!(!session.next_page());

    assert!(session.previous_page());
    session.settle().await;
    assert_eq!(session.state().page, 2);
    assert_eq!(service.call_count(), 4);
}

#[tokio::test]
async fn test_no_matches() {
    let service = Arc::new(MockSearchService::new(directory()));
    let mut session = SearchSession::new(service);

    session.submit("Inari");
    session.settle().await;

    assert!(session.controller().is_empty_result());
    assert_eq!(session.state().total_pages(), 0);
    assert!(session.markers().is_empty());
}

#[tokio::test]
async fn test_failure_keeps_previous_page() {
    let service = Arc::new(MockSearchService::new(directory()));
    service.fail_on(SearchQuery::new("Helsinki", 2), ServiceFailureKind::Status(503));
    let mut session = SearchSession::new(service.clone());

    session.submit("Helsinki");
    session.settle().await;
    let first_page = session.state().results.clone();

    session.go_to_page(2).unwrap();
    session.settle().await;

    let state = session.state();
    assert!(!state.loading);
    assert_eq!(state.page, 2);
    assert_eq!(state.total, 25);
    assert_eq!(state.results, first_page);
}

#[tokio::test]
async fn test_clear_after_searching() {
    let service = Arc::new(MockSearchService::new(directory()));
    let mut session = SearchSession::new(service.clone());

    session.submit("Turku");
    session.settle().await;
    assert_eq!(session.state().total, 3);

    session.clear();
    let state = session.state();
    assert_eq!(state.committed_term, "");
    assert_eq!(state.page, 1);
    assert_eq!(state.total, 0);
    assert!(state.results.is_empty());
    assert!(!state.has_searched);

    assert!(!session.go_to_page(2).unwrap());
    assert_eq!(service.call_count(), 1);
}
