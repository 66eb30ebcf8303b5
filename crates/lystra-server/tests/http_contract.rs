//! HTTP contract tests for the Lystra server.
//!
//! Drives the real router through `tower::ServiceExt::oneshot`, backed
//! by the in-memory store (and once by SQLite, end to end).

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use lystra_core::{Item, ListId};
use lystra_server::{router, templates, AppState};
use lystra_store::{ListStore, MemoryStore, SqliteStore};

fn app_with_store(store: Arc<dyn ListStore>) -> Router {
    router(AppState::new(store))
}

fn app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (app_with_store(store.clone()), store)
}

fn get(path: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

fn post_form(path: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(response: &axum::response::Response) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect should carry a Location header")
        .to_str()
        .unwrap()
        .to_string()
}

// ============================================================================
// Home page
// ============================================================================

#[tokio::test]
async fn test_home_page_returns_correct_html() {
    let (app, _) = app();
    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, templates::home_page());
}

#[tokio::test]
async fn test_home_page_never_creates_rows() {
    let (app, store) = app();
    for _ in 0..3 {
        let response = app.clone().oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
    // No list was ever allocated, so the first possible id is unknown.
    assert!(store.get_list(ListId::new(1)).await.is_err());
}

// ============================================================================
// New list
// ============================================================================

#[tokio::test]
async fn test_new_list_creates_list_with_item_and_redirects() {
    let (app, store) = app();
    let response = app
        .oneshot(post_form("/lists/new", "item_text=A+new+list+item"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    let target = location(&response);

    // The redirect target names the list just created.
    let list_id: ListId = target
        .strip_prefix("/lists/")
        .and_then(|s| s.strip_suffix('/'))
        .expect("redirect should match /lists/{id}/")
        .parse()
        .unwrap();

    let items = store.list_items(list_id).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].text, "A new list item");
    assert_eq!(items[0].list_id, list_id);
}

#[tokio::test]
async fn test_new_list_redirects_to_its_own_list_not_another() {
    let (app, store) = app();
    // A pre-existing list must not capture the redirect.
    let older = store.create_list().await.unwrap();

    let response = app
        .oneshot(post_form("/lists/new", "item_text=mine"))
        .await
        .unwrap();
    let target = location(&response);

    assert_ne!(target, format!("/lists/{older}/"));
    assert!(store.list_items(older).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_new_list_without_item_text_is_bad_request() {
    let (app, store) = app();
    let response = app.oneshot(post_form("/lists/new", "")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(store.get_list(ListId::new(1)).await.is_err());
}

// ============================================================================
// View list
// ============================================================================

#[tokio::test]
async fn test_view_list_shows_only_its_items_in_order() {
    let (app, store) = app();
    let list_a = store.create_list().await.unwrap();
    store.create_item(list_a, "itemey 1").await.unwrap();
    store.create_item(list_a, "itemey 2").await.unwrap();
    let list_b = store.create_list().await.unwrap();
    store.create_item(list_b, "x").await.unwrap();
    store.create_item(list_b, "y").await.unwrap();

    let response = app.oneshot(get(&format!("/lists/{list_a}/"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("itemey 1"));
    assert!(html.contains("itemey 2"));
    assert!(!html.contains(": x</td>"));
    assert!(!html.contains(": y</td>"));
    let first = html.find("itemey 1").unwrap();
    let second = html.find("itemey 2").unwrap();
    assert!(first < second);
}

#[tokio::test]
async fn test_view_list_html_matches_renderer_exactly() {
    let (app, store) = app();
    let list_id = store.create_list().await.unwrap();
    let first = store.create_item(list_id, "itemey 1").await.unwrap();
    let second = store.create_item(list_id, "itemey 2").await.unwrap();

    let response = app.oneshot(get(&format!("/lists/{list_id}/"))).await.unwrap();
    let html = body_string(response).await;

    let items = [
        Item {
            id: first,
            list_id,
            text: "itemey 1".to_string(),
        },
        Item {
            id: second,
            list_id,
            text: "itemey 2".to_string(),
        },
    ];
    assert_eq!(html, templates::list_page(list_id, &items));
}

#[tokio::test]
async fn test_view_unknown_list_is_not_found() {
    let (app, _) = app();
    let response = app.oneshot(get("/lists/999/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_view_list_non_numeric_id_is_client_error() {
    let (app, _) = app();
    let response = app.oneshot(get("/lists/abc/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Add item
// ============================================================================

#[tokio::test]
async fn test_add_item_appends_and_redirects_to_list() {
    let (app, store) = app();
    let list_id = store.create_list().await.unwrap();
    store.create_item(list_id, "first").await.unwrap();

    let response = app
        .oneshot(post_form(
            &format!("/lists/{list_id}/add_item"),
            "item_text=second",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), format!("/lists/{list_id}/"));

    let texts: Vec<_> = store
        .list_items(list_id)
        .await
        .unwrap()
        .into_iter()
        .map(|i| i.text)
        .collect();
    assert_eq!(texts, ["first", "second"]);
}

#[tokio::test]
async fn test_add_item_to_unknown_list_is_not_found() {
    let (app, _) = app();
    let response = app
        .oneshot(post_form("/lists/999/add_item", "item_text=orphan"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_item_without_item_text_is_bad_request() {
    let (app, store) = app();
    let list_id = store.create_list().await.unwrap();

    let response = app
        .oneshot(post_form(&format!("/lists/{list_id}/add_item"), ""))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(store.list_items(list_id).await.unwrap().is_empty());
}

// ============================================================================
// End to end against SQLite
// ============================================================================

#[tokio::test]
async fn test_full_flow_against_sqlite() {
    let store = Arc::new(SqliteStore::in_memory().await.unwrap());
    let app = app_with_store(store.clone());

    let response = app
        .clone()
        .oneshot(post_form("/lists/new", "item_text=itemey+1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    let target = location(&response);

    let response = app
        .clone()
        .oneshot(post_form(&format!("{target}add_item"), "item_text=itemey+2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), target);

    let response = app.clone().oneshot(get(&target)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("1: itemey 1"));
    assert!(html.contains("2: itemey 2"));
}
