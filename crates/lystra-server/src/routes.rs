//! URL routing.
//!
//! Static mapping, exact match; the single dynamic segment is the
//! numeric list identifier.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{self, AppState};

/// Build the application router over the given state.
///
/// | Method | Pattern                     | Handler    |
/// |--------|-----------------------------|------------|
/// | GET    | `/`                         | home_page  |
/// | POST   | `/lists/new`                | new_list   |
/// | GET    | `/lists/{list_id}/`         | view_list  |
/// | POST   | `/lists/{list_id}/add_item` | add_item   |
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home_page))
        .route("/lists/new", post(handlers::new_list))
        .route("/lists/{list_id}/", get(handlers::view_list))
        .route("/lists/{list_id}/add_item", post(handlers::add_item))
        .with_state(state)
}
