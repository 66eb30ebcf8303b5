//! HTTP handlers for the four URL patterns.
//!
//! Handlers are thin glue: extract the request parts, call the
//! [`ListStore`], render or redirect. Read-only requests never mutate
//! state.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use serde::Deserialize;

use lystra_core::ListId;
use lystra_store::ListStore;

use crate::error::Result;
use crate::templates;

/// Shared application state: the list repository behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ListStore>,
}

impl AppState {
    /// Wrap a store for sharing across request tasks.
    pub fn new(store: Arc<dyn ListStore>) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &dyn ListStore {
        self.store.as_ref()
    }
}

/// Form payload for new-list and add-item submissions.
///
/// `item_text` is optional at the extraction layer so its absence maps
/// to our own 400 rather than the framework's rejection.
#[derive(Debug, Deserialize)]
pub struct ItemForm {
    /// Text of the item to create.
    pub item_text: Option<String>,
}

impl ItemForm {
    fn item_text(self) -> Result<String> {
        self.item_text
            .ok_or_else(|| lystra_core::Error::missing_field("item_text").into())
    }
}

/// `GET /` — render the home page. No side effects.
pub async fn home_page() -> Html<String> {
    Html(templates::home_page())
}

/// `POST /lists/new` — create a list with its first item, then redirect
/// to the new list's detail page.
pub async fn new_list(State(state): State<AppState>, Form(form): Form<ItemForm>) -> Result<Response> {
    let text = form.item_text()?;
    let list_id = state.store().create_list().await?;
    state.store().create_item(list_id, &text).await?;
    tracing::info!(list_id = %list_id, "new list created");
    Ok(redirect_to_list(list_id))
}

/// `GET /lists/{list_id}/` — render the list's items in creation order.
pub async fn view_list(
    State(state): State<AppState>,
    Path(list_id): Path<ListId>,
) -> Result<Html<String>> {
    let list = state.store().get_list(list_id).await?;
    let items = state.store().list_items(list.id).await?;
    Ok(Html(templates::list_page(list.id, &items)))
}

/// `POST /lists/{list_id}/add_item` — append an item to an existing
/// list, then redirect back to its detail page.
pub async fn add_item(
    State(state): State<AppState>,
    Path(list_id): Path<ListId>,
    Form(form): Form<ItemForm>,
) -> Result<Response> {
    let text = form.item_text()?;
    state.store().create_item(list_id, &text).await?;
    Ok(redirect_to_list(list_id))
}

// The compatibility contract is a literal 302 Found; axum's `Redirect`
// helpers emit 303/307.
fn redirect_to_list(list_id: ListId) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, format!("/lists/{list_id}/"))],
    )
        .into_response()
}
