//! Repository trait for list storage.
//!
//! [`ListStore`] is the seam between HTTP handlers and storage
//! technology. Implementations must preserve two invariants:
//!
//! - an item always belongs to an existing list
//! - items come back in creation order, and only for the list asked for

use async_trait::async_trait;
use lystra_core::{Item, ItemId, List, ListId, Result};

/// Abstract list repository.
///
/// # Async
///
/// All methods are async to support I/O-bound backends without
/// blocking request tasks.
#[async_trait]
pub trait ListStore: Send + Sync {
    /// Allocate a new, empty list.
    ///
    /// Always succeeds barring a backend failure.
    async fn create_list(&self) -> Result<ListId>;

    /// Append an item with the given text to an existing list.
    ///
    /// Persists exactly one row. Fails with
    /// [`Error::ListNotFound`](lystra_core::Error::ListNotFound) if
    /// `list_id` does not reference an existing list.
    async fn create_item(&self, list_id: ListId, text: &str) -> Result<ItemId>;

    /// Fetch a list by identifier.
    ///
    /// Fails with [`Error::ListNotFound`](lystra_core::Error::ListNotFound)
    /// if absent.
    async fn get_list(&self, list_id: ListId) -> Result<List>;

    /// Fetch every item of a list, in creation order.
    ///
    /// Returns an empty vec for an existing list with no items. Never
    /// includes another list's items. Fails with
    /// [`Error::ListNotFound`](lystra_core::Error::ListNotFound) if the
    /// list itself is absent.
    async fn list_items(&self, list_id: ListId) -> Result<Vec<Item>>;
}
