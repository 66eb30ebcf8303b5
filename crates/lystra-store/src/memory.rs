//! In-memory list storage.
//!
//! Mirrors the semantics of [`SqliteStore`](crate::SqliteStore) without
//! touching disk. Used by handler unit tests and anywhere an ephemeral
//! store is good enough.

use std::sync::Mutex;

use async_trait::async_trait;
use lystra_core::{Error, Item, ItemId, List, ListId, Result};

use crate::traits::ListStore;

#[derive(Default)]
struct Inner {
    next_list_id: i64,
    next_item_id: i64,
    lists: Vec<ListId>,
    items: Vec<Item>,
}

/// In-memory list repository.
///
/// State is held behind a `Mutex`; critical sections are short and the
/// lock is never held across an await point.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned lock means a panic mid-insert; nothing here is
        // left half-written, so continue with the inner state.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl ListStore for MemoryStore {
    async fn create_list(&self) -> Result<ListId> {
        let mut inner = self.lock();
        inner.next_list_id += 1;
        let id = ListId::new(inner.next_list_id);
        inner.lists.push(id);
        Ok(id)
    }

    async fn create_item(&self, list_id: ListId, text: &str) -> Result<ItemId> {
        let mut inner = self.lock();
        if !inner.lists.contains(&list_id) {
            return Err(Error::list_not_found(list_id));
        }
        inner.next_item_id += 1;
        let id = ItemId::new(inner.next_item_id);
        inner.items.push(Item {
            id,
            list_id,
            text: text.to_string(),
        });
        Ok(id)
    }

    async fn get_list(&self, list_id: ListId) -> Result<List> {
        let inner = self.lock();
        if inner.lists.contains(&list_id) {
            Ok(List { id: list_id })
        } else {
            Err(Error::list_not_found(list_id))
        }
    }

    async fn list_items(&self, list_id: ListId) -> Result<Vec<Item>> {
        let inner = self.lock();
        if !inner.lists.contains(&list_id) {
            return Err(Error::list_not_found(list_id));
        }
        Ok(inner
            .items
            .iter()
            .filter(|item| item.list_id == list_id)
            .cloned()
            .collect())
    }
}
