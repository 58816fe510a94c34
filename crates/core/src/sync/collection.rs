//! In-memory item collection for one open list view.

use super::change_event::ItemChangeEvent;
use crate::items::{pending_total, purchased_total, ListItem};
use rust_decimal::Decimal;

/// The local, feed-maintained copy of one list's items.
///
/// Seeded from a full fetch in creation order, then kept consistent by
/// merging change events. Merging always replaces whole records by identity,
/// so applying the same event twice yields the same state (the feed is
/// at-least-once).
#[derive(Debug, Clone)]
pub struct ItemCollection {
    list_id: String,
    items: Vec<ListItem>,
}

impl ItemCollection {
    /// Seeds the collection from a fetched snapshot.
    pub fn new(list_id: impl Into<String>, items: Vec<ListItem>) -> Self {
        Self {
            list_id: list_id.into(),
            items,
        }
    }

    pub fn list_id(&self) -> &str {
        &self.list_id
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Merges one change event into the collection.
    ///
    /// - insertion: append, unless the item is already present
    /// - update: replace the matching record in full; unknown ids are ignored
    /// - deletion: remove the matching record
    ///
    /// Events for other lists are ignored.
    pub fn apply(&mut self, event: ItemChangeEvent) {
        if event.list_id() != self.list_id {
            return;
        }
        match event {
            ItemChangeEvent::Inserted { item } => {
                if !self.items.iter().any(|existing| existing.id == item.id) {
                    self.items.push(item);
                }
            }
            ItemChangeEvent::Updated { item } => {
                if let Some(existing) = self.items.iter_mut().find(|e| e.id == item.id) {
                    *existing = item;
                }
            }
            ItemChangeEvent::Deleted { item_id, .. } => {
                self.items.retain(|existing| existing.id != item_id);
            }
        }
    }

    /// Removes an item locally; used by the optimistic delete path.
    pub fn remove(&mut self, item_id: &str) {
        self.items.retain(|existing| existing.id != item_id);
    }

    /// Replaces the whole collection; used to restore a pre-delete snapshot.
    pub fn replace_all(&mut self, items: Vec<ListItem>) {
        self.items = items;
    }

    pub fn pending_total(&self) -> Decimal {
        pending_total(&self.items)
    }

    pub fn purchased_total(&self) -> Decimal {
        purchased_total(&self.items)
    }
}
