//! Item change event types.

use serde::{Deserialize, Serialize};

use crate::items::ListItem;

/// Change events emitted after successful item mutations.
///
/// Events carry the full authoritative record (or, for deletions, the item
/// identity); consumers merge them by replacing whole records, never by
/// patching fields, so delivery is idempotent.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemChangeEvent {
    /// An item was added to a list.
    Inserted { item: ListItem },

    /// An item's fields changed; `item` is the complete new record.
    Updated { item: ListItem },

    /// An item was removed from a list.
    Deleted { list_id: String, item_id: String },
}

impl ItemChangeEvent {
    /// Creates an Inserted event.
    pub fn inserted(item: ListItem) -> Self {
        Self::Inserted { item }
    }

    /// Creates an Updated event.
    pub fn updated(item: ListItem) -> Self {
        Self::Updated { item }
    }

    /// Creates a Deleted event.
    pub fn deleted(list_id: String, item_id: String) -> Self {
        Self::Deleted { list_id, item_id }
    }

    /// The list this event belongs to; used to route fan-out.
    pub fn list_id(&self) -> &str {
        match self {
            Self::Inserted { item } | Self::Updated { item } => &item.list_id,
            Self::Deleted { list_id, .. } => list_id,
        }
    }

    /// The affected item's identity.
    pub fn item_id(&self) -> &str {
        match self {
            Self::Inserted { item } | Self::Updated { item } => &item.id,
            Self::Deleted { item_id, .. } => item_id,
        }
    }
}
