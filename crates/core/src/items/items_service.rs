use log::debug;
use std::sync::Arc;

use super::items_model::{ListItem, ListItemUpdate, NewListItem, PurchaserInfo};
use super::items_reconciler::{purchase_status, reserve_status};
use super::items_traits::{ItemRepositoryTrait, ItemServiceTrait};
use crate::errors::{Result, ValidationError};
use crate::sync::{ItemChangeEvent, ItemChangeSink};
use crate::Error;

/// Service for managing list items.
///
/// Every successful mutation is followed by exactly one change event per
/// affected item; a failed store call emits nothing.
pub struct ItemService {
    repository: Arc<dyn ItemRepositoryTrait>,
    change_sink: Arc<dyn ItemChangeSink>,
}

impl ItemService {
    /// Creates a new ItemService instance.
    pub fn new(
        repository: Arc<dyn ItemRepositoryTrait>,
        change_sink: Arc<dyn ItemChangeSink>,
    ) -> Self {
        Self {
            repository,
            change_sink,
        }
    }
}

#[async_trait::async_trait]
impl ItemServiceTrait for ItemService {
    fn get_item(&self, item_id: &str) -> Result<ListItem> {
        self.repository.get_by_id(item_id)
    }

    fn get_items(&self, list_id: &str) -> Result<Vec<ListItem>> {
        self.repository.list_by_list_id(list_id)
    }

    async fn add_item(&self, new_item: NewListItem) -> Result<ListItem> {
        new_item.validate()?;
        let item = self.repository.create(new_item).await?;
        debug!("Added item {} to list {}", item.id, item.list_id);
        self.change_sink
            .emit(ItemChangeEvent::inserted(item.clone()));
        Ok(item)
    }

    async fn update_item(&self, item_id: &str, update: ListItemUpdate) -> Result<ListItem> {
        update.validate()?;

        // The edit form never clears a purchase, so reserving a purchased
        // item here would break the exclusivity invariant.
        if update.is_reserved {
            let current = self.repository.get_by_id(item_id)?;
            if current.is_purchased {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "A purchased item cannot be reserved".to_string(),
                )));
            }
        }

        let item = self.repository.update(item_id, update).await?;
        self.change_sink.emit(ItemChangeEvent::updated(item.clone()));
        Ok(item)
    }

    async fn set_purchased(
        &self,
        item_id: &str,
        value: bool,
        purchaser_info: Option<PurchaserInfo>,
    ) -> Result<ListItem> {
        let claim = purchase_status(value, purchaser_info.as_ref())?;
        let item = self.repository.apply_claim(item_id, claim).await?;
        debug!("Item {} purchase flag set to {}", item_id, value);
        self.change_sink.emit(ItemChangeEvent::updated(item.clone()));
        Ok(item)
    }

    async fn set_reserved(
        &self,
        item_id: &str,
        value: bool,
        purchaser_info: Option<PurchaserInfo>,
    ) -> Result<ListItem> {
        let current = self.repository.get_by_id(item_id)?;
        let claim = reserve_status(&current.claim(), value, purchaser_info.as_ref());
        let item = self.repository.apply_claim(item_id, claim).await?;
        debug!("Item {} reservation flag set to {}", item_id, value);
        self.change_sink.emit(ItemChangeEvent::updated(item.clone()));
        Ok(item)
    }

    async fn cycle_color_status(&self, item_id: &str) -> Result<ListItem> {
        let current = self.repository.get_by_id(item_id)?;
        let item = self
            .repository
            .set_color_status(item_id, current.color_status.next())
            .await?;
        self.change_sink.emit(ItemChangeEvent::updated(item.clone()));
        Ok(item)
    }

    async fn bulk_set_purchased(
        &self,
        item_ids: &[String],
        value: bool,
        purchaser_info: Option<PurchaserInfo>,
    ) -> Result<Vec<ListItem>> {
        if item_ids.is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "No items selected".to_string(),
            )));
        }

        let claim = purchase_status(value, purchaser_info.as_ref())?;
        let items = self.repository.apply_claim_bulk(item_ids, claim).await?;
        debug!("Bulk purchase update applied to {} items", items.len());
        self.change_sink.emit_batch(
            items
                .iter()
                .map(|item| ItemChangeEvent::updated(item.clone()))
                .collect(),
        );
        Ok(items)
    }

    async fn delete_item(&self, item_id: &str) -> Result<()> {
        let item = self.repository.get_by_id(item_id)?;
        self.repository.delete(item_id).await?;
        debug!("Deleted item {} from list {}", item_id, item.list_id);
        self.change_sink
            .emit(ItemChangeEvent::deleted(item.list_id, item.id));
        Ok(())
    }
}
