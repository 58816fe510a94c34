//! Item repository and service traits.
//!
//! These traits define the contract for item operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::items_model::{ColorStatus, ListItem, ListItemUpdate, NewListItem, PurchaserInfo};
use super::items_reconciler::ClaimStatus;
use crate::errors::Result;

/// Trait defining the contract for item repository operations.
#[async_trait]
pub trait ItemRepositoryTrait: Send + Sync {
    /// Retrieves an item by its ID.
    fn get_by_id(&self, item_id: &str) -> Result<ListItem>;

    /// Lists a list's items ordered by creation time (stable insertion order).
    fn list_by_list_id(&self, list_id: &str) -> Result<Vec<ListItem>>;

    /// Creates a new item.
    async fn create(&self, new_item: NewListItem) -> Result<ListItem>;

    /// Updates an item's editable fields.
    async fn update(&self, item_id: &str, update: ListItemUpdate) -> Result<ListItem>;

    /// Persists a reconciled claim on one item.
    async fn apply_claim(&self, item_id: &str, claim: ClaimStatus) -> Result<ListItem>;

    /// Persists the same reconciled claim on a set of items as a single
    /// request: either every listed item is updated or none is.
    async fn apply_claim_bulk(
        &self,
        item_ids: &[String],
        claim: ClaimStatus,
    ) -> Result<Vec<ListItem>>;

    /// Sets an item's color status.
    async fn set_color_status(&self, item_id: &str, color_status: ColorStatus)
        -> Result<ListItem>;

    /// Deletes an item by its ID. Returns the number of deleted records.
    async fn delete(&self, item_id: &str) -> Result<usize>;
}

/// Trait defining the contract for item service operations.
///
/// The service layer validates input, runs the claim reconciler, and emits a
/// change event after every successful mutation.
#[async_trait]
pub trait ItemServiceTrait: Send + Sync {
    /// Retrieves an item by ID.
    fn get_item(&self, item_id: &str) -> Result<ListItem>;

    /// Lists a list's items in creation order.
    fn get_items(&self, list_id: &str) -> Result<Vec<ListItem>>;

    /// Adds a validated item to a list.
    async fn add_item(&self, new_item: NewListItem) -> Result<ListItem>;

    /// Applies the full edit form to an item.
    async fn update_item(&self, item_id: &str, update: ListItemUpdate) -> Result<ListItem>;

    /// Sets or clears the purchase claim on an item.
    async fn set_purchased(
        &self,
        item_id: &str,
        value: bool,
        purchaser_info: Option<PurchaserInfo>,
    ) -> Result<ListItem>;

    /// Sets or clears the reservation claim on an item.
    async fn set_reserved(
        &self,
        item_id: &str,
        value: bool,
        purchaser_info: Option<PurchaserInfo>,
    ) -> Result<ListItem>;

    /// Advances an item's color status one step along the cycle.
    async fn cycle_color_status(&self, item_id: &str) -> Result<ListItem>;

    /// Applies the same purchase transition to a batch of items atomically.
    async fn bulk_set_purchased(
        &self,
        item_ids: &[String],
        value: bool,
        purchaser_info: Option<PurchaserInfo>,
    ) -> Result<Vec<ListItem>>;

    /// Deletes an item.
    async fn delete_item(&self, item_id: &str) -> Result<()>;
}
