//! Layaway repository and service traits.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::layaway_model::{LayawayItem, LayawayItemUpdate, LayawayPayment, NewLayawayItem};
use crate::context::UserContext;
use crate::errors::Result;

/// Trait defining the contract for layaway repository operations.
///
/// Implementations load each item with its payment set; `total_paid` is
/// computed by the domain model, never stored.
#[async_trait]
pub trait LayawayRepositoryTrait: Send + Sync {
    /// Retrieves one layaway item with its payments.
    fn get_by_id(&self, item_id: &str) -> Result<LayawayItem>;

    /// Lists an owner's layaway items with payments, newest first.
    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<LayawayItem>>;

    /// Creates a layaway item for an owner.
    async fn create(&self, owner_id: &str, new_item: NewLayawayItem) -> Result<LayawayItem>;

    /// Updates a layaway item.
    async fn update(&self, item_id: &str, update: LayawayItemUpdate) -> Result<LayawayItem>;

    /// Deletes a layaway item and, through the store's cascade, its payments.
    async fn delete(&self, item_id: &str) -> Result<usize>;

    /// Records one deposit against an item.
    async fn add_payment(&self, item_id: &str, amount: Decimal) -> Result<LayawayPayment>;

    /// Deletes one deposit.
    async fn delete_payment(&self, payment_id: &str) -> Result<usize>;
}

/// Trait defining the contract for layaway service operations.
#[async_trait]
pub trait LayawayServiceTrait: Send + Sync {
    /// Lists the caller's layaway items with recomputed totals.
    fn get_items(&self, ctx: &UserContext) -> Result<Vec<LayawayItem>>;

    /// Creates a layaway item for the caller.
    async fn create_item(&self, ctx: &UserContext, new_item: NewLayawayItem)
        -> Result<LayawayItem>;

    /// Updates a layaway item.
    async fn update_item(&self, item_id: &str, update: LayawayItemUpdate) -> Result<LayawayItem>;

    /// Deletes a layaway item with its payments.
    async fn delete_item(&self, item_id: &str) -> Result<()>;

    /// Records a deposit and returns the item with its total recomputed.
    async fn add_payment(&self, item_id: &str, amount: Decimal) -> Result<LayawayItem>;

    /// Deletes a deposit and returns the item with its total recomputed.
    async fn delete_payment(&self, item_id: &str, payment_id: &str) -> Result<LayawayItem>;
}
