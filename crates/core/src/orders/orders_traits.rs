//! Custom order repository and service traits.

use async_trait::async_trait;

use super::orders_model::{CustomOrder, CustomOrderUpdate, NewCustomOrder};
use crate::context::UserContext;
use crate::errors::Result;

/// Trait defining the contract for custom order repository operations.
#[async_trait]
pub trait OrderRepositoryTrait: Send + Sync {
    /// Lists an owner's orders, newest first.
    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<CustomOrder>>;

    /// Creates a new order for an owner.
    async fn create(&self, owner_id: &str, new_order: NewCustomOrder) -> Result<CustomOrder>;

    /// Updates an order.
    async fn update(&self, order_id: &str, update: CustomOrderUpdate) -> Result<CustomOrder>;

    /// Deletes an order by its ID.
    async fn delete(&self, order_id: &str) -> Result<usize>;
}

/// Trait defining the contract for custom order service operations.
#[async_trait]
pub trait OrderServiceTrait: Send + Sync {
    /// Lists the caller's orders, newest first.
    fn get_orders(&self, ctx: &UserContext) -> Result<Vec<CustomOrder>>;

    /// Creates an order for the caller.
    async fn create_order(&self, ctx: &UserContext, new_order: NewCustomOrder)
        -> Result<CustomOrder>;

    /// Updates an order.
    async fn update_order(&self, order_id: &str, update: CustomOrderUpdate) -> Result<CustomOrder>;

    /// Deletes an order.
    async fn delete_order(&self, order_id: &str) -> Result<()>;
}
