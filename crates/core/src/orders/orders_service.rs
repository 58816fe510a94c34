use std::sync::Arc;

use super::orders_model::{CustomOrder, CustomOrderUpdate, NewCustomOrder};
use super::orders_traits::{OrderRepositoryTrait, OrderServiceTrait};
use crate::context::UserContext;
use crate::errors::Result;

/// Service for managing custom orders.
pub struct OrderService {
    repository: Arc<dyn OrderRepositoryTrait>,
}

impl OrderService {
    /// Creates a new OrderService instance.
    pub fn new(repository: Arc<dyn OrderRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl OrderServiceTrait for OrderService {
    fn get_orders(&self, ctx: &UserContext) -> Result<Vec<CustomOrder>> {
        self.repository.list_by_owner(&ctx.user_id)
    }

    async fn create_order(
        &self,
        ctx: &UserContext,
        new_order: NewCustomOrder,
    ) -> Result<CustomOrder> {
        new_order.validate()?;
        self.repository.create(&ctx.user_id, new_order).await
    }

    async fn update_order(&self, order_id: &str, update: CustomOrderUpdate) -> Result<CustomOrder> {
        update.validate()?;
        self.repository.update(order_id, update).await
    }

    async fn delete_order(&self, order_id: &str) -> Result<()> {
        self.repository.delete(order_id).await?;
        Ok(())
    }
}
