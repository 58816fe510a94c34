use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::layaway_model::{LayawayItem, LayawayItemUpdate, NewLayawayItem};
use super::layaway_traits::{LayawayRepositoryTrait, LayawayServiceTrait};
use crate::context::UserContext;
use crate::errors::{Result, ValidationError};
use crate::Error;

/// Service for layaway items and their deposits.
pub struct LayawayService {
    repository: Arc<dyn LayawayRepositoryTrait>,
}

impl LayawayService {
    /// Creates a new LayawayService instance.
    pub fn new(repository: Arc<dyn LayawayRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl LayawayServiceTrait for LayawayService {
    fn get_items(&self, ctx: &UserContext) -> Result<Vec<LayawayItem>> {
        self.repository.list_by_owner(&ctx.user_id)
    }

    async fn create_item(
        &self,
        ctx: &UserContext,
        new_item: NewLayawayItem,
    ) -> Result<LayawayItem> {
        new_item.validate()?;
        self.repository.create(&ctx.user_id, new_item).await
    }

    async fn update_item(&self, item_id: &str, update: LayawayItemUpdate) -> Result<LayawayItem> {
        update.validate()?;
        self.repository.update(item_id, update).await
    }

    async fn delete_item(&self, item_id: &str) -> Result<()> {
        self.repository.delete(item_id).await?;
        Ok(())
    }

    async fn add_payment(&self, item_id: &str, amount: Decimal) -> Result<LayawayItem> {
        if amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Payment amount must be positive".to_string(),
            )));
        }
        let payment = self.repository.add_payment(item_id, amount).await?;
        debug!("Payment {} of {} added to item {}", payment.id, amount, item_id);
        // Reload so the total reflects the authoritative payment set.
        self.repository.get_by_id(item_id)
    }

    async fn delete_payment(&self, item_id: &str, payment_id: &str) -> Result<LayawayItem> {
        self.repository.delete_payment(payment_id).await?;
        debug!("Payment {} deleted from item {}", payment_id, item_id);
        self.repository.get_by_id(item_id)
    }
}
