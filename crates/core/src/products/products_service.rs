use std::sync::Arc;

use super::products_model::{
    search_products, NewSavedProduct, SavedProduct, SavedProductUpdate,
};
use super::products_traits::{SavedProductRepositoryTrait, SavedProductServiceTrait};
use crate::context::UserContext;
use crate::errors::Result;

/// Service for the per-owner saved product catalog.
pub struct SavedProductService {
    repository: Arc<dyn SavedProductRepositoryTrait>,
}

impl SavedProductService {
    /// Creates a new SavedProductService instance.
    pub fn new(repository: Arc<dyn SavedProductRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl SavedProductServiceTrait for SavedProductService {
    fn get_products(&self, ctx: &UserContext) -> Result<Vec<SavedProduct>> {
        self.repository.list_by_owner(&ctx.user_id)
    }

    async fn save_product(
        &self,
        ctx: &UserContext,
        new_product: NewSavedProduct,
    ) -> Result<SavedProduct> {
        new_product.validate()?;
        self.repository.create(&ctx.user_id, new_product).await
    }

    async fn update_product(
        &self,
        ctx: &UserContext,
        product_id: &str,
        update: SavedProductUpdate,
    ) -> Result<SavedProduct> {
        update.validate()?;
        self.repository
            .update(&ctx.user_id, product_id, update)
            .await
    }

    async fn delete_product(&self, ctx: &UserContext, product_id: &str) -> Result<()> {
        self.repository.delete(&ctx.user_id, product_id).await?;
        Ok(())
    }

    fn suggest(&self, ctx: &UserContext, query: &str) -> Result<Vec<SavedProduct>> {
        let products = self.repository.list_by_owner(&ctx.user_id)?;
        Ok(search_products(&products, query)
            .into_iter()
            .cloned()
            .collect())
    }
}
