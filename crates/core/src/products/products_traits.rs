//! Saved product repository and service traits.

use async_trait::async_trait;

use super::products_model::{NewSavedProduct, SavedProduct, SavedProductUpdate};
use crate::context::UserContext;
use crate::errors::Result;

/// Trait defining the contract for saved product repository operations.
#[async_trait]
pub trait SavedProductRepositoryTrait: Send + Sync {
    /// Lists an owner's saved products ordered by name.
    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<SavedProduct>>;

    /// Creates a saved product for an owner.
    async fn create(&self, owner_id: &str, new_product: NewSavedProduct) -> Result<SavedProduct>;

    /// Updates one of an owner's saved products.
    async fn update(
        &self,
        owner_id: &str,
        product_id: &str,
        update: SavedProductUpdate,
    ) -> Result<SavedProduct>;

    /// Deletes one of an owner's saved products.
    async fn delete(&self, owner_id: &str, product_id: &str) -> Result<usize>;
}

/// Trait defining the contract for saved product service operations.
#[async_trait]
pub trait SavedProductServiceTrait: Send + Sync {
    /// Lists the caller's catalog, ordered by name.
    fn get_products(&self, ctx: &UserContext) -> Result<Vec<SavedProduct>>;

    /// Saves a product to the caller's catalog.
    async fn save_product(
        &self,
        ctx: &UserContext,
        new_product: NewSavedProduct,
    ) -> Result<SavedProduct>;

    /// Updates a catalog entry.
    async fn update_product(
        &self,
        ctx: &UserContext,
        product_id: &str,
        update: SavedProductUpdate,
    ) -> Result<SavedProduct>;

    /// Deletes a catalog entry.
    async fn delete_product(&self, ctx: &UserContext, product_id: &str) -> Result<()>;

    /// Returns up to five suggestions matching the query.
    fn suggest(&self, ctx: &UserContext, query: &str) -> Result<Vec<SavedProduct>>;
}
