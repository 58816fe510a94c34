use async_trait::async_trait;
use diesel::prelude::*;

use canastilla_core::products::{
    NewSavedProduct, SavedProduct, SavedProductRepositoryTrait, SavedProductUpdate,
};
use canastilla_core::Result;

use super::model::SavedProductDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::saved_products;
use crate::schema::saved_products::dsl::*;

/// Repository for the per-owner saved product catalog
pub struct SavedProductRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl SavedProductRepository {
    /// Creates a new SavedProductRepository instance
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl SavedProductRepositoryTrait for SavedProductRepository {
    fn list_by_owner(&self, owner: &str) -> Result<Vec<SavedProduct>> {
        let mut conn = get_connection(&self.pool)?;
        let results = saved_products
            .filter(owner_id.eq(owner))
            .select(SavedProductDB::as_select())
            .order(name.asc())
            .load::<SavedProductDB>(&mut conn)
            .into_core()?;
        Ok(results.into_iter().map(SavedProduct::from).collect())
    }

    async fn create(&self, owner: &str, new_product: NewSavedProduct) -> Result<SavedProduct> {
        let owner = owner.to_string();
        self.writer
            .exec(move |conn| {
                let product_db = SavedProductDB {
                    id: uuid::Uuid::new_v4().to_string(),
                    owner_id: owner,
                    name: new_product.name.trim().to_string(),
                    default_price: new_product.default_price.map(|p| p.to_string()),
                    brand: new_product
                        .brand
                        .map(|b| b.trim().to_string())
                        .filter(|b| !b.is_empty()),
                    model: new_product
                        .model
                        .map(|m| m.trim().to_string())
                        .filter(|m| !m.is_empty()),
                    created_at: chrono::Utc::now().naive_utc(),
                };
                diesel::insert_into(saved_products::table)
                    .values(&product_db)
                    .execute(conn)
                    .into_core()?;
                Ok(product_db.into())
            })
            .await
    }

    async fn update(
        &self,
        owner: &str,
        product_id: &str,
        update: SavedProductUpdate,
    ) -> Result<SavedProduct> {
        let owner = owner.to_string();
        let product_id = product_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::update(
                    saved_products
                        .find(&product_id)
                        .filter(owner_id.eq(&owner)),
                )
                .set((
                    name.eq(update.name.trim().to_string()),
                    default_price.eq(update.default_price.map(|p| p.to_string())),
                    brand.eq(update
                        .brand
                        .map(|b| b.trim().to_string())
                        .filter(|b| !b.is_empty())),
                    model.eq(update
                        .model
                        .map(|m| m.trim().to_string())
                        .filter(|m| !m.is_empty())),
                ))
                .execute(conn)
                .into_core()?;

                let result = saved_products
                    .select(SavedProductDB::as_select())
                    .find(&product_id)
                    .first::<SavedProductDB>(conn)
                    .into_core()?;
                Ok(result.into())
            })
            .await
    }

    async fn delete(&self, owner: &str, product_id: &str) -> Result<usize> {
        let owner = owner.to_string();
        let product_id = product_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(
                    saved_products
                        .find(&product_id)
                        .filter(owner_id.eq(&owner)),
                )
                .execute(conn)
                .into_core()
            })
            .await
    }
}
