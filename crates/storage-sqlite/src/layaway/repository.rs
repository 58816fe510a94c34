use async_trait::async_trait;
use diesel::prelude::*;
use rust_decimal::Decimal;

use canastilla_core::layaway::{
    LayawayItem, LayawayItemUpdate, LayawayPayment, LayawayRepositoryTrait, NewLayawayItem,
};
use canastilla_core::Result;

use super::model::{LayawayItemDB, LayawayPaymentDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{layaway_items, layaway_payments};

/// Repository for managing layaway items and their payments
pub struct LayawayRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl LayawayRepository {
    /// Creates a new LayawayRepository instance
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl LayawayRepositoryTrait for LayawayRepository {
    fn get_by_id(&self, item_id: &str) -> Result<LayawayItem> {
        let mut conn = get_connection(&self.pool)?;
        let item_db = layaway_items::table
            .select(LayawayItemDB::as_select())
            .find(item_id)
            .first::<LayawayItemDB>(&mut conn)
            .into_core()?;
        let payments = LayawayPaymentDB::belonging_to(&item_db)
            .select(LayawayPaymentDB::as_select())
            .order(layaway_payments::created_at.asc())
            .load::<LayawayPaymentDB>(&mut conn)
            .into_core()?;
        Ok(item_db.into_domain(payments))
    }

    fn list_by_owner(&self, owner: &str) -> Result<Vec<LayawayItem>> {
        let mut conn = get_connection(&self.pool)?;
        let items_db = layaway_items::table
            .filter(layaway_items::owner_id.eq(owner))
            .select(LayawayItemDB::as_select())
            .order(layaway_items::created_at.desc())
            .load::<LayawayItemDB>(&mut conn)
            .into_core()?;

        let payments_db = LayawayPaymentDB::belonging_to(&items_db)
            .select(LayawayPaymentDB::as_select())
            .order(layaway_payments::created_at.asc())
            .load::<LayawayPaymentDB>(&mut conn)
            .into_core()?;

        let grouped = payments_db.grouped_by(&items_db);
        Ok(items_db
            .into_iter()
            .zip(grouped)
            .map(|(item, payments)| item.into_domain(payments))
            .collect())
    }

    async fn create(&self, owner: &str, new_item: NewLayawayItem) -> Result<LayawayItem> {
        let owner = owner.to_string();
        self.writer
            .exec(move |conn| {
                let item_db = LayawayItemDB {
                    id: uuid::Uuid::new_v4().to_string(),
                    owner_id: owner,
                    product_name: new_item.product_name,
                    brand: new_item.brand,
                    client_name: new_item.client_name,
                    client_phone: new_item.client_phone,
                    price: new_item.price.to_string(),
                    is_finished: false,
                    created_at: chrono::Utc::now().naive_utc(),
                };
                diesel::insert_into(layaway_items::table)
                    .values(&item_db)
                    .execute(conn)
                    .into_core()?;
                Ok(item_db.into_domain(Vec::new()))
            })
            .await
    }

    async fn update(&self, item_id: &str, update: LayawayItemUpdate) -> Result<LayawayItem> {
        let item_id = item_id.to_string();
        let updated = self
            .writer
            .exec(move |conn| {
                diesel::update(layaway_items::table.find(&item_id))
                    .set((
                        layaway_items::product_name.eq(update.product_name),
                        layaway_items::brand.eq(update.brand),
                        layaway_items::client_name.eq(update.client_name),
                        layaway_items::client_phone.eq(update.client_phone),
                        layaway_items::price.eq(update.price.to_string()),
                        layaway_items::is_finished.eq(update.is_finished),
                    ))
                    .execute(conn)
                    .into_core()?;
                Ok(item_id)
            })
            .await?;
        self.get_by_id(&updated)
    }

    async fn delete(&self, item_id: &str) -> Result<usize> {
        let item_id = item_id.to_string();
        self.writer
            .exec(move |conn| {
                // Payments go with the item via ON DELETE CASCADE.
                diesel::delete(layaway_items::table.find(&item_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    async fn add_payment(&self, item_id: &str, amount: Decimal) -> Result<LayawayPayment> {
        let item_id = item_id.to_string();
        self.writer
            .exec(move |conn| {
                let payment_db = LayawayPaymentDB {
                    id: uuid::Uuid::new_v4().to_string(),
                    layaway_item_id: item_id,
                    amount: amount.to_string(),
                    created_at: chrono::Utc::now().naive_utc(),
                };
                diesel::insert_into(layaway_payments::table)
                    .values(&payment_db)
                    .execute(conn)
                    .into_core()?;
                Ok(payment_db.into())
            })
            .await
    }

    async fn delete_payment(&self, payment_id: &str) -> Result<usize> {
        let payment_id = payment_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(layaway_payments::table.find(&payment_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
