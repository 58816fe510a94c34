use async_trait::async_trait;
use diesel::prelude::*;

use canastilla_core::orders::{
    CustomOrder, CustomOrderUpdate, NewCustomOrder, OrderRepositoryTrait,
};
use canastilla_core::Result;

use super::model::CustomOrderDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::custom_orders;
use crate::schema::custom_orders::dsl::*;

/// Repository for managing custom order data in the database
pub struct OrderRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl OrderRepository {
    /// Creates a new OrderRepository instance
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl OrderRepositoryTrait for OrderRepository {
    fn list_by_owner(&self, owner: &str) -> Result<Vec<CustomOrder>> {
        let mut conn = get_connection(&self.pool)?;
        let results = custom_orders
            .filter(owner_id.eq(owner))
            .select(CustomOrderDB::as_select())
            .order(created_at.desc())
            .load::<CustomOrderDB>(&mut conn)
            .into_core()?;
        Ok(results.into_iter().map(CustomOrder::from).collect())
    }

    async fn create(&self, owner: &str, new_order: NewCustomOrder) -> Result<CustomOrder> {
        let owner = owner.to_string();
        self.writer
            .exec(move |conn| {
                let order_db = CustomOrderDB {
                    id: uuid::Uuid::new_v4().to_string(),
                    owner_id: owner,
                    product_name: new_order.product_name,
                    brand: new_order.brand,
                    client_name: new_order.client_name,
                    client_phone: new_order.client_phone,
                    price: new_order.price.map(|p| p.to_string()),
                    deposit: new_order.deposit.to_string(),
                    observations: new_order.observations,
                    is_ordered: new_order.is_ordered,
                    is_picked_up: new_order.is_picked_up,
                    created_at: chrono::Utc::now().naive_utc(),
                };
                diesel::insert_into(custom_orders::table)
                    .values(&order_db)
                    .execute(conn)
                    .into_core()?;
                Ok(order_db.into())
            })
            .await
    }

    async fn update(&self, order_id: &str, update: CustomOrderUpdate) -> Result<CustomOrder> {
        let order_id = order_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::update(custom_orders.find(&order_id))
                    .set((
                        product_name.eq(update.product_name),
                        brand.eq(update.brand),
                        client_name.eq(update.client_name),
                        client_phone.eq(update.client_phone),
                        price.eq(update.price.map(|p| p.to_string())),
                        deposit.eq(update.deposit.to_string()),
                        observations.eq(update.observations),
                        is_ordered.eq(update.is_ordered),
                        is_picked_up.eq(update.is_picked_up),
                    ))
                    .execute(conn)
                    .into_core()?;

                let result = custom_orders
                    .select(CustomOrderDB::as_select())
                    .find(&order_id)
                    .first::<CustomOrderDB>(conn)
                    .into_core()?;
                Ok(result.into())
            })
            .await
    }

    async fn delete(&self, order_id: &str) -> Result<usize> {
        let order_id = order_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(custom_orders.find(&order_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
