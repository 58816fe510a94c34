use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use canastilla_core::items::{
    ClaimStatus, ColorStatus, ItemRepositoryTrait, ListItem, ListItemUpdate, NewListItem,
};
use canastilla_core::Result;

use super::model::ListItemDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::list_items;
use crate::schema::list_items::dsl::*;

/// Repository for managing list item data in the database
pub struct ItemRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl ItemRepository {
    /// Creates a new ItemRepository instance
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

fn load_item(conn: &mut SqliteConnection, item_id: &str) -> Result<ListItem> {
    let item = list_items
        .select(ListItemDB::as_select())
        .find(item_id)
        .first::<ListItemDB>(conn)
        .into_core()?;
    Ok(item.into())
}

#[async_trait]
impl ItemRepositoryTrait for ItemRepository {
    fn get_by_id(&self, item_id: &str) -> Result<ListItem> {
        let mut conn = get_connection(&self.pool)?;
        load_item(&mut conn, item_id)
    }

    fn list_by_list_id(&self, list: &str) -> Result<Vec<ListItem>> {
        let mut conn = get_connection(&self.pool)?;
        let results = list_items
            .filter(list_id.eq(list))
            .select(ListItemDB::as_select())
            .order(created_at.asc())
            .load::<ListItemDB>(&mut conn)
            .into_core()?;
        Ok(results.into_iter().map(ListItem::from).collect())
    }

    async fn create(&self, new_item: NewListItem) -> Result<ListItem> {
        self.writer
            .exec(move |conn| {
                let item_db = ListItemDB::from_new(
                    new_item,
                    uuid::Uuid::new_v4().to_string(),
                    chrono::Utc::now().naive_utc(),
                );
                diesel::insert_into(list_items::table)
                    .values(&item_db)
                    .execute(conn)
                    .into_core()?;
                Ok(item_db.into())
            })
            .await
    }

    async fn update(&self, item_id: &str, update: ListItemUpdate) -> Result<ListItem> {
        let item_id = item_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::update(list_items.find(&item_id))
                    .set((
                        name.eq(update.name),
                        price.eq(update.price.to_string()),
                        brand.eq(update.brand),
                        model.eq(update.model),
                        purchaser_name.eq(update.purchaser_name),
                        purchaser_phone.eq(update.purchaser_phone),
                        purchase_date.eq(update.purchase_date),
                        is_picked_up.eq(update.is_picked_up),
                        is_reserved.eq(update.is_reserved),
                        is_paid.eq(update.is_paid),
                        amount_paid.eq(update.amount_paid.map(|amount| amount.to_string())),
                        updated_at.eq(chrono::Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .into_core()?;
                load_item(conn, &item_id)
            })
            .await
    }

    async fn apply_claim(&self, item_id: &str, claim: ClaimStatus) -> Result<ListItem> {
        let item_id = item_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::update(list_items.find(&item_id))
                    .set((
                        is_purchased.eq(claim.is_purchased),
                        is_reserved.eq(claim.is_reserved),
                        purchaser_name.eq(claim.purchaser_name),
                        purchaser_phone.eq(claim.purchaser_phone),
                        purchase_date.eq(claim.purchase_date),
                        is_picked_up.eq(claim.is_picked_up),
                        is_paid.eq(claim.is_paid),
                        amount_paid.eq(claim.amount_paid.map(|amount| amount.to_string())),
                        updated_at.eq(chrono::Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .into_core()?;
                load_item(conn, &item_id)
            })
            .await
    }

    async fn apply_claim_bulk(
        &self,
        item_ids: &[String],
        claim: ClaimStatus,
    ) -> Result<Vec<ListItem>> {
        let item_ids = item_ids.to_vec();
        self.writer
            .exec(move |conn| {
                // One statement inside the writer's transaction: the whole
                // batch lands or none of it does.
                diesel::update(list_items.filter(id.eq_any(&item_ids)))
                    .set((
                        is_purchased.eq(claim.is_purchased),
                        is_reserved.eq(claim.is_reserved),
                        purchaser_name.eq(claim.purchaser_name),
                        purchaser_phone.eq(claim.purchaser_phone),
                        purchase_date.eq(claim.purchase_date),
                        is_picked_up.eq(claim.is_picked_up),
                        is_paid.eq(claim.is_paid),
                        amount_paid.eq(claim.amount_paid.map(|amount| amount.to_string())),
                        updated_at.eq(chrono::Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .into_core()?;

                let results = list_items
                    .filter(id.eq_any(&item_ids))
                    .select(ListItemDB::as_select())
                    .order(created_at.asc())
                    .load::<ListItemDB>(conn)
                    .into_core()?;
                Ok(results.into_iter().map(ListItem::from).collect())
            })
            .await
    }

    async fn set_color_status(&self, item_id: &str, color: ColorStatus) -> Result<ListItem> {
        let item_id = item_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::update(list_items.find(&item_id))
                    .set((
                        color_status.eq(color.code()),
                        updated_at.eq(chrono::Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .into_core()?;
                load_item(conn, &item_id)
            })
            .await
    }

    async fn delete(&self, item_id: &str) -> Result<usize> {
        let item_id = item_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(list_items.find(&item_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
