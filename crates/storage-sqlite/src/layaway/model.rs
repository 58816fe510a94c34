//! Database models for layaway items and their payments.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use canastilla_core::layaway::{LayawayItem, LayawayPayment};

use crate::utils::parse_decimal;

/// Database model for layaway items
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::layaway_items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct LayawayItemDB {
    pub id: String,
    pub owner_id: String,
    pub product_name: String,
    pub brand: Option<String>,
    pub client_name: String,
    pub client_phone: Option<String>,
    pub price: String,
    pub is_finished: bool,
    pub created_at: NaiveDateTime,
}

/// Database model for layaway payments
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    Associations,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(LayawayItemDB, foreign_key = layaway_item_id))]
#[diesel(table_name = crate::schema::layaway_payments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct LayawayPaymentDB {
    pub id: String,
    pub layaway_item_id: String,
    pub amount: String,
    pub created_at: NaiveDateTime,
}

impl From<LayawayPaymentDB> for LayawayPayment {
    fn from(db: LayawayPaymentDB) -> Self {
        Self {
            amount: parse_decimal(&db.amount, "amount"),
            id: db.id,
            layaway_item_id: db.layaway_item_id,
            created_at: db.created_at,
        }
    }
}

impl LayawayItemDB {
    /// Assembles the domain item from its row and payment rows; the total is
    /// recomputed here, never read from storage.
    pub fn into_domain(self, payments: Vec<LayawayPaymentDB>) -> LayawayItem {
        let mut item = LayawayItem {
            price: parse_decimal(&self.price, "price"),
            id: self.id,
            owner_id: self.owner_id,
            product_name: self.product_name,
            brand: self.brand,
            client_name: self.client_name,
            client_phone: self.client_phone,
            is_finished: self.is_finished,
            created_at: self.created_at,
            payments: payments.into_iter().map(LayawayPayment::from).collect(),
            ..Default::default()
        };
        item.recompute_total_paid();
        item
    }
}
