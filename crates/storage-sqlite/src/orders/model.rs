//! Database models for custom orders.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use canastilla_core::orders::CustomOrder;

use crate::utils::{parse_decimal, parse_optional_decimal};

/// Database model for custom orders
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
#[diesel(table_name = crate::schema::custom_orders)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct CustomOrderDB {
    pub id: String,
    pub owner_id: String,
    pub product_name: String,
    pub brand: Option<String>,
    pub client_name: String,
    pub client_phone: Option<String>,
    pub price: Option<String>,
    pub deposit: String,
    pub observations: Option<String>,
    pub is_ordered: bool,
    pub is_picked_up: bool,
    pub created_at: NaiveDateTime,
}

// Conversion to the domain model
impl From<CustomOrderDB> for CustomOrder {
    fn from(db: CustomOrderDB) -> Self {
        Self {
            price: parse_optional_decimal(db.price.as_deref(), "price"),
            deposit: parse_decimal(&db.deposit, "deposit"),
            id: db.id,
            owner_id: db.owner_id,
            product_name: db.product_name,
            brand: db.brand,
            client_name: db.client_name,
            client_phone: db.client_phone,
            observations: db.observations,
            is_ordered: db.is_ordered,
            is_picked_up: db.is_picked_up,
            created_at: db.created_at,
        }
    }
}
