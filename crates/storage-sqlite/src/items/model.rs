//! Database models for list items.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use canastilla_core::items::{ColorStatus, ListItem, NewListItem};

use crate::utils::{parse_decimal, parse_optional_decimal};

/// Database model for list items
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
#[diesel(table_name = crate::schema::list_items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ListItemDB {
    pub id: String,
    pub list_id: String,
    pub name: String,
    pub price: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub is_purchased: bool,
    pub is_reserved: bool,
    pub is_green_checked: bool,
    pub is_picked_up: bool,
    pub is_paid: bool,
    pub purchaser_name: Option<String>,
    pub purchaser_phone: Option<String>,
    pub purchase_date: Option<NaiveDateTime>,
    pub amount_paid: Option<String>,
    pub color_status: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Conversion to the domain model
impl From<ListItemDB> for ListItem {
    fn from(db: ListItemDB) -> Self {
        Self {
            price: parse_decimal(&db.price, "price"),
            amount_paid: parse_optional_decimal(db.amount_paid.as_deref(), "amount_paid"),
            color_status: ColorStatus::from_code(db.color_status),
            id: db.id,
            list_id: db.list_id,
            name: db.name,
            brand: db.brand,
            model: db.model,
            is_purchased: db.is_purchased,
            is_reserved: db.is_reserved,
            is_green_checked: db.is_green_checked,
            is_picked_up: db.is_picked_up,
            is_paid: db.is_paid,
            purchaser_name: db.purchaser_name,
            purchaser_phone: db.purchaser_phone,
            purchase_date: db.purchase_date,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl ListItemDB {
    /// Builds the row inserted for a new item; everything else starts unset.
    pub fn from_new(new_item: NewListItem, item_id: String, now: NaiveDateTime) -> Self {
        Self {
            id: item_id,
            list_id: new_item.list_id,
            name: new_item.name,
            price: new_item.price.to_string(),
            brand: new_item.brand,
            model: new_item.model,
            is_purchased: false,
            is_reserved: false,
            is_green_checked: false,
            is_picked_up: false,
            is_paid: false,
            purchaser_name: None,
            purchaser_phone: None,
            purchase_date: None,
            amount_paid: None,
            color_status: 0,
            created_at: now,
            updated_at: now,
        }
    }
}
