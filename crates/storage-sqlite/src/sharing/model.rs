//! Narrow query rows backing the public share-code projections.
//!
//! These structs select only the public columns; the restricted fields
//! (purchaser contact, payment amounts, owner identity) never leave the
//! database on this path.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use canastilla_core::items::ColorStatus;
use canastilla_core::sharing::{PublicList, PublicListItem};

use crate::utils::parse_decimal;

/// Public columns of a shopping list.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::shopping_lists)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PublicListRow {
    pub id: String,
    pub name: Option<String>,
    pub baby_name: Option<String>,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub phone: Option<String>,
    pub share_code: String,
    pub is_archived: bool,
}

/// Public columns of a list item.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::list_items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PublicListItemRow {
    pub id: String,
    pub list_id: String,
    pub name: String,
    pub price: String,
    pub is_purchased: bool,
    pub is_reserved: bool,
    pub is_green_checked: bool,
    pub color_status: i32,
    pub created_at: NaiveDateTime,
}

impl From<PublicListRow> for PublicList {
    fn from(row: PublicListRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            baby_name: row.baby_name,
            father_name: row.father_name,
            mother_name: row.mother_name,
            phone: row.phone,
            share_code: row.share_code,
            is_archived: row.is_archived,
        }
    }
}

impl From<PublicListItemRow> for PublicListItem {
    fn from(row: PublicListItemRow) -> Self {
        Self {
            price: parse_decimal(&row.price, "price"),
            color_status: ColorStatus::from_code(row.color_status),
            id: row.id,
            list_id: row.list_id,
            name: row.name,
            is_purchased: row.is_purchased,
            is_reserved: row.is_reserved,
            is_green_checked: row.is_green_checked,
            created_at: row.created_at,
        }
    }
}
