//! Database models for shopping lists.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use canastilla_core::lists::ShoppingList;

/// Database model for shopping lists
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
#[diesel(table_name = crate::schema::shopping_lists)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListDB {
    pub id: String,
    pub name: Option<String>,
    pub baby_name: Option<String>,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub phone: Option<String>,
    pub share_code: String,
    pub owner_id: String,
    pub is_archived: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Conversion to the domain model
impl From<ShoppingListDB> for ShoppingList {
    fn from(db: ShoppingListDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            baby_name: db.baby_name,
            father_name: db.father_name,
            mother_name: db.mother_name,
            phone: db.phone,
            share_code: db.share_code,
            owner_id: db.owner_id,
            is_archived: db.is_archived,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
