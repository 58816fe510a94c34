//! Database models for saved products.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use canastilla_core::products::SavedProduct;

use crate::utils::parse_optional_decimal;

/// Database model for saved products
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
#[diesel(table_name = crate::schema::saved_products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct SavedProductDB {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub default_price: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub created_at: NaiveDateTime,
}

// Conversion to the domain model
impl From<SavedProductDB> for SavedProduct {
    fn from(db: SavedProductDB) -> Self {
        Self {
            default_price: parse_optional_decimal(db.default_price.as_deref(), "default_price"),
            id: db.id,
            owner_id: db.owner_id,
            name: db.name,
            brand: db.brand,
            model: db.model,
            created_at: db.created_at,
        }
    }
}
