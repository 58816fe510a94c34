//! Public projections of lists and items.
//!
//! The restricted fields (purchaser name/phone, payment amounts, owner
//! identity) are excluded from these shapes by contract: the types cannot
//! carry them, so nothing downstream can leak them.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::items::ColorStatus;

/// List metadata visible through a share code.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PublicList {
    pub id: String,
    pub name: Option<String>,
    pub baby_name: Option<String>,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub phone: Option<String>,
    pub share_code: String,
    pub is_archived: bool,
}

/// Item projection visible through a share code.
///
/// Visitors see whether an item is claimed and its color tag, never who
/// claimed it or what was paid.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PublicListItem {
    pub id: String,
    pub list_id: String,
    pub name: String,
    pub price: Decimal,
    pub is_purchased: bool,
    pub is_reserved: bool,
    pub is_green_checked: bool,
    pub color_status: ColorStatus,
    pub created_at: NaiveDateTime,
}

/// Outcome of resolving a share code.
#[derive(Debug, Clone)]
pub enum PublicListAccess {
    /// No list matches the code.
    NotFound,
    /// The list exists but is archived; no list or item data is exposed.
    Unavailable,
    /// The list is live.
    Available {
        list: PublicList,
        items: Vec<PublicListItem>,
    },
}
