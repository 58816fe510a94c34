//! List item domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Operational color tag on an item, independent of the purchase state.
///
/// The numeric codes are the ones persisted by the store (0 = none,
/// 1 = green, 2 = yellow, 3 = red). The toggle cycle is NOT numeric order:
/// None -> Yellow -> Green -> Red -> None.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColorStatus {
    #[default]
    None,
    Green,
    Yellow,
    Red,
}

impl ColorStatus {
    /// Persisted numeric code for this status.
    pub fn code(self) -> i32 {
        match self {
            ColorStatus::None => 0,
            ColorStatus::Green => 1,
            ColorStatus::Yellow => 2,
            ColorStatus::Red => 3,
        }
    }

    /// Builds a status from its persisted code. Unknown codes map to `None`.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => ColorStatus::Green,
            2 => ColorStatus::Yellow,
            3 => ColorStatus::Red,
            _ => ColorStatus::None,
        }
    }

    /// The next status in the toggle cycle.
    pub fn next(self) -> Self {
        match self {
            ColorStatus::None => ColorStatus::Yellow,
            ColorStatus::Yellow => ColorStatus::Green,
            ColorStatus::Green => ColorStatus::Red,
            ColorStatus::Red => ColorStatus::None,
        }
    }

    /// Display label used by the CSV export.
    pub fn label(self) -> &'static str {
        match self {
            ColorStatus::None => "White",
            ColorStatus::Green => "Green",
            ColorStatus::Yellow => "Yellow",
            ColorStatus::Red => "Red",
        }
    }
}

/// Domain model representing one entry in a shopping list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub id: String,
    pub list_id: String,
    pub name: String,
    pub price: Decimal,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub is_purchased: bool,
    pub is_reserved: bool,
    /// Legacy flag predating `color_status`; still exported and projected.
    pub is_green_checked: bool,
    pub is_picked_up: bool,
    pub is_paid: bool,
    pub purchaser_name: Option<String>,
    pub purchaser_phone: Option<String>,
    pub purchase_date: Option<NaiveDateTime>,
    pub amount_paid: Option<Decimal>,
    pub color_status: ColorStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Contact and payment details captured when a visitor claims an item.
///
/// Name and phone may be empty strings; the claim is still valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PurchaserInfo {
    pub purchaser_name: String,
    pub purchaser_phone: String,
    pub purchase_date: NaiveDateTime,
    pub is_picked_up: bool,
    pub is_paid: bool,
    #[serde(default)]
    pub amount_paid: Option<Decimal>,
}

/// Input model for adding a new item to a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListItem {
    pub list_id: String,
    pub name: String,
    pub price: Decimal,
    pub brand: Option<String>,
    pub model: Option<String>,
}

impl NewListItem {
    /// Validates the new item data.
    pub fn validate(&self) -> Result<()> {
        if self.list_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "listId".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Product name cannot be empty".to_string(),
            )));
        }
        if self.price.is_sign_negative() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Price cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for the full item edit form.
///
/// The edit form never touches `is_purchased`, `is_green_checked`, or
/// `color_status`; those change only through their dedicated transitions.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListItemUpdate {
    pub name: String,
    pub price: Decimal,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub purchaser_name: Option<String>,
    pub purchaser_phone: Option<String>,
    pub purchase_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub is_picked_up: bool,
    #[serde(default)]
    pub is_reserved: bool,
    #[serde(default)]
    pub is_paid: bool,
    pub amount_paid: Option<Decimal>,
}

impl ListItemUpdate {
    /// Validates the item update data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Product name cannot be empty".to_string(),
            )));
        }
        if self.price.is_sign_negative() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Price cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}

/// Sum of the prices of the items nobody has purchased yet.
pub fn pending_total(items: &[ListItem]) -> Decimal {
    items
        .iter()
        .filter(|item| !item.is_purchased)
        .map(|item| item.price)
        .sum()
}

/// Sum of the prices of the purchased items.
pub fn purchased_total(items: &[ListItem]) -> Decimal {
    items
        .iter()
        .filter(|item| item.is_purchased)
        .map(|item| item.price)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(price: Decimal, purchased: bool) -> ListItem {
        ListItem {
            id: "i1".to_string(),
            list_id: "l1".to_string(),
            name: "Cuna".to_string(),
            price,
            is_purchased: purchased,
            ..Default::default()
        }
    }

    #[test]
    fn test_color_status_cycle_closure() {
        let mut status = ColorStatus::None;
        let mut seen = vec![status];
        for _ in 0..4 {
            status = status.next();
            seen.push(status);
        }
        assert_eq!(
            seen,
            vec![
                ColorStatus::None,
                ColorStatus::Yellow,
                ColorStatus::Green,
                ColorStatus::Red,
                ColorStatus::None,
            ]
        );
    }

    #[test]
    fn test_color_status_codes_round_trip() {
        for status in [
            ColorStatus::None,
            ColorStatus::Green,
            ColorStatus::Yellow,
            ColorStatus::Red,
        ] {
            assert_eq!(ColorStatus::from_code(status.code()), status);
        }
        // Unknown codes degrade to None
        assert_eq!(ColorStatus::from_code(42), ColorStatus::None);
        assert_eq!(ColorStatus::from_code(-1), ColorStatus::None);
    }

    #[test]
    fn test_totals_split_by_purchase_state() {
        let items = vec![
            item(dec!(25.00), false),
            item(dec!(10.50), true),
            item(dec!(4.50), false),
        ];
        assert_eq!(pending_total(&items), dec!(29.50));
        assert_eq!(purchased_total(&items), dec!(10.50));
    }

    #[test]
    fn test_new_item_validation() {
        let new_item = NewListItem {
            list_id: "l1".to_string(),
            name: "  ".to_string(),
            price: dec!(5),
            brand: None,
            model: None,
        };
        assert!(new_item.validate().is_err());

        let negative = NewListItem {
            list_id: "l1".to_string(),
            name: "Chupete".to_string(),
            price: dec!(-1),
            brand: None,
            model: None,
        };
        assert!(negative.validate().is_err());
    }
}
