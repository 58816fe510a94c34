//! Layaway domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// A product a client is paying off in deposits.
///
/// `total_paid` is derived from `payments` and is never persisted; it is
/// recomputed on every load and after every payment mutation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LayawayItem {
    pub id: String,
    pub owner_id: String,
    pub product_name: String,
    pub brand: Option<String>,
    pub client_name: String,
    pub client_phone: Option<String>,
    pub price: Decimal,
    pub is_finished: bool,
    pub created_at: NaiveDateTime,
    pub payments: Vec<LayawayPayment>,
    pub total_paid: Decimal,
}

impl LayawayItem {
    /// Recomputes `total_paid` from the current payment set.
    pub fn recompute_total_paid(&mut self) {
        self.total_paid = total_paid(&self.payments);
    }

    /// Amount still owed (never negative).
    pub fn outstanding(&self) -> Decimal {
        (self.price - self.total_paid).max(Decimal::ZERO)
    }
}

/// One deposit against a layaway item.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LayawayPayment {
    pub id: String,
    pub layaway_item_id: String,
    pub amount: Decimal,
    pub created_at: NaiveDateTime,
}

/// Sum of a payment set.
pub fn total_paid(payments: &[LayawayPayment]) -> Decimal {
    payments.iter().map(|payment| payment.amount).sum()
}

/// Input model for creating a layaway item.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewLayawayItem {
    pub product_name: String,
    pub brand: Option<String>,
    pub client_name: String,
    pub client_phone: Option<String>,
    pub price: Decimal,
}

impl NewLayawayItem {
    /// Validates the new layaway item data.
    pub fn validate(&self) -> Result<()> {
        if self.product_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Product name cannot be empty".to_string(),
            )));
        }
        if self.client_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Client name cannot be empty".to_string(),
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

/// Input model for updating a layaway item.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LayawayItemUpdate {
    pub product_name: String,
    pub brand: Option<String>,
    pub client_name: String,
    pub client_phone: Option<String>,
    pub price: Decimal,
    pub is_finished: bool,
}

impl LayawayItemUpdate {
    /// Validates the layaway update data.
    pub fn validate(&self) -> Result<()> {
        if self.product_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Product name cannot be empty".to_string(),
            )));
        }
        if self.client_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Client name cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}
