//! Custom order domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// A counter-side custom order: a product a client asked the shop to bring
/// in, with an optional price and an up-front deposit.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CustomOrder {
    pub id: String,
    pub owner_id: String,
    pub product_name: String,
    pub brand: Option<String>,
    pub client_name: String,
    pub client_phone: Option<String>,
    pub price: Option<Decimal>,
    pub deposit: Decimal,
    pub observations: Option<String>,
    pub is_ordered: bool,
    pub is_picked_up: bool,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a custom order.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomOrder {
    pub product_name: String,
    pub brand: Option<String>,
    pub client_name: String,
    pub client_phone: Option<String>,
    pub price: Option<Decimal>,
    pub deposit: Decimal,
    pub observations: Option<String>,
    pub is_ordered: bool,
    pub is_picked_up: bool,
}

impl NewCustomOrder {
    /// Validates the new order data.
    pub fn validate(&self) -> Result<()> {
        validate_order_fields(&self.product_name, &self.client_name, self.price, self.deposit)
    }
}

/// Input model for updating a custom order.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CustomOrderUpdate {
    pub product_name: String,
    pub brand: Option<String>,
    pub client_name: String,
    pub client_phone: Option<String>,
    pub price: Option<Decimal>,
    pub deposit: Decimal,
    pub observations: Option<String>,
    pub is_ordered: bool,
    pub is_picked_up: bool,
}

impl CustomOrderUpdate {
    /// Validates the order update data.
    pub fn validate(&self) -> Result<()> {
        validate_order_fields(&self.product_name, &self.client_name, self.price, self.deposit)
    }
}

fn validate_order_fields(
    product_name: &str,
    client_name: &str,
    price: Option<Decimal>,
    deposit: Decimal,
) -> Result<()> {
    if product_name.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Product name cannot be empty".to_string(),
        )));
    }
    if client_name.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Client name cannot be empty".to_string(),
        )));
    }
    if let Some(price) = price {
        if price.is_sign_negative() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Price cannot be negative".to_string(),
            )));
        }
    }
    if deposit.is_sign_negative() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Deposit cannot be negative".to_string(),
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_order_validation() {
        let order = NewCustomOrder {
            product_name: "Silla de paseo".to_string(),
            client_name: "Marta".to_string(),
            deposit: dec!(20),
            ..Default::default()
        };
        assert!(order.validate().is_ok());

        let no_client = NewCustomOrder {
            product_name: "Silla".to_string(),
            client_name: "  ".to_string(),
            ..Default::default()
        };
        assert!(no_client.validate().is_err());

        let negative_deposit = NewCustomOrder {
            product_name: "Silla".to_string(),
            client_name: "Marta".to_string(),
            deposit: dec!(-5),
            ..Default::default()
        };
        assert!(negative_deposit.validate().is_err());
    }
}
