//! Saved product domain models.
//!
//! A saved product is a suggestion-cache entry used to pre-fill the
//! add-item form; list items never reference it afterwards.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::PRODUCT_SUGGESTION_LIMIT;
use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a saved product.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SavedProduct {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub default_price: Option<Decimal>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a saved product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSavedProduct {
    pub name: String,
    pub default_price: Option<Decimal>,
    pub brand: Option<String>,
    pub model: Option<String>,
}

impl NewSavedProduct {
    /// Validates the new product data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Product name cannot be empty".to_string(),
            )));
        }
        if let Some(price) = self.default_price {
            if price.is_sign_negative() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Price cannot be negative".to_string(),
                )));
            }
        }
        Ok(())
    }
}

/// Input model for updating a saved product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedProductUpdate {
    pub name: String,
    pub default_price: Option<Decimal>,
    pub brand: Option<String>,
    pub model: Option<String>,
}

impl SavedProductUpdate {
    /// Validates the product update data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Product name cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Case-insensitive substring search over name, brand, and model, capped at
/// the suggestion limit. An empty query suggests nothing.
pub fn search_products<'a>(products: &'a [SavedProduct], query: &str) -> Vec<&'a SavedProduct> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    products
        .iter()
        .filter(|product| {
            product.name.to_lowercase().contains(&query)
                || product
                    .brand
                    .as_ref()
                    .is_some_and(|brand| brand.to_lowercase().contains(&query))
                || product
                    .model
                    .as_ref()
                    .is_some_and(|model| model.to_lowercase().contains(&query))
        })
        .take(PRODUCT_SUGGESTION_LIMIT)
        .collect()
}
