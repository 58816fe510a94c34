//! Shopping list domain models.

use chrono::NaiveDateTime;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{SHARE_CODE_ALPHABET, SHARE_CODE_LENGTH};
use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a shopping list.
///
/// `name` and `baby_name` track each other: creating or renaming a list
/// writes the same value to both.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    pub id: String,
    pub name: Option<String>,
    pub baby_name: Option<String>,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub phone: Option<String>,
    /// Public lookup key; stored uppercase, matched case-insensitively.
    pub share_code: String,
    pub owner_id: String,
    pub is_archived: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewShoppingList {
    pub baby_name: String,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub phone: Option<String>,
}

impl NewShoppingList {
    /// Validates the new list data.
    pub fn validate(&self) -> Result<()> {
        if self.baby_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Baby name cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating a list's details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListUpdate {
    pub baby_name: String,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub phone: Option<String>,
}

impl ShoppingListUpdate {
    /// Validates the list update data.
    pub fn validate(&self) -> Result<()> {
        if self.baby_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Baby name cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Canonical form of a share code as typed by a visitor: trimmed and
/// uppercased, making the lookup case-insensitive.
pub fn normalize_share_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Generates a candidate share code. Uniqueness is enforced by the store's
/// unique index; callers retry on a collision.
pub fn generate_share_code() -> String {
    let mut rng = rand::thread_rng();
    (0..SHARE_CODE_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..SHARE_CODE_ALPHABET.len());
            SHARE_CODE_ALPHABET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_code_shape() {
        for _ in 0..50 {
            let code = generate_share_code();
            assert_eq!(code.len(), SHARE_CODE_LENGTH);
            assert!(code
                .bytes()
                .all(|b| SHARE_CODE_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn test_normalize_share_code() {
        assert_eq!(normalize_share_code("  abc123 "), "ABC123");
        assert_eq!(normalize_share_code("AbC123"), "ABC123");
        assert_eq!(normalize_share_code(""), "");
    }

    #[test]
    fn test_generated_code_is_already_normalized() {
        let code = generate_share_code();
        assert_eq!(normalize_share_code(&code), code);
    }

    #[test]
    fn test_new_list_requires_baby_name() {
        let new_list = NewShoppingList {
            baby_name: "   ".to_string(),
            father_name: None,
            mother_name: None,
            phone: None,
        };
        assert!(new_list.validate().is_err());
    }
}
