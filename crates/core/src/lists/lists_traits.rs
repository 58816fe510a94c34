//! List repository and service traits.

use async_trait::async_trait;

use super::lists_model::{NewShoppingList, ShoppingList, ShoppingListUpdate};
use crate::context::UserContext;
use crate::errors::Result;

/// Trait defining the contract for list repository operations.
#[async_trait]
pub trait ListRepositoryTrait: Send + Sync {
    /// Retrieves a list by its ID.
    fn get_by_id(&self, list_id: &str) -> Result<ShoppingList>;

    /// Lists an owner's lists, newest first.
    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<ShoppingList>>;

    /// Creates a list for an owner, generating a unique share code.
    async fn create(&self, owner_id: &str, new_list: NewShoppingList) -> Result<ShoppingList>;

    /// Updates a list's details (`name` follows `baby_name`).
    async fn update(&self, list_id: &str, update: ShoppingListUpdate) -> Result<ShoppingList>;

    /// Renames a list, writing both `name` and `baby_name`.
    async fn rename(&self, list_id: &str, name: &str) -> Result<ShoppingList>;

    /// Archives or unarchives a list.
    async fn set_archived(&self, list_id: &str, is_archived: bool) -> Result<ShoppingList>;

    /// Deletes a list and, through the store's cascade, its items.
    /// Returns the number of deleted lists.
    async fn delete(&self, list_id: &str) -> Result<usize>;
}

/// Trait defining the contract for list service operations.
#[async_trait]
pub trait ListServiceTrait: Send + Sync {
    /// Lists the calling owner's lists, newest first.
    fn get_lists(&self, ctx: &UserContext) -> Result<Vec<ShoppingList>>;

    /// Retrieves one list by ID.
    fn get_list(&self, list_id: &str) -> Result<ShoppingList>;

    /// Creates a list owned by the caller.
    async fn create_list(&self, ctx: &UserContext, new_list: NewShoppingList)
        -> Result<ShoppingList>;

    /// Updates a list's details.
    async fn update_list(&self, list_id: &str, update: ShoppingListUpdate) -> Result<ShoppingList>;

    /// Renames a list.
    async fn rename_list(&self, list_id: &str, name: &str) -> Result<ShoppingList>;

    /// Archives or unarchives a list; archived lists disappear from the
    /// public lookup path but keep their data.
    async fn set_archived(&self, list_id: &str, is_archived: bool) -> Result<ShoppingList>;

    /// Deletes a list and its items.
    async fn delete_list(&self, list_id: &str) -> Result<()>;
}
