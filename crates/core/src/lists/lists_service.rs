use log::debug;
use std::sync::Arc;

use super::lists_model::{NewShoppingList, ShoppingList, ShoppingListUpdate};
use super::lists_traits::{ListRepositoryTrait, ListServiceTrait};
use crate::context::UserContext;
use crate::errors::{Result, ValidationError};
use crate::Error;

/// Service for managing shopping lists.
pub struct ListService {
    repository: Arc<dyn ListRepositoryTrait>,
}

impl ListService {
    /// Creates a new ListService instance.
    pub fn new(repository: Arc<dyn ListRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl ListServiceTrait for ListService {
    fn get_lists(&self, ctx: &UserContext) -> Result<Vec<ShoppingList>> {
        self.repository.list_by_owner(&ctx.user_id)
    }

    fn get_list(&self, list_id: &str) -> Result<ShoppingList> {
        self.repository.get_by_id(list_id)
    }

    async fn create_list(
        &self,
        ctx: &UserContext,
        new_list: NewShoppingList,
    ) -> Result<ShoppingList> {
        new_list.validate()?;
        let list = self.repository.create(&ctx.user_id, new_list).await?;
        debug!(
            "Created list {} with share code {}",
            list.id, list.share_code
        );
        Ok(list)
    }

    async fn update_list(&self, list_id: &str, update: ShoppingListUpdate) -> Result<ShoppingList> {
        update.validate()?;
        self.repository.update(list_id, update).await
    }

    async fn rename_list(&self, list_id: &str, name: &str) -> Result<ShoppingList> {
        if name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "List name cannot be empty".to_string(),
            )));
        }
        self.repository.rename(list_id, name).await
    }

    async fn set_archived(&self, list_id: &str, is_archived: bool) -> Result<ShoppingList> {
        let list = self.repository.set_archived(list_id, is_archived).await?;
        debug!("List {} archived={}", list_id, is_archived);
        Ok(list)
    }

    async fn delete_list(&self, list_id: &str) -> Result<()> {
        self.repository.delete(list_id).await?;
        debug!("Deleted list {}", list_id);
        Ok(())
    }
}
