use log::debug;
use std::sync::Arc;

use super::sharing_model::PublicListAccess;
use super::sharing_traits::{SharingRepositoryTrait, SharingServiceTrait};
use crate::errors::Result;
use crate::lists::normalize_share_code;

/// Service resolving share codes to public list views.
pub struct SharingService {
    repository: Arc<dyn SharingRepositoryTrait>,
}

impl SharingService {
    /// Creates a new SharingService instance.
    pub fn new(repository: Arc<dyn SharingRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl SharingServiceTrait for SharingService {
    fn resolve(&self, code: &str) -> Result<PublicListAccess> {
        let code = normalize_share_code(code);
        if code.is_empty() {
            return Ok(PublicListAccess::NotFound);
        }

        let list = match self.repository.get_list_by_code(&code)? {
            Some(list) => list,
            None => return Ok(PublicListAccess::NotFound),
        };

        // Archived lists stay resolvable but expose nothing; items are not
        // even fetched.
        if list.is_archived {
            debug!("Share code {} resolved to an archived list", code);
            return Ok(PublicListAccess::Unavailable);
        }

        let items = self.repository.get_list_items_by_code(&code)?;
        Ok(PublicListAccess::Available { list, items })
    }
}
