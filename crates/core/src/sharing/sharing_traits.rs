//! Sharing repository and service traits.

use super::sharing_model::{PublicList, PublicListAccess, PublicListItem};
use crate::errors::Result;

/// Trait defining the store-side share-code lookup functions.
///
/// Implementations receive a normalized (uppercase) code and must select
/// only the public projection columns - the narrowing happens in the query,
/// not in application code.
pub trait SharingRepositoryTrait: Send + Sync {
    /// Resolves a share code to list metadata; `None` when unmatched.
    fn get_list_by_code(&self, code: &str) -> Result<Option<PublicList>>;

    /// Resolves a share code to the public item projection, in creation
    /// order; empty when the code is unmatched.
    fn get_list_items_by_code(&self, code: &str) -> Result<Vec<PublicListItem>>;
}

/// Trait defining the contract for the public access path.
pub trait SharingServiceTrait: Send + Sync {
    /// Resolves a visitor-typed share code (any casing, surrounding
    /// whitespace allowed) to its public view.
    fn resolve(&self, code: &str) -> Result<PublicListAccess>;
}
