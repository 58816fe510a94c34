//! Public share-code access - projections, services, and traits.

mod sharing_model;
mod sharing_service;
mod sharing_traits;

// Re-export the public interface
pub use sharing_model::{PublicList, PublicListAccess, PublicListItem};
pub use sharing_service::SharingService;
pub use sharing_traits::{SharingRepositoryTrait, SharingServiceTrait};
