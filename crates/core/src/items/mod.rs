//! List items module - domain models, the status reconciler, services, and traits.

mod items_model;
mod items_reconciler;
mod items_service;
mod items_traits;

#[cfg(test)]
mod items_service_tests;

// Re-export the public interface
pub use items_model::{
    pending_total, purchased_total, ColorStatus, ListItem, ListItemUpdate, NewListItem,
    PurchaserInfo,
};
pub use items_reconciler::{purchase_status, reserve_status, ClaimStatus};
pub use items_service::ItemService;
pub use items_traits::{ItemRepositoryTrait, ItemServiceTrait};
