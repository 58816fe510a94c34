//! Shopping lists module - domain models, services, and traits.

mod lists_model;
mod lists_service;
mod lists_traits;

// Re-export the public interface
pub use lists_model::{
    generate_share_code, normalize_share_code, NewShoppingList, ShoppingList, ShoppingListUpdate,
};
pub use lists_service::ListService;
pub use lists_traits::{ListRepositoryTrait, ListServiceTrait};
