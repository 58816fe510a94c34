//! Saved products module - the per-owner suggestion catalog.

mod products_model;
mod products_service;
mod products_traits;

// Re-export the public interface
pub use products_model::{search_products, NewSavedProduct, SavedProduct, SavedProductUpdate};
pub use products_service::SavedProductService;
pub use products_traits::{SavedProductRepositoryTrait, SavedProductServiceTrait};
