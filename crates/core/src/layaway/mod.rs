//! Layaway module (entregas a cuenta) - deposits against reserved products.

mod layaway_model;
mod layaway_service;
mod layaway_traits;

// Re-export the public interface
pub use layaway_model::{
    total_paid, LayawayItem, LayawayItemUpdate, LayawayPayment, NewLayawayItem,
};
pub use layaway_service::LayawayService;
pub use layaway_traits::{LayawayRepositoryTrait, LayawayServiceTrait};
