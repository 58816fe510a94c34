//! Custom orders module (encargos) - counter-side order tracking.

mod orders_model;
mod orders_service;
mod orders_traits;

// Re-export the public interface
pub use orders_model::{CustomOrder, CustomOrderUpdate, NewCustomOrder};
pub use orders_service::OrderService;
pub use orders_traits::{OrderRepositoryTrait, OrderServiceTrait};
