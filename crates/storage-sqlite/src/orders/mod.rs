mod model;
mod repository;

pub use model::CustomOrderDB;
pub use repository::OrderRepository;
