mod model;
mod repository;

pub use model::SavedProductDB;
pub use repository::SavedProductRepository;
