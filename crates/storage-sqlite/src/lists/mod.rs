mod model;
mod repository;

pub use model::ShoppingListDB;
pub use repository::ListRepository;
