mod model;
mod repository;

pub use model::ListItemDB;
pub use repository::ItemRepository;
