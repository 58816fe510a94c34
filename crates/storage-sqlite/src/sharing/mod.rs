mod model;
mod repository;

pub use model::{PublicListItemRow, PublicListRow};
pub use repository::SharingRepository;
