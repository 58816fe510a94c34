mod model;
mod repository;

pub use model::{LayawayItemDB, LayawayPaymentDB};
pub use repository::LayawayRepository;
