pub mod category_map;
pub mod classifier;
pub mod handlers;
pub mod normalizer;
pub mod taxonomy;

pub use category_map::CategoryMap;
pub use classifier::classify;
pub use normalizer::normalize_skills;
pub use taxonomy::{Category, TAXONOMY};
