pub mod handlers;
pub mod segmenter;

pub use segmenter::{segment, segment_value, CANONICAL_BULLET};
