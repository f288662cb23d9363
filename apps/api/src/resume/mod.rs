pub mod handlers;
pub mod ingest;

pub use ingest::ingest_resume;
