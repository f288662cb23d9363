//! Resume normalization and suggestion-merge engine.
//!
//! The core (`text`, `skills`, `resume`, `suggestions`) is synchronous and
//! pure: every operation takes untrusted JSON of whatever shape the upstream
//! producers emit and returns a valid value, never an error. `routes` exposes
//! it over HTTP.

pub mod config;
pub mod errors;
pub mod fields;
pub mod ids;
pub mod models;
pub mod resume;
pub mod routes;
pub mod skills;
pub mod state;
pub mod suggestions;
pub mod text;

pub use ids::{IdGenerator, SequentialIdGenerator, TimestampIdGenerator, UuidIdGenerator};
pub use models::ResumeDocument;
pub use resume::ingest_resume;
pub use skills::{classify, normalize_skills, Category, CategoryMap};
pub use suggestions::{merge_suggestions, merge_value, ChangeSet, MergeOutcome, SuggestionPayload};
pub use text::segment;
