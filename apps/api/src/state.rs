use std::sync::Arc;

use crate::config::{Config, IdStrategy};
use crate::ids::{IdGenerator, TimestampIdGenerator, UuidIdGenerator};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable id source for ingested and appended records. Picked from
    /// ID_STRATEGY at startup; tests inject a sequential generator.
    pub ids: Arc<dyn IdGenerator>,
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        let ids: Arc<dyn IdGenerator> = match config.id_strategy {
            IdStrategy::Uuid => Arc::new(UuidIdGenerator),
            IdStrategy::Timestamp => Arc::new(TimestampIdGenerator),
        };
        AppState { config, ids }
    }
}
