//! Record id generation.
//!
//! Ingestion and merge never mint ids themselves; they take an
//! `&dyn IdGenerator` so the binary can pick a strategy at startup and tests
//! can use a deterministic counter.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use uuid::Uuid;

/// Produces locally unique record ids. Implementations must never hand out
/// the same id twice for the lifetime of the generator.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// UUID v4 ids. The default strategy.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// `<unix-millis>-<8 hex chars>`, the id shape records created by older
/// clients already carry.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampIdGenerator;

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&self) -> String {
        let suffix = Uuid::new_v4().as_u128() as u32;
        format!("{}-{:08x}", Utc::now().timestamp_millis(), suffix)
    }
}

/// `<prefix>-1`, `<prefix>-2`, ... Deterministic, for tests and fixtures.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{n}", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequential_ids_count_up() {
        let ids = SequentialIdGenerator::new("rec");
        assert_eq!(ids.next_id(), "rec-1");
        assert_eq!(ids.next_id(), "rec-2");
        assert_eq!(ids.next_id(), "rec-3");
    }

    #[test]
    fn test_uuid_ids_parse_and_differ() {
        let ids = UuidIdGenerator;
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn test_timestamp_id_shape() {
        let id = TimestampIdGenerator.next_id();
        let (millis, suffix) = id.split_once('-').unwrap();
        assert!(millis.parse::<i64>().unwrap() > 0);
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generators_are_usable_as_trait_objects() {
        let generators: Vec<Box<dyn IdGenerator>> = vec![
            Box::new(UuidIdGenerator),
            Box::new(TimestampIdGenerator),
            Box::new(SequentialIdGenerator::new("x")),
        ];
        let ids: HashSet<String> = generators
            .iter()
            .flat_map(|g| [g.next_id(), g.next_id()])
            .collect();
        assert_eq!(ids.len(), 6);
    }
}
