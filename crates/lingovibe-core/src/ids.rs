use std::sync::atomic::{AtomicU64, Ordering};

use lingovibe_types::{DictionaryResult, Language, SavedWord};

/// Source of opaque, unique entry ids
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Source of creation timestamps in epoch milliseconds
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Random v4 UUIDs
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Deterministic ids for tests: `{prefix}{n}` counting from 1
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}{}", self.prefix, n)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

/// Turn a lookup result into a notebook record, stamping id and time
pub fn materialize(
    result: DictionaryResult,
    ids: &dyn IdGenerator,
    clock: &dyn Clock,
    source: Language,
    target: Language,
) -> SavedWord {
    SavedWord::new(result, ids.next_id(), clock.now_millis(), source, target)
}

#[cfg(test)]
mod tests {
    use lingovibe_types::UsageContext;

    use super::*;

    #[test]
    fn sequential_ids_count_up() {
        let ids = SequentialIds::new("w");
        assert_eq!(ids.next_id(), "w1");
        assert_eq!(ids.next_id(), "w2");
    }

    #[test]
    fn uuid_ids_are_distinct() {
        let ids = UuidIds;
        assert_ne!(ids.next_id(), ids.next_id());
    }

    #[test]
    fn materialize_stamps_injected_id_and_time() {
        let result = DictionaryResult {
            term: "mesa".to_string(),
            definition: "table".to_string(),
            pronunciation: Some("ˈmesa".to_string()),
            examples: vec![],
            usage_context: UsageContext::default(),
            image_url: Some("https://picsum.photos/400/400".to_string()),
        };

        let word = materialize(
            result,
            &SequentialIds::new("id-"),
            &FixedClock(42),
            Language::English,
            Language::Spanish,
        );

        assert_eq!(word.id, "id-1");
        assert_eq!(word.timestamp, 42);
        assert_eq!(word.term(), "mesa");
        assert_eq!(word.source_lang, Language::English);
        assert_eq!(word.target_lang, Language::Spanish);
        assert!(word.entry.image_url.is_some());
    }
}
