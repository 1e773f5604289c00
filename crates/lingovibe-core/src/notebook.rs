use std::collections::HashSet;
use std::sync::Arc;

use lingovibe_types::SavedWord;

use crate::error::StorageError;
use crate::storage::KeyValueStore;

/// The saved-words collection, newest first, mirrored to a single storage slot.
///
/// Terms are unique (exact, case-sensitive). Saving a term that is already
/// present changes nothing. Every mutation rewrites the whole slot.
pub struct NotebookStore {
    storage: Arc<dyn KeyValueStore>,
    key: String,
    words: Vec<SavedWord>,
}

impl NotebookStore {
    /// Read the notebook from `key`. Absent or unreadable data yields an empty notebook.
    pub fn load(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();

        let words = match storage.get(&key) {
            Ok(Some(data)) => match serde_json::from_str::<Vec<SavedWord>>(&data) {
                Ok(words) => {
                    let words = drop_duplicates(words, &key);
                    tracing::info!("Loaded {} saved words from '{}'", words.len(), key);
                    words
                }
                Err(e) => {
                    tracing::warn!("Failed to parse notebook '{}', starting empty: {}", key, e);
                    Vec::new()
                }
            },
            Ok(None) => {
                tracing::debug!("No notebook stored under '{}'", key);
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("Failed to read notebook '{}', starting empty: {}", key, e);
                Vec::new()
            }
        };

        Self {
            storage,
            key,
            words,
        }
    }

    /// Prepend `candidate` unless its term is already saved
    pub fn save(&mut self, candidate: SavedWord) -> &[SavedWord] {
        if self.is_saved(candidate.term()) {
            tracing::debug!("'{}' already in notebook, skipping", candidate.term());
            return &self.words;
        }

        tracing::info!("Saving '{}' ({})", candidate.term(), candidate.id);
        self.words.insert(0, candidate);
        self.persist();
        &self.words
    }

    /// Remove the entry with exactly this id, if any
    pub fn delete(&mut self, id: &str) -> &[SavedWord] {
        let before = self.words.len();
        self.words.retain(|w| w.id != id);

        if self.words.len() == before {
            tracing::debug!("No saved word with id '{}'", id);
            return &self.words;
        }

        tracing::info!("Deleted saved word '{}'", id);
        self.persist();
        &self.words
    }

    pub fn is_saved(&self, term: &str) -> bool {
        self.words.iter().any(|w| w.term() == term)
    }

    pub fn words(&self) -> &[SavedWord] {
        &self.words
    }

    pub fn get(&self, id: &str) -> Option<&SavedWord> {
        self.words.iter().find(|w| w.id == id)
    }

    pub fn terms(&self) -> Vec<String> {
        self.words.iter().map(|w| w.term().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn persist(&self) {
        if let Err(e) = self.write() {
            tracing::error!("Failed to write notebook '{}': {}", self.key, e);
        }
    }

    fn write(&self) -> Result<(), StorageError> {
        let data = serde_json::to_string(&self.words)?;
        self.storage.set(&self.key, &data)
    }
}

/// Keep the first entry for each term and id; stored data may predate dedup
fn drop_duplicates(words: Vec<SavedWord>, key: &str) -> Vec<SavedWord> {
    let mut terms = HashSet::new();
    let mut ids = HashSet::new();
    let total = words.len();

    let kept: Vec<SavedWord> = words
        .into_iter()
        .filter(|w| {
            if terms.contains(w.term()) || ids.contains(&w.id) {
                return false;
            }
            terms.insert(w.term().to_string());
            ids.insert(w.id.clone());
            true
        })
        .collect();

    if kept.len() < total {
        tracing::warn!(
            "Dropped {} duplicate entries from notebook '{}'",
            total - kept.len(),
            key
        );
    }
    kept
}

#[cfg(test)]
mod tests {
    use lingovibe_types::{DictionaryResult, Language, UsageContext};
    use proptest::prelude::*;

    use super::*;
    use crate::storage::{FileStore, MemoryStore};

    const KEY: &str = "lingovibe_notebook";

    fn word(id: &str, term: &str) -> SavedWord {
        SavedWord::new(
            DictionaryResult {
                term: term.to_string(),
                definition: format!("definition of {term}"),
                pronunciation: None,
                examples: vec![],
                usage_context: UsageContext::default(),
                image_url: None,
            },
            id.to_string(),
            0,
            Language::English,
            Language::Spanish,
        )
    }

    fn ids(store: &NotebookStore) -> Vec<&str> {
        store.words().iter().map(|w| w.id.as_str()).collect()
    }

    fn empty_store() -> (Arc<MemoryStore>, NotebookStore) {
        let storage = Arc::new(MemoryStore::new());
        let store = NotebookStore::load(storage.clone(), KEY);
        (storage, store)
    }

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Poisoned)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Poisoned)
        }
    }

    #[test]
    fn walkthrough_save_dedup_delete_reload() {
        let (storage, mut store) = empty_store();

        store.save(word("a", "libro"));
        assert_eq!(ids(&store), ["a"]);

        store.save(word("b", "mesa"));
        assert_eq!(ids(&store), ["b", "a"]);

        store.save(word("c", "libro"));
        assert_eq!(ids(&store), ["b", "a"]);

        store.delete("a");
        assert_eq!(ids(&store), ["b"]);

        let reloaded = NotebookStore::load(storage, KEY);
        assert_eq!(ids(&reloaded), ["b"]);
        assert_eq!(reloaded.words()[0].term(), "mesa");
    }

    #[test]
    fn load_drops_repeated_terms_and_ids() {
        let stored = vec![
            word("a", "libro"),
            word("b", "libro"),
            word("a", "mesa"),
            word("c", "gato"),
        ];
        let storage = Arc::new(MemoryStore::with_slot(
            KEY,
            &serde_json::to_string(&stored).unwrap(),
        ));

        let mut store = NotebookStore::load(storage, KEY);
        assert_eq!(ids(&store), ["a", "c"]);
        assert_eq!(store.terms(), ["libro", "gato"]);

        store.delete("a");
        assert_eq!(ids(&store), ["c"]);
    }

    #[test]
    fn duplicate_term_keeps_the_original_entry() {
        let (_, mut store) = empty_store();
        store.save(word("a", "libro"));

        let mut dup = word("c", "libro");
        dup.entry.definition = "something else".to_string();
        store.save(dup);

        assert_eq!(store.len(), 1);
        assert_eq!(store.words()[0].id, "a");
        assert_eq!(store.words()[0].entry.definition, "definition of libro");
    }

    #[test]
    fn term_match_is_case_sensitive() {
        let (_, mut store) = empty_store();
        store.save(word("a", "Libro"));
        store.save(word("b", "libro"));

        assert_eq!(store.len(), 2);
        assert!(store.is_saved("libro"));
        assert!(store.is_saved("Libro"));
        assert!(!store.is_saved("LIBRO"));
    }

    #[test]
    fn delete_of_unknown_id_is_a_noop() {
        let (storage, mut store) = empty_store();
        store.save(word("a", "libro"));
        let persisted = storage.get(KEY).unwrap();

        let words = store.delete("zzz").to_vec();

        assert_eq!(words.len(), 1);
        assert_eq!(storage.get(KEY).unwrap(), persisted);
    }

    #[test]
    fn absent_slot_loads_empty() {
        let (_, store) = empty_store();
        assert!(store.is_empty());
    }

    #[test]
    fn corrupt_slot_loads_empty() {
        let storage = Arc::new(MemoryStore::with_slot(KEY, "{not json"));
        let store = NotebookStore::load(storage, KEY);
        assert!(store.is_empty());
    }

    #[test]
    fn wrong_shape_loads_empty() {
        let storage = Arc::new(MemoryStore::with_slot(KEY, r#"{"term": "libro"}"#));
        let store = NotebookStore::load(storage, KEY);
        assert!(store.is_empty());
    }

    #[test]
    fn unreadable_storage_loads_empty_and_writes_are_swallowed() {
        let mut store = NotebookStore::load(Arc::new(FailingStore), KEY);
        assert!(store.is_empty());

        store.save(word("a", "libro"));
        assert_eq!(ids(&store), ["a"]);
    }

    #[test]
    fn persisted_slot_is_a_plain_array() {
        let (storage, mut store) = empty_store();
        store.save(word("a", "libro"));

        let raw = storage.get(KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["id"], "a");
        assert_eq!(value[0]["term"], "libro");
        assert_eq!(value[0]["targetLang"], "Spanish");
    }

    #[test]
    fn file_backed_notebook_survives_restart() {
        let dir = tempfile::tempdir().unwrap();

        {
            let mut store = NotebookStore::load(Arc::new(FileStore::new(dir.path())), KEY);
            store.save(word("a", "libro"));
            store.save(word("b", "mesa"));
        }

        let store = NotebookStore::load(Arc::new(FileStore::new(dir.path())), KEY);
        assert_eq!(ids(&store), ["b", "a"]);
        assert_eq!(store.get("a").map(|w| w.term()), Some("libro"));
        assert_eq!(store.terms(), ["mesa", "libro"]);
    }

    proptest! {
        #[test]
        fn saves_are_deduplicated_and_newest_first(
            terms in prop::collection::vec("[a-c]{1,2}", 0..30)
        ) {
            let (_, mut store) = empty_store();

            for (i, term) in terms.iter().enumerate() {
                let fresh = !store.is_saved(term);
                let before: Vec<SavedWord> = store.words().to_vec();
                let id = format!("id{i}");

                let after = store.save(word(&id, term)).to_vec();

                if fresh {
                    prop_assert_eq!(after.len(), before.len() + 1);
                    prop_assert_eq!(&after[0].id, &id);
                    prop_assert_eq!(&after[1..], &before[..]);
                } else {
                    prop_assert_eq!(after, before);
                }
            }

            let mut seen: Vec<&str> = store.words().iter().map(|w| w.term()).collect();
            let total = seen.len();
            seen.sort_unstable();
            seen.dedup();
            prop_assert_eq!(seen.len(), total);
        }

        #[test]
        fn delete_removes_exactly_one_and_keeps_order(
            count in 1usize..20,
            pick in any::<prop::sample::Index>()
        ) {
            let (storage, mut store) = empty_store();
            for i in 0..count {
                store.save(word(&format!("id{i}"), &format!("term{i}")));
            }

            let before: Vec<String> = store.words().iter().map(|w| w.id.clone()).collect();
            let target = before[pick.index(before.len())].clone();

            store.delete(&target);

            let expected: Vec<String> =
                before.iter().filter(|id| **id != target).cloned().collect();
            let actual: Vec<String> = store.words().iter().map(|w| w.id.clone()).collect();
            prop_assert_eq!(&actual, &expected);

            let reloaded = NotebookStore::load(storage, KEY);
            let reloaded_ids: Vec<String> = reloaded.words().iter().map(|w| w.id.clone()).collect();
            prop_assert_eq!(reloaded_ids, expected);
        }
    }
}
