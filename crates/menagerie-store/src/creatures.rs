use std::collections::HashMap;
use std::sync::RwLock;

use menagerie_types::{Creature, CreatureId, ImageBlob};

use crate::allocator::IdAllocator;
use crate::error::{StoreError, StoreResult};

/// Creation payload for a creature: every field except the identifier,
/// which the store assigns.
///
/// Missing inputs degrade to their empty forms rather than failing: an
/// unnamed creature gets an empty name, no elements means an empty list.
#[derive(Debug, Clone, Default)]
pub struct CreatureDraft {
    pub name: String,
    pub description: String,
    pub elements: Vec<String>,
    pub image: Option<ImageBlob>,
}

/// In-memory creature store.
///
/// Records live in a `Vec` in creation order with a side index from
/// identifier to position for direct lookup. Identifier allocation and
/// record insertion happen under one write lock, so the Nth record created
/// always carries identifier N; with no delete operation the sequence stays
/// gap-free for the life of the process.
pub struct CreatureStore {
    inner: RwLock<CreatureState>,
}

#[derive(Default)]
struct CreatureState {
    allocator: IdAllocator,
    records: Vec<Creature>,
    index: HashMap<CreatureId, usize>,
}

impl CreatureStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(CreatureState::default()),
        }
    }

    /// Assigns the next identifier and stores the record, returning the full
    /// creature including its new identifier. Never fails.
    pub fn create(&self, draft: CreatureDraft) -> Creature {
        let mut state = self.inner.write().expect("lock poisoned");
        let id = state.allocator.next();
        let creature = Creature {
            id,
            name: draft.name,
            description: draft.description,
            elements: draft.elements,
            image: draft.image,
        };
        state.records.push(creature.clone());
        let position = state.records.len() - 1;
        state.index.insert(id, position);
        creature
    }

    /// Snapshot of all creatures in creation order.
    pub fn list(&self) -> Vec<Creature> {
        self.inner.read().expect("lock poisoned").records.clone()
    }

    /// Looks up a single creature by identifier.
    pub fn get(&self, id: CreatureId) -> Option<Creature> {
        let state = self.inner.read().expect("lock poisoned");
        state
            .index
            .get(&id)
            .and_then(|&position| state.records.get(position))
            .cloned()
    }

    /// Replaces the creature's name, leaving every other field and the
    /// record's position untouched. Returns the updated record.
    ///
    /// An unknown identifier yields
    /// [`StoreError::CreatureNotFound`] and mutates nothing.
    pub fn rename(&self, id: CreatureId, new_name: &str) -> StoreResult<Creature> {
        let mut state = self.inner.write().expect("lock poisoned");
        let position = *state
            .index
            .get(&id)
            .ok_or(StoreError::CreatureNotFound(id))?;
        let record = state
            .records
            .get_mut(position)
            .ok_or(StoreError::CreatureNotFound(id))?;
        record.name = new_name.to_string();
        Ok(record.clone())
    }

    /// Number of creatures stored.
    pub fn len(&self) -> usize {
        self.inner.read().expect("lock poisoned").records.len()
    }

    /// True if no creature has been created.
    pub fn is_empty(&self) -> bool {
        self.inner.read().expect("lock poisoned").records.is_empty()
    }
}

impl Default for CreatureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CreatureStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreatureStore")
            .field("creature_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn draft(name: &str) -> CreatureDraft {
        CreatureDraft {
            name: name.to_string(),
            description: format!("description of {name}"),
            elements: vec!["fire".to_string()],
            image: None,
        }
    }

    // -----------------------------------------------------------------------
    // Creation and identifiers
    // -----------------------------------------------------------------------

    #[test]
    fn create_assigns_dense_ids_from_one() {
        let store = CreatureStore::new();
        let a = store.create(draft("a"));
        let b = store.create(draft("b"));
        let c = store.create(draft("c"));
        assert_eq!(a.id.value(), 1);
        assert_eq!(b.id.value(), 2);
        assert_eq!(c.id.value(), 3);
    }

    #[test]
    fn create_returns_the_full_record() {
        let store = CreatureStore::new();
        let creature = store.create(CreatureDraft {
            name: "Drax".to_string(),
            description: "A dragon".to_string(),
            elements: vec!["fire".to_string(), "ice".to_string()],
            image: Some(ImageBlob::new("image/png", vec![1u8, 2, 3])),
        });
        assert_eq!(creature.id, CreatureId::FIRST);
        assert_eq!(creature.name, "Drax");
        assert_eq!(creature.description, "A dragon");
        assert_eq!(creature.elements, vec!["fire", "ice"]);
        assert!(creature.has_image());
    }

    #[test]
    fn default_draft_creates_empty_record() {
        let store = CreatureStore::new();
        let creature = store.create(CreatureDraft::default());
        assert_eq!(creature.name, "");
        assert_eq!(creature.description, "");
        assert!(creature.elements.is_empty());
        assert!(!creature.has_image());
    }

    #[test]
    fn list_preserves_creation_order() {
        let store = CreatureStore::new();
        store.create(draft("first"));
        store.create(draft("second"));
        store.create(draft("third"));

        let names: Vec<String> = store.list().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    #[test]
    fn get_finds_exactly_the_requested_record() {
        let store = CreatureStore::new();
        store.create(draft("a"));
        let b = store.create(draft("b"));

        let found = store.get(b.id).expect("should exist");
        assert_eq!(found, b);
    }

    #[test]
    fn get_missing_returns_none() {
        let store = CreatureStore::new();
        store.create(draft("only"));
        assert!(store.get(CreatureId::new(99)).is_none());
    }

    // -----------------------------------------------------------------------
    // Rename
    // -----------------------------------------------------------------------

    #[test]
    fn rename_replaces_only_the_name() {
        let store = CreatureStore::new();
        let original = store.create(CreatureDraft {
            name: "Drax".to_string(),
            description: "A dragon".to_string(),
            elements: vec!["fire".to_string(), "ice".to_string()],
            image: Some(ImageBlob::new("image/png", vec![9u8])),
        });

        let updated = store.rename(original.id, "Draxor").unwrap();

        assert_eq!(updated.name, "Draxor");
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.description, original.description);
        assert_eq!(updated.elements, original.elements);
        assert_eq!(updated.image, original.image);
    }

    #[test]
    fn rename_preserves_list_position() {
        let store = CreatureStore::new();
        store.create(draft("a"));
        let b = store.create(draft("b"));
        store.create(draft("c"));

        store.rename(b.id, "renamed").unwrap();

        let names: Vec<String> = store.list().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["a", "renamed", "c"]);
    }

    #[test]
    fn rename_unknown_id_fails_without_mutation() {
        let store = CreatureStore::new();
        store.create(draft("keep"));
        let before = store.list();

        let err = store.rename(CreatureId::new(42), "ghost").unwrap_err();
        assert_eq!(err, StoreError::CreatureNotFound(CreatureId::new(42)));
        assert_eq!(store.list(), before);
    }

    #[test]
    fn rename_is_visible_in_subsequent_reads() {
        let store = CreatureStore::new();
        let c = store.create(draft("before"));
        store.rename(c.id, "after").unwrap();
        assert_eq!(store.get(c.id).unwrap().name, "after");
    }

    // -----------------------------------------------------------------------
    // Concurrency
    // -----------------------------------------------------------------------

    #[test]
    fn concurrent_creates_yield_unique_dense_ids() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(CreatureStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..16)
                        .map(|_| store.create(CreatureDraft::default()).id.value())
                        .collect::<Vec<u64>>()
                })
            })
            .collect();

        let mut ids: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().expect("thread should not panic"))
            .collect();
        ids.sort_unstable();

        let expected: Vec<u64> = (1..=(8 * 16)).collect();
        assert_eq!(ids, expected);
    }

    // -----------------------------------------------------------------------
    // Identifier density property
    // -----------------------------------------------------------------------

    proptest! {
        #[test]
        fn ids_are_exactly_one_to_n(n in 0usize..48) {
            let store = CreatureStore::new();
            for _ in 0..n {
                store.create(CreatureDraft::default());
            }
            let ids: Vec<u64> = store.list().iter().map(|c| c.id.value()).collect();
            let expected: Vec<u64> = (1..=n as u64).collect();
            prop_assert_eq!(ids, expected);
        }
    }
}
