//! Ephemeral local-item list shared by the HTTP handlers.
//!
//! Local items live only in process memory: nothing is persisted, the
//! sequence resets on restart, and the client-supplied `id` field carries
//! no uniqueness invariant. Elements are addressed by 1-based *position*
//! in insertion order, never by their stored `id`.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Non-persisted record whose identity field is client-supplied and never
/// used for addressing. Duplicate ids are permitted.
///
/// Absent JSON fields default (`id` 0, strings empty); no validation
/// applies to local items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct LocalItem {
    /// Client-supplied identifier; not assigned, not checked for collisions.
    #[schema(example = 5)]
    pub id: i32,
    /// Short label.
    #[schema(example = "scratch")]
    pub title: String,
    /// Free-form body.
    #[schema(example = "temporary note")]
    pub content: String,
}

/// Raised when a 1-based position does not address an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no local item at position {position} (length {length})")]
pub struct PositionOutOfRange {
    /// The 1-based position requested.
    pub position: i32,
    /// Number of elements currently held.
    pub length: usize,
}

/// Process-lifetime ordered sequence of [`LocalItem`]s.
///
/// A single instance is shared by every handler. Two behaviours of the
/// deployed contract are preserved deliberately rather than corrected:
/// updates append instead of replacing, and deletion always discards the
/// head of the sequence regardless of the requested id.
#[derive(Debug, Default)]
pub struct LocalItemStore {
    items: Mutex<Vec<LocalItem>>,
}

impl LocalItemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LocalItem>> {
        // A poisoned lock only means another request panicked mid-mutation;
        // the sequence itself remains usable.
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current contents in insertion order.
    pub fn list(&self) -> Vec<LocalItem> {
        self.lock().clone()
    }

    /// Element at 1-based `position`.
    ///
    /// Addressing is positional: an item created with `id` 5 as the first
    /// element answers to position 1, not 5.
    pub fn at_position(&self, position: i32) -> Result<LocalItem, PositionOutOfRange> {
        let items = self.lock();
        let length = items.len();
        usize::try_from(position)
            .ok()
            .and_then(|p| p.checked_sub(1))
            .and_then(|index| items.get(index).cloned())
            .ok_or(PositionOutOfRange { position, length })
    }

    /// Append a copy of `item` and return it. Always succeeds; no
    /// id-collision check is performed. Both create and update land here:
    /// the deployed contract's update appends a fresh element and never
    /// mutates one in place.
    pub fn append(&self, item: LocalItem) -> LocalItem {
        self.lock().push(item.clone());
        item
    }

    /// Remove the head of the sequence and return what remains.
    ///
    /// The deployed contract discards the head no matter which id the
    /// client asked to delete, so no target parameter is accepted here.
    /// Fails when the sequence is empty.
    pub fn remove_front(&self) -> Result<Vec<LocalItem>, PositionOutOfRange> {
        let mut items = self.lock();
        if items.is_empty() {
            return Err(PositionOutOfRange {
                position: 1,
                length: 0,
            });
        }
        items.remove(0);
        Ok(items.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn item(id: i32, title: &str) -> LocalItem {
        LocalItem {
            id,
            title: title.to_owned(),
            content: String::new(),
        }
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = LocalItemStore::new();
        store.append(item(1, "a"));
        store.append(item(2, "b"));

        let titles: Vec<_> = store.list().into_iter().map(|i| i.title).collect();
        assert_eq!(titles, ["a", "b"]);
    }

    #[test]
    fn position_addresses_by_order_not_by_id() {
        let store = LocalItemStore::new();
        store.append(item(5, "first"));

        let found = store.at_position(1).expect("position 1 exists");
        assert_eq!(found.id, 5);
        assert_eq!(found.title, "first");
    }

    #[rstest]
    #[case(0)]
    #[case(2)]
    #[case(-1)]
    fn out_of_range_positions_fail(#[case] position: i32) {
        let store = LocalItemStore::new();
        store.append(item(1, "only"));

        let err = store.at_position(position).expect_err("out of range");
        assert_eq!(err.position, position);
        assert_eq!(err.length, 1);
    }

    #[test]
    fn duplicate_ids_are_permitted() {
        let store = LocalItemStore::new();
        store.append(item(9, "a"));
        store.append(item(9, "b"));
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn remove_front_discards_the_head() {
        let store = LocalItemStore::new();
        store.append(item(1, "head"));
        store.append(item(2, "tail"));

        let remaining = store.remove_front().expect("non-empty");
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].title, "tail");
    }

    #[test]
    fn remove_front_on_empty_store_fails() {
        let store = LocalItemStore::new();
        let err = store.remove_front().expect_err("empty store");
        assert_eq!(err.length, 0);
    }
}
