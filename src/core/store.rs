//! Generic in-memory record store
//!
//! One store instance backs one resource collection. Records live in a `Vec`
//! so listing preserves insertion order, and the whole collection sits behind
//! an `Arc<RwLock>` so each mutation is atomic with respect to readers on a
//! multi-threaded runtime. Stores are cheap to clone and share.

use std::sync::{Arc, RwLock};

/// A record that can be kept in a [`Store`]
///
/// Identifiers are opaque text, unique within one store, and immutable after
/// creation.
pub trait Record {
    fn id(&self) -> &str;
}

/// In-memory ordered collection of records, keyed by unique identifier
#[derive(Clone)]
pub struct Store<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T: Record + Clone> Store<T> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Full collection in insertion order
    pub fn list(&self) -> Vec<T> {
        self.records.read().unwrap().clone()
    }

    pub fn find(&self, id: &str) -> Option<T> {
        self.records
            .read()
            .unwrap()
            .iter()
            .find(|record| record.id() == id)
            .cloned()
    }

    pub fn append(&self, record: T) {
        self.records.write().unwrap().push(record);
    }

    /// Overwrite the stored record with the same id, keeping its position
    ///
    /// Returns false when no record with that id exists; the store is left
    /// unchanged in that case.
    pub fn replace(&self, record: T) -> bool {
        let mut records = self.records.write().unwrap();
        match records.iter_mut().find(|existing| existing.id() == record.id()) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    pub fn remove(&self, id: &str) -> Option<T> {
        let mut records = self.records.write().unwrap();
        let index = records.iter().position(|record| record.id() == id)?;
        Some(records.remove(index))
    }

    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().unwrap().is_empty()
    }
}

impl<T: Record + Clone> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Widget {
        id: String,
        label: String,
    }

    impl Record for Widget {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn widget(id: &str, label: &str) -> Widget {
        Widget {
            id: id.to_string(),
            label: label.to_string(),
        }
    }

    #[test]
    fn test_append_and_find() {
        let store = Store::new();
        store.append(widget("a", "first"));
        assert_eq!(store.find("a"), Some(widget("a", "first")));
        assert_eq!(store.find("b"), None);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = Store::new();
        store.append(widget("a", "first"));
        store.append(widget("b", "second"));
        store.append(widget("c", "third"));
        let ids: Vec<String> = store.list().into_iter().map(|w| w.id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_replace_overwrites_in_place() {
        let store = Store::new();
        store.append(widget("a", "first"));
        store.append(widget("b", "second"));
        assert!(store.replace(widget("a", "renamed")));
        let listed = store.list();
        assert_eq!(listed[0], widget("a", "renamed"));
        assert_eq!(listed[1], widget("b", "second"));
    }

    #[test]
    fn test_replace_unknown_id_is_noop() {
        let store = Store::new();
        store.append(widget("a", "first"));
        assert!(!store.replace(widget("zzz", "ghost")));
        assert_eq!(store.len(), 1);
        assert_eq!(store.find("a"), Some(widget("a", "first")));
    }

    #[test]
    fn test_remove_returns_record_and_shrinks() {
        let store = Store::new();
        store.append(widget("a", "first"));
        store.append(widget("b", "second"));
        assert_eq!(store.remove("a"), Some(widget("a", "first")));
        assert_eq!(store.len(), 1);
        assert_eq!(store.find("a"), None);
    }

    #[test]
    fn test_remove_unknown_id_returns_none() {
        let store: Store<Widget> = Store::new();
        assert_eq!(store.remove("nope"), None);
    }

    #[test]
    fn test_clones_share_the_same_collection() {
        let store = Store::new();
        let other = store.clone();
        store.append(widget("a", "first"));
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn test_new_store_is_empty() {
        let store: Store<Widget> = Store::new();
        assert!(store.is_empty());
    }
}
