//! Request-scoped key/value store.
//!
//! # Responsibility
//! - Memoize per-request state under string keys with typed access.
//!
//! # Invariants
//! - One scope belongs to one request flow; the store is `RefCell`-based and
//!   deliberately not `Sync`, so no locking is involved.
//! - Dropping the scope drops every cached value.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Inbound-request-local store with get/insert-by-key semantics.
#[derive(Default)]
pub struct RequestScope {
    items: RefCell<HashMap<String, Rc<dyn Any>>>,
}

impl RequestScope {
    /// Creates an empty scope for one request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads one typed value. Returns `None` when the key is absent or the
    /// stored value has a different type.
    pub fn get<T: 'static>(&self, key: &str) -> Option<Rc<T>> {
        let value = self.items.borrow().get(key).cloned()?;
        value.downcast::<T>().ok()
    }

    /// Stores one value under a key, replacing any previous value.
    pub fn insert<T: 'static>(&self, key: impl Into<String>, value: Rc<T>) {
        self.items.borrow_mut().insert(key.into(), value);
    }

    /// Removes one key. Returns whether a value was present.
    pub fn remove(&self, key: &str) -> bool {
        self.items.borrow_mut().remove(key).is_some()
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Returns whether the scope holds no entries.
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::RequestScope;
    use std::rc::Rc;

    #[test]
    fn get_returns_inserted_value_by_identity() {
        let scope = RequestScope::new();
        let value = Rc::new("cached".to_string());
        scope.insert("key", Rc::clone(&value));

        let read = scope.get::<String>("key").expect("value should be cached");
        assert!(Rc::ptr_eq(&read, &value));
    }

    #[test]
    fn get_with_wrong_type_returns_none() {
        let scope = RequestScope::new();
        scope.insert("key", Rc::new("text".to_string()));
        assert!(scope.get::<u32>("key").is_none());
    }

    #[test]
    fn insert_replaces_and_remove_clears() {
        let scope = RequestScope::new();
        scope.insert("key", Rc::new(1u32));
        scope.insert("key", Rc::new(2u32));
        assert_eq!(scope.len(), 1);
        assert_eq!(*scope.get::<u32>("key").expect("value should exist"), 2);

        assert!(scope.remove("key"));
        assert!(!scope.remove("key"));
        assert!(scope.is_empty());
    }
}
