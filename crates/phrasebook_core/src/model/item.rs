//! Content tree node model.
//!
//! # Responsibility
//! - Define the item shape served by content database implementations.
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - `children` keeps insertion order, so sibling listing is deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Stable identifier for every content tree node.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = Uuid;

/// One node of the content item tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable node id.
    pub id: ItemId,
    /// Item name, matched case-insensitively during path lookup.
    pub name: String,
    /// Parent node id. `None` means root item.
    pub parent: Option<ItemId>,
    /// Child ids in insertion order.
    pub children: Vec<ItemId>,
    /// Named string fields. BTreeMap keeps serialization deterministic.
    pub fields: BTreeMap<String, String>,
}

impl Item {
    /// Creates a new item with a generated stable id and no fields.
    pub fn new(name: impl Into<String>, parent: Option<ItemId>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            parent,
            children: Vec::new(),
            fields: BTreeMap::new(),
        }
    }

    /// Reads one field value, if set.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Sets one field value, replacing any previous value.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::Item;

    #[test]
    fn new_item_starts_without_fields() {
        let item = Item::new("Title", None);
        assert!(item.fields.is_empty());
        assert!(item.children.is_empty());
        assert!(item.parent.is_none());
    }

    #[test]
    fn set_field_replaces_previous_value() {
        let mut item = Item::new("Title", None);
        item.set_field("Phrase", "first");
        item.set_field("Phrase", "second");
        assert_eq!(item.field("Phrase"), Some("second"));
    }
}
