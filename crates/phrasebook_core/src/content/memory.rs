//! In-memory content database and context.
//!
//! # Responsibility
//! - Provide a request-local reference implementation of the content
//!   collaborator contracts for hosts and tests.
//!
//! # Invariants
//! - Interior mutability is `RefCell`-based; the type is deliberately not
//!   `Sync` and must stay within one request flow.
//! - Path segment matching is case-insensitive, name case is preserved.

use crate::content::{ContentContext, ContentDatabase, ContentError, ContentResult};
use crate::model::item::{Item, ItemId};
use crate::model::path::{RelativePath, PATH_SEPARATOR};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Request-local in-memory item tree.
#[derive(Debug, Default)]
pub struct MemoryDatabase {
    items: RefCell<HashMap<ItemId, Item>>,
    read_only: Cell<bool>,
}

impl MemoryDatabase {
    /// Creates an empty writable database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates one parentless root item.
    pub fn create_root(&self, name: impl Into<String>) -> ItemId {
        let item = Item::new(name, None);
        let id = item.id;
        self.items.borrow_mut().insert(id, item);
        id
    }

    /// Toggles write rejection for all mutating operations.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }

    /// Reads one item snapshot by id.
    pub fn item(&self, id: ItemId) -> Option<Item> {
        self.items.borrow().get(&id).cloned()
    }

    /// Returns the number of stored items.
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Returns whether the tree holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    fn ensure_writable(&self) -> ContentResult<()> {
        if self.read_only.get() {
            return Err(ContentError::ReadOnly);
        }
        Ok(())
    }
}

impl ContentDatabase for MemoryDatabase {
    fn contains_item(&self, item: ItemId) -> bool {
        self.items.borrow().contains_key(&item)
    }

    fn item_below(&self, root: ItemId, path: &RelativePath) -> Option<ItemId> {
        if !self.contains_item(root) {
            return None;
        }
        let mut current = root;
        for segment in path.segments() {
            current = self.child_named(current, segment)?;
        }
        Some(current)
    }

    fn child_named(&self, parent: ItemId, name: &str) -> Option<ItemId> {
        let items = self.items.borrow();
        let parent = items.get(&parent)?;
        parent
            .children
            .iter()
            .copied()
            .find(|child| {
                items
                    .get(child)
                    .map_or(false, |item| item.name.eq_ignore_ascii_case(name))
            })
    }

    fn field_value(&self, item: ItemId, field: &str) -> Option<String> {
        self.items
            .borrow()
            .get(&item)
            .and_then(|item| item.field(field))
            .map(str::to_string)
    }

    fn create_item(&self, parent: ItemId, name: &str) -> ContentResult<ItemId> {
        self.ensure_writable()?;
        if name.trim().is_empty() || name.contains(PATH_SEPARATOR) {
            return Err(ContentError::InvalidItemName(name.to_string()));
        }

        let mut items = self.items.borrow_mut();
        if !items.contains_key(&parent) {
            return Err(ContentError::ItemNotFound(parent));
        }

        let item = Item::new(name, Some(parent));
        let id = item.id;
        items.insert(id, item);
        if let Some(parent_item) = items.get_mut(&parent) {
            parent_item.children.push(id);
        }
        Ok(id)
    }

    fn set_field(&self, item: ItemId, field: &str, value: &str) -> ContentResult<()> {
        self.ensure_writable()?;
        let mut items = self.items.borrow_mut();
        match items.get_mut(&item) {
            Some(target) => {
                target.set_field(field, value);
                Ok(())
            }
            None => Err(ContentError::ItemNotFound(item)),
        }
    }
}

/// Content context over an optional in-memory database.
#[derive(Debug, Default)]
pub struct MemoryContext {
    database: Option<Rc<MemoryDatabase>>,
}

impl MemoryContext {
    /// Creates a context serving one active database.
    pub fn with_database(database: Rc<MemoryDatabase>) -> Self {
        Self {
            database: Some(database),
        }
    }

    /// Creates a context with no active database.
    pub fn detached() -> Self {
        Self::default()
    }
}

impl ContentContext for MemoryContext {
    fn database(&self) -> Option<&dyn ContentDatabase> {
        self.database
            .as_deref()
            .map(|database| database as &dyn ContentDatabase)
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryContext, MemoryDatabase};
    use crate::content::{ContentContext, ContentDatabase, ContentError};
    use crate::model::path::RelativePath;
    use std::rc::Rc;

    #[test]
    fn path_lookup_matches_segments_case_insensitively() {
        let database = MemoryDatabase::new();
        let root = database.create_root("Dictionary");
        let folder = database.create_item(root, "Navigation").expect("folder should be created");
        let entry = database.create_item(folder, "Title").expect("entry should be created");

        let path = RelativePath::parse("navigation/TITLE").expect("path should parse");
        assert_eq!(database.item_below(root, &path), Some(entry));
    }

    #[test]
    fn lookup_misses_unknown_segment() {
        let database = MemoryDatabase::new();
        let root = database.create_root("Dictionary");
        let path = RelativePath::parse("missing").expect("path should parse");
        assert_eq!(database.item_below(root, &path), None);
    }

    #[test]
    fn create_item_rejects_blank_and_separator_names() {
        let database = MemoryDatabase::new();
        let root = database.create_root("Dictionary");

        let blank = database.create_item(root, "  ").expect_err("blank name must fail");
        assert!(matches!(blank, ContentError::InvalidItemName(_)));

        let nested = database.create_item(root, "a/b").expect_err("separator must fail");
        assert!(matches!(nested, ContentError::InvalidItemName(_)));
    }

    #[test]
    fn read_only_database_rejects_writes() {
        let database = MemoryDatabase::new();
        let root = database.create_root("Dictionary");
        database.set_read_only(true);

        let create = database.create_item(root, "Entry").expect_err("write must fail");
        assert_eq!(create, ContentError::ReadOnly);

        let write = database.set_field(root, "Phrase", "x").expect_err("write must fail");
        assert_eq!(write, ContentError::ReadOnly);
    }

    #[test]
    fn detached_context_serves_no_database() {
        let detached = MemoryContext::detached();
        assert!(detached.database().is_none());

        let attached = MemoryContext::with_database(Rc::new(MemoryDatabase::new()));
        assert!(attached.database().is_some());
    }
}
