//! Content-management collaborator contracts.
//!
//! # Responsibility
//! - Define the seam between phrase resolution and the host content layer.
//! - Keep tree lookup and mutation details behind trait boundaries.
//!
//! # Invariants
//! - Lookup APIs are read-only; all mutation goes through `create_item` and
//!   `set_field`, which may fail.
//! - An absent database (`ContentContext::database() == None`) means no tree
//!   access is possible at all.
//!
//! # See also
//! - docs/architecture.md

use crate::model::item::ItemId;
use crate::model::path::RelativePath;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;

pub use memory::{MemoryContext, MemoryDatabase};

/// Result type used by content database operations.
pub type ContentResult<T> = Result<T, ContentError>;

/// Errors from content database mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// Target item does not exist.
    ItemNotFound(ItemId),
    /// Item name is empty or contains a path separator.
    InvalidItemName(String),
    /// Database rejects writes.
    ReadOnly,
}

impl Display for ContentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ItemNotFound(id) => write!(f, "content item not found: {id}"),
            Self::InvalidItemName(name) => write!(f, "invalid content item name: `{name}`"),
            Self::ReadOnly => write!(f, "content database is read-only"),
        }
    }
}

impl Error for ContentError {}

/// Item tree access contract provided by the host content layer.
pub trait ContentDatabase {
    /// Returns whether one item exists in the tree.
    fn contains_item(&self, item: ItemId) -> bool;
    /// Resolves one normalized path under a root via the path axis.
    fn item_below(&self, root: ItemId, path: &RelativePath) -> Option<ItemId>;
    /// Finds one direct child by name, matched case-insensitively.
    fn child_named(&self, parent: ItemId, name: &str) -> Option<ItemId>;
    /// Reads one field value from an item.
    fn field_value(&self, item: ItemId, field: &str) -> Option<String>;
    /// Creates one child item under a parent.
    fn create_item(&self, parent: ItemId, name: &str) -> ContentResult<ItemId>;
    /// Writes one field value on an item.
    fn set_field(&self, item: ItemId, field: &str, value: &str) -> ContentResult<()>;
}

/// Availability check for the active content database.
pub trait ContentContext {
    /// Returns the active database, or `None` outside a content context.
    fn database(&self) -> Option<&dyn ContentDatabase>;
}
