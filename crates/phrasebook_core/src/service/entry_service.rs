//! Dictionary entry creation service.
//!
//! # Responsibility
//! - Create one phrase entry under a dictionary root, including intermediate
//!   folder items along the path.
//! - Seed the phrase field of newly created entries.
//!
//! # Invariants
//! - An existing leaf is reused, never duplicated.
//! - Creation failure is reported to the caller; degrading it to a miss is
//!   the repository's decision, not this service's.

use crate::content::{ContentDatabase, ContentError};
use crate::model::dictionary::{Dictionary, PHRASE_FIELD};
use crate::model::item::ItemId;
use crate::model::path::RelativePath;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// Result type used by entry creation.
pub type CreateEntryResult<T> = Result<T, CreateEntryError>;

/// Errors from dictionary entry creation.
#[derive(Debug)]
pub enum CreateEntryError {
    /// Dictionary root is not present in the active database.
    RootNotFound(ItemId),
    /// Underlying content mutation failure.
    Content(ContentError),
}

impl Display for CreateEntryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RootNotFound(id) => write!(f, "dictionary root not found: {id}"),
            Self::Content(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CreateEntryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::RootNotFound(_) => None,
            Self::Content(err) => Some(err),
        }
    }
}

impl From<ContentError> for CreateEntryError {
    fn from(value: ContentError) -> Self {
        Self::Content(value)
    }
}

/// Entry-creation contract consumed by the phrase repository.
pub trait EntryCreator {
    /// Creates the entry at `relative_path` under the dictionary root and
    /// seeds its phrase field with `seed`.
    fn create_entry(
        &self,
        dictionary: &Dictionary,
        relative_path: &RelativePath,
        seed: &str,
    ) -> CreateEntryResult<ItemId>;
}

/// Creator that materializes the path as folder items plus one entry item.
pub struct TreeEntryService {
    database: Rc<dyn ContentDatabase>,
}

impl TreeEntryService {
    /// Creates a service writing through the given database.
    pub fn new(database: Rc<dyn ContentDatabase>) -> Self {
        Self { database }
    }
}

impl EntryCreator for TreeEntryService {
    fn create_entry(
        &self,
        dictionary: &Dictionary,
        relative_path: &RelativePath,
        seed: &str,
    ) -> CreateEntryResult<ItemId> {
        let database = self.database.as_ref();
        if !database.contains_item(dictionary.root) {
            return Err(CreateEntryError::RootNotFound(dictionary.root));
        }

        let segments: Vec<&str> = relative_path.segments().collect();
        let (leaf_name, folders) = match segments.split_last() {
            Some(parts) => parts,
            // Unreachable: a RelativePath has at least one segment.
            None => {
                return Err(CreateEntryError::Content(ContentError::InvalidItemName(
                    relative_path.to_string(),
                )))
            }
        };

        let mut parent = dictionary.root;
        for segment in folders {
            parent = match database.child_named(parent, segment) {
                Some(existing) => existing,
                None => database.create_item(parent, segment)?,
            };
        }

        match database.child_named(parent, leaf_name) {
            Some(existing) => Ok(existing),
            None => {
                let entry = database.create_item(parent, leaf_name)?;
                database.set_field(entry, PHRASE_FIELD, seed)?;
                Ok(entry)
            }
        }
    }
}
