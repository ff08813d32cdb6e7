//! Phrase repository: lookup-or-autocreate over one dictionary.
//!
//! # Responsibility
//! - Resolve relative phrase paths against the dictionary root.
//! - Auto-create missing entries when the dictionary policy permits.
//! - Memoize one repository per request scope under a fixed key.
//!
//! # Invariants
//! - Only path validation failures surface as errors; misses and creation
//!   failures degrade to the caller default / absent item.
//! - `get` short-circuits on an absent database before validating the path.
//! - Creation failures are logged at error level and never propagate.
//!
//! # See also
//! - docs/architecture.md

use crate::content::{ContentContext, ContentDatabase};
use crate::model::dictionary::{Dictionary, PHRASE_FIELD};
use crate::model::item::ItemId;
use crate::model::path::{RelativePath, RelativePathError};
use crate::repo::dictionary_repo::DictionaryProvider;
use crate::scope::RequestScope;
use crate::service::entry_service::{CreateEntryError, EntryCreator};
use log::{debug, error};
use std::rc::Rc;

/// Fixed request-scope key holding the memoized current repository.
pub const CURRENT_REPOSITORY_KEY: &str = "phrase_repository.current";

/// Result type used by phrase repository operations.
pub type PhraseResult<T> = Result<T, RelativePathError>;

/// Outcome of one resolve-or-autocreate attempt.
///
/// `Degraded` carries the creation failure so the boundary can log it before
/// collapsing the outcome into a miss.
enum Resolution {
    Found(ItemId),
    Missing,
    Degraded(CreateEntryError),
}

/// Resolves localized phrases under one dictionary root.
pub struct PhraseRepository {
    dictionary: Dictionary,
    context: Rc<dyn ContentContext>,
    creator: Rc<dyn EntryCreator>,
}

impl PhraseRepository {
    /// Creates a repository bound to one dictionary and its collaborators.
    pub fn new(
        dictionary: Dictionary,
        context: Rc<dyn ContentContext>,
        creator: Rc<dyn EntryCreator>,
    ) -> Self {
        Self {
            dictionary,
            context,
            creator,
        }
    }

    /// Returns the dictionary this repository resolves against.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Returns the request-scoped current repository, building and caching
    /// one when the scope holds none.
    ///
    /// # Invariants
    /// - Two calls within one scope return the identical instance.
    /// - Without a scope a fresh, uncached instance is built per call.
    pub fn current(
        scope: Option<&RequestScope>,
        dictionaries: &dyn DictionaryProvider,
        context: Rc<dyn ContentContext>,
        creator: Rc<dyn EntryCreator>,
    ) -> Rc<Self> {
        if let Some(scope) = scope {
            if let Some(cached) = scope.get::<PhraseRepository>(CURRENT_REPOSITORY_KEY) {
                return cached;
            }
        }

        let repository = Rc::new(Self::new(dictionaries.current_dictionary(), context, creator));
        if let Some(scope) = scope {
            scope.insert(CURRENT_REPOSITORY_KEY, Rc::clone(&repository));
        }
        repository
    }

    /// Resolves one phrase, falling back to `default_value`.
    ///
    /// Returns `Ok(None)` only when nothing resolves and no default is given.
    ///
    /// # Invariants
    /// - With no active database the default is returned before path
    ///   validation, and no tree access happens.
    /// - An empty or absent phrase field falls back to the default.
    ///
    /// # Errors
    /// - `RelativePathError` when the path does not normalize.
    pub fn get(
        &self,
        relative_path: &str,
        default_value: Option<&str>,
    ) -> PhraseResult<Option<String>> {
        let database = match self.context.database() {
            Some(database) => database,
            None => return Ok(default_value.map(str::to_string)),
        };

        let path = RelativePath::parse(relative_path)?;
        let item = match self.resolve_item(database, &path, default_value) {
            Some(item) => item,
            None => return Ok(default_value.map(str::to_string)),
        };

        Ok(database
            .field_value(item, PHRASE_FIELD)
            .filter(|value| !value.is_empty())
            .or_else(|| default_value.map(str::to_string)))
    }

    /// Resolves the underlying entry item instead of the phrase value.
    ///
    /// Emits a debug log with site name and path when nothing resolves.
    ///
    /// # Errors
    /// - `RelativePathError` when the path does not normalize.
    pub fn get_item(
        &self,
        relative_path: &str,
        default_value: Option<&str>,
    ) -> PhraseResult<Option<ItemId>> {
        let path = RelativePath::parse(relative_path)?;
        let item = self
            .context
            .database()
            .and_then(|database| self.resolve_item(database, &path, default_value));

        if item.is_none() {
            debug!(
                "event=phrase_entry_missing module=repo site={} path={}",
                self.dictionary.site_name, path
            );
        }
        Ok(item)
    }

    /// Collapses a resolution into an optional item, logging degraded
    /// outcomes at error level.
    fn resolve_item(
        &self,
        database: &dyn ContentDatabase,
        path: &RelativePath,
        default_value: Option<&str>,
    ) -> Option<ItemId> {
        match self.resolve_or_create(database, path, default_value) {
            Resolution::Found(item) => Some(item),
            Resolution::Missing => None,
            Resolution::Degraded(cause) => {
                error!(
                    "event=phrase_entry_create_failed module=repo status=error site={} path={} cause={}",
                    self.dictionary.site_name, path, cause
                );
                None
            }
        }
    }

    fn resolve_or_create(
        &self,
        database: &dyn ContentDatabase,
        path: &RelativePath,
        default_value: Option<&str>,
    ) -> Resolution {
        if let Some(item) = database.item_below(self.dictionary.root, path) {
            return Resolution::Found(item);
        }

        if !self.dictionary.auto_create {
            return Resolution::Missing;
        }
        let seed = match default_value {
            Some(seed) => seed,
            None => return Resolution::Missing,
        };

        match self.creator.create_entry(&self.dictionary, path, seed) {
            Ok(item) => Resolution::Found(item),
            Err(cause) => Resolution::Degraded(cause),
        }
    }
}
