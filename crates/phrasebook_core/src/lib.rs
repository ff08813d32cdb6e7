//! Core dictionary-phrase lookup logic for phrasebook.
//! This crate is the single source of truth for phrase resolution rules.

pub mod content;
pub mod logging;
pub mod model;
pub mod repo;
pub mod scope;
pub mod service;

pub use content::{
    memory::{MemoryContext, MemoryDatabase},
    ContentContext, ContentDatabase, ContentError, ContentResult,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::dictionary::{Dictionary, PHRASE_FIELD};
pub use model::item::{Item, ItemId};
pub use model::path::{RelativePath, RelativePathError};
pub use repo::dictionary_repo::{DictionaryProvider, SiteDictionaryProvider};
pub use repo::phrase_repo::{PhraseRepository, PhraseResult, CURRENT_REPOSITORY_KEY};
pub use scope::RequestScope;
pub use service::entry_service::{CreateEntryError, CreateEntryResult, EntryCreator, TreeEntryService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
