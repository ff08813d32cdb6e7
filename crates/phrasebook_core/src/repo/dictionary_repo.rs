//! Current-dictionary provider contract.

use crate::model::dictionary::Dictionary;

/// Resolves the default dictionary for the current site.
pub trait DictionaryProvider {
    /// Returns the dictionary new repository instances should be wired to.
    fn current_dictionary(&self) -> Dictionary;
}

/// Provider backed by one fixed site configuration.
#[derive(Debug, Clone)]
pub struct SiteDictionaryProvider {
    dictionary: Dictionary,
}

impl SiteDictionaryProvider {
    /// Creates a provider serving one configured dictionary.
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }
}

impl DictionaryProvider for SiteDictionaryProvider {
    fn current_dictionary(&self) -> Dictionary {
        self.dictionary.clone()
    }
}
