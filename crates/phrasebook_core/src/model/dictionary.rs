//! Dictionary model.
//!
//! # Responsibility
//! - Describe one localization namespace rooted at a content item.
//!
//! # Invariants
//! - `root` must reference an item in the active content database for
//!   lookups to succeed; the model itself does not enforce this.

use crate::model::item::ItemId;
use serde::{Deserialize, Serialize};

/// Field name on a dictionary entry holding the localized phrase text.
pub const PHRASE_FIELD: &str = "Phrase";

/// One dictionary: a named phrase namespace scoped to a site.
///
/// Serde-derived so hosts can load dictionary definitions from site
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionary {
    /// Content item acting as the lookup base for all relative paths.
    pub root: ItemId,
    /// Owning site name, used in diagnostics only.
    pub site_name: String,
    /// Policy flag permitting on-demand creation of missing entries.
    pub auto_create: bool,
}

impl Dictionary {
    /// Creates a dictionary reference.
    pub fn new(root: ItemId, site_name: impl Into<String>, auto_create: bool) -> Self {
        Self {
            root,
            site_name: site_name.into(),
            auto_create,
        }
    }
}
