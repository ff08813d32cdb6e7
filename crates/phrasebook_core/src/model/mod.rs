//! Domain model for dictionaries, items and phrase paths.
//!
//! # Responsibility
//! - Define the data shapes shared by repository and service layers.
//! - Keep path normalization rules in one place.
//!
//! # Invariants
//! - Every content item is identified by a stable `ItemId`.
//! - A `RelativePath` is always in normalized form once constructed.
//!
//! # See also
//! - docs/architecture.md

pub mod dictionary;
pub mod item;
pub mod path;
