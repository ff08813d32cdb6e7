//! Repository layer for dictionary and phrase resolution.
//!
//! # Responsibility
//! - Provide use-case oriented lookup APIs over the content collaborator.
//! - Keep path normalization and autocreate fallback inside the repository
//!   boundary.
//!
//! # Invariants
//! - Only invalid-input conditions surface as errors; lookup misses and
//!   downstream creation failures degrade to absent results.

pub mod dictionary_repo;
pub mod phrase_repo;
