//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate content database calls into entry-level operations.
//! - Keep tree mutation details out of the repository layer.

pub mod entry_service;
