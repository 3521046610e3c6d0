//! Core types for Tablespin: random tables and where they come from.
//!
//! This crate defines the table data model the resolution engine rolls
//! against. It is independent of the template syntax — you can construct a
//! [`Table`] programmatically, deserialize one from JSON, or let a
//! [`TableSource`] fetch tables by name.

/// Error types used throughout the crate.
pub mod error;
/// Loading tables, the table index, and stored templates from disk.
pub mod library;
/// Table sources supplying tables to the engine by name.
pub mod source;
/// The random table type: weighted and uniform rolling, validation.
pub mod table;

/// Re-export error types.
pub use error::{TsError, TsResult};
/// Re-export table sources.
pub use source::{DirectorySource, MemorySource, TableSource};
/// Re-export the table type and its diagnostics.
pub use table::{RollError, Table, TableIssue};
