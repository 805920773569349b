//! Types module
//!
//! Contains core data structures used throughout the ledger engine.
//! This module organizes types into logical submodules:
//! - `entry`: Entry identifiers and the entry value record
//! - `error`: Error types for the ledger engine

pub mod entry;
pub mod error;

pub use entry::{Entry, EntryId, ENTRY_ID_PREFIX};
pub use error::LedgerError;
