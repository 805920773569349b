//! Error types for the ledger engine
//!
//! This module defines the error conditions the ledger reports to callers.
//! Every defined failure is a precondition violation: the ledger's state is
//! unchanged by a failed call, and the caller decides how to proceed.
//!
//! # Error Categories
//!
//! - **Lookup Errors**: Balance queries for identifiers that never reached
//!   the committed log.
//! - **Transaction Errors**: Commit or rollback without an open transaction.

use thiserror::Error;

/// Main error type for the ledger engine
///
/// This enum represents all failure conditions a ledger operation can
/// report. Each variant includes the context needed to diagnose the
/// offending call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The entry identifier has never been committed
    ///
    /// Covers identifiers that were never issued, were discarded by a
    /// rollback, or are still pending inside an open transaction scope.
    /// The entry log is unchanged by the failed lookup.
    #[error("unknown entry id '{id}': no committed entry with this identifier")]
    UnknownEntry {
        /// The identifier that could not be resolved
        id: String,
    },

    /// Commit or rollback was called with no open transaction
    ///
    /// The transaction stack is unchanged by the failed call.
    #[error("{operation} called without an active transaction")]
    NoActiveTransaction {
        /// The operation that failed (`commit` or `rollback`)
        operation: String,
    },
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an UnknownEntry error
    pub fn unknown_entry(id: impl AsRef<str>) -> Self {
        LedgerError::UnknownEntry {
            id: id.as_ref().to_string(),
        }
    }

    /// Create a NoActiveTransaction error
    pub fn no_active_transaction(operation: &str) -> Self {
        LedgerError::NoActiveTransaction {
            operation: operation.to_string(),
        }
    }
}
