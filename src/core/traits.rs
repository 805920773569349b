//! Core trait for the ledger's public command/query surface
//!
//! This module defines the trait abstraction hosts program against. The
//! crate ships one in-memory implementation; alternative backends (for
//! example a persistent one) would implement the same seam.

use crate::types::{EntryId, LedgerError};

/// The ledger's public operations
///
/// All operations are synchronous and complete before returning. A ledger
/// instance is single-owner and not internally thread-safe: concurrent
/// hosts must serialize access behind a single mutual-exclusion boundary.
pub trait Ledger {
    /// The effective balance at this point in time
    ///
    /// Inside an open transaction this reflects the innermost scope's
    /// pending entries; otherwise it is the committed balance. Never fails.
    fn balance(&self) -> i64;

    /// Record a deposit of `amount`
    ///
    /// Always succeeds; amounts are not validated beyond the `i64` range.
    ///
    /// # Returns
    ///
    /// A unique entry identifier for the deposit
    fn deposit(&mut self, amount: i64) -> EntryId;

    /// Record a withdrawal of `amount`
    ///
    /// Always succeeds; amounts are not validated beyond the `i64` range.
    ///
    /// # Returns
    ///
    /// A unique entry identifier for the withdrawal
    fn withdraw(&mut self, amount: i64) -> EntryId;

    /// The total balance at (and including) a particular committed entry
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownEntry`] if the identifier never
    /// reached the committed log: never issued, rolled back, or still
    /// pending in an open transaction.
    fn balance_at(&self, id: &EntryId) -> Result<i64, LedgerError>;

    /// Start a transaction block
    ///
    /// Transactions can be nested to any depth. Always succeeds.
    fn begin(&mut self);

    /// Finish the innermost transaction block and keep its changes
    ///
    /// Entries move into the enclosing scope, or into the committed log
    /// if this was the outermost block.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::NoActiveTransaction`] if no transaction is
    /// open; the ledger is unchanged.
    fn commit(&mut self) -> Result<(), LedgerError>;

    /// Finish the innermost transaction block and discard its changes
    ///
    /// Every entry recorded at or below this level since the matching
    /// `begin` is dropped and its identifier never becomes resolvable.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::NoActiveTransaction`] if no transaction is
    /// open; the ledger is unchanged.
    fn rollback(&mut self) -> Result<(), LedgerError>;
}
