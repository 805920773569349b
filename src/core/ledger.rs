//! In-memory ledger engine
//!
//! This module provides the `InMemoryLedger` that orchestrates the committed
//! entry log and the transaction stack. It routes deposits and withdrawals
//! to the topmost open scope (or straight to the committed log when idle)
//! and implements the savepoint semantics of nested commit and rollback:
//! only a commit chain that unwinds the entire stack makes entries durable,
//! and a rollback at any depth discards exactly the entries recorded at or
//! below that depth since the matching `begin`.
//!
//! Each ledger is an independent instance; any number can coexist in one
//! process.

use crate::core::entry_log::EntryLog;
use crate::core::traits::Ledger;
use crate::core::tx_stack::TransactionStack;
use crate::types::{Entry, EntryId, LedgerError};
use tracing::{debug, trace};

/// In-memory ledger with nested transaction support
///
/// Owns the committed entry log and the stack of open transaction scopes.
/// Single-owner and not internally thread-safe; see [`Ledger`].
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    /// Committed entries, running balance, and the balance index
    log: EntryLog,

    /// Open transaction scopes, innermost on top
    stack: TransactionStack,
}

impl InMemoryLedger {
    /// Create a new empty ledger with a zero balance and no open transaction
    pub fn new() -> Self {
        InMemoryLedger::default()
    }

    /// Current nesting depth (0 = no active transaction)
    pub fn transaction_depth(&self) -> usize {
        self.stack.depth()
    }

    /// Number of entries in the committed log
    pub fn committed_entry_count(&self) -> usize {
        self.log.len()
    }

    /// Record a signed amount against the innermost open scope, or the
    /// committed log when no transaction is open
    fn record(&mut self, amount: i64) -> EntryId {
        let id = match self.stack.top_mut() {
            Some(scope) => {
                let entry = Entry::record(amount, scope.running_balance());
                let id = entry.id.clone();
                scope.push(entry);
                id
            }
            None => self.log.append(amount),
        };
        trace!(id = %id, amount, balance = self.balance(), depth = self.stack.depth(), "entry recorded");
        id
    }
}

impl Ledger for InMemoryLedger {
    fn balance(&self) -> i64 {
        match self.stack.top() {
            Some(scope) => scope.running_balance(),
            None => self.log.balance(),
        }
    }

    fn deposit(&mut self, amount: i64) -> EntryId {
        self.record(amount)
    }

    fn withdraw(&mut self, amount: i64) -> EntryId {
        self.record(-amount)
    }

    fn balance_at(&self, id: &EntryId) -> Result<i64, LedgerError> {
        self.log.balance_at(id)
    }

    fn begin(&mut self) {
        let base = self.balance();
        self.stack.begin(base);
        debug!(depth = self.stack.depth(), base_balance = base, "transaction begun");
    }

    fn commit(&mut self) -> Result<(), LedgerError> {
        let scope = self
            .stack
            .pop()
            .ok_or_else(|| LedgerError::no_active_transaction("commit"))?;

        let committed = scope.len();
        match self.stack.top_mut() {
            // Still nested: the popped scope's entries stay pending in the
            // enclosing scope until that scope is itself committed.
            Some(enclosing) => enclosing.absorb(scope.into_entries()),
            // Outermost commit: the entries become durable and resolvable.
            None => {
                for entry in scope.into_entries() {
                    self.log.absorb(entry);
                }
            }
        }
        debug!(
            entries = committed,
            depth = self.stack.depth(),
            balance = self.balance(),
            "transaction committed"
        );
        Ok(())
    }

    fn rollback(&mut self) -> Result<(), LedgerError> {
        let scope = self
            .stack
            .pop()
            .ok_or_else(|| LedgerError::no_active_transaction("rollback"))?;

        // Dropping the scope discards its buffered entries, including any
        // merged in from inner scopes that committed into it.
        debug!(
            discarded = scope.len(),
            depth = self.stack.depth(),
            balance = scope.base_balance(),
            "transaction rolled back"
        );
        Ok(())
    }
}
