//! Committed entry log and balance index
//!
//! This module provides the `EntryLog` component that owns the ledger's
//! committed state: the running balance, the append-only insertion-ordered
//! entry history, and the identifier-to-balance index used for
//! point-in-time balance lookups.
//!
//! # Append-Only Guarantee
//!
//! The log and its index evolve only by appends. A committed entry's
//! running balance never changes once recorded, so `balance_at` answers
//! are stable for the lifetime of the ledger instance.

use crate::types::{Entry, EntryId, LedgerError};
use std::collections::HashMap;
use tracing::trace;

/// The committed view of a ledger
///
/// Maintains the most recent running balance, the ordered history of
/// committed entries, and a lookup index from entry identifier to the
/// running balance recorded at that entry.
#[derive(Debug, Default)]
pub struct EntryLog {
    /// Most recent running balance; 0 when the log is empty
    balance: i64,

    /// Committed entries in insertion order
    entries: Vec<Entry>,

    /// Map of entry identifier to the running balance at that entry
    index: HashMap<EntryId, i64>,
}

impl EntryLog {
    /// Create a new empty entry log with a zero balance
    pub fn new() -> Self {
        EntryLog::default()
    }

    /// Append a new entry directly to the committed log
    ///
    /// Mints a fresh entry continuing from the current balance, records
    /// it in the log and the index, and advances the running balance.
    /// Used when no transaction is open.
    ///
    /// # Arguments
    ///
    /// * `amount` - Signed delta to apply (positive = deposit)
    ///
    /// # Returns
    ///
    /// The unique identifier of the appended entry
    pub fn append(&mut self, amount: i64) -> EntryId {
        let entry = Entry::record(amount, self.balance);
        let id = entry.id.clone();
        self.absorb(entry);
        id
    }

    /// Install an entry carried over from a committed transaction scope
    ///
    /// The entry's running balance was already computed inside its scope;
    /// it is preserved as-is. Because scopes always continue from the
    /// effective balance beneath them, the entry's balance continues the
    /// log's running total.
    ///
    /// # Arguments
    ///
    /// * `entry` - The entry to commit, with its precomputed balance
    pub fn absorb(&mut self, entry: Entry) {
        debug_assert_eq!(
            entry.resulting_balance,
            self.balance + entry.amount,
            "committed entry must continue the log's running balance"
        );
        trace!(id = %entry.id, amount = entry.amount, balance = entry.resulting_balance, "entry committed");
        self.balance = entry.resulting_balance;
        self.index.insert(entry.id.clone(), entry.resulting_balance);
        self.entries.push(entry);
    }

    /// Get the most recent running balance
    ///
    /// # Returns
    ///
    /// The balance after the latest committed entry, or 0 if the log is empty
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Look up the running balance recorded at a committed entry
    ///
    /// # Arguments
    ///
    /// * `id` - The entry identifier to resolve
    ///
    /// # Returns
    ///
    /// * `Ok(balance)` - The running balance at that entry
    /// * `Err(LedgerError::UnknownEntry)` - If the id was never committed
    pub fn balance_at(&self, id: &EntryId) -> Result<i64, LedgerError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| LedgerError::unknown_entry(id))
    }

    /// Number of committed entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log holds no committed entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
