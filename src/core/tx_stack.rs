//! Nested transaction scopes and the transaction stack
//!
//! This module provides the scope records behind `begin`/`commit`/`rollback`.
//! A `TransactionScope` buffers the entries recorded while it was the
//! innermost open scope; the `TransactionStack` orders open scopes with the
//! innermost on top.
//!
//! The stack is an explicit vector of scope records rather than recursion,
//! so nesting depth is bounded only by available memory and each level can
//! be inspected independently.
//!
//! # Ownership
//!
//! A scope owns its buffered entries until they are moved out: `commit`
//! merges them downward (into the enclosing scope or the committed log),
//! `rollback` drops them. Entries are value records, never shared between
//! scopes.

use crate::types::Entry;

/// One level of an open transaction
///
/// Holds the entries recorded while this scope was topmost, plus the
/// balance inherited from the enclosing scope (or the committed log) at
/// the moment the scope was opened.
#[derive(Debug)]
pub struct TransactionScope {
    /// Balance inherited from the enclosing level when this scope opened
    base_balance: i64,

    /// Entries recorded in this scope, in insertion order
    entries: Vec<Entry>,
}

impl TransactionScope {
    /// Open a new scope continuing from the given balance
    pub fn new(base_balance: i64) -> Self {
        TransactionScope {
            base_balance,
            entries: Vec::new(),
        }
    }

    /// The balance this scope started from
    pub fn base_balance(&self) -> i64 {
        self.base_balance
    }

    /// Running balance visible inside this scope
    ///
    /// # Returns
    ///
    /// The resulting balance of the latest buffered entry, or the base
    /// balance if the scope has recorded nothing yet
    pub fn running_balance(&self) -> i64 {
        self.entries
            .last()
            .map(|entry| entry.resulting_balance)
            .unwrap_or(self.base_balance)
    }

    /// Buffer a newly recorded entry in this scope
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Merge a committed inner scope's entries into this scope's buffer
    ///
    /// The inner entries keep their original order. They were recorded
    /// after everything already buffered here (writes only ever target the
    /// topmost scope), so extending the buffer preserves global insertion
    /// order and running-balance continuity.
    ///
    /// # Arguments
    ///
    /// * `entries` - The inner scope's buffered entries, in original order
    pub fn absorb(&mut self, entries: Vec<Entry>) {
        self.entries.extend(entries);
    }

    /// Number of entries currently buffered in this scope
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the scope has buffered no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the scope, yielding its buffered entries in order
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}

/// Ordered stack of open transaction scopes, innermost last
///
/// An empty stack means no active transaction: writes go directly to the
/// committed log. A non-empty stack routes every write to the topmost
/// scope.
#[derive(Debug, Default)]
pub struct TransactionStack {
    scopes: Vec<TransactionScope>,
}

impl TransactionStack {
    /// Create a new empty stack (no active transaction)
    pub fn new() -> Self {
        TransactionStack::default()
    }

    /// Push a new innermost scope continuing from the given balance
    ///
    /// Always succeeds; there is no upper bound on nesting depth.
    pub fn begin(&mut self, base_balance: i64) {
        self.scopes.push(TransactionScope::new(base_balance));
    }

    /// Pop the innermost scope, if any
    ///
    /// The caller decides whether to merge the popped scope's entries
    /// downward (commit) or drop them (rollback).
    pub fn pop(&mut self) -> Option<TransactionScope> {
        self.scopes.pop()
    }

    /// The innermost open scope, if any
    pub fn top(&self) -> Option<&TransactionScope> {
        self.scopes.last()
    }

    /// Mutable access to the innermost open scope, if any
    pub fn top_mut(&mut self) -> Option<&mut TransactionScope> {
        self.scopes.last_mut()
    }

    /// Current nesting depth (0 = no active transaction)
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Whether no transaction is open
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}
