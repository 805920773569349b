//! Ledger Engine Library
//! # Overview
//!
//! This library provides an in-memory financial ledger: an ordered,
//! append-only record of deposits and withdrawals with nested transaction
//! scoping and point-in-time balance reconstruction by entry identifier.
//!
//! # Architecture
//!
//! The system is organized into two modules:
//!
//! - [`types`] - Core data types (Entry, EntryId, LedgerError)
//! - [`core`] - Ledger logic components:
//!   - [`core::ledger`] - In-memory ledger orchestration
//!   - [`core::entry_log`] - Committed entry log and balance index
//!   - [`core::tx_stack`] - Nested transaction scopes and stack
//!
//! # Operations
//!
//! The [`Ledger`] trait exposes the full surface:
//!
//! - **Deposit** / **Withdrawal**: record a signed movement, returning a
//!   unique entry identifier
//! - **Balance**: the effective balance, including pending transaction work
//! - **Balance at**: the running balance recorded at a committed entry
//! - **Begin** / **Commit** / **Rollback**: nested transaction blocks with
//!   savepoint semantics
//!
//! # Transaction Semantics
//!
//! Transactions nest to arbitrary depth. Writes inside a transaction stay
//! pending in the innermost scope; committing an inner scope merges its
//! entries into the enclosing scope, and only the commit that unwinds the
//! outermost scope makes entries durable and resolvable. A rollback at any
//! depth discards exactly the entries recorded at or below that depth since
//! the matching `begin`, including entries merged in from committed inner
//! scopes.
//!
//! # Example
//!
//! ```
//! use ledger_engine::{InMemoryLedger, Ledger};
//!
//! let mut ledger = InMemoryLedger::new();
//! let d1 = ledger.deposit(100);
//! ledger.withdraw(10);
//!
//! assert_eq!(ledger.balance(), 90);
//! assert_eq!(ledger.balance_at(&d1), Ok(100));
//!
//! ledger.begin();
//! ledger.withdraw(50);
//! ledger.rollback().unwrap();
//! assert_eq!(ledger.balance(), 90);
//! ```

// Module declarations
pub mod core;
pub mod types;

pub use core::{EntryLog, InMemoryLedger, Ledger, TransactionScope, TransactionStack};
pub use types::{Entry, EntryId, LedgerError, ENTRY_ID_PREFIX};
