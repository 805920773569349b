//! Core ledger logic module
//!
//! This module contains the ledger engine components:
//! - `traits` - The public `Ledger` command/query surface
//! - `ledger` - In-memory ledger orchestration
//! - `entry_log` - Committed entry log and balance index
//! - `tx_stack` - Nested transaction scopes and the transaction stack

pub mod entry_log;
pub mod ledger;
pub mod traits;
pub mod tx_stack;

pub use entry_log::EntryLog;
pub use ledger::InMemoryLedger;
pub use traits::Ledger;
pub use tx_stack::{TransactionScope, TransactionStack};
