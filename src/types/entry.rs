//! Entry-related types for the ledger engine
//!
//! This module defines the entry identifier and the immutable entry value
//! record that the ledger appends to scopes and to the committed log.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Prefix applied to every generated entry identifier
///
/// Distinguishes ledger entry identifiers from other ID spaces a host
/// application might use alongside the ledger.
pub const ENTRY_ID_PREFIX: &str = "entry-";

/// Unique identifier for a ledger entry
///
/// Identifiers are generated once at entry creation and never reused.
/// The value is the `entry-` prefix followed by a version 4 UUID, so
/// uniqueness holds for the lifetime of a ledger instance with
/// cryptographically negligible collision probability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(String);

impl EntryId {
    /// Generate a fresh, globally unique entry identifier
    ///
    /// # Returns
    ///
    /// A new EntryId of the form `entry-<uuid-v4>`
    pub fn generate() -> Self {
        EntryId(format!("{}{}", ENTRY_ID_PREFIX, Uuid::new_v4()))
    }

    /// View the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EntryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Allows tests and hosts to probe the ledger with arbitrary id strings.
impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        EntryId(value.to_string())
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        EntryId(value)
    }
}

/// One recorded deposit or withdrawal
///
/// Entries are simple immutable value records. Ownership is structural:
/// a pending transaction scope owns its buffered entries until they are
/// merged downward on commit or discarded on rollback; the committed
/// entry log owns them thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier assigned at creation, immutable, never reused
    pub id: EntryId,

    /// Signed amount delta (positive = deposit, negative = withdrawal)
    pub amount: i64,

    /// Running total immediately after this entry was applied, within
    /// the scope that recorded it
    pub resulting_balance: i64,
}

impl Entry {
    /// Record a new entry continuing from a previous running balance
    ///
    /// Mints a fresh identifier and computes the resulting balance as
    /// `previous_balance + amount`.
    ///
    /// # Arguments
    ///
    /// * `amount` - Signed delta to apply
    /// * `previous_balance` - Running balance before this entry
    ///
    /// # Returns
    ///
    /// A new Entry with a unique id and its running balance snapshot
    pub fn record(amount: i64, previous_balance: i64) -> Self {
        Entry {
            id: EntryId::generate(),
            amount,
            resulting_balance: previous_balance + amount,
        }
    }
}
