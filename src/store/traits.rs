//! Storage trait definitions.
//!
//! The journal is append-only and single-writer per context. Two processes
//! writing the same key race last-write-wins; that matches the original
//! behavior and is deliberately not papered over with locking.

use crate::core::{Mode, Session};
use crate::error::Result;
use crate::store::record::JournalRecord;

/// Persistence boundary for completed reflection sessions.
pub trait JournalStore: Send + Sync {
    /// Persist a session's answered turns as a new record.
    ///
    /// Returns `Ok(None)` without writing when the session has no answered
    /// turns. Otherwise the new record is prepended to the mode's
    /// collection (most-recent-first) and the whole collection is written
    /// back.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn append_session(&self, session: &Session) -> Result<Option<JournalRecord>>;

    /// List a mode's records, most recent first.
    ///
    /// A missing or unparseable collection reads as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn list_records(&self, mode: Mode) -> Result<Vec<JournalRecord>>;

    /// Look up one record by id. `Ok(None)` for unknown ids.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn get_record(&self, mode: Mode, id: i64) -> Result<Option<JournalRecord>>;

    /// Delete a mode's entire collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn clear(&self, mode: Mode) -> Result<()>;
}

/// String key/value capability the journal persists through.
///
/// Mirrors the browser storage the original depended on: synchronous,
/// string-valued, get/set/remove by key.
pub trait KeyValueStorage: Send + Sync {
    /// Read a key's value, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a key's value, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the removal fails.
    fn remove(&self, key: &str) -> Result<()>;
}
