//! # Storage Traits
//!
//! The persistence boundary is a named key-value store: every collection
//! and preference lives as one JSON (or plain string) value under a fixed
//! key. The trait abstracts where those values live so the domain layer
//! works against any backing implementation (files on disk, memory).

use anyhow::Result;

/// Interface to the key-value persistence boundary.
///
/// All operations are synchronous and per-key; there is no transaction
/// spanning keys. Concurrent writers on the same key resolve as
/// last-write-wins.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value under `key` if present
    fn remove(&self, key: &str) -> Result<()>;
}
