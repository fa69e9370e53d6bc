//! Persisted invite list

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};
use crate::error::StoreResult;
use super::KeyValueStore;

/// Default storage key for the invite list
pub const INVITES_KEY: &str = "lido.invites";

/// One accepted invite request
///
/// Fields missing from a stored entry read as their defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InviteRecord {
    pub name: String,
    pub email: String,
    pub guests: u32,
    pub arrival: String,
    /// ISO-8601 submission time
    pub submitted_at: String,
}

/// Invite list stored as a JSON array under one key
pub struct InviteStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> InviteStore<S> {
    /// Use the default key
    pub fn new(store: S) -> Self {
        Self::with_key(store, INVITES_KEY)
    }

    pub fn with_key(store: S, key: &str) -> Self {
        Self {
            store,
            key: key.to_string(),
        }
    }

    /// Storage key in use
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Underlying store
    pub fn backend(&self) -> &S {
        &self.store
    }

    /// Stored entries as raw JSON values
    ///
    /// Missing data, unparseable JSON or a non-array reads as empty.
    fn load_raw(&self) -> Vec<Value> {
        let Some(raw) = self.store.get(&self.key) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(key = %self.key, error = %err, "discarding unreadable invite list");
                Vec::new()
            }
        }
    }

    /// Read the list; entries that are not objects are skipped
    pub fn load(&self) -> Vec<InviteRecord> {
        self.load_raw()
            .into_iter()
            .filter_map(|entry| match serde_json::from_value(entry) {
                Ok(record) => Some(record),
                Err(err) => {
                    debug!(error = %err, "skipping untyped invite entry");
                    None
                }
            })
            .collect()
    }

    /// Whether an invite with this email (trimmed, case-insensitive) exists
    pub fn contains_email(&self, email: &str) -> bool {
        let needle = normalize_email(email);
        self.load_raw().iter().any(|entry| {
            entry
                .get("email")
                .and_then(Value::as_str)
                .is_some_and(|stored| normalize_email(stored) == needle)
        })
    }

    /// Append a record and write the whole list back
    ///
    /// Read-then-write: every stored entry, typed or not, is written back
    /// ahead of the new one.
    pub fn append(&mut self, record: InviteRecord) -> StoreResult<usize> {
        let mut entries = self.load_raw();
        entries.push(serde_json::to_value(&record)?);
        let encoded = serde_json::to_string(&entries)?;
        self.store.set(&self.key, &encoded)?;
        Ok(entries.len())
    }
}

/// Canonical form used for duplicate detection
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
