//! Persistence over an opaque key-value string store
//!
//! The only persisted state is the invite list, stored as one JSON array
//! under a fixed key.

mod invites;
mod store;

pub use invites::{InviteRecord, InviteStore, INVITES_KEY};
pub use store::{KeyValueStore, MemoryStore};
