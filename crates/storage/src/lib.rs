//! Persistence adapter: a key/value contract with in-memory and SQLite
//! backends, plus a typed JSON layer that falls back to defaults.

pub mod json;
pub mod repository;
pub mod sqlite;

pub use json::{JsonStore, StorageKey};
pub use repository::{InMemoryKeyValueStore, KeyValueStore, Storage, StorageError};
