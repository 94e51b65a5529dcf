//! Persistence bridge.
//!
//! The engine persists two independently keyed string blobs (the
//! catalog's item list and the saved-outfit sequence) plus two
//! cosmetic preference strings. Everything the engine needs from the
//! storage medium is get/set of strings, so that is the whole trait;
//! the default backend is a SQLite key-value table (sqlite.rs), and an
//! in-memory map backs tests.

pub mod sqlite;

pub use sqlite::SqliteStore;

use std::collections::HashMap;

use crate::error::Error;

/// Storage key for the catalog's serialized item list.
pub const CATALOG_KEY: &str = "wardrobe.items";
/// Storage key for the serialized saved-outfit sequence.
pub const OUTFITS_KEY: &str = "wardrobe.outfits";
/// Storage key for the active theme preference.
pub const THEME_KEY: &str = "prefs.theme";
/// Storage key for the accent color preference.
pub const ACCENT_KEY: &str = "prefs.accent";

/// Abstract get/set string storage for the engine's persisted blobs.
pub trait KeyValueStore {
    /// Read a value. Returns None if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, Error>;

    /// Write (or overwrite) a value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), Error>;
}

/// Volatile in-memory store. Used by tests and as a scratch backend;
/// nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
