//! SQLite-backed key-value store.
//!
//! A single `kv` table holds every persisted blob. The database file
//! lives in the user's data directory:
//! - Linux: ~/.local/share/wardrobe-studio/wardrobe.db
//! - macOS: ~/Library/Application Support/wardrobe-studio/wardrobe.db
//! - Windows: %APPDATA%\wardrobe-studio\wardrobe.db

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension};

use super::KeyValueStore;
use crate::error::Error;

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at the default per-user location.
    pub fn open_default() -> Result<Self, Error> {
        Self::open(&Self::default_path())
    }

    /// Open (or create) a database at an explicit path.
    pub fn open(path: &Path) -> Result<Self, Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        log::info!("wardrobe database at {}", path.display());
        Self::from_connection(conn)
    }

    /// Fully in-memory database, for tests.
    pub fn open_in_memory() -> Result<Self, Error> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, Error> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key     TEXT PRIMARY KEY,
                value   TEXT NOT NULL
            )",
            [],
        )?;
        Ok(SqliteStore { conn })
    }

    fn default_path() -> PathBuf {
        let mut path = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        path.push("wardrobe-studio");
        path.push("wardrobe.db");
        path
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_round_trip() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        assert!(store.get("wardrobe.items").unwrap().is_none());

        store.set("wardrobe.items", "[]").unwrap();
        assert_eq!(store.get("wardrobe.items").unwrap().as_deref(), Some("[]"));

        store.set("wardrobe.items", "[1]").unwrap();
        assert_eq!(store.get("wardrobe.items").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wardrobe.db");

        {
            let mut store = SqliteStore::open(&path).unwrap();
            store.set("k", "v").unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
