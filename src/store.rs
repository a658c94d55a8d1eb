//! Local SQLite store
//!
//! Items and preferences live in one small database under the platform
//! data directory. The prefs table is a plain key-value map; the only key
//! in use today is the sort mode (`picganize_sort_mode_v1`).

use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::PathBuf;

use crate::model::Item;

pub struct StoreDb {
    conn: Connection,
}

impl StoreDb {
    pub fn new() -> Result<Self> {
        let data_dir = Self::get_data_dir()?;
        std::fs::create_dir_all(&data_dir)?;

        let db_path = data_dir.join("picganize.db");
        let conn = Connection::open(db_path)?;

        let mut store = StoreDb { conn };
        store.init_schema()?;

        Ok(store)
    }

    /// In-memory database for tests.
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut store = StoreDb { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn get_data_dir() -> Result<PathBuf> {
        if let Some(data_dir) = dirs::data_dir() {
            Ok(data_dir.join("picganize"))
        } else {
            // Fallback to /tmp if no data dir available
            Ok(PathBuf::from("/tmp/picganize-data"))
        }
    }

    fn init_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS items (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                photo_path TEXT,
                location TEXT,
                created_at INTEGER,
                found_at INTEGER,
                found_count INTEGER
            );

            CREATE TABLE IF NOT EXISTS prefs (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            ) WITHOUT ROWID;
            ",
        )?;

        Ok(())
    }

    // Items

    /// Load the full item snapshot in insertion order.
    pub fn load_items(&self) -> Result<Vec<Item>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, photo_path, location, created_at, found_at, found_count
             FROM items ORDER BY rowid",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Item {
                id: row.get(0)?,
                name: row.get(1)?,
                photo_path: row.get(2)?,
                location: row.get(3)?,
                created_at: row.get(4)?,
                found_at: row.get(5)?,
                found_count: row.get(6)?,
            })
        })?;

        let mut items = Vec::new();
        for item in rows {
            items.push(item?);
        }
        Ok(items)
    }

    pub fn get_item(&self, id: &str) -> Result<Option<Item>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, photo_path, location, created_at, found_at, found_count
             FROM items WHERE id = ?1",
        )?;

        let item = stmt
            .query_row(params![id], |row| {
                Ok(Item {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    photo_path: row.get(2)?,
                    location: row.get(3)?,
                    created_at: row.get(4)?,
                    found_at: row.get(5)?,
                    found_count: row.get(6)?,
                })
            })
            .optional()?;

        Ok(item)
    }

    pub fn insert_item(&self, item: &Item) -> Result<()> {
        self.conn.execute(
            "INSERT INTO items (id, name, photo_path, location, created_at, found_at, found_count)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                item.id,
                item.name,
                item.photo_path,
                item.location,
                item.created_at,
                item.found_at,
                item.found_count,
            ],
        )?;
        Ok(())
    }

    /// Replace an existing item by id.
    ///
    /// Returns false (and writes nothing) for unknown ids.
    pub fn replace_item(&self, item: &Item) -> Result<bool> {
        let changed = self.conn.execute(
            "UPDATE items
             SET name = ?2, photo_path = ?3, location = ?4,
                 created_at = ?5, found_at = ?6, found_count = ?7
             WHERE id = ?1",
            params![
                item.id,
                item.name,
                item.photo_path,
                item.location,
                item.created_at,
                item.found_at,
                item.found_count,
            ],
        )?;
        Ok(changed > 0)
    }

    /// Bulk import in a single transaction (used by `--import`).
    ///
    /// Existing ids are overwritten. Returns the number of items written.
    pub fn import_items(&mut self, items: &[Item]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        for item in items {
            tx.execute(
                "INSERT OR REPLACE INTO items
                 (id, name, photo_path, location, created_at, found_at, found_count)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    item.id,
                    item.name,
                    item.photo_path,
                    item.location,
                    item.created_at,
                    item.found_at,
                    item.found_count,
                ],
            )?;
        }
        tx.commit()?;
        Ok(items.len())
    }

    // Preferences

    pub fn get_pref(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM prefs WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    pub fn set_pref(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO prefs (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}
