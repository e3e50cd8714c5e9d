//! Persistent key-value store and file download sink.
//!
//! The browser build backs `KeyValueStore` with `localStorage` (see the frontend);
//! native builds use a small SQLite table, the same shape as a `config` table.

use crate::error::StorageError;
use std::collections::HashMap;
use std::sync::Mutex;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Receives a finished file and hands it to the user (browser download, file on disk).
pub trait DownloadSink {
    fn offer(&self, filename: &str, bytes: &[u8]) -> Result<(), StorageError>;
}

/// In-process store. Lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Unavailable("memory store lock poisoned".to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries()?.remove(key);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::{DirectorySink, SqliteStore, DB_FILE_NAME};

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::{DownloadSink, KeyValueStore};
    use crate::error::StorageError;
    use rusqlite::{params, Connection, OptionalExtension};
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;
    use tracing::{debug, info};

    pub const DB_FILE_NAME: &str = "travel_planner.db";

    /// SQLite-backed store: one `kv` table, upsert on write.
    pub struct SqliteStore {
        conn: Mutex<Connection>,
    }

    impl SqliteStore {
        /// Open (or create) `travel_planner.db` inside `dir`.
        pub fn open(dir: &Path) -> Result<Self, StorageError> {
            std::fs::create_dir_all(dir)?;
            let db_path = dir.join(DB_FILE_NAME);
            info!(path = %db_path.display(), "opening key-value store");
            let conn = Connection::open(&db_path)?;
            Self::with_connection(conn)
        }

        pub fn in_memory() -> Result<Self, StorageError> {
            Self::with_connection(Connection::open_in_memory()?)
        }

        fn with_connection(conn: Connection) -> Result<Self, StorageError> {
            conn.execute_batch("CREATE TABLE IF NOT EXISTS kv (key TEXT PRIMARY KEY, value TEXT NOT NULL);")?;
            Ok(Self {
                conn: Mutex::new(conn),
            })
        }

        fn with_db<F, T>(&self, f: F) -> Result<T, StorageError>
        where
            F: FnOnce(&Connection) -> Result<T, rusqlite::Error>,
        {
            let conn = self
                .conn
                .lock()
                .map_err(|_| StorageError::Unavailable("sqlite connection lock poisoned".to_string()))?;
            Ok(f(&conn)?)
        }
    }

    impl KeyValueStore for SqliteStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.with_db(|conn| {
                conn.query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| row.get(0))
                    .optional()
            })
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.with_db(|conn| {
                conn.execute(
                    "INSERT INTO kv (key, value) VALUES (?1, ?2) ON CONFLICT(key) DO UPDATE SET value = ?2",
                    params![key, value],
                )?;
                Ok(())
            })
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.with_db(|conn| {
                conn.execute("DELETE FROM kv WHERE key = ?1", params![key])?;
                Ok(())
            })
        }
    }

    /// Writes offered files into a directory, replacing any file with the same name.
    #[derive(Clone, Debug)]
    pub struct DirectorySink {
        dir: PathBuf,
    }

    impl DirectorySink {
        pub fn new(dir: impl Into<PathBuf>) -> Self {
            Self { dir: dir.into() }
        }

        pub fn dir(&self) -> &Path {
            &self.dir
        }
    }

    impl DownloadSink for DirectorySink {
        fn offer(&self, filename: &str, bytes: &[u8]) -> Result<(), StorageError> {
            // Final path component only; never write outside `dir`.
            let name = Path::new(filename)
                .file_name()
                .ok_or_else(|| StorageError::Unavailable(format!("invalid file name {filename:?}")))?;
            std::fs::create_dir_all(&self.dir)?;
            let path = self.dir.join(name);
            std::fs::write(&path, bytes)?;
            debug!(path = %path.display(), bytes = bytes.len(), "file written");
            Ok(())
        }
    }
}
