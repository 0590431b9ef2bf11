use super::error::StoreError;
use super::migrations::init_with_migrations;
use crate::libs::messages::Message;
use crate::msg_info;
use parking_lot::Mutex;
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const DB_FILE_NAME: &str = "todolist.db";

/// Shared SQLite handle.
///
/// Cloning is cheap; every clone talks to the same connection, which is
/// guarded by a mutex so statements from concurrent requests run one at a time.
#[derive(Clone)]
pub struct Db {
    conn: Arc<Mutex<Connection>>,
    path: PathBuf,
}

impl Db {
    /// Opens or creates the database at `path` and applies pending migrations.
    pub fn open(path: &Path) -> Result<Db, StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut conn = Connection::open(path)?;
        init_with_migrations(&mut conn)?;
        msg_info!(Message::DatabaseOpened(path.display().to_string()));

        Ok(Db {
            conn: Arc::new(Mutex::new(conn)),
            path: path.to_owned(),
        })
    }

    /// Opens an existing database read-only, leaving its schema as it is.
    /// Fails instead of creating the file when `path` does not exist.
    pub fn open_read_only(path: &Path) -> Result<Connection, StoreError> {
        Ok(Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?)
    }

    /// Migrated in-memory database, for tests.
    pub fn in_memory() -> Result<Db, StoreError> {
        let mut conn = Connection::open_in_memory()?;
        init_with_migrations(&mut conn)?;

        Ok(Db {
            conn: Arc::new(Mutex::new(conn)),
            path: PathBuf::from(":memory:"),
        })
    }

    /// Runs `f` while holding the connection lock.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Connection) -> Result<T, StoreError>,
    {
        let conn = self.conn.lock();
        f(&conn)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
