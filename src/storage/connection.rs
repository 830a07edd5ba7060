/*!
 * Store connection management.
 *
 * This module handles SQLite connection creation, initialization,
 * and provides async-safe access patterns using tokio's spawn_blocking.
 */

use anyhow::{Context, Result};
use log::{debug, info};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::schema;

/// Default database filename
const DEFAULT_DB_FILENAME: &str = "mealmatch.db";

/// Default database directory name under the user's data directory
const DEFAULT_DB_DIRNAME: &str = "mealmatch";

/// Store connection wrapper with thread-safe access
#[derive(Clone)]
pub struct StoreConnection {
    /// Path to the database file
    db_path: PathBuf,
    /// Thread-safe connection wrapped in Arc<Mutex>
    connection: Arc<Mutex<Connection>>,
}

impl StoreConnection {
    /// Open the store at the default location
    pub fn new_default() -> Result<Self> {
        let db_path = Self::default_store_path()?;
        Self::new(&db_path)
    }

    /// Open the store at the specified path
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create store directory: {:?}", parent))?;
        }

        info!("Opening store at: {:?}", db_path);

        let conn = Connection::open(&db_path)
            .with_context(|| format!("Failed to open store: {:?}", db_path))?;

        schema::initialize_schema(&conn)?;

        Ok(Self {
            db_path,
            connection: Arc::new(Mutex::new(conn)),
        })
    }

    /// Create an in-memory store (for testing)
    pub fn new_in_memory() -> Result<Self> {
        debug!("Creating in-memory store");

        let conn = Connection::open_in_memory().context("Failed to create in-memory store")?;

        schema::initialize_schema(&conn)?;

        Ok(Self {
            db_path: PathBuf::from(":memory:"),
            connection: Arc::new(Mutex::new(conn)),
        })
    }

    /// Get the default store path
    pub fn default_store_path() -> Result<PathBuf> {
        let base_dir = dirs::data_local_dir()
            .or_else(dirs::data_dir)
            .or_else(|| dirs::home_dir().map(|h| h.join(".local").join("share")))
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;

        let db_dir = base_dir.join(DEFAULT_DB_DIRNAME);
        let db_path = db_dir.join(DEFAULT_DB_FILENAME);

        Ok(db_path)
    }

    /// Get the database file path
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Execute a store operation with the connection
    ///
    /// This method acquires the mutex lock and executes the provided closure
    /// with access to the connection. For async contexts, use `execute_async`.
    pub fn execute<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self
            .connection
            .lock()
            .map_err(|e| anyhow::anyhow!("Failed to acquire store lock: {}", e))?;

        f(&conn)
    }

    /// Execute a store operation asynchronously using spawn_blocking
    ///
    /// This is the preferred method for async contexts as it prevents
    /// blocking the async runtime.
    pub async fn execute_async<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = self.connection.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn
                .lock()
                .map_err(|e| anyhow::anyhow!("Failed to acquire store lock: {}", e))?;

            f(&conn)
        })
        .await
        .context("Store task panicked")?
    }

    /// Get store statistics
    pub fn stats(&self) -> Result<StoreStats> {
        self.execute(|conn| {
            let item_entries: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM translations WHERE namespace = 'item'",
                    [],
                    |row| row.get(0),
                )
                .unwrap_or(0);

            let recipe_entries: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM translations WHERE namespace = 'recipe'",
                    [],
                    |row| row.get(0),
                )
                .unwrap_or(0);

            let menu_entries: i64 = conn
                .query_row("SELECT COUNT(*) FROM daily_menu", [], |row| row.get(0))
                .unwrap_or(0);

            let file_size = if self.db_path.to_string_lossy() != ":memory:" {
                std::fs::metadata(&self.db_path)
                    .map(|m| m.len())
                    .unwrap_or(0)
            } else {
                0
            };

            Ok(StoreStats {
                item_entries,
                recipe_entries,
                menu_entries,
                file_size_bytes: file_size,
            })
        })
    }
}

/// Store statistics
#[derive(Debug, Clone)]
pub struct StoreStats {
    /// Number of cached item translations
    pub item_entries: i64,
    /// Number of cached whole-recipe translations
    pub recipe_entries: i64,
    /// Number of stored daily menus
    pub menu_entries: i64,
    /// Database file size in bytes
    pub file_size_bytes: u64,
}

impl std::fmt::Display for StoreStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Item translations: {}, Recipe translations: {}, Menus: {}, Size: {} KB",
            self.item_entries,
            self.recipe_entries,
            self.menu_entries,
            self.file_size_bytes / 1024
        )
    }
}
