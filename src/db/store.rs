use rusqlite::{Connection, Transaction};
use std::path::{Path, PathBuf};
use crate::db::{SchemaManager, StoreError};
use crate::models::{Task, TaskName};
use crate::repo::TaskRepo;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Default database file, relative to the working directory
pub const DEFAULT_DB_FILE: &str = "tasks.db";

/// Durable task storage
///
/// Each operation opens its own connection and runs inside a transaction
/// that commits on success. Returning early with an error drops the
/// transaction, which rolls it back, and then closes the connection.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.path).map_err(|source| StoreError::Open {
            path: self.path.clone(),
            source,
        })
    }

    /// Run `f` inside a transaction on a fresh connection
    pub fn with_tx<T>(&self, f: impl FnOnce(&Transaction<'_>) -> Result<T>) -> Result<T> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let value = f(&tx)?;
        tx.commit()?;
        Ok(value)
    }

    /// Create the tasks table if absent
    pub fn ensure_schema(&self) -> Result<()> {
        let existed = self.with_tx(|tx| {
            let existed = SchemaManager::is_initialized(tx)?;
            SchemaManager::initialize(tx)?;
            Ok(existed)
        })?;
        if existed {
            log::info!("schema ready at {}", self.path.display());
        } else {
            log::info!("created tasks table at {}", self.path.display());
        }
        Ok(())
    }

    pub fn insert(&self, name: &TaskName, completed: bool) -> Result<i64> {
        self.with_tx(|tx| TaskRepo::insert(tx, name, completed))
    }

    pub fn list_all(&self) -> Result<Vec<Task>> {
        self.with_tx(|tx| TaskRepo::list_all(tx))
    }

    pub fn get_name(&self, id: i64) -> Result<String> {
        self.with_tx(|tx| TaskRepo::get_name(tx, id))
    }

    pub fn delete(&self, id: i64) -> Result<bool> {
        self.with_tx(|tx| TaskRepo::delete(tx, id))
    }

    pub fn set_completed(&self, id: i64, completed: bool) -> Result<bool> {
        self.with_tx(|tx| TaskRepo::set_completed(tx, id, completed))
    }
}
