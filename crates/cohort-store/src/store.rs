//! Storage adapter: named JSON blobs in a local key-value store.
//!
//! Collections are stored whole, one JSON array per collection name.
//! Every registry operation reads the full collection, computes the
//! new state, and writes it back in a single `set`, so no partial
//! write is ever observable to a later operation.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use redb::{Database, TableDefinition};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::StoreError;

/// Collection keys used by the registries.
pub mod collections {
    pub const USERS: &str = "users";
    pub const GROUPS: &str = "groups";
    pub const ROLES: &str = "roles";
}

/// Blob table: collection name → JSON array.
const COLLECTIONS: TableDefinition<'static, &'static str, &'static str> =
    TableDefinition::new("collections");

/// A local key-value store of named JSON blobs.
///
/// Implementations are cheap-to-clone handles over shared state, so
/// the three registries can share one backend.
pub trait Store: Clone {
    /// Fetch the JSON blob stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `json` under `key`, replacing any previous blob.
    fn set(&self, key: &str, json: &str) -> Result<(), StoreError>;

    /// Deserialize the collection stored under `key`. A missing blob
    /// is an empty collection.
    fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        match self.get(key)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    /// Serialize and store a collection under `key`.
    fn save_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StoreError> {
        let json = serde_json::to_string(items)?;
        self.set(key, &json)
    }
}

/// Configuration for the persistent store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path of the database file. Created if absent.
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("cohort.redb"),
        }
    }
}

/// Persistent store backed by a single-table redb database.
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<Database>,
}

impl RedbStore {
    /// Open the database at the configured path, creating it if
    /// needed.
    pub fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        info!(path = %config.path.display(), "Opening cohort store");
        let db = Database::create(&config.path)?;
        Ok(Self { db: Arc::new(db) })
    }
}

impl Store for RedbStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let txn = self.db.begin_read()?;
        let table = match txn.open_table(COLLECTIONS) {
            Ok(table) => table,
            // Nothing written yet: every collection is empty.
            Err(redb::TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(table.get(key)?.map(|blob| blob.value().to_string()))
    }

    fn set(&self, key: &str, json: &str) -> Result<(), StoreError> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(COLLECTIONS)?;
            table.insert(key, json)?;
        }
        txn.commit()?;
        Ok(())
    }
}

/// In-memory store, the test counterpart of [`RedbStore`].
#[derive(Clone, Default)]
pub struct MemStore {
    blobs: Arc<Mutex<HashMap<String, String>>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let blobs = self.blobs.lock().unwrap_or_else(|p| p.into_inner());
        Ok(blobs.get(key).cloned())
    }

    fn set(&self, key: &str, json: &str) -> Result<(), StoreError> {
        let mut blobs = self.blobs.lock().unwrap_or_else(|p| p.into_inner());
        blobs.insert(key.to_string(), json.to_string());
        Ok(())
    }
}
