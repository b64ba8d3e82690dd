//! Shared table of the latest snapshot per game.
//!
//! [`SnapshotStore`] holds an immutable [`SnapshotTable`] behind an
//! `Arc`, guarded by a [`tokio::sync::RwLock`]. Readers clone the `Arc`
//! and release the lock immediately; a rebuild swaps in a complete new
//! table, so a reader never sees a table that is only partly built.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::GameSnapshot;
use crate::error::GatewayError;

/// Game name → latest snapshot.
pub type SnapshotTable = BTreeMap<String, GameSnapshot>;

/// Read-mostly store of game snapshots.
///
/// # Concurrency
///
/// - Any number of readers proceed concurrently.
/// - [`SnapshotStore::replace`] is the only writer and swaps the whole
///   table at once.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    table: RwLock<Arc<SnapshotTable>>,
}

impl SnapshotStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `table`.
    #[must_use]
    pub fn from_table(table: SnapshotTable) -> Self {
        Self {
            table: RwLock::new(Arc::new(table)),
        }
    }

    /// Replaces the whole table, returning the number of games now held.
    pub async fn replace(&self, table: SnapshotTable) -> usize {
        let count = table.len();
        *self.table.write().await = Arc::new(table);
        count
    }

    /// Returns the current table.
    pub async fn current(&self) -> Arc<SnapshotTable> {
        Arc::clone(&*self.table.read().await)
    }

    /// Returns every snapshot, ordered by game name.
    pub async fn list(&self) -> Vec<GameSnapshot> {
        self.current().await.values().cloned().collect()
    }

    /// Looks up a snapshot by exact, case-sensitive game name.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::GameNotFound`] carrying the sorted list of
    /// known game names if `name` is not in the table.
    pub async fn get(&self, name: &str) -> Result<GameSnapshot, GatewayError> {
        let table = self.current().await;
        table
            .get(name)
            .cloned()
            .ok_or_else(|| GatewayError::GameNotFound {
                name: name.to_string(),
                valid: table.keys().cloned().collect(),
            })
    }

    /// Returns the known game names, sorted.
    pub async fn names(&self) -> Vec<String> {
        self.current().await.keys().cloned().collect()
    }

    /// Returns the number of games in the store.
    pub async fn len(&self) -> usize {
        self.table.read().await.len()
    }

    /// Returns `true` if the store holds no games.
    pub async fn is_empty(&self) -> bool {
        self.table.read().await.is_empty()
    }
}
