//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::domain::SnapshotStore;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Latest snapshot table; the serving layer only reads from it.
    pub store: Arc<SnapshotStore>,
}

impl AppState {
    /// Creates state serving from `store`.
    #[must_use]
    pub fn new(store: Arc<SnapshotStore>) -> Self {
        Self { store }
    }
}
