//! In-memory [`StatusSource`] and document builders for tests.

#![allow(clippy::panic)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use chrono::DateTime;

use super::{StatusSource, region_url};
use crate::domain::{LocalizedText, RawEvent, RawStatusDocument};
use crate::error::FetchError;

/// Serves canned documents keyed by full region URL.
///
/// Unknown URLs answer with a 404 [`FetchError::Status`].
#[derive(Debug, Default)]
pub struct StaticStatusSource {
    documents: HashMap<String, RawStatusDocument>,
    delays: HashMap<String, Duration>,
    panics: Vec<String>,
    completed: AtomicUsize,
}

impl StaticStatusSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `document` for `region` under `base`.
    pub fn with_document(mut self, base: &str, region: &str, document: RawStatusDocument) -> Self {
        self.documents.insert(region_url(base, region), document);
        self
    }

    /// Delays the response for `region` under `base`.
    pub fn with_delay(mut self, base: &str, region: &str, delay: Duration) -> Self {
        self.delays.insert(region_url(base, region), delay);
        self
    }

    /// Makes the fetch task for `region` under `base` panic.
    pub fn with_panic(mut self, base: &str, region: &str) -> Self {
        self.panics.push(region_url(base, region));
        self
    }

    /// Number of fetches that ran to completion.
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

impl StatusSource for StaticStatusSource {
    async fn fetch(&self, base: &str, region: &str) -> Result<RawStatusDocument, FetchError> {
        let url = region_url(base, region);
        if let Some(delay) = self.delays.get(&url) {
            tokio::time::sleep(*delay).await;
        }
        if self.panics.contains(&url) {
            panic!("simulated fetch crash for {url}");
        }
        self.completed.fetch_add(1, Ordering::SeqCst);
        self.documents
            .get(&url)
            .cloned()
            .ok_or(FetchError::Status { url, status: 404 })
    }
}

/// Builds an event with the given titles, no updates, and fixed timestamps.
pub fn event(id: i64, titles: &[(&str, &str)]) -> RawEvent {
    RawEvent {
        id,
        created_at: DateTime::parse_from_rfc3339("2024-03-01T10:15:00+00:00").ok(),
        archive_at: None,
        platforms: vec!["windows".to_string(), "macos".to_string()],
        maintenance_status: serde_json::Value::Null,
        incident_severity: serde_json::json!("warning"),
        updated_at: serde_json::Value::Null,
        titles: titles
            .iter()
            .map(|(l, c)| LocalizedText::new(*l, *c))
            .collect(),
        updates: vec![],
    }
}

/// Builds a region document.
pub fn document(maintenances: Vec<RawEvent>, incidents: Vec<RawEvent>) -> RawStatusDocument {
    RawStatusDocument {
        maintenances,
        incidents,
        ..RawStatusDocument::default()
    }
}
