//! Conversion of raw provider documents into normalized snapshots.
//!
//! Everything here is pure: no I/O, no clocks, output order equals input
//! order.

use super::locale::resolve_locale;
use super::snapshot::{NormalizedEvent, NormalizedUpdate, RegionSnapshot};
use super::status_document::{LocalizedText, RawEvent, RawStatusDocument, RawUpdate};

/// Normalizes a list of raw maintenances or incidents.
#[must_use]
pub fn transform_events(events: &[RawEvent]) -> Vec<NormalizedEvent> {
    events.iter().map(transform_event).collect()
}

/// Builds the snapshot of one region from its fetched document.
#[must_use]
pub fn transform_region(name: &str, document: &RawStatusDocument) -> RegionSnapshot {
    RegionSnapshot {
        name: name.to_string(),
        maintenances: transform_events(&document.maintenances),
        incidents: transform_events(&document.incidents),
        available: true,
        error: None,
    }
}

fn transform_event(event: &RawEvent) -> NormalizedEvent {
    NormalizedEvent {
        description: describe(&event.titles, event.id),
        created_at: event.created_at,
        platforms: event.platforms.clone(),
        maintenance_status: event.maintenance_status.clone(),
        incident_severity: event.incident_severity.clone(),
        updates: event.updates.iter().map(transform_update).collect(),
        updated_at: event.updated_at.clone(),
    }
}

fn transform_update(update: &RawUpdate) -> NormalizedUpdate {
    NormalizedUpdate {
        created_at: update.created_at,
        updated_at: update.updated_at,
        description: describe(&update.translations, update.id),
    }
}

fn describe(texts: &[LocalizedText], id: i64) -> String {
    match resolve_locale(texts) {
        Some(text) => text.to_string(),
        None => {
            tracing::warn!(id, "provider entry has no localized text");
            String::new()
        }
    }
}
