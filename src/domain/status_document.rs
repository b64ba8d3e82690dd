//! Raw status documents as published by the upstream status provider.
//!
//! These types mirror the provider's JSON shape one-to-one and are only
//! used transiently between a region fetch and the transformer. Missing
//! arrays decode as empty lists, missing opaque values decode as `null`,
//! and missing or `null` timestamps decode as `None`, so one sparse entry
//! never costs the rest of the document. Timestamps keep the offset the
//! provider wrote.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// One locale-tagged piece of text (a title or an update translation).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocalizedText {
    /// Locale tag, e.g. `"en_US"`.
    pub locale: String,
    /// Text in that locale.
    pub content: String,
}

impl LocalizedText {
    /// Creates a new locale-tagged text.
    #[must_use]
    pub fn new(locale: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            content: content.into(),
        }
    }
}

/// Status document for a single region.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RawStatusDocument {
    /// Provider-side region identifier.
    #[serde(default)]
    pub id: String,
    /// Provider-side display name.
    #[serde(default)]
    pub name: String,
    /// Locales the provider translates into.
    #[serde(default)]
    pub locales: Vec<String>,
    /// Scheduled or ongoing maintenances.
    #[serde(default)]
    pub maintenances: Vec<RawEvent>,
    /// Ongoing incidents.
    #[serde(default)]
    pub incidents: Vec<RawEvent>,
}

/// A maintenance or incident entry.
///
/// `maintenance_status`, `incident_severity` and `updated_at` are
/// provider-defined and kept as raw JSON values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawEvent {
    /// Provider event id.
    #[serde(default)]
    pub id: i64,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    /// Archive timestamp; only set on maintenances.
    #[serde(default)]
    pub archive_at: Option<DateTime<FixedOffset>>,
    /// Affected platforms (e.g. `"windows"`, `"macos"`).
    #[serde(default)]
    pub platforms: Vec<String>,
    /// Opaque maintenance status.
    #[serde(default)]
    pub maintenance_status: serde_json::Value,
    /// Opaque incident severity.
    #[serde(default)]
    pub incident_severity: serde_json::Value,
    /// Opaque last-update marker.
    #[serde(default)]
    pub updated_at: serde_json::Value,
    /// Title in every provided locale.
    #[serde(default)]
    pub titles: Vec<LocalizedText>,
    /// Follow-up messages, oldest first as published.
    #[serde(default)]
    pub updates: Vec<RawUpdate>,
}

/// A follow-up message attached to a [`RawEvent`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawUpdate {
    /// Provider update id.
    #[serde(default)]
    pub id: i64,
    /// Where the provider publishes this update.
    #[serde(default)]
    pub publish_locations: Vec<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    /// Last modification timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
    /// Whether the update is published.
    #[serde(default)]
    pub publish: bool,
    /// Author handle.
    #[serde(default)]
    pub author: String,
    /// Message body in every provided locale.
    #[serde(default)]
    pub translations: Vec<LocalizedText>,
}
