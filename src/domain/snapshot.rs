//! Normalized, serving-ready status snapshots.
//!
//! A [`GameSnapshot`] is the unit published into the
//! [`super::SnapshotStore`]. Snapshots carry no build timestamps so two
//! builds over identical provider documents serialize identically.
//! Timestamps are re-emitted in RFC 3339 with the provider's own offset.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use utoipa::ToSchema;

/// Follow-up message on a normalized event.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct NormalizedUpdate {
    /// Creation timestamp, if the provider sent one.
    pub created_at: Option<DateTime<FixedOffset>>,
    /// Last modification timestamp, if the provider sent one.
    pub updated_at: Option<DateTime<FixedOffset>>,
    /// Locale-resolved message body.
    pub description: String,
}

/// Maintenance or incident with its text resolved to one language.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct NormalizedEvent {
    /// Locale-resolved title.
    pub description: String,
    /// Creation timestamp, if the provider sent one.
    pub created_at: Option<DateTime<FixedOffset>>,
    /// Affected platforms.
    pub platforms: Vec<String>,
    /// Provider maintenance status, passed through unchanged.
    #[schema(value_type = Object)]
    pub maintenance_status: serde_json::Value,
    /// Provider incident severity, passed through unchanged.
    #[schema(value_type = Object)]
    pub incident_severity: serde_json::Value,
    /// Follow-up messages in provider order.
    pub updates: Vec<NormalizedUpdate>,
    /// Provider last-update marker, passed through unchanged.
    #[schema(value_type = Object)]
    pub updated_at: serde_json::Value,
}

/// Normalized status of one region.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RegionSnapshot {
    /// Region identifier as configured.
    pub name: String,
    /// Normalized maintenances.
    pub maintenances: Vec<NormalizedEvent>,
    /// Normalized incidents.
    pub incidents: Vec<NormalizedEvent>,
    /// `false` when the region document could not be fetched or decoded.
    pub available: bool,
    /// Reason the region is unavailable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RegionSnapshot {
    /// Placeholder for a region whose document could not be obtained.
    #[must_use]
    pub fn unavailable(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            maintenances: Vec::new(),
            incidents: Vec::new(),
            available: false,
            error: Some(reason.into()),
        }
    }
}

/// Normalized status of one game across all its configured regions.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct GameSnapshot {
    /// Game name as configured.
    pub name: String,
    /// Regions in configured order.
    pub regions: Vec<RegionSnapshot>,
    /// `true` when at least one region is unavailable.
    pub partial: bool,
}

impl GameSnapshot {
    /// Assembles a snapshot, deriving the `partial` flag from the regions.
    #[must_use]
    pub fn new(name: impl Into<String>, regions: Vec<RegionSnapshot>) -> Self {
        let partial = regions.iter().any(|r| !r.available);
        Self {
            name: name.into(),
            regions,
            partial,
        }
    }
}
