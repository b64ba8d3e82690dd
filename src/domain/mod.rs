//! Domain layer: provider documents, normalized snapshots, and the
//! snapshot store.
//!
//! Raw provider documents are turned into [`GameSnapshot`]s by the pure
//! functions in [`transform`], using the language preference in
//! [`locale`]. Finished snapshots live in the [`SnapshotStore`].

pub mod locale;
pub mod snapshot;
pub mod snapshot_store;
pub mod status_document;
pub mod transform;

pub use locale::{DEFAULT_LOCALE, resolve_locale};
pub use snapshot::{GameSnapshot, NormalizedEvent, NormalizedUpdate, RegionSnapshot};
pub use snapshot_store::{SnapshotStore, SnapshotTable};
pub use status_document::{LocalizedText, RawEvent, RawStatusDocument, RawUpdate};
pub use transform::{transform_events, transform_region};
