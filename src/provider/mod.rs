//! Upstream status provider access.
//!
//! [`StatusSource`] is the seam between the aggregation scheduler and the
//! network: production uses [`HttpStatusSource`], tests substitute an
//! in-memory double.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod http;

use std::future::Future;

pub use http::HttpStatusSource;

use crate::domain::RawStatusDocument;
use crate::error::FetchError;

/// Suffix appended to every region document URL.
pub const DOCUMENT_SUFFIX: &str = ".json";

/// Builds the document URL for one region.
///
/// Plain concatenation: `base` is expected to end with a separator.
#[must_use]
pub fn region_url(base: &str, region: &str) -> String {
    format!("{base}{region}{DOCUMENT_SUFFIX}")
}

/// Source of raw region status documents.
pub trait StatusSource: Send + Sync {
    /// Fetches and decodes the status document of `region` under `base`.
    fn fetch(
        &self,
        base: &str,
        region: &str,
    ) -> impl Future<Output = Result<RawStatusDocument, FetchError>> + Send;
}
