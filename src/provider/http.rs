//! Status source backed by `reqwest`.

use std::time::Duration;

use tracing::{debug, warn};

use super::{StatusSource, region_url};
use crate::domain::RawStatusDocument;
use crate::error::FetchError;

/// User-Agent sent to the status provider.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Fetches region documents with a single unauthenticated GET each.
///
/// No retries. A request timeout is applied only when one is configured.
#[derive(Debug, Clone)]
pub struct HttpStatusSource {
    client: reqwest::Client,
}

impl HttpStatusSource {
    /// Creates a source, optionally bounding every request by `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Client`] if the HTTP client cannot be built
    /// (for example when no TLS backend is available).
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

impl StatusSource for HttpStatusSource {
    async fn fetch(&self, base: &str, region: &str) -> Result<RawStatusDocument, FetchError> {
        let url = region_url(base, region);
        debug!(url = %url, "fetching region status");

        let response = match self.client.get(&url).send().await {
            Ok(resp) => resp,
            Err(source) => {
                warn!(
                    url = %url,
                    error = %source,
                    is_connect = source.is_connect(),
                    is_timeout = source.is_timeout(),
                    "status request failed"
                );
                return Err(FetchError::Request { url, source });
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "status provider returned error");
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Decode {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
            url,
            reason: e.to_string(),
        })
    }
}
