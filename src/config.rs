//! Gateway configuration.
//!
//! Process settings follow 12-factor style: they come from environment
//! variables (or a `.env` file via `dotenvy`). The list of tracked games
//! lives in a separate YAML file named by `CONFIG_FILE`:
//!
//! ```yaml
//! games:
//!   - name: valorant
//!     base: https://valorant.secure.dyn.riotcdn.net/channels/public/x/status/
//!     regions: [na, eu]
//! ```

use std::collections::HashSet;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Top-level gateway configuration.
///
/// Loaded once at startup via [`GatewayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Path of the games file.
    pub games_file: PathBuf,

    /// Per-request timeout for provider fetches in seconds (0 = none).
    pub fetch_timeout_secs: u64,

    /// Seconds between full snapshot rebuilds (0 = build once).
    pub refresh_interval_secs: u64,

    /// Emit logs as JSON lines instead of human-readable text.
    pub log_json: bool,
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] if `LISTEN_ADDR` is set but
    /// cannot be parsed as a [`SocketAddr`].
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let raw_addr = std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let listen_addr: SocketAddr = raw_addr.parse().map_err(|_| ConfigError::InvalidEnv {
            key: "LISTEN_ADDR",
            value: raw_addr.clone(),
        })?;

        let games_file = std::env::var("CONFIG_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config.yaml"));

        let fetch_timeout_secs = parse_env("FETCH_TIMEOUT_SECS", 0);
        let refresh_interval_secs = parse_env("REFRESH_INTERVAL_SECS", 0);
        let log_json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

        Ok(Self {
            listen_addr,
            games_file,
            fetch_timeout_secs,
            refresh_interval_secs,
            log_json,
        })
    }

    /// Provider request timeout, if enabled.
    #[must_use]
    pub fn fetch_timeout(&self) -> Option<Duration> {
        non_zero_secs(self.fetch_timeout_secs)
    }

    /// Rebuild period, if periodic refresh is enabled.
    #[must_use]
    pub fn refresh_interval(&self) -> Option<Duration> {
        non_zero_secs(self.refresh_interval_secs)
    }
}

/// One tracked game: where its status lives and which regions to fetch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameConfig {
    /// Unique game name, used as the lookup key.
    pub name: String,
    /// Base URL that region identifiers are appended to.
    pub base: String,
    /// Region identifiers in display order.
    #[serde(default)]
    pub regions: Vec<String>,
}

impl GameConfig {
    /// Creates a game entry.
    #[must_use]
    pub fn new(name: impl Into<String>, base: impl Into<String>, regions: &[&str]) -> Self {
        Self {
            name: name.into(),
            base: base.into(),
            regions: regions.iter().map(|r| (*r).to_string()).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GamesFile {
    #[serde(default)]
    games: Vec<GameConfig>,
}

/// Reads and validates the games file at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read, or any error
/// from [`parse_games`].
pub fn load_games(path: &Path) -> Result<Vec<GameConfig>, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_games(&contents)
}

/// Parses and validates games file contents.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] on malformed YAML, and a validation
/// error for empty names, duplicate names or empty region identifiers.
pub fn parse_games(contents: &str) -> Result<Vec<GameConfig>, ConfigError> {
    let file: GamesFile = serde_yml::from_str(contents)?;
    validate_games(&file.games)?;
    Ok(file.games)
}

fn validate_games(games: &[GameConfig]) -> Result<(), ConfigError> {
    let mut seen = HashSet::with_capacity(games.len());
    for (index, game) in games.iter().enumerate() {
        if game.name.is_empty() {
            return Err(ConfigError::EmptyGameName(index));
        }
        if !seen.insert(game.name.as_str()) {
            return Err(ConfigError::DuplicateGame(game.name.clone()));
        }
        if game.regions.iter().any(String::is_empty) {
            return Err(ConfigError::EmptyRegion(game.name.clone()));
        }
    }
    Ok(())
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn non_zero_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}
