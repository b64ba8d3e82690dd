//! # riot-status-gateway
//!
//! Aggregates per-region operational-status documents for a set of
//! configured games, resolves their localized text to one display
//! language, and serves the consolidated snapshot over REST.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── SnapshotStore (domain/)        ◄── swapped wholesale on refresh
//!     │
//!     ├── Aggregator (service/)          one task per game
//!     │     └── StatusSource (provider/) one task per region
//!     │
//!     └── Upstream status provider  <base><region>.json
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod provider;
pub mod service;
