//! Service layer: snapshot aggregation.
//!
//! [`Aggregator`] drives the fetch-and-transform pipeline and publishes
//! finished tables into the [`super::domain::SnapshotStore`].

pub mod aggregator;

pub use aggregator::Aggregator;
