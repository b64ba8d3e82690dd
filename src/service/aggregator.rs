//! Aggregation scheduler: fans out region fetches per game, joins them,
//! and builds the snapshot table.
//!
//! The work forms a two-tier fork/join tree. Every game gets its own task,
//! and every region of that game gets its own fetch task. A game task
//! waits for exactly its own regions before transforming anything, and
//! [`Aggregator::build_snapshots`] returns only after every game task has
//! finished. The table is assembled by the caller from the joined results,
//! so no task writes shared state.

use std::sync::Arc;
use std::time::Instant;

use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::config::GameConfig;
use crate::domain::{
    GameSnapshot, RawStatusDocument, RegionSnapshot, SnapshotStore, SnapshotTable, transform_region,
};
use crate::error::FetchError;
use crate::provider::StatusSource;

/// Builds game snapshots from a [`StatusSource`].
#[derive(Debug)]
pub struct Aggregator<S> {
    source: Arc<S>,
}

impl<S> Clone for Aggregator<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<S: StatusSource + 'static> Aggregator<S> {
    /// Creates an aggregator fetching through `source`.
    #[must_use]
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Returns a reference to the inner [`StatusSource`].
    #[must_use]
    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    /// Fetches every region of every game and builds the snapshot table.
    ///
    /// Region failures never abort the build: the affected region is
    /// marked unavailable and its game flagged partial.
    pub async fn build_snapshots(&self, games: &[GameConfig]) -> SnapshotTable {
        let tasks: Vec<(&GameConfig, JoinHandle<GameSnapshot>)> = games
            .iter()
            .map(|game| {
                let source = Arc::clone(&self.source);
                let handle = tokio::spawn(aggregate_game(source, game.clone()));
                (game, handle)
            })
            .collect();

        let mut table = SnapshotTable::new();
        for (game, handle) in tasks {
            let snapshot = match handle.await {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    error!(game = %game.name, error = %e, "game task failed");
                    unavailable_game(game, "aggregation task failed")
                }
            };
            table.insert(game.name.clone(), snapshot);
        }
        table
    }

    /// Rebuilds the whole table and swaps it into `store`.
    ///
    /// Returns the number of games published.
    pub async fn refresh(&self, store: &SnapshotStore, games: &[GameConfig]) -> usize {
        let started = Instant::now();
        let table = self.build_snapshots(games).await;
        let partial = table.values().filter(|g| g.partial).count();
        let count = store.replace(table).await;
        info!(
            games = count,
            partial,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "snapshot table published"
        );
        count
    }
}

/// Fetches all regions of one game concurrently, then transforms them.
async fn aggregate_game<S: StatusSource + 'static>(
    source: Arc<S>,
    game: GameConfig,
) -> GameSnapshot {
    debug!(game = %game.name, regions = game.regions.len(), "aggregating game");

    let fetches: Vec<JoinHandle<Result<RawStatusDocument, FetchError>>> = game
        .regions
        .iter()
        .map(|region| {
            let source = Arc::clone(&source);
            let base = game.base.clone();
            let region = region.clone();
            tokio::spawn(async move { source.fetch(&base, &region).await })
        })
        .collect();

    // Join barrier: every region settles before anything is transformed.
    let mut results = Vec::with_capacity(fetches.len());
    for handle in fetches {
        results.push(handle.await);
    }

    let regions: Vec<RegionSnapshot> = game
        .regions
        .iter()
        .zip(results)
        .map(|(region, result)| match result {
            Ok(Ok(document)) => transform_region(region, &document),
            Ok(Err(e)) => {
                warn!(game = %game.name, region = %region, error = %e, "region unavailable");
                RegionSnapshot::unavailable(region.as_str(), e.to_string())
            }
            Err(e) => {
                error!(game = %game.name, region = %region, error = %e, "region task failed");
                RegionSnapshot::unavailable(region.as_str(), "fetch task failed")
            }
        })
        .collect();

    GameSnapshot::new(game.name, regions)
}

fn unavailable_game(game: &GameConfig, reason: &str) -> GameSnapshot {
    let regions = game
        .regions
        .iter()
        .map(|r| RegionSnapshot::unavailable(r.as_str(), reason))
        .collect();
    GameSnapshot::new(game.name.as_str(), regions)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::provider::fixtures::{StaticStatusSource, document, event};

    fn aggregator(source: StaticStatusSource) -> Aggregator<StaticStatusSource> {
        Aggregator::new(Arc::new(source))
    }

    fn region_names(game: &GameSnapshot) -> Vec<&str> {
        game.regions.iter().map(|r| r.name.as_str()).collect()
    }

    #[tokio::test]
    async fn single_game_scenario() {
        let base = "https://example/";
        let source = StaticStatusSource::new()
            .with_document(
                base,
                "na",
                document(vec![], vec![event(1, &[("en_US", "Outage"), ("fr_FR", "Panne")])]),
            )
            .with_document(base, "eu", document(vec![], vec![]));
        let games = [GameConfig::new("valorant", base, &["na", "eu"])];

        let table = aggregator(source).build_snapshots(&games).await;

        let Some(game) = table.get("valorant") else {
            panic!("valorant should be built");
        };
        assert_eq!(region_names(game), ["na", "eu"]);
        assert!(!game.partial);

        let Some(na) = game.regions.first() else {
            panic!("na region missing");
        };
        assert!(na.maintenances.is_empty());
        assert_eq!(na.incidents.len(), 1);
        let Some(incident) = na.incidents.first() else {
            panic!("na incident missing");
        };
        assert_eq!(incident.description, "Outage");
        assert!(incident.updates.is_empty());

        let Some(eu) = game.regions.get(1) else {
            panic!("eu region missing");
        };
        assert!(eu.incidents.is_empty());
        assert!(eu.maintenances.is_empty());
    }

    #[tokio::test]
    async fn waits_for_slowest_region_and_keeps_order() {
        let base = "https://lol/";
        let source = StaticStatusSource::new()
            .with_document(base, "na1", document(vec![], vec![]))
            .with_document(base, "euw1", document(vec![], vec![]))
            .with_document(base, "kr", document(vec![event(3, &[("ko_KR", "점검")])], vec![]))
            .with_delay(base, "kr", Duration::from_millis(150))
            .with_delay(base, "na1", Duration::from_millis(20));
        let agg = aggregator(source);
        let games = [GameConfig::new("lol", base, &["na1", "euw1", "kr"])];

        let started = Instant::now();
        let table = agg.build_snapshots(&games).await;

        assert!(started.elapsed() >= Duration::from_millis(150));
        assert_eq!(agg.source().completed(), 3);
        let Some(game) = table.get("lol") else {
            panic!("lol should be built");
        };
        assert_eq!(region_names(game), ["na1", "euw1", "kr"]);
        let Some(kr) = game.regions.get(2) else {
            panic!("kr region missing");
        };
        assert!(kr.available);
        assert_eq!(kr.maintenances.len(), 1);
    }

    #[tokio::test]
    async fn regions_are_fetched_in_parallel() {
        let base = "https://lol/";
        let delay = Duration::from_millis(200);
        let mut source = StaticStatusSource::new();
        for region in ["na1", "euw1", "kr", "br1"] {
            source = source
                .with_document(base, region, document(vec![], vec![]))
                .with_delay(base, region, delay);
        }
        let games = [GameConfig::new("lol", base, &["na1", "euw1", "kr", "br1"])];

        let started = Instant::now();
        let table = aggregator(source).build_snapshots(&games).await;

        // Sequential fetching would take at least 800 ms.
        assert!(started.elapsed() < Duration::from_millis(700));
        assert_eq!(table.get("lol").map(|g| g.regions.len()), Some(4));
    }

    #[tokio::test]
    async fn failed_region_is_isolated() {
        let base = "https://lol/";
        let source = StaticStatusSource::new()
            .with_document(base, "na1", document(vec![], vec![event(1, &[("en_US", "Up")])]));
        let games = [GameConfig::new("lol", base, &["na1", "oc1"])];

        let table = aggregator(source).build_snapshots(&games).await;

        let Some(game) = table.get("lol") else {
            panic!("lol should be built");
        };
        assert!(game.partial);
        let Some(na) = game.regions.first() else {
            panic!("na1 missing");
        };
        assert!(na.available);
        assert_eq!(na.incidents.len(), 1);
        let Some(oc) = game.regions.get(1) else {
            panic!("oc1 missing");
        };
        assert!(!oc.available);
        assert!(oc.incidents.is_empty());
        assert_eq!(oc.error.as_deref(), Some("HTTP 404 from https://lol/oc1.json"));
    }

    #[tokio::test]
    async fn panicking_fetch_marks_region_unavailable() {
        let base = "https://val/";
        let source = StaticStatusSource::new()
            .with_document(base, "na", document(vec![], vec![]))
            .with_panic(base, "eu");
        let games = [GameConfig::new("valorant", base, &["na", "eu"])];

        let table = aggregator(source).build_snapshots(&games).await;

        let Some(game) = table.get("valorant") else {
            panic!("valorant should still be built");
        };
        assert!(game.partial);
        assert_eq!(
            game.regions.iter().map(|r| r.available).collect::<Vec<_>>(),
            [true, false]
        );
    }

    #[tokio::test]
    async fn game_without_regions_is_empty() {
        let games = [GameConfig::new("tft", "https://tft/", &[])];
        let table = aggregator(StaticStatusSource::new()).build_snapshots(&games).await;
        let Some(game) = table.get("tft") else {
            panic!("tft should be built");
        };
        assert!(game.regions.is_empty());
        assert!(!game.partial);
    }

    #[tokio::test]
    async fn every_configured_game_is_present() {
        let source = StaticStatusSource::new()
            .with_document("https://lol/", "na1", document(vec![], vec![]))
            .with_document("https://val/", "na", document(vec![], vec![]));
        let games = [
            GameConfig::new("lol", "https://lol/", &["na1"]),
            GameConfig::new("valorant", "https://val/", &["na"]),
            GameConfig::new("tft", "https://tft/", &[]),
        ];
        let table = aggregator(source).build_snapshots(&games).await;
        let names: Vec<&str> = table.keys().map(String::as_str).collect();
        assert_eq!(names, ["lol", "tft", "valorant"]);
    }

    #[tokio::test]
    async fn rebuilding_is_deterministic() {
        let base = "https://val/";
        let source = StaticStatusSource::new()
            .with_document(base, "na", document(vec![event(1, &[("en_US", "Patch")])], vec![]))
            .with_document(base, "eu", document(vec![], vec![event(2, &[("de_DE", "Ausfall")])]));
        let agg = aggregator(source);
        let games = [GameConfig::new("valorant", base, &["na", "eu", "ap"])];

        let first = serde_json::to_string(&agg.build_snapshots(&games).await).ok();
        let second = serde_json::to_string(&agg.build_snapshots(&games).await).ok();
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn refresh_publishes_into_store() {
        let source = StaticStatusSource::new()
            .with_document("https://val/", "na", document(vec![], vec![]));
        let store = SnapshotStore::new();
        let agg = aggregator(source);

        let count = agg
            .refresh(&store, &[GameConfig::new("valorant", "https://val/", &["na"])])
            .await;
        assert_eq!(count, 1);
        assert_eq!(store.names().await, ["valorant"]);

        let count = agg
            .refresh(&store, &[GameConfig::new("tft", "https://tft/", &[])])
            .await;
        assert_eq!(count, 1);
        assert_eq!(store.names().await, ["tft"]);
    }
}
