//! Caching layer for shortest-path results.
//!
//! A station never changes after it is built, so the route between two
//! points is fixed for the lifetime of the process. Results are memoised by
//! (start, end) with a TTL that only bounds memory, not freshness.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::domain::{PointId, Station};
use crate::graph::{Route, RouteError, shortest_path};

/// Cache key for routes: (start point, end point).
type RouteKey = (PointId, PointId);

/// Cached route outcome, failures included.
type RouteEntry = Result<Route, RouteError>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(600),
            max_capacity: 10_000,
        }
    }
}

/// Shortest-path engine with memoised results.
pub struct CachedRouter {
    station: Arc<Station>,
    routes: MokaCache<RouteKey, RouteEntry>,
}

impl CachedRouter {
    /// Create a router over `station` with the given cache configuration.
    pub fn new(station: Arc<Station>, config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { station, routes }
    }

    /// The station routes are computed over.
    pub fn station(&self) -> &Arc<Station> {
        &self.station
    }

    /// Shortest route from `start` to `end`, computed at most once per pair
    /// while cached.
    pub async fn route(&self, start: PointId, end: PointId) -> RouteEntry {
        let station = Arc::clone(&self.station);
        self.routes
            .get_with((start, end), async move {
                trace!(start = %start, end = %end, "route cache miss");
                shortest_path(&station, start, end)
            })
            .await
    }

    /// Number of cached entries (approximate until pending tasks run).
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Flush pending cache maintenance so counts are exact.
    pub async fn run_pending_tasks(&self) {
        self.routes.run_pending_tasks().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::demo_station;

    fn router() -> CachedRouter {
        let station = Arc::new(demo_station().unwrap());
        CachedRouter::new(station, &CacheConfig::default())
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(600));
        assert_eq!(config.max_capacity, 10_000);
    }

    #[tokio::test]
    async fn cached_route_matches_direct_computation() {
        let router = router();
        let direct = shortest_path(router.station(), PointId(2), PointId(4));

        let first = router.route(PointId(2), PointId(4)).await;
        let second = router.route(PointId(2), PointId(4)).await;

        assert_eq!(first, direct);
        assert_eq!(second, direct);
    }

    #[tokio::test]
    async fn one_entry_per_pair() {
        let router = router();
        router.route(PointId(1), PointId(3)).await.unwrap();
        router.route(PointId(1), PointId(3)).await.unwrap();
        router.route(PointId(3), PointId(1)).await.unwrap();

        router.run_pending_tasks().await;
        assert_eq!(router.entry_count(), 2);
    }

    #[tokio::test]
    async fn failures_are_returned_unchanged() {
        let router = router();
        assert_eq!(
            router.route(PointId(1), PointId(77)).await,
            Err(RouteError::InvalidReference(PointId(77)))
        );
    }
}
