//! Cache-aside statistics aggregator

use fullstack_core::keys::{STATS_CACHE_KEY, STATS_TTL};
use fullstack_core::ports::{CacheStore, Database, StatsStore};
use fullstack_core::{Result, StatsReport, StatsSnapshot, StatsSource};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Serves `stats:full` from the cache, recomputing from the database on miss.
///
/// Concurrent misses each recompute and overwrite the key; the last write
/// wins. Expiry is left entirely to the cache store.
pub struct StatsAggregator {
    db: Arc<dyn Database>,
    cache: Arc<dyn CacheStore>,
    ttl: Duration,
}

impl StatsAggregator {
    pub fn new(db: Arc<dyn Database>, cache: Arc<dyn CacheStore>) -> Self {
        Self {
            db,
            cache,
            ttl: STATS_TTL,
        }
    }

    pub async fn get_stats(&self) -> Result<StatsReport> {
        // Try cache first
        if let Some(cached) = self.cache.get(STATS_CACHE_KEY).await? {
            let snapshot: StatsSnapshot = serde_json::from_str(&cached)?;
            debug!("Stats served from cache");
            return Ok(StatsReport {
                snapshot,
                source: StatsSource::Cache,
            });
        }

        // Independent reads, no shared transaction
        let (users, posts) = tokio::try_join!(self.db.count_users(), self.db.count_posts())?;
        let snapshot = StatsSnapshot::new(users, posts);

        let encoded = serde_json::to_string(&snapshot)?;
        self.cache
            .set_with_ttl(STATS_CACHE_KEY, &encoded, self.ttl)
            .await?;
        debug!(
            "Stats recomputed: users={}, posts={}, cached for {:?}",
            users, posts, self.ttl
        );

        Ok(StatsReport {
            snapshot,
            source: StatsSource::Database,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryCache, MemoryDatabase};
    use fullstack_core::NewUser;
    use fullstack_core::ports::UserStore;

    #[tokio::test]
    async fn test_miss_then_hit() {
        let db = Arc::new(MemoryDatabase::new());
        db.create_user(&NewUser::new("ada", "ada@example.com"))
            .await
            .unwrap();
        db.add_post();
        db.add_post();
        let aggregator = StatsAggregator::new(db, Arc::new(MemoryCache::new()));

        let first = aggregator.get_stats().await.unwrap();
        assert_eq!(first.source, StatsSource::Database);
        assert_eq!(first.snapshot.users, 1);
        assert_eq!(first.snapshot.posts, 2);

        let second = aggregator.get_stats().await.unwrap();
        assert_eq!(second.source, StatsSource::Cache);
        assert_eq!(second.snapshot, first.snapshot);
    }

    #[tokio::test]
    async fn test_writes_with_fixed_ttl() {
        let cache = Arc::new(MemoryCache::new());
        let aggregator = StatsAggregator::new(Arc::new(MemoryDatabase::new()), cache.clone());

        aggregator.get_stats().await.unwrap();

        let ttl = cache.ttl(STATS_CACHE_KEY).unwrap();
        assert!(ttl <= STATS_TTL);
        assert!(ttl > STATS_TTL - Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_cached_value_is_not_revalidated() {
        let db = Arc::new(MemoryDatabase::new());
        let cache = Arc::new(MemoryCache::new());
        let aggregator = StatsAggregator::new(db.clone(), cache);

        aggregator.get_stats().await.unwrap();
        db.create_user(&NewUser::new("ada", "ada@example.com"))
            .await
            .unwrap();

        let report = aggregator.get_stats().await.unwrap();
        assert_eq!(report.source, StatsSource::Cache);
        assert_eq!(report.snapshot.users, 0);
    }

    #[tokio::test]
    async fn test_corrupt_cache_entry_is_an_error() {
        let cache = Arc::new(MemoryCache::new());
        cache
            .set_with_ttl(STATS_CACHE_KEY, "not json", STATS_TTL)
            .await
            .unwrap();
        let aggregator = StatsAggregator::new(Arc::new(MemoryDatabase::new()), cache);

        assert!(aggregator.get_stats().await.is_err());
    }

    #[tokio::test]
    async fn test_database_failure_leaves_cache_empty() {
        let db = Arc::new(MemoryDatabase::new());
        db.set_online(false);
        let cache = Arc::new(MemoryCache::new());
        let aggregator = StatsAggregator::new(db, cache.clone());

        assert!(aggregator.get_stats().await.is_err());
        assert_eq!(cache.get(STATS_CACHE_KEY).await.unwrap(), None);
    }
}
