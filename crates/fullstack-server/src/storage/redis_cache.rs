//! Redis cache client over a single multiplexed connection

use anyhow::{Context, Result};
use async_trait::async_trait;
use fullstack_core::ports::{CacheStore, HealthProbe};
use fullstack_core::FullstackError;
use redis::aio::MultiplexedConnection;
use std::time::Duration;

/// Shared Redis handle. Cloning the inner connection is cheap and all clones
/// share one socket; there is no reconnect on loss.
pub struct RedisCache {
    conn: MultiplexedConnection,
}

impl RedisCache {
    pub async fn connect(url: &str) -> Result<Self> {
        tracing::info!("Connecting to Redis at {}", url);

        let client = redis::Client::open(url)
            .with_context(|| format!("Invalid Redis URL: {}", url))?;
        let conn = client
            .get_multiplexed_tokio_connection()
            .await
            .with_context(|| format!("Failed to connect to Redis at {}", url))?;

        tracing::info!("Redis connection established");

        Ok(Self { conn })
    }
}

fn cache_error(e: redis::RedisError) -> FullstackError {
    FullstackError::Cache(e.to_string())
}

#[async_trait]
impl HealthProbe for RedisCache {
    async fn ping(&self) -> fullstack_core::Result<()> {
        let mut conn = self.conn.clone();
        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(cache_error)?;

        Ok(())
    }
}

#[async_trait]
impl CacheStore for RedisCache {
    async fn get(&self, key: &str) -> fullstack_core::Result<Option<String>> {
        let mut conn = self.conn.clone();
        redis::cmd("GET")
            .arg(key)
            .query_async(&mut conn)
            .await
            .map_err(cache_error)
    }

    async fn set_with_ttl(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> fullstack_core::Result<()> {
        let mut conn = self.conn.clone();
        redis::cmd("SETEX")
            .arg(key)
            .arg(ttl.as_secs())
            .arg(value)
            .query_async(&mut conn)
            .await
            .map_err(cache_error)
    }

    async fn incr(&self, key: &str) -> fullstack_core::Result<i64> {
        let mut conn = self.conn.clone();
        redis::cmd("INCR")
            .arg(key)
            .query_async(&mut conn)
            .await
            .map_err(cache_error)
    }
}
