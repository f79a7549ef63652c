//! Storage traits for persistence and caching

use crate::Result;
use async_trait::async_trait;
use fullstack_types::{NewUser, User};
use std::time::Duration;

/// Liveness probe against a backing store
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn ping(&self) -> Result<()>;
}

/// User store
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a row and return the store-generated id.
    async fn create_user(&self, user: &NewUser) -> Result<i64>;
    async fn list_users(&self) -> Result<Vec<User>>;
}

/// Aggregate counts. Each call is an independent read.
#[async_trait]
pub trait StatsStore: Send + Sync {
    async fn count_users(&self) -> Result<i64>;
    async fn count_posts(&self) -> Result<i64>;
}

/// Everything the api service needs from the relational store
pub trait Database: UserStore + StatsStore + HealthProbe {}

impl<T: UserStore + StatsStore + HealthProbe> Database for T {}

/// Key-value cache with store-side expiry
#[async_trait]
pub trait CacheStore: HealthProbe {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> Result<()>;
    async fn incr(&self, key: &str) -> Result<i64>;
}
