//! User service

use fullstack_core::keys::USER_COUNTER_KEY;
use fullstack_core::ports::{CacheStore, Database, UserStore};
use fullstack_core::{CreatedUser, NewUser, Result, User};
use std::sync::Arc;
use tracing::{debug, info};

pub struct UserService {
    db: Arc<dyn Database>,
    cache: Arc<dyn CacheStore>,
}

impl UserService {
    pub fn new(db: Arc<dyn Database>, cache: Arc<dyn CacheStore>) -> Self {
        Self { db, cache }
    }

    /// Insert a user and bump the user counter.
    ///
    /// The cached stats snapshot is left alone and ages out on its own.
    pub async fn create_user(&self, req: NewUser) -> Result<CreatedUser> {
        info!(
            "Creating user: username={:?}, email={:?}",
            req.username, req.email
        );

        let id = self.db.create_user(&req).await?;

        let count = self.cache.incr(USER_COUNTER_KEY).await?;
        debug!("{} is now {}", USER_COUNTER_KEY, count);

        Ok(CreatedUser::from_request(id, req))
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.db.list_users().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryCache, MemoryDatabase};
    use fullstack_core::keys::STATS_CACHE_KEY;
    use std::time::Duration;

    #[tokio::test]
    async fn test_create_user_bumps_counter() {
        let cache = Arc::new(MemoryCache::new());
        let service = UserService::new(Arc::new(MemoryDatabase::new()), cache.clone());

        let created = service
            .create_user(NewUser::new("ada", "ada@example.com"))
            .await
            .unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.username, Some(serde_json::json!("ada")));

        service
            .create_user(NewUser::new("bob", "bob@example.com"))
            .await
            .unwrap();
        assert_eq!(
            cache.get(USER_COUNTER_KEY).await.unwrap(),
            Some("2".to_string())
        );
    }

    #[tokio::test]
    async fn test_create_user_keeps_cached_stats() {
        let cache = Arc::new(MemoryCache::new());
        cache
            .set_with_ttl(STATS_CACHE_KEY, "{}", Duration::from_secs(60))
            .await
            .unwrap();
        let service = UserService::new(Arc::new(MemoryDatabase::new()), cache.clone());

        service
            .create_user(NewUser::new("ada", "ada@example.com"))
            .await
            .unwrap();

        assert_eq!(
            cache.get(STATS_CACHE_KEY).await.unwrap(),
            Some("{}".to_string())
        );
    }

    #[tokio::test]
    async fn test_failed_insert_skips_counter() {
        let cache = Arc::new(MemoryCache::new());
        let service = UserService::new(Arc::new(MemoryDatabase::new()), cache.clone());

        let result = service.create_user(NewUser::default()).await;
        assert!(result.is_err());
        assert_eq!(cache.get(USER_COUNTER_KEY).await.unwrap(), None);
    }
}
