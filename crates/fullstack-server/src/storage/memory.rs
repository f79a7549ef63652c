//! In-memory stores using DashMap (stand-ins for MySQL and Redis)

use async_trait::async_trait;
use dashmap::DashMap;
use fullstack_core::ports::{CacheStore, HealthProbe, StatsStore, UserStore};
use fullstack_core::{FullstackError, NewUser, Result, User};
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Simple in-memory cache with TTL support
pub struct MemoryCache {
    data: Arc<DashMap<String, CacheEntry>>,
    online: AtomicBool,
}

struct CacheEntry {
    value: String,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.map(|expires| now >= expires).unwrap_or(false)
    }
}

impl MemoryCache {
    pub fn new() -> Self {
        let cache = Self {
            data: Arc::new(DashMap::new()),
            online: AtomicBool::new(true),
        };

        // Start cleanup task
        cache.start_cleanup_task();

        cache
    }

    /// Simulate the cache becoming (un)reachable
    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }

    /// Remaining lifetime of a key, `None` if absent or persistent
    pub fn ttl(&self, key: &str) -> Option<Duration> {
        self.data
            .get(key)
            .and_then(|entry| entry.expires_at)
            .map(|expires| expires.saturating_duration_since(Instant::now()))
    }

    fn ensure_online(&self) -> Result<()> {
        if self.online.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(FullstackError::Cache(
                "Connection refused (os error 111)".to_string(),
            ))
        }
    }

    fn start_cleanup_task(&self) {
        let data = self.data.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(60));
            loop {
                interval.tick().await;

                let now = Instant::now();
                data.retain(|_, entry| !entry.is_expired(now));
            }
        });
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HealthProbe for MemoryCache {
    async fn ping(&self) -> Result<()> {
        self.ensure_online()
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.ensure_online()?;

        let now = Instant::now();
        let value = self.data.get(key).and_then(|entry| {
            if entry.is_expired(now) {
                None
            } else {
                Some(entry.value.clone())
            }
        });

        if value.is_none() {
            self.data.remove_if(key, |_, entry| entry.is_expired(now));
        }

        Ok(value)
    }

    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        self.ensure_online()?;

        self.data.insert(
            key.to_string(),
            CacheEntry {
                value: value.to_string(),
                expires_at: Some(Instant::now() + ttl),
            },
        );

        Ok(())
    }

    async fn incr(&self, key: &str) -> Result<i64> {
        self.ensure_online()?;

        let now = Instant::now();
        let mut entry = self
            .data
            .entry(key.to_string())
            .or_insert_with(|| CacheEntry {
                value: "0".to_string(),
                expires_at: None,
            });

        if entry.is_expired(now) {
            entry.value = "0".to_string();
            entry.expires_at = None;
        }

        let next = entry
            .value
            .parse::<i64>()
            .ok()
            .and_then(|current| current.checked_add(1))
            .ok_or_else(|| {
                FullstackError::Cache("ERR value is not an integer or out of range".to_string())
            })?;
        entry.value = next.to_string();

        Ok(next)
    }
}

/// In-memory relational stand-in with auto-increment ids
pub struct MemoryDatabase {
    users: DashMap<i64, User>,
    posts: AtomicI64,
    next_id: AtomicI64,
    online: AtomicBool,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            posts: AtomicI64::new(0),
            next_id: AtomicI64::new(1),
            online: AtomicBool::new(true),
        }
    }

    /// Simulate the database becoming (un)reachable
    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }

    /// Record a post; the api itself never writes posts
    pub fn add_post(&self) {
        self.posts.fetch_add(1, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<()> {
        if self.online.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(FullstackError::Database("connect ECONNREFUSED".to_string()))
        }
    }
}

impl Default for MemoryDatabase {
    fn default() -> Self {
        Self::new()
    }
}

fn not_null(column: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| FullstackError::Database(format!("Column '{}' cannot be null", column)))
}

#[async_trait]
impl HealthProbe for MemoryDatabase {
    async fn ping(&self) -> Result<()> {
        self.ensure_online()
    }
}

#[async_trait]
impl UserStore for MemoryDatabase {
    async fn create_user(&self, user: &NewUser) -> Result<i64> {
        self.ensure_online()?;

        let username = not_null("username", user.username_text())?;
        let email = not_null("email", user.email_text())?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.users.insert(
            id,
            User {
                id,
                username,
                email,
            },
        );

        Ok(id)
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.ensure_online()?;

        let mut users: Vec<User> = self.users.iter().map(|e| e.value().clone()).collect();
        users.sort_by_key(|u| u.id);

        Ok(users)
    }
}

#[async_trait]
impl StatsStore for MemoryDatabase {
    async fn count_users(&self) -> Result<i64> {
        self.ensure_online()?;
        Ok(self.users.len() as i64)
    }

    async fn count_posts(&self) -> Result<i64> {
        self.ensure_online()?;
        Ok(self.posts.load(Ordering::SeqCst))
    }
}
