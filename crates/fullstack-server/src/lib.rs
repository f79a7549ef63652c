//! Full Stack API Server
//!
//! HTTP API backed by MySQL and Redis, demonstrating a connection pool and a
//! cache-aside read path.

pub mod error;
pub mod handlers;
pub mod services;
pub mod storage;

use anyhow::Result;
use axum::{routing::get, Router};
use fullstack_core::ports::{CacheStore, Database};
use fullstack_core::ApiSettings;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use services::{StatsAggregator, UserService};
use storage::{MySqlDatabase, RedisCache};

/// Application state shared across handlers.
///
/// Built once before the listener binds and dropped only at process exit.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn Database>,
    pub cache: Arc<dyn CacheStore>,
    pub users: Arc<UserService>,
    pub stats: Arc<StatsAggregator>,
}

impl AppState {
    pub fn new(db: Arc<dyn Database>, cache: Arc<dyn CacheStore>) -> Self {
        let users = Arc::new(UserService::new(db.clone(), cache.clone()));
        let stats = Arc::new(StatsAggregator::new(db.clone(), cache.clone()));

        Self {
            db,
            cache,
            users,
            stats,
        }
    }

    /// Open the database pool and the cache connection. Both must succeed.
    pub async fn connect(settings: &ApiSettings) -> Result<Self> {
        info!("Initializing database pool...");
        let db = Arc::new(MySqlDatabase::connect(settings).await?);

        info!("Initializing cache connection...");
        let cache = Arc::new(RedisCache::connect(&settings.redis_url()).await?);

        info!("Database and cache connected");
        Ok(Self::new(db, cache))
    }
}

/// Build the HTTP router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route(
            "/users",
            get(handlers::users::list).post(handlers::users::create),
        )
        .route("/stats", get(handlers::stats::get))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
