//! Storage layer
//!
//! MySQL (sqlx pool) for persistence and Redis for caching in production;
//! DashMap-backed in-memory stores for exercising handlers without either.

pub mod db;
pub mod memory;
pub mod redis_cache;

pub use db::MySqlDatabase;
pub use memory::{MemoryCache, MemoryDatabase};
pub use redis_cache::RedisCache;
