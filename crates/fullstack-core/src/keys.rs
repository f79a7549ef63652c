//! Cache keys shared between handlers

use std::time::Duration;

/// Serialized stats snapshot written by the cache-aside read path
pub const STATS_CACHE_KEY: &str = "stats:full";

/// Counter bumped on every user creation. Nothing reads it back.
pub const USER_COUNTER_KEY: &str = "stats:users";

/// Lifetime of [`STATS_CACHE_KEY`]
pub const STATS_TTL: Duration = Duration::from_secs(60);
