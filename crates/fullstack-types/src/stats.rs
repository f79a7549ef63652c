//! Statistics snapshot types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point-in-time row counts. Only ever persisted in the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub users: i64,
    pub posts: i64,
    pub timestamp: DateTime<Utc>,
}

impl StatsSnapshot {
    pub fn new(users: i64, posts: i64) -> Self {
        Self {
            users,
            posts,
            timestamp: Utc::now(),
        }
    }
}

/// Where a served snapshot came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsSource {
    Cache,
    Database,
}

/// `GET /stats` response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsReport {
    #[serde(flatten)]
    pub snapshot: StatsSnapshot,
    pub source: StatsSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_is_flat() {
        let report = StatsReport {
            snapshot: StatsSnapshot::new(3, 5),
            source: StatsSource::Cache,
        };
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["users"], 3);
        assert_eq!(json["posts"], 5);
        assert_eq!(json["source"], "cache");
        assert!(json["timestamp"].is_string());
        assert!(json.get("snapshot").is_none());
    }
}
