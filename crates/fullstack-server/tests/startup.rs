//! Connection manager behaviour when a backing store is unreachable

use fullstack_core::ApiSettings;
use fullstack_server::storage::RedisCache;
use fullstack_server::AppState;
use std::collections::HashMap;
use std::time::Duration;

fn settings(pairs: &[(&str, &str)]) -> ApiSettings {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ApiSettings::load_from(Some(vars)).unwrap()
}

#[tokio::test]
async fn test_connect_fails_fast_without_database() {
    let settings = settings(&[("DB_HOST", "127.0.0.1"), ("DB_PORT", "1")]);

    let result = tokio::time::timeout(Duration::from_secs(10), AppState::connect(&settings))
        .await
        .expect("connect should not wait on pool retries");

    let err = match result {
        Ok(_) => panic!("connect succeeded against a closed port"),
        Err(e) => e,
    };
    let message = format!("{:#}", err);
    assert!(message.contains("Failed to connect to MySQL at 127.0.0.1:1"));
    assert!(!message.contains("pool timed out"));
}

#[tokio::test]
async fn test_redis_connect_fails_without_server() {
    let result = tokio::time::timeout(
        Duration::from_secs(10),
        RedisCache::connect("redis://127.0.0.1:1/"),
    )
    .await
    .expect("redis connect should return promptly");

    assert!(result.is_err());
}
