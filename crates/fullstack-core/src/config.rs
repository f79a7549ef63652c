//! Environment-driven configuration
//!
//! Every setting has a hard-coded fallback. Values are type-coerced but not
//! validated; there is no reload.

use crate::Result;
use ::config::{Config, ConfigBuilder, Environment};
use ::config::builder::DefaultState;
use serde::Deserialize;
use std::collections::HashMap;

/// Settings for the api service (database + cache)
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub redis_host: String,
    pub redis_port: u16,
    pub port: u16,
}

impl ApiSettings {
    /// Load from the process environment.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load from an explicit variable map instead of the process environment.
    pub fn load_from(vars: Option<HashMap<String, String>>) -> Result<Self> {
        let settings = Config::builder()
            .set_default("db_host", "localhost")?
            .set_default("db_port", 3306_i64)?
            .set_default("db_name", "fullstack")?
            .set_default("db_user", "root")?
            .set_default("db_password", "")?
            .set_default("redis_host", "localhost")?
            .set_default("redis_port", 6379_i64)?
            .set_default("port", 3000_i64)?;

        Ok(with_environment(settings, vars).build()?.try_deserialize()?)
    }

    pub fn redis_url(&self) -> String {
        format!("redis://{}:{}/", self.redis_host, self.redis_port)
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

/// Settings for the hello service
#[derive(Debug, Clone, Deserialize)]
pub struct HelloSettings {
    pub app_name: String,
    #[serde(rename = "node_env")]
    pub environment: String,
    pub port: u16,
}

impl HelloSettings {
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    pub fn load_from(vars: Option<HashMap<String, String>>) -> Result<Self> {
        let settings = Config::builder()
            .set_default("app_name", "Docker Rust App")?
            .set_default("node_env", "development")?
            .set_default("port", 3000_i64)?;

        Ok(with_environment(settings, vars).build()?.try_deserialize()?)
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn with_environment(
    builder: ConfigBuilder<DefaultState>,
    vars: Option<HashMap<String, String>>,
) -> ConfigBuilder<DefaultState> {
    // `DB_HOST` maps to `db_host`; no prefix, no nesting. Values stay strings
    // until deserialization so credentials pass through untouched.
    let env = Environment::default().source(vars);
    builder.add_source(env)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_api_defaults() {
        let settings = ApiSettings::load_from(vars(&[])).unwrap();

        assert_eq!(settings.db_host, "localhost");
        assert_eq!(settings.db_port, 3306);
        assert_eq!(settings.db_name, "fullstack");
        assert_eq!(settings.db_user, "root");
        assert_eq!(settings.db_password, "");
        assert_eq!(settings.redis_port, 6379);
        assert_eq!(settings.port, 3000);
        assert_eq!(settings.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_api_environment_overrides() {
        let settings = ApiSettings::load_from(vars(&[
            ("DB_HOST", "mariadb"),
            ("DB_PORT", "3307"),
            ("DB_PASSWORD", "secret"),
            ("REDIS_HOST", "redis"),
            ("PORT", "8080"),
        ]))
        .unwrap();

        assert_eq!(settings.db_host, "mariadb");
        assert_eq!(settings.db_port, 3307);
        assert_eq!(settings.db_password, "secret");
        assert_eq!(settings.redis_url(), "redis://redis:6379/");
        assert_eq!(settings.port, 8080);
    }

    #[test]
    fn test_string_values_are_not_reinterpreted() {
        let settings = ApiSettings::load_from(vars(&[
            ("DB_PASSWORD", "007"),
            ("DB_USER", "TRUE"),
            ("DB_NAME", "1e3"),
        ]))
        .unwrap();
        assert_eq!(settings.db_password, "007");
        assert_eq!(settings.db_user, "TRUE");
        assert_eq!(settings.db_name, "1e3");

        let hello = HelloSettings::load_from(vars(&[("APP_NAME", "42.0")])).unwrap();
        assert_eq!(hello.app_name, "42.0");
    }

    #[test]
    fn test_api_rejects_non_numeric_port() {
        let result = ApiSettings::load_from(vars(&[("PORT", "eighty")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_hello_settings() {
        let defaults = HelloSettings::load_from(vars(&[])).unwrap();
        assert_eq!(defaults.app_name, "Docker Rust App");
        assert_eq!(defaults.environment, "development");

        let custom = HelloSettings::load_from(vars(&[
            ("APP_NAME", "Shipyard"),
            ("NODE_ENV", "production"),
            ("PORT", "5000"),
        ]))
        .unwrap();
        assert_eq!(custom.app_name, "Shipyard");
        assert_eq!(custom.environment, "production");
        assert_eq!(custom.bind_address(), "0.0.0.0:5000");
    }
}
