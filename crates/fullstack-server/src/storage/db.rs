//! MySQL/MariaDB database layer backed by a bounded sqlx pool

use anyhow::{Context, Result};
use async_trait::async_trait;
use fullstack_core::ports::{HealthProbe, StatsStore, UserStore};
use fullstack_core::{ApiSettings, FullstackError, NewUser, User};
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlPoolOptions};
use sqlx::{Connection, MySqlPool};

/// Upper bound on concurrent database connections; callers beyond it queue
/// inside the pool.
pub const MAX_CONNECTIONS: u32 = 10;

pub struct MySqlDatabase {
    pool: MySqlPool,
}

impl MySqlDatabase {
    pub async fn connect(settings: &ApiSettings) -> Result<Self> {
        tracing::info!(
            "Connecting to MySQL at {}:{}/{} as {}",
            settings.db_host,
            settings.db_port,
            settings.db_name,
            settings.db_user
        );

        let options = MySqlConnectOptions::new()
            .host(&settings.db_host)
            .port(settings.db_port)
            .database(&settings.db_name)
            .username(&settings.db_user)
            .password(&settings.db_password);

        // Single attempt, no retry
        let conn = MySqlConnection::connect_with(&options)
            .await
            .with_context(|| {
                format!(
                    "Failed to connect to MySQL at {}:{}",
                    settings.db_host, settings.db_port
                )
            })?;
        conn.close()
            .await
            .context("Failed to close MySQL startup connection")?;

        let pool = MySqlPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await
            .context("Failed to open MySQL pool")?;

        tracing::info!("MySQL pool established, ensuring schema...");

        Self::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        tracing::info!("Database initialization complete");

        Ok(Self { pool })
    }

    async fn run_migrations(pool: &MySqlPool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INT AUTO_INCREMENT PRIMARY KEY,
                username VARCHAR(255) NOT NULL,
                email VARCHAR(255) NOT NULL,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS posts (
                id INT AUTO_INCREMENT PRIMARY KEY,
                user_id INT,
                title VARCHAR(255) NOT NULL,
                content TEXT,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    async fn count(&self, sql: &str) -> fullstack_core::Result<i64> {
        let count: i64 = sqlx::query_scalar(sql)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(count)
    }
}

fn db_error(e: sqlx::Error) -> FullstackError {
    // Surface the server's own message (e.g. "Column 'email' cannot be null")
    match e {
        sqlx::Error::Database(db) => FullstackError::Database(db.message().to_string()),
        other => FullstackError::Database(other.to_string()),
    }
}

#[async_trait]
impl HealthProbe for MySqlDatabase {
    async fn ping(&self) -> fullstack_core::Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for MySqlDatabase {
    async fn create_user(&self, user: &NewUser) -> fullstack_core::Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (username, email) VALUES (?, ?)
            "#,
        )
        .bind(user.username_text())
        .bind(user.email_text())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        i64::try_from(result.last_insert_id())
            .map_err(|e| FullstackError::Database(format!("Generated id out of range: {}", e)))
    }

    async fn list_users(&self) -> fullstack_core::Result<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
            SELECT id, username, email FROM users
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }
}

#[async_trait]
impl StatsStore for MySqlDatabase {
    async fn count_users(&self) -> fullstack_core::Result<i64> {
        self.count("SELECT COUNT(*) FROM users").await
    }

    async fn count_posts(&self) -> fullstack_core::Result<i64> {
        self.count("SELECT COUNT(*) FROM posts").await
    }
}

// Helper struct for sqlx query_as
#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        User {
            id: r.id,
            username: r.username,
            email: r.email,
        }
    }
}
