use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

pub type ConnectionPool = sqlx::Pool<sqlx::Postgres>;

pub struct ConnectionManager;

impl ConnectionManager {
    pub async fn new_pool(database_url: &str) -> Result<ConnectionPool> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await
            .context("Failed to connect to Postgres")?;

        Ok(pool)
    }
}
