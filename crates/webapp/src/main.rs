use anyhow::{Context, Result};
use dotenv::dotenv;
use shared::{
    config::{Config, ConnectionManager},
    utils::Logger,
};
use tracing::info;
use webapp::{handler::AppRouter, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let _logger = Logger::new("webapp", cfg!(debug_assertions));

    let config = Config::init().context("Failed to load configuration")?;

    let pool = ConnectionManager::new_pool(&config.database_url)
        .await
        .context("Failed to create connection pool")?;

    if config.run_migrations {
        info!("🗄️ Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;
    }

    let port = config.port;

    let state = AppState::new(pool, &config.jwt_secret);

    println!("🚀 Server started successfully");

    AppRouter::serve(port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down servers...");

    Ok(())
}
