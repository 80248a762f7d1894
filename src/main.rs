use anyhow::Result;
use tracing::{error, info};

mod config;
mod constants;
mod leaderboard;
mod models;

use config::AppConfig;
use leaderboard::{LeaderboardClient, LeaderboardTable};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing with environment-based filtering
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cfg!(debug_assertions) {
            "quetzal_backend=info".to_string()
        } else {
            "quetzal_backend=warn".to_string()
        }
    });

    std::env::set_var("RUST_LOG", &log_level);
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("🚀 Starting Quetzal Backend v{}", VERSION);

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Missing required variables abort startup with a descriptive error
    let config = AppConfig::load()?;

    info!(
        "Database configured: {}:{}/{}",
        config.database.host, config.database.port, config.database.database
    );
    info!("Server port: {}", config.server.port);
    info!("Stats API base URL: {}", config.api_base_url);

    let client = LeaderboardClient::new(config.api_base_url.clone());
    let mut table = LeaderboardTable::new();

    // One refresh per startup; a failure is logged and the table stays empty
    match table.refresh(&client).await {
        Ok(appended) => {
            info!("✅ Leaderboard refreshed with {} players", appended);
            print!("{table}");
        }
        Err(e) => {
            error!("❌ Leaderboard refresh failed: {e}");
        }
    }

    Ok(())
}
