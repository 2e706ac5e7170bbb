use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use crypto_dashboard::{config::Config, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.app_env.default_log_filter()));
    fmt().with_env_filter(filter).init();

    if config.cmc_api_key.is_none() {
        warn!("CMC_API_KEY is not set; every upstream request will be rejected");
    }
    info!(base_url = %config.cmc_base_url, env = ?config.app_env, "Using CoinMarketCap API");

    // Build our application with routes
    let app = router::create_router(&config).await?;

    // Run our application
    let host: std::net::IpAddr = config
        .host
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid HOST: {}", config.host))?;
    let addr = SocketAddr::from((host, config.port));
    info!("Dashboard listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
