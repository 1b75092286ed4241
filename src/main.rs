mod ai;
mod app;
mod catalog;
mod config;
mod error;
mod job;
mod models;
mod scheduler;
mod services;
mod store;
#[cfg(test)]
mod testing;

use app::App;
use config::Config;
use error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up credentials from a local .env if one exists
    let _ = dotenvy::dotenv();

    // Log progress to stdout (info by default, RUST_LOG overrides)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stdout)
        .init();

    // Load configuration
    let config = Config::load()?;

    // Initialize app
    let mut app = App::new(&config)?;

    tracing::info!("Hand painting generator service started");
    tracing::info!(
        "Schedule: running daily at {} (server time)",
        app.schedule().run_at().format("%H:%M")
    );

    app.run().await
}
