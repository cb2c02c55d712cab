#![cfg(not(tarpaulin_include))]

use rusty_poll::app;
use rusty_poll::config::Config;

/// Main entry point for the poll server
///
/// Reads the configuration from the environment (and a `.env` file when
/// present) and serves the poll until the process is stopped.
///
/// # Environment
/// * `PORT` - Listen port, default 5000
/// * `HOST` - Bind address, default 0.0.0.0
/// * `POLL_ADMIN_TOKEN` - Secret required to reset the poll
/// * `STATIC_DIR` - Built frontend directory, default `dist`
/// * `RUST_LOG` - Log filter, default `info`
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load()?;

    app::run(config).await
}
