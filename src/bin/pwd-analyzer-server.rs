//! HTTP server exposing the password strength analyzer.

use pwd_strength_analyzer::config::ServerConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = ServerConfig::from_env()?;
    tracing::info!(
        addr = %config.addr,
        common_list = ?config.common_passwords_path,
        "starting password analyzer"
    );

    pwd_strength_analyzer::server::serve(config).await
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
