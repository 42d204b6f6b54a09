use std::env;
use std::error::Error;

use halo_payroll::api::{AppState, create_router};
use halo_payroll::config::ConfigLoader;
use halo_payroll::store::{InMemorySessionStore, StaticIdentity};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/halo";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_dir = env::var("HALO_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let bind_addr = env::var("HALO_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());
    let user_id = env::var("HALO_USER_ID").unwrap_or_else(|_| "local".into());
    let is_admin = env::var("HALO_USER_IS_ADMIN").is_ok_and(|v| v == "1" || v == "true");

    let state = AppState::new(
        ConfigLoader::load_or_default(&config_dir)?,
        InMemorySessionStore::new(),
        StaticIdentity::new(user_id, is_admin),
    );

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %listener.local_addr()?, is_admin, "Payroll engine listening");
    axum::serve(listener, create_router(state)).await?;

    Ok(())
}
