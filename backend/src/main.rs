//! Backend entry-point: loads settings, prepares the record store and serves
//! the REST API.

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use exoplanet_backend::config::ServiceSettings;
use exoplanet_backend::inbound::http::health::HealthState;
use exoplanet_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};

use server::{ServerConfig, create_server};

async fn connect_database(database_url: &str, max_connections: u32) -> io::Result<DbPool> {
    let url = database_url.to_owned();
    web::block(move || run_pending_migrations(&url))
        .await
        .map_err(|err| io::Error::other(format!("migration worker failed: {err}")))?
        .map_err(io::Error::other)?;

    DbPool::new(PoolConfig::new(database_url).with_max_size(max_connections))
        .await
        .map_err(io::Error::other)
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServiceSettings::load_from_iter(std::env::args_os())
        .map_err(|err| io::Error::other(format!("failed to load settings: {err}")))?;
    let bind_addr = settings.bind_addr().map_err(io::Error::other)?;

    let mut config = ServerConfig::new(bind_addr);
    if let Some(database_url) = settings.database_url() {
        let max_connections = settings.db_max_connections().map_err(io::Error::other)?;
        let pool = connect_database(database_url, max_connections).await?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    info!(%bind_addr, "exoplanet service listening");

    let result = server.await;
    health_state.mark_draining();
    info!("exoplanet service stopped");
    result
}
