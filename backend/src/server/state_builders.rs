//! Builders wiring repositories into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use exoplanet_backend::domain::ExoplanetService;
use exoplanet_backend::domain::ports::ExoplanetRepository;
use exoplanet_backend::inbound::http::state::HttpState;
use exoplanet_backend::outbound::memory::InMemoryExoplanetRepository;
use exoplanet_backend::outbound::persistence::DieselExoplanetRepository;

use super::ServerConfig;

fn state_for<R>(repository: R) -> HttpState
where
    R: ExoplanetRepository + 'static,
{
    let service = Arc::new(ExoplanetService::new(Arc::new(repository)));
    HttpState::new(service.clone(), service)
}

/// Use the Diesel repository when a pool is configured, otherwise keep
/// records in process memory.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL exoplanet repository");
            state_for(DieselExoplanetRepository::new(pool.clone()))
        }
        None => {
            warn!("no database configured; exoplanets are kept in memory");
            state_for(InMemoryExoplanetRepository::new())
        }
    };
    web::Data::new(state)
}
