//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ExoplanetsCommand, ExoplanetsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub exoplanets: Arc<dyn ExoplanetsCommand>,
    pub exoplanets_query: Arc<dyn ExoplanetsQuery>,
}

impl HttpState {
    /// Bundle the driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use exoplanet_backend::domain::ExoplanetService;
    /// use exoplanet_backend::inbound::http::state::HttpState;
    /// use exoplanet_backend::outbound::memory::InMemoryExoplanetRepository;
    ///
    /// let service = Arc::new(ExoplanetService::new(Arc::new(
    ///     InMemoryExoplanetRepository::new(),
    /// )));
    /// let state = HttpState::new(service.clone(), service);
    /// # let _ = state;
    /// ```
    pub fn new(
        exoplanets: Arc<dyn ExoplanetsCommand>,
        exoplanets_query: Arc<dyn ExoplanetsQuery>,
    ) -> Self {
        Self {
            exoplanets,
            exoplanets_query,
        }
    }
}
