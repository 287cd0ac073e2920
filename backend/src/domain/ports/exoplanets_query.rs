//! Driving port for exoplanet reads and fuel estimation.

use async_trait::async_trait;

use crate::domain::{CrewCapacity, Error, Exoplanet, ExoplanetId};

/// Domain use-case port for reading the catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExoplanetsQuery: Send + Sync {
    /// Return every catalogued exoplanet.
    async fn list(&self) -> Result<Vec<Exoplanet>, Error>;

    /// Fetch one exoplanet, failing with `NotFound` when it is absent.
    async fn get_by_id(&self, id: &ExoplanetId) -> Result<Exoplanet, Error>;

    /// Fuel units needed to reach the exoplanet with `crew` aboard.
    async fn estimate_fuel(&self, id: &ExoplanetId, crew: CrewCapacity) -> Result<f64, Error>;
}
