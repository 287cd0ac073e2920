//! Exoplanet catalogue domain service.
//!
//! [`ExoplanetService`] implements both driving ports on top of an
//! [`ExoplanetRepository`]. Validation runs here, before any store access, so
//! adapters only ever see records that satisfy the catalogue rules.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::ports::{
    ExoplanetRepository, ExoplanetRepositoryError, ExoplanetsCommand, ExoplanetsQuery,
};
use crate::domain::{
    CrewCapacity, Error, Exoplanet, ExoplanetDraft, ExoplanetId, ExoplanetValidationError,
    estimate_fuel,
};

/// Map a store failure onto an opaque internal error.
///
/// The repository detail, including whether the store was unreachable, is
/// logged and replaced by `context`.
fn map_repository_error(context: &'static str, err: ExoplanetRepositoryError) -> Error {
    match &err {
        ExoplanetRepositoryError::Connection { .. } => {
            error!(error = %err, unreachable = true, "{context}");
        }
        ExoplanetRepositoryError::Query { .. } | ExoplanetRepositoryError::Conflict { .. } => {
            error!(error = %err, "{context}");
        }
    }
    Error::internal(context)
}

fn map_validation_error(err: ExoplanetValidationError) -> Error {
    Error::invalid_request(err.to_string())
}

fn not_found(id: &ExoplanetId) -> Error {
    Error::not_found(format!("exoplanet {id} not found"))
}

/// Catalogue service implementing [`ExoplanetsCommand`] and
/// [`ExoplanetsQuery`].
#[derive(Clone)]
pub struct ExoplanetService<R> {
    repository: Arc<R>,
}

impl<R> ExoplanetService<R> {
    /// Create a service backed by `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> ExoplanetService<R>
where
    R: ExoplanetRepository,
{
    async fn fetch(&self, id: &ExoplanetId) -> Result<Exoplanet, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|err| map_repository_error("failed to get exoplanet", err))?
            .ok_or_else(|| not_found(id))
    }
}

#[async_trait]
impl<R> ExoplanetsCommand for ExoplanetService<R>
where
    R: ExoplanetRepository,
{
    async fn add(&self, draft: ExoplanetDraft) -> Result<Exoplanet, Error> {
        let exoplanet = Exoplanet::new(ExoplanetId::random(), draft).map_err(map_validation_error)?;
        self.repository
            .create(&exoplanet)
            .await
            .map_err(|err| map_repository_error("failed to insert exoplanet", err))?;
        info!(id = %exoplanet.id(), name = exoplanet.name(), "exoplanet added");
        Ok(exoplanet)
    }

    async fn update(&self, id: ExoplanetId, draft: ExoplanetDraft) -> Result<Exoplanet, Error> {
        let exoplanet = Exoplanet::new(id, draft).map_err(map_validation_error)?;
        self.repository
            .update(&exoplanet)
            .await
            .map_err(|err| map_repository_error("failed to update exoplanet", err))?;
        info!(id = %exoplanet.id(), "exoplanet updated");
        Ok(exoplanet)
    }

    async fn delete(&self, id: &ExoplanetId) -> Result<(), Error> {
        self.repository
            .delete(id)
            .await
            .map_err(|err| map_repository_error("failed to delete exoplanet", err))?;
        info!(id = %id, "exoplanet deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> ExoplanetsQuery for ExoplanetService<R>
where
    R: ExoplanetRepository,
{
    async fn list(&self) -> Result<Vec<Exoplanet>, Error> {
        self.repository
            .list()
            .await
            .map_err(|err| map_repository_error("failed to list exoplanets", err))
    }

    async fn get_by_id(&self, id: &ExoplanetId) -> Result<Exoplanet, Error> {
        self.fetch(id).await
    }

    async fn estimate_fuel(&self, id: &ExoplanetId, crew: CrewCapacity) -> Result<f64, Error> {
        let exoplanet = self.fetch(id).await?;
        Ok(estimate_fuel(&exoplanet, crew))
    }
}

#[cfg(test)]
#[path = "exoplanet_service_tests.rs"]
mod tests;
