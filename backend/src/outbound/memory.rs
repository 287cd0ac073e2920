//! In-process `ExoplanetRepository` used when no database is configured.
//!
//! Records live in a `Vec` behind an `RwLock`, so listing returns insertion
//! order. Contents are lost on restart.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{ExoplanetRepository, ExoplanetRepositoryError};
use crate::domain::{Exoplanet, ExoplanetId};

/// Volatile exoplanet store.
#[derive(Debug, Default)]
pub struct InMemoryExoplanetRepository {
    records: RwLock<Vec<Exoplanet>>,
}

impl InMemoryExoplanetRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: PoisonError<T>) -> ExoplanetRepositoryError {
    ExoplanetRepositoryError::query("in-memory store lock poisoned")
}

#[async_trait]
impl ExoplanetRepository for InMemoryExoplanetRepository {
    async fn create(&self, exoplanet: &Exoplanet) -> Result<(), ExoplanetRepositoryError> {
        let mut records = self.records.write().map_err(poisoned)?;
        if records.iter().any(|stored| stored.id() == exoplanet.id()) {
            return Err(ExoplanetRepositoryError::conflict(
                "exoplanet id already exists",
            ));
        }
        records.push(exoplanet.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Exoplanet>, ExoplanetRepositoryError> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.clone())
    }

    async fn find_by_id(
        &self,
        id: &ExoplanetId,
    ) -> Result<Option<Exoplanet>, ExoplanetRepositoryError> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.iter().find(|stored| stored.id() == *id).cloned())
    }

    async fn update(&self, exoplanet: &Exoplanet) -> Result<(), ExoplanetRepositoryError> {
        let mut records = self.records.write().map_err(poisoned)?;
        if let Some(stored) = records
            .iter_mut()
            .find(|stored| stored.id() == exoplanet.id())
        {
            *stored = exoplanet.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: &ExoplanetId) -> Result<(), ExoplanetRepositoryError> {
        let mut records = self.records.write().map_err(poisoned)?;
        records.retain(|stored| stored.id() != *id);
        Ok(())
    }
}
