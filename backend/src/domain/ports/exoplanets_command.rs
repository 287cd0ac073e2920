//! Driving port for exoplanet mutations.
//!
//! HTTP handlers call this port to create, replace and remove catalogue
//! records without depending on persistence adapters.

use async_trait::async_trait;

use crate::domain::{Error, Exoplanet, ExoplanetDraft, ExoplanetId};

/// Domain use-case port for exoplanet mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExoplanetsCommand: Send + Sync {
    /// Validate `draft`, assign a fresh identifier and store it.
    async fn add(&self, draft: ExoplanetDraft) -> Result<Exoplanet, Error>;

    /// Validate `draft` and store it as a full replacement for `id`.
    ///
    /// The record is not looked up first; an unknown `id` is a silent no-op
    /// at the store and the validated record is still returned.
    async fn update(&self, id: ExoplanetId, draft: ExoplanetDraft) -> Result<Exoplanet, Error>;

    /// Remove the record with `id`. Unknown identifiers succeed.
    async fn delete(&self, id: &ExoplanetId) -> Result<(), Error>;
}
