//! Port for exoplanet persistence.
//!
//! The [`ExoplanetRepository`] trait is the record store contract. Adapters
//! map one record to one row keyed by [`ExoplanetId`]. Records passed in have
//! already been validated by the domain.

use async_trait::async_trait;

use crate::domain::{Exoplanet, ExoplanetId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by exoplanet repository adapters.
    pub enum ExoplanetRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "exoplanet repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "exoplanet repository query failed: {message}",
        /// A record with the same identifier already exists.
        Conflict { message: String } =>
            "exoplanet repository conflict: {message}",
    }
}

/// Port for exoplanet storage and retrieval.
///
/// Mutations do not check row counts: updating or deleting an unknown
/// identifier succeeds without touching the store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExoplanetRepository: Send + Sync {
    /// Insert a new record.
    ///
    /// Fails with [`ExoplanetRepositoryError::Conflict`] when the identifier
    /// is already taken.
    async fn create(&self, exoplanet: &Exoplanet) -> Result<(), ExoplanetRepositoryError>;

    /// Return every stored record.
    async fn list(&self) -> Result<Vec<Exoplanet>, ExoplanetRepositoryError>;

    /// Fetch a record by identifier.
    ///
    /// Returns `None` when no record matches.
    async fn find_by_id(
        &self,
        id: &ExoplanetId,
    ) -> Result<Option<Exoplanet>, ExoplanetRepositoryError>;

    /// Replace every field of the record sharing `exoplanet`'s identifier.
    async fn update(&self, exoplanet: &Exoplanet) -> Result<(), ExoplanetRepositoryError>;

    /// Remove the record with the given identifier.
    async fn delete(&self, id: &ExoplanetId) -> Result<(), ExoplanetRepositoryError>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(
        ExoplanetRepositoryError::connection("pool timed out"),
        "exoplanet repository connection failed: pool timed out"
    )]
    #[case(
        ExoplanetRepositoryError::query("syntax error"),
        "exoplanet repository query failed: syntax error"
    )]
    #[case(
        ExoplanetRepositoryError::conflict("duplicate key"),
        "exoplanet repository conflict: duplicate key"
    )]
    fn errors_format_with_context(
        #[case] error: ExoplanetRepositoryError,
        #[case] expected: &str,
    ) {
        assert_eq!(error.to_string(), expected);
    }
}
