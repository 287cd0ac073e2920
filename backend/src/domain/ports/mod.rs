//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod exoplanet_repository;
mod exoplanets_command;
mod exoplanets_query;

#[cfg(test)]
pub use exoplanet_repository::MockExoplanetRepository;
pub use exoplanet_repository::{ExoplanetRepository, ExoplanetRepositoryError};
#[cfg(test)]
pub use exoplanets_command::MockExoplanetsCommand;
pub use exoplanets_command::ExoplanetsCommand;
#[cfg(test)]
pub use exoplanets_query::MockExoplanetsQuery;
pub use exoplanets_query::ExoplanetsQuery;
