//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories are thin translators between Diesel row structs and domain
//! records, running on `diesel-async` connections checked out of a `bb8`
//! pool. Row structs (`models.rs`) and the table definition (`schema.rs`)
//! stay private to this module.
//!
//! # Example
//!
//! ```no_run
//! use exoplanet_backend::outbound::persistence::{
//!     DbPool, DieselExoplanetRepository, PoolConfig,
//! };
//!
//! # async fn connect() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/exoplanets")).await?;
//! let repository = DieselExoplanetRepository::new(pool);
//! # let _ = repository;
//! # Ok(())
//! # }
//! ```

mod diesel_exoplanet_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_exoplanet_repository::DieselExoplanetRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
