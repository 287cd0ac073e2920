//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//! - **memory**: volatile in-process repository for database-less runs
//!
//! Adapters translate between domain records and storage representations.
//! They contain no business logic.

pub mod memory;
pub mod persistence;
