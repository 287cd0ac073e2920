//! Exoplanet catalogue backend.
//!
//! Hexagonal layout: [`domain`] holds records, rules and ports; [`inbound`]
//! adapts HTTP onto the driving ports; [`outbound`] implements the record
//! store over PostgreSQL or process memory.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
