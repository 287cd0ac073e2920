//! Domain primitives, services and ports for the exoplanet catalogue.
//!
//! Purpose: define strongly typed records and the use cases the HTTP adapter
//! drives. Nothing here depends on Actix or Diesel.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - Exoplanet, ExoplanetDraft, ExoplanetId, ExoplanetKind — catalogue records.
//! - CrewCapacity, estimate_fuel, surface_gravity — fuel model.
//! - ExoplanetService — implementation of the driving ports.

pub mod error;
pub mod exoplanet;
mod exoplanet_service;
pub mod fuel;
pub mod ports;
pub mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::exoplanet::{
    Exoplanet, ExoplanetDraft, ExoplanetId, ExoplanetKind, ExoplanetValidationError,
    ParseExoplanetIdError,
};
pub use self::exoplanet_service::ExoplanetService;
pub use self::fuel::{CrewCapacity, InvalidCrewCapacity, estimate_fuel, surface_gravity};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use exoplanet_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
