//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod error;
pub mod exoplanets;
pub mod health;
pub mod schemas;
pub mod state;
pub mod validation;

pub use error::ApiResult;

/// JSON extractor settings routing decode failures into the error envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(error::json_error_handler)
}

/// Query extractor settings routing decode failures into the error envelope.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(error::query_error_handler)
}

/// Register the catalogue routes on an Actix service config.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use exoplanet_backend::inbound::http::configure_exoplanets;
///
/// let app = App::new().configure(configure_exoplanets);
/// ```
pub fn configure_exoplanets(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(exoplanets::add_exoplanet)
        .service(exoplanets::list_exoplanets)
        .service(exoplanets::estimate_fuel)
        .service(exoplanets::get_exoplanet)
        .service(exoplanets::update_exoplanet)
        .service(exoplanets::delete_exoplanet);
}
