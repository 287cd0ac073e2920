//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the request, response and error schemas. The document backs Swagger
//! UI in debug builds and is printed by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::exoplanets::{
    ExoplanetRequestBody, ExoplanetResponseBody, FuelEstimationResponseBody,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Exoplanet catalogue API",
        description = "CRUD access to catalogued exoplanets plus crewed-trip fuel estimation."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::exoplanets::add_exoplanet,
        crate::inbound::http::exoplanets::list_exoplanets,
        crate::inbound::http::exoplanets::get_exoplanet,
        crate::inbound::http::exoplanets::update_exoplanet,
        crate::inbound::http::exoplanets::delete_exoplanet,
        crate::inbound::http::exoplanets::estimate_fuel,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ExoplanetRequestBody,
        ExoplanetResponseBody,
        FuelEstimationResponseBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "exoplanets", description = "Exoplanet catalogue operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
