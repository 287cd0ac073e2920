//! Exoplanet catalogue HTTP handlers.
//!
//! ```text
//! POST   /exoplanets
//! GET    /exoplanets
//! GET    /exoplanets/{id}
//! PUT    /exoplanets/{id}
//! DELETE /exoplanets/{id}
//! GET    /exoplanets/{id}/fuel-estimation?crew_capacity=N
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{ErrorCode, Exoplanet, ExoplanetDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, missing_field_error, parse_crew_capacity, parse_existing_exoplanet_id,
    parse_exoplanet_id,
};

/// Request payload for creating or replacing an exoplanet.
///
/// Every field is optional at decode time so a missing field reports its name.
/// `mass` defaults to zero and is only checked for terrestrial planets.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct ExoplanetRequestBody {
    /// Ignored; identifiers are assigned by the server or taken from the path.
    #[schema(format = "uuid")]
    pub id: Option<String>,
    #[schema(example = "Kepler-22b")]
    pub name: Option<String>,
    pub description: Option<String>,
    /// Light-years, 10 to 1000.
    #[schema(example = 620)]
    pub distance: Option<i64>,
    /// Earth radii, 0.1 to 10.
    #[schema(example = 2.4)]
    pub radius: Option<f64>,
    /// Earth masses, 0.1 to 10 for terrestrial planets.
    pub mass: Option<f64>,
    /// `GasGiant` or `Terrestrial`.
    #[serde(rename = "type")]
    #[schema(example = "Terrestrial")]
    pub kind: Option<String>,
}

impl ExoplanetRequestBody {
    fn into_draft(self) -> ApiResult<ExoplanetDraft> {
        Ok(ExoplanetDraft {
            name: self
                .name
                .ok_or_else(|| missing_field_error(FieldName::new("name")))?,
            description: self
                .description
                .ok_or_else(|| missing_field_error(FieldName::new("description")))?,
            distance: self
                .distance
                .ok_or_else(|| missing_field_error(FieldName::new("distance")))?,
            radius: self
                .radius
                .ok_or_else(|| missing_field_error(FieldName::new("radius")))?,
            mass: self.mass.unwrap_or_default(),
            kind: self
                .kind
                .ok_or_else(|| missing_field_error(FieldName::new("type")))?,
        })
    }
}

fn is_zero(value: &f64) -> bool {
    *value == 0.0
}

/// Exoplanet record as returned to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExoplanetResponseBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub distance: i32,
    pub radius: f64,
    /// Omitted when zero.
    #[serde(skip_serializing_if = "is_zero")]
    pub mass: f64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<Exoplanet> for ExoplanetResponseBody {
    fn from(value: Exoplanet) -> Self {
        Self {
            id: value.id().to_string(),
            name: value.name().to_owned(),
            description: value.description().to_owned(),
            distance: value.distance(),
            radius: value.radius(),
            mass: value.mass(),
            kind: value.kind().to_string(),
        }
    }
}

/// Query string for fuel estimation.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FuelEstimationParams {
    /// Number of crew members; a positive integer.
    #[param(value_type = i64, minimum = 1)]
    pub crew_capacity: Option<String>,
}

/// Fuel estimation result.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FuelEstimationResponseBody {
    /// Fuel units required for the trip.
    pub fuel: f64,
}

/// Catalogue a new exoplanet.
#[utoipa::path(
    post,
    path = "/exoplanets",
    request_body = ExoplanetRequestBody,
    responses(
        (status = 201, description = "Exoplanet created", body = ExoplanetResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["exoplanets"],
    operation_id = "addExoplanet"
)]
#[post("/exoplanets")]
pub async fn add_exoplanet(
    state: web::Data<HttpState>,
    payload: web::Json<ExoplanetRequestBody>,
) -> ApiResult<HttpResponse> {
    let draft = payload.into_inner().into_draft()?;
    let created = state.exoplanets.add(draft).await?;
    Ok(HttpResponse::Created().json(ExoplanetResponseBody::from(created)))
}

/// List every catalogued exoplanet.
#[utoipa::path(
    get,
    path = "/exoplanets",
    responses(
        (status = 200, description = "Catalogue contents", body = [ExoplanetResponseBody]),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["exoplanets"],
    operation_id = "listExoplanets"
)]
#[get("/exoplanets")]
pub async fn list_exoplanets(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ExoplanetResponseBody>>> {
    let exoplanets = state.exoplanets_query.list().await?;
    Ok(web::Json(
        exoplanets
            .into_iter()
            .map(ExoplanetResponseBody::from)
            .collect(),
    ))
}

/// Fetch one exoplanet.
#[utoipa::path(
    get,
    path = "/exoplanets/{id}",
    params(("id" = String, Path, description = "Exoplanet identifier")),
    responses(
        (status = 200, description = "Exoplanet found", body = ExoplanetResponseBody),
        (status = 404, description = "Exoplanet not found", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["exoplanets"],
    operation_id = "getExoplanet"
)]
#[get("/exoplanets/{id}")]
pub async fn get_exoplanet(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ExoplanetResponseBody>> {
    let id = parse_existing_exoplanet_id(&path)?;
    let exoplanet = state.exoplanets_query.get_by_id(&id).await?;
    Ok(web::Json(exoplanet.into()))
}

/// Replace every field of an exoplanet.
///
/// The record is not looked up first. Any `id` in the body is ignored.
#[utoipa::path(
    put,
    path = "/exoplanets/{id}",
    params(("id" = String, Path, description = "Exoplanet identifier")),
    request_body = ExoplanetRequestBody,
    responses(
        (status = 200, description = "Exoplanet replaced", body = ExoplanetResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["exoplanets"],
    operation_id = "updateExoplanet"
)]
#[put("/exoplanets/{id}")]
pub async fn update_exoplanet(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ExoplanetRequestBody>,
) -> ApiResult<web::Json<ExoplanetResponseBody>> {
    let id = parse_exoplanet_id(&path, FieldName::new("id"))?;
    let draft = payload.into_inner().into_draft()?;
    let updated = state.exoplanets.update(id, draft).await?;
    Ok(web::Json(updated.into()))
}

/// Remove an exoplanet. Unknown identifiers succeed.
#[utoipa::path(
    delete,
    path = "/exoplanets/{id}",
    params(("id" = String, Path, description = "Exoplanet identifier")),
    responses(
        (status = 204, description = "Exoplanet removed"),
        (status = 404, description = "Malformed id or store failure", body = ErrorSchema)
    ),
    tags = ["exoplanets"],
    operation_id = "deleteExoplanet"
)]
#[delete("/exoplanets/{id}")]
pub async fn delete_exoplanet(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_existing_exoplanet_id(&path)?;
    state
        .exoplanets
        .delete(&id)
        .await
        .map_err(|err| err.with_code(ErrorCode::NotFound))?;
    Ok(HttpResponse::NoContent().finish())
}

/// Estimate the fuel needed to reach an exoplanet.
#[utoipa::path(
    get,
    path = "/exoplanets/{id}/fuel-estimation",
    params(
        ("id" = String, Path, description = "Exoplanet identifier"),
        FuelEstimationParams
    ),
    responses(
        (status = 200, description = "Fuel estimate", body = FuelEstimationResponseBody),
        (status = 400, description = "Invalid crew capacity", body = ErrorSchema),
        (status = 404, description = "Exoplanet not found", body = ErrorSchema)
    ),
    tags = ["exoplanets"],
    operation_id = "estimateFuel"
)]
#[get("/exoplanets/{id}/fuel-estimation")]
pub async fn estimate_fuel(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<FuelEstimationParams>,
) -> ApiResult<web::Json<FuelEstimationResponseBody>> {
    let crew = parse_crew_capacity(
        query.crew_capacity.as_deref(),
        FieldName::new("crew_capacity"),
    )?;
    let id = parse_existing_exoplanet_id(&path)?;
    let fuel = state.exoplanets_query.estimate_fuel(&id, crew).await?;
    Ok(web::Json(FuelEstimationResponseBody { fuel }))
}

#[cfg(test)]
#[path = "exoplanets_tests.rs"]
mod tests;
