//! Tests for exoplanet HTTP handlers against mocked driving ports.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{
    ExoplanetRepositoryError, MockExoplanetRepository, MockExoplanetsCommand, MockExoplanetsQuery,
};
use crate::domain::{Error, ExoplanetId, ExoplanetService};

fn planet(id: ExoplanetId, kind: &str, mass: f64) -> Exoplanet {
    Exoplanet::new(
        id,
        ExoplanetDraft {
            name: "TestPlanet".to_owned(),
            description: "handler fixture".to_owned(),
            distance: 300,
            radius: 2.0,
            mass,
            kind: kind.to_owned(),
        },
    )
    .expect("valid fixture")
}

fn body() -> Value {
    json!({
        "name": "TestPlanet",
        "description": "handler fixture",
        "distance": 300,
        "radius": 2.0,
        "mass": 4.0,
        "type": "Terrestrial"
    })
}

fn test_app(
    command: MockExoplanetsCommand,
    query: MockExoplanetsQuery,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::new(Arc::new(command), Arc::new(query));
    App::new()
        .app_data(web::Data::new(state))
        .configure(crate::inbound::http::configure_exoplanets)
}

async fn call(
    command: MockExoplanetsCommand,
    query: MockExoplanetsQuery,
    request: actix_test::TestRequest,
) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(command, query)).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let bytes = actix_test::read_body(response).await;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };
    (status, value)
}

#[actix_web::test]
async fn add_returns_created_record() {
    let mut command = MockExoplanetsCommand::new();
    command
        .expect_add()
        .withf(|draft| draft.kind == "Terrestrial" && draft.distance == 300 && draft.mass == 4.0)
        .times(1)
        .returning(|draft| Ok(Exoplanet::new(ExoplanetId::random(), draft).expect("valid")));

    let (status, value) = call(
        command,
        MockExoplanetsQuery::new(),
        actix_test::TestRequest::post()
            .uri("/exoplanets")
            .set_json(body()),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(value["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(value["type"], "Terrestrial");
    assert_eq!(value["mass"], 4.0);
}

#[actix_web::test]
async fn add_defaults_missing_mass_to_zero() {
    let mut command = MockExoplanetsCommand::new();
    command
        .expect_add()
        .withf(|draft| draft.mass == 0.0)
        .times(1)
        .returning(|draft| Ok(Exoplanet::new(ExoplanetId::random(), draft).expect("valid")));
    let mut payload = body();
    payload["type"] = json!("GasGiant");
    payload
        .as_object_mut()
        .expect("object body")
        .remove("mass");

    let (status, value) = call(
        command,
        MockExoplanetsQuery::new(),
        actix_test::TestRequest::post()
            .uri("/exoplanets")
            .set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(value.get("mass").is_none(), "zero mass is omitted: {value}");
}

#[rstest]
#[case("name")]
#[case("description")]
#[case("distance")]
#[case("radius")]
#[case("type")]
#[actix_web::test]
async fn add_rejects_missing_required_fields(#[case] field: &str) {
    let mut command = MockExoplanetsCommand::new();
    command.expect_add().never();
    let mut payload = body();
    payload
        .as_object_mut()
        .expect("object body")
        .remove(field);

    let (status, value) = call(
        command,
        MockExoplanetsQuery::new(),
        actix_test::TestRequest::post()
            .uri("/exoplanets")
            .set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["code"], "invalid_request");
    assert_eq!(value["details"]["field"], field);
}

#[rstest]
#[case(json!({"distance": 12.5}))]
#[case(json!({"radius": "large"}))]
#[case(json!("not an object"))]
#[actix_web::test]
async fn add_rejects_undecodable_bodies(#[case] patch: Value) {
    let mut command = MockExoplanetsCommand::new();
    command.expect_add().never();
    let payload = match patch {
        Value::Object(fields) => {
            let mut payload = body();
            for (key, value) in fields {
                payload[key] = value;
            }
            payload
        }
        other => other,
    };

    let (status, value) = call(
        command,
        MockExoplanetsQuery::new(),
        actix_test::TestRequest::post()
            .uri("/exoplanets")
            .set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["message"], "invalid request body");
}

#[actix_web::test]
async fn add_surfaces_validation_messages() {
    let mut command = MockExoplanetsCommand::new();
    command
        .expect_add()
        .times(1)
        .returning(|_| Err(Error::invalid_request("distance out of range")));

    let (status, value) = call(
        command,
        MockExoplanetsQuery::new(),
        actix_test::TestRequest::post()
            .uri("/exoplanets")
            .set_json(body()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["message"], "distance out of range");
}

#[actix_web::test]
async fn list_maps_store_failures_to_server_errors() {
    let mut query = MockExoplanetsQuery::new();
    query
        .expect_list()
        .times(1)
        .returning(|| Err(Error::internal("failed to list exoplanets")));

    let (status, value) = call(
        MockExoplanetsCommand::new(),
        query,
        actix_test::TestRequest::get().uri("/exoplanets"),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(value["message"], "failed to list exoplanets");
}

#[rstest]
#[case(ExoplanetRepositoryError::connection("pool timed out"))]
#[case(ExoplanetRepositoryError::query("relation does not exist"))]
#[actix_web::test]
async fn list_answers_500_for_any_store_failure(#[case] failure: ExoplanetRepositoryError) {
    let mut repo = MockExoplanetRepository::new();
    repo.expect_list().times(1).return_once(move || Err(failure));
    let service = Arc::new(ExoplanetService::new(Arc::new(repo)));
    let state = HttpState::new(service.clone(), service);
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(crate::inbound::http::configure_exoplanets),
    )
    .await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/exoplanets").to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(value["code"], "internal_error");
    assert_eq!(value["message"], "failed to list exoplanets");
}

#[actix_web::test]
async fn get_with_malformed_id_is_not_found() {
    let mut query = MockExoplanetsQuery::new();
    query.expect_get_by_id().never();

    let (status, value) = call(
        MockExoplanetsCommand::new(),
        query,
        actix_test::TestRequest::get().uri("/exoplanets/kepler-22b"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(value["code"], "not_found");
}

#[actix_web::test]
async fn update_uses_path_id_and_ignores_body_id() {
    let path_id = ExoplanetId::random();
    let mut command = MockExoplanetsCommand::new();
    command
        .expect_update()
        .withf(move |id, _| *id == path_id)
        .times(1)
        .returning(|id, draft| Ok(Exoplanet::new(id, draft).expect("valid")));
    let mut payload = body();
    payload["id"] = json!(ExoplanetId::random().to_string());

    let (status, value) = call(
        command,
        MockExoplanetsQuery::new(),
        actix_test::TestRequest::put()
            .uri(&format!("/exoplanets/{path_id}"))
            .set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["id"], path_id.to_string());
}

#[actix_web::test]
async fn update_with_malformed_id_is_bad_request() {
    let mut command = MockExoplanetsCommand::new();
    command.expect_update().never();

    let (status, value) = call(
        command,
        MockExoplanetsQuery::new(),
        actix_test::TestRequest::put()
            .uri("/exoplanets/not-a-uuid")
            .set_json(body()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["details"]["code"], "invalid_uuid");
}

#[rstest]
#[case(Error::internal("failed to delete exoplanet"))]
#[case(Error::invalid_request("failed to delete exoplanet"))]
#[actix_web::test]
async fn delete_maps_store_failures_to_not_found(#[case] failure: Error) {
    let mut command = MockExoplanetsCommand::new();
    command
        .expect_delete()
        .times(1)
        .return_once(move |_| Err(failure));

    let (status, value) = call(
        command,
        MockExoplanetsQuery::new(),
        actix_test::TestRequest::delete().uri(&format!("/exoplanets/{}", ExoplanetId::random())),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(value["message"], "failed to delete exoplanet");
}

#[actix_web::test]
async fn delete_returns_no_content() {
    let mut command = MockExoplanetsCommand::new();
    command.expect_delete().times(1).returning(|_| Ok(()));

    let (status, value) = call(
        command,
        MockExoplanetsQuery::new(),
        actix_test::TestRequest::delete().uri(&format!("/exoplanets/{}", ExoplanetId::random())),
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(value, Value::Null);
}

#[actix_web::test]
async fn fuel_estimation_returns_fuel() {
    let id = ExoplanetId::random();
    let mut query = MockExoplanetsQuery::new();
    query
        .expect_estimate_fuel()
        .withf(move |requested, crew| *requested == id && crew.get() == 10)
        .times(1)
        .returning(|_, _| Ok(3000.0));

    let (status, value) = call(
        MockExoplanetsCommand::new(),
        query,
        actix_test::TestRequest::get()
            .uri(&format!("/exoplanets/{id}/fuel-estimation?crew_capacity=10")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value, json!({"fuel": 3000.0}));
}

#[rstest]
#[case("?crew_capacity=0")]
#[case("?crew_capacity=-1")]
#[case("?crew_capacity=abc")]
#[case("?crew_capacity=1.5")]
#[case("")]
#[actix_web::test]
async fn fuel_estimation_rejects_bad_crew_before_the_service(#[case] query_string: &str) {
    let mut query = MockExoplanetsQuery::new();
    query.expect_estimate_fuel().never();

    let (status, value) = call(
        MockExoplanetsCommand::new(),
        query,
        actix_test::TestRequest::get().uri(&format!(
            "/exoplanets/{}/fuel-estimation{query_string}",
            ExoplanetId::random()
        )),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["code"], "invalid_request");
}

#[actix_web::test]
async fn fuel_estimation_checks_crew_before_id() {
    let (status, _) = call(
        MockExoplanetsCommand::new(),
        MockExoplanetsQuery::new(),
        actix_test::TestRequest::get().uri("/exoplanets/nope/fuel-estimation?crew_capacity=0"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn fuel_estimation_reports_missing_records() {
    let mut query = MockExoplanetsQuery::new();
    query
        .expect_estimate_fuel()
        .times(1)
        .returning(|id, _| Err(Error::not_found(format!("exoplanet {id} not found"))));

    let (status, _) = call(
        MockExoplanetsCommand::new(),
        query,
        actix_test::TestRequest::get().uri(&format!(
            "/exoplanets/{}/fuel-estimation?crew_capacity=3",
            ExoplanetId::random()
        )),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
fn response_body_omits_zero_mass_only() {
    let gas_giant = serde_json::to_value(ExoplanetResponseBody::from(planet(
        ExoplanetId::random(),
        "GasGiant",
        0.0,
    )))
    .expect("serialise");
    assert!(gas_giant.get("mass").is_none());

    let rocky = serde_json::to_value(ExoplanetResponseBody::from(planet(
        ExoplanetId::random(),
        "Terrestrial",
        4.0,
    )))
    .expect("serialise");
    assert_eq!(rocky["mass"], 4.0);
}

