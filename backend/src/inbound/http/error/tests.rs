//! Tests for HTTP error mapping.

use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use rstest::{fixture, rstest};
use serde_json::json;

use super::*;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

async fn decode_response(response: HttpResponse) -> Error {
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("Error JSON deserialisation succeeds")
}

#[rstest]
#[actix_web::test]
async fn error_response_echoes_trace_id(expected_trace_id: String) {
    let error = Error::internal("failed to insert exoplanet").with_trace_id(expected_trace_id.clone());

    let response = ResponseError::error_response(&error);

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace-id header is set")
        .to_str()
        .expect("header is ascii")
        .to_owned();
    assert_eq!(header, expected_trace_id);

    let payload = decode_response(response).await;
    assert_eq!(payload.message(), "failed to insert exoplanet");
    assert_eq!(payload.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
#[actix_web::test]
async fn error_without_trace_id_omits_header() {
    let error = Error::invalid_request("radius out of range").with_details(json!({"field": "radius"}));

    let response = ResponseError::error_response(&error);

    assert!(response.headers().get(TRACE_ID_HEADER).is_none());
    let payload = decode_response(response).await;
    assert_eq!(payload.code(), ErrorCode::InvalidRequest);
    assert_eq!(payload.message(), "radius out of range");
    assert_eq!(payload.details(), Some(&json!({"field": "radius"})));
}

#[rstest]
#[actix_web::test]
async fn json_errors_become_bad_requests() {
    let req = TestRequest::default().to_http_request();
    let err = json_error_handler(JsonPayloadError::ContentType, &req);

    let response = err.error_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = decode_response(response).await;
    assert_eq!(payload.code(), ErrorCode::InvalidRequest);
    assert_eq!(payload.message(), "invalid request body");
}

#[rstest]
#[actix_web::test]
async fn query_errors_become_bad_requests() {
    let req = TestRequest::default().to_http_request();
    let source = serde_urlencoded_error();
    let err = query_error_handler(QueryPayloadError::Deserialize(source), &req);

    let response = err.error_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = decode_response(response).await;
    assert_eq!(payload.message(), "invalid query string");
}

fn serde_urlencoded_error() -> serde::de::value::Error {
    serde::de::Error::custom("crew_capacity: invalid digit")
}
