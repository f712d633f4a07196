//! Weather proxy integration tests
//!
//! Drives the full router against a stubbed upstream:
//! - Coordinate presence validation
//! - Upstream status pass-through
//! - Pure-rename normalization
//! - Health independent of upstream

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use proptest::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;
use weather_proxy::{create_app, AppState, Config};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CURRENT_FIELDS: &str =
    "temperature_2m,apparent_temperature,relative_humidity_2m,wind_speed_10m,weather_code";

fn app_for(upstream: &str) -> Router {
    create_app(AppState::new(Config::with_upstream(upstream)))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// Open-Meteo shaped body
fn forecast_body(temperature: f64, apparent: f64, humidity: f64, wind: f64, code: i32) -> Value {
    json!({
        "latitude": 40.710335,
        "longitude": -73.99307,
        "generationtime_ms": 0.04,
        "utc_offset_seconds": -14400,
        "timezone": "America/New_York",
        "current_units": {
            "time": "iso8601",
            "interval": "seconds",
            "temperature_2m": "°C",
            "apparent_temperature": "°C",
            "relative_humidity_2m": "%",
            "wind_speed_10m": "km/h",
            "weather_code": "wmo code"
        },
        "current": {
            "time": "2024-06-01T14:15",
            "interval": 900,
            "temperature_2m": temperature,
            "apparent_temperature": apparent,
            "relative_humidity_2m": humidity,
            "wind_speed_10m": wind,
            "weather_code": code
        }
    })
}

async fn stub_forecast(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(template)
        .mount(server)
        .await;
}

// ============================================================================
// Unit Tests
// ============================================================================

#[tokio::test]
async fn test_new_york_example() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "40.7128"))
        .and(query_param("longitude", "-74.006"))
        .and(query_param("current", CURRENT_FIELDS))
        .and(query_param("timezone", "auto"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(forecast_body(21.3, 20.1, 65.0, 11.2, 3)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get_json(app_for(&server.uri()), "/weather?lat=40.7128&lon=-74.006").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "temperature": 21.3,
            "apparentTemperature": 20.1,
            "humidity": 65.0,
            "wind": 11.2,
            "code": 3,
            "time": "2024-06-01T14:15",
            "units": {
                "temperature": "°C",
                "humidity": "%",
                "wind": "km/h"
            }
        })
    );
}

#[tokio::test]
async fn test_trailing_slash_on_upstream_base() {
    let server = MockServer::start().await;
    stub_forecast(
        &server,
        ResponseTemplate::new(200).set_body_json(forecast_body(5.0, 2.5, 80.0, 20.0, 61)),
    )
    .await;

    let base = format!("{}/", server.uri());
    let (status, body) = get_json(app_for(&base), "/weather?lat=51.5&lon=-0.12").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], json!(61));
}

#[tokio::test]
async fn test_missing_params_rejected() {
    let server = MockServer::start().await;
    // Validation failures must not reach upstream
    stub_forecast(&server, ResponseTemplate::new(200)).await;

    for uri in [
        "/weather",
        "/weather?lat=40.7",
        "/weather?lon=-74.0",
        "/weather?lat=&lon=-74.0",
        "/weather?lat=40.7&lon=",
    ] {
        let (status, body) = get_json(app_for(&server.uri()), uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(
            body,
            json!({ "error": "lat and lon are required query params" }),
            "{}",
            uri
        );
    }

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_non_numeric_coordinates_forwarded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "north"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": true,
            "reason": "Latitude must be in range of -90 to 90°."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get_json(app_for(&server.uri()), "/weather?lat=north&lon=10").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Upstream error: 400" }));
}

#[tokio::test]
async fn test_upstream_server_error_passes_through() {
    let server = MockServer::start().await;
    stub_forecast(&server, ResponseTemplate::new(503)).await;

    let (status, body) = get_json(app_for(&server.uri()), "/weather?lat=1&lon=2").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({ "error": "Upstream error: 503" }));
}

#[tokio::test]
async fn test_malformed_upstream_body_is_server_error() {
    let server = MockServer::start().await;
    stub_forecast(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({ "current": { "time": "x" } })),
    )
    .await;

    let (status, body) = get_json(app_for(&server.uri()), "/weather?lat=1&lon=2").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Server error" }));
}

#[tokio::test]
async fn test_non_json_upstream_body_is_server_error() {
    let server = MockServer::start().await;
    stub_forecast(
        &server,
        ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"),
    )
    .await;

    let (status, body) = get_json(app_for(&server.uri()), "/weather?lat=1&lon=2").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Server error" }));
}

#[tokio::test]
async fn test_unreachable_upstream_is_server_error() {
    let (status, body) = get_json(app_for("http://127.0.0.1:9"), "/weather?lat=1&lon=2").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Server error" }));
}

#[tokio::test]
async fn test_health_ignores_unreachable_upstream() {
    let (status, body) = get_json(app_for("http://127.0.0.1:9"), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_repeated_param_uses_first_value() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "1"))
        .and(query_param("longitude", "3"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(forecast_body(9.0, 8.0, 70.0, 4.0, 2)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get_json(app_for(&server.uri()), "/weather?lat=1&lat=2&lon=3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["temperature"], json!(9.0));
    assert_eq!(body["code"], json!(2));
}

#[tokio::test]
async fn test_repeated_empty_params_rejected_as_json() {
    let server = MockServer::start().await;
    stub_forecast(&server, ResponseTemplate::new(200)).await;

    let (status, body) = get_json(app_for(&server.uri()), "/weather?lat=&lat=&lon=3&lon=4").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "lat and lon are required query params" }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_null_upstream_values_pass_through() {
    let server = MockServer::start().await;

    let mut upstream = forecast_body(21.3, 20.1, 65.0, 11.2, 3);
    upstream["current"]["apparent_temperature"] = Value::Null;
    upstream["current"]["weather_code"] = Value::Null;
    stub_forecast(&server, ResponseTemplate::new(200).set_body_json(upstream)).await;

    let (status, body) = get_json(app_for(&server.uri()), "/weather?lat=1&lon=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["temperature"], json!(21.3));
    assert_eq!(body["apparentTemperature"], Value::Null);
    assert_eq!(body["code"], Value::Null);
    // Keys stay present rather than being dropped
    assert!(body.as_object().unwrap().contains_key("apparentTemperature"));
}

#[tokio::test]
async fn test_upstream_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let (status, _) = get_json(app_for(&server.uri()), "/weather?lat=1&lon=2").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

// ============================================================================
// Property Tests
// ============================================================================

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

fn upstream_status_strategy() -> impl Strategy<Value = u16> {
    prop::sample::select(vec![
        400u16, 401, 403, 404, 405, 409, 418, 422, 429, 500, 501, 502, 503, 504,
    ])
}

/// Tenths keep decimal literals exact through JSON
fn tenths_strategy(range: std::ops::Range<i32>) -> impl Strategy<Value = f64> {
    range.prop_map(|t| t as f64 / 10.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Upstream failures keep their status code
    #[test]
    fn prop_upstream_status_passes_through(status in upstream_status_strategy()) {
        let (actual, body) = runtime().block_on(async {
            let server = MockServer::start().await;
            stub_forecast(&server, ResponseTemplate::new(status)).await;
            get_json(app_for(&server.uri()), "/weather?lat=10&lon=20").await
        });

        prop_assert_eq!(actual.as_u16(), status);
        prop_assert_eq!(body, json!({ "error": format!("Upstream error: {}", status) }));
    }

    /// Every output field equals its upstream counterpart
    #[test]
    fn prop_output_is_pure_rename(
        temperature in tenths_strategy(-600..600),
        apparent in tenths_strategy(-700..700),
        humidity in tenths_strategy(0..1001),
        wind in tenths_strategy(0..2000),
        code in 0i32..100,
    ) {
        let (status, body) = runtime().block_on(async {
            let server = MockServer::start().await;
            stub_forecast(
                &server,
                ResponseTemplate::new(200)
                    .set_body_json(forecast_body(temperature, apparent, humidity, wind, code)),
            )
            .await;
            get_json(app_for(&server.uri()), "/weather?lat=10&lon=20").await
        });

        prop_assert_eq!(status, StatusCode::OK);
        prop_assert_eq!(body["temperature"].as_f64(), Some(temperature));
        prop_assert_eq!(body["apparentTemperature"].as_f64(), Some(apparent));
        prop_assert_eq!(body["humidity"].as_f64(), Some(humidity));
        prop_assert_eq!(body["wind"].as_f64(), Some(wind));
        prop_assert_eq!(body["code"].as_i64(), Some(code as i64));
    }
}
