//! End-to-end tests for the production plan endpoint: real router,
//! real JSON payloads, no network.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use production_planner::api::{self, AppState};
use production_planner::config::{Config, DispatchConfig, ServerConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_secs: 5,
        },
        dispatch: DispatchConfig {
            charge_turbojet_co2: false,
        },
    }
}

fn app() -> Router {
    let cfg = test_config();
    api::router(AppState::new(&cfg), &cfg)
}

async fn post_production_plan(body: Value) -> (StatusCode, Value) {
    let response = app()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/productionplan")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

fn example_payload(load: f64, wind_percent: f64) -> Value {
    json!({
        "load": load,
        "fuels": {
            "gas(euro/MWh)": 13.4,
            "kerosine(euro/MWh)": 50.8,
            "co2(euro/ton)": 20.0,
            "wind(%)": wind_percent,
        },
        "powerplants": [
            {"name": "gasfiredbig1", "type": "gasfired", "efficiency": 0.53, "pmin": 100, "pmax": 460},
            {"name": "gasfiredbig2", "type": "gasfired", "efficiency": 0.53, "pmin": 100, "pmax": 460},
            {"name": "gasfiredsomewhatsmaller", "type": "gasfired", "efficiency": 0.37, "pmin": 40, "pmax": 210},
            {"name": "tj1", "type": "turbojet", "efficiency": 0.3, "pmin": 0, "pmax": 16},
            {"name": "windpark1", "type": "windturbine", "efficiency": 1, "pmin": 0, "pmax": 150},
            {"name": "windpark2", "type": "windturbine", "efficiency": 1, "pmin": 0, "pmax": 36},
        ],
    })
}

#[tokio::test]
async fn healthz_is_ok() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn full_fleet_plan_sums_to_load_in_request_order() {
    let (status, body) = post_production_plan(example_payload(910.0, 60.0)).await;
    assert_eq!(status, StatusCode::OK);

    let outputs = body.as_array().unwrap();
    let names: Vec<&str> = outputs
        .iter()
        .map(|o| o["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "gasfiredbig1",
            "gasfiredbig2",
            "gasfiredsomewhatsmaller",
            "tj1",
            "windpark1",
            "windpark2",
        ]
    );

    let powers: Vec<f64> = outputs.iter().map(|o| o["p"].as_f64().unwrap()).collect();
    assert_eq!(powers, vec![460.0, 338.4, 0.0, 0.0, 90.0, 21.6]);

    let total: f64 = powers.iter().sum();
    assert!((total - 910.0).abs() < 0.05);
}

#[tokio::test]
async fn wind_scaled_by_percentage() {
    let (status, body) = post_production_plan(example_payload(910.0, 60.0)).await;
    assert_eq!(status, StatusCode::OK);
    let outputs = body.as_array().unwrap();
    assert_eq!(outputs[4]["p"], 90.0); // 60% of 150
    assert_eq!(outputs[5]["p"], 21.6); // 60% of 36
}

#[tokio::test]
async fn zero_load_is_rejected_with_validation_error() {
    let (status, body) = post_production_plan(example_payload(0.0, 60.0)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "ValidationError");
    let details = body["details"].as_array().unwrap();
    assert!(details.iter().any(|v| v["field"] == "load"));
}

#[tokio::test]
async fn load_above_capacity_is_unprocessable() {
    let (status, body) = post_production_plan(example_payload(10000.0, 60.0)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "InfeasibleLoad");
}

#[tokio::test]
async fn unknown_plant_type_is_bad_request() {
    let payload = json!({
        "load": 100.0,
        "fuels": {
            "gas(euro/MWh)": 13.4,
            "kerosine(euro/MWh)": 50.8,
            "co2(euro/ton)": 20.0,
            "wind(%)": 0.0,
        },
        "powerplants": [
            {"name": "c1", "type": "coalfired", "efficiency": 0.5, "pmin": 0, "pmax": 100},
        ],
    });
    let (status, body) = post_production_plan(payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadRequest");
}

#[tokio::test]
async fn missing_field_is_bad_request() {
    let payload = json!({
        "load": 100.0,
        "powerplants": [],
    });
    let (status, body) = post_production_plan(payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadRequest");
}

#[tokio::test]
async fn invalid_efficiency_reports_field() {
    let payload = json!({
        "load": 100.0,
        "fuels": {
            "gas(euro/MWh)": 13.4,
            "kerosine(euro/MWh)": 50.8,
            "co2(euro/ton)": 20.0,
            "wind(%)": 0.0,
        },
        "powerplants": [
            {"name": "g1", "type": "gasfired", "efficiency": 0.0, "pmin": 0, "pmax": 100},
        ],
    });
    let (status, body) = post_production_plan(payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "ValidationError");
    let details = body["details"].as_array().unwrap();
    assert!(details
        .iter()
        .any(|v| v["field"] == "powerplants[0].efficiency"));
}

#[tokio::test]
async fn identical_requests_get_identical_plans() {
    let (_, first) = post_production_plan(example_payload(480.0, 60.0)).await;
    let (_, second) = post_production_plan(example_payload(480.0, 60.0)).await;
    assert_eq!(first, second);
}
