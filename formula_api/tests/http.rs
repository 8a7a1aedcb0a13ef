//! End-to-end tests against a live server on an ephemeral port.

use formula_api::{app, AppState};
use formula_core::ExplanationStore;
use serde_json::{json, Value};
use tokio::net::TcpListener;

async fn spawn_server(echo_inputs: bool) -> String {
    let state = AppState::new(ExplanationStore::bundled().unwrap(), echo_inputs);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app(state)).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn get(url: String) -> (u16, Value) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

async fn post(url: String, body: Value) -> (u16, Value) {
    let response = reqwest::Client::new().post(url).json(&body).send().await.unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn health_reports_formula_count() {
    let base = spawn_server(false).await;
    let (status, body) = get(format!("{}/health", base)).await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
    assert!(body["formulas"].as_u64().unwrap() >= 100);
}

#[tokio::test]
async fn list_formulas_includes_params() {
    let base = spawn_server(false).await;
    let (status, body) = get(format!("{}/formulas", base)).await;
    assert_eq!(status, 200);
    let formulas = body.as_array().unwrap();
    let centripetal = formulas
        .iter()
        .find(|f| f["id"] == "centripetal-acceleration")
        .unwrap();
    assert_eq!(centripetal["subject"], "mechanics");
    assert_eq!(centripetal["params"][1]["key"], "r");
}

#[tokio::test]
async fn evaluate_with_query_parameters() {
    let base = spawn_server(false).await;
    let (status, body) = get(format!("{}/formulas/centripetal-acceleration?v=10&r=5", base)).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({"result": 20.0}));
}

#[tokio::test]
async fn evaluate_with_json_body() {
    let base = spawn_server(false).await;
    let (status, body) = post(
        format!("{}/formulas/photoelectric-effect", base),
        json!({"photonEnergy": 2, "phi": 5}),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["result"], 0.0);
}

#[tokio::test]
async fn validation_failure_is_bad_request() {
    let base = spawn_server(false).await;
    let (status, body) = post(
        format!("{}/formulas/centripetal-acceleration", base),
        json!({"v": 5, "r": 0}),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Radius (r) cannot be zero.");
    assert_eq!(body["code"], "MUST_BE_NON_ZERO");
    assert_eq!(body["kind"], "domain_violation");
}

#[tokio::test]
async fn light_speed_limits() {
    let base = spawn_server(false).await;
    let (status, body) = get(format!("{}/formulas/lorentz-factor?v=299792458&c=299792458", base)).await;
    assert_eq!(status, 200);
    assert_eq!(body["result"], "Infinity");

    let (status, body) = get(format!("{}/formulas/lorentz-factor?v=3e8", base)).await;
    assert_eq!(status, 400);
    assert!(body["error"].as_str().unwrap().contains("speed of light"));
}

#[tokio::test]
async fn rydberg_same_level_rejected() {
    let base = spawn_server(false).await;
    let (status, body) = post(
        format!("{}/formulas/rydberg-formula", base),
        json!({"nInitial": 2, "nFinal": 2}),
    )
    .await;
    assert_eq!(status, 400);
    assert!(body["error"].as_str().unwrap().contains("must differ"));
}

#[tokio::test]
async fn unknown_formula_is_not_found() {
    let base = spawn_server(false).await;
    let (status, body) = get(format!("{}/formulas/perpetual-motion", base)).await;
    assert_eq!(status, 404);
    assert_eq!(body["code"], "UNKNOWN_FORMULA");
}

#[tokio::test]
async fn malformed_body_rejected() {
    let base = spawn_server(false).await;
    let response = reqwest::Client::new()
        .post(format!("{}/formulas/weight", base))
        .body("{ not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "MALFORMED_PAYLOAD");
}

#[tokio::test]
async fn empty_body_treated_as_empty_object() {
    let base = spawn_server(false).await;
    let response = reqwest::Client::new()
        .post(format!("{}/formulas/weight", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "MISSING_PARAMETER");
}

#[tokio::test]
async fn digits_and_echo() {
    let base = spawn_server(true).await;
    let (status, body) = get(format!("{}/formulas/kinetic-energy?m=1&v=1.23456&digits=2", base)).await;
    assert_eq!(status, 200);
    assert_eq!(body["result"], 0.76);
    assert_eq!(body["inputs"]["m"], 1.0);

    let (status, body) = get(format!("{}/formulas/kinetic-energy?m=1&v=1&digits=40", base)).await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], "INVALID_PRECISION");
}

#[tokio::test]
async fn explanations_lookup() {
    let base = spawn_server(false).await;

    let (status, body) = get(format!("{}/explanations/es/mechanics/kinetic-energy", base)).await;
    assert_eq!(status, 200);
    assert_eq!(body["name"], "Energía cinética");
    assert_eq!(body["language_code"], "es");

    let (status, body) = get(format!("{}/explanations/en/quantum/kinetic-energy", base)).await;
    assert_eq!(status, 404);
    assert_eq!(body["code"], "EXPLANATION_NOT_FOUND");

    let (status, body) = get(format!("{}/explanations/fr", base)).await;
    assert_eq!(status, 200);
    assert!(!body.as_array().unwrap().is_empty());

    let (status, body) = get(format!("{}/explanations/xx", base)).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!([]));
}
