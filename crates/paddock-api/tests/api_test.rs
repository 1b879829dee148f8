//! Router tests against an in-memory prediction service

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use paddock_api::{create_router, AppState};
use paddock_core::models::{
    Driver, PredictionRequest, PredictionResult, RaceDescriptor, RaceId,
};
use paddock_core::ports::PredictionService;
use paddock_core::{PaddockError, Result};
use paddock_geo::CoordinateResolver;
use serde_json::{json, Value};
use tower::ServiceExt;

struct StubService;

fn race(id: i64, name: &str, circuit: &str, location: &str, country: &str) -> RaceDescriptor {
    RaceDescriptor {
        race_id: RaceId(id),
        label: format!("Round {} - {}", id, name),
        name: name.to_string(),
        circuit: circuit.to_string(),
        location: location.to_string(),
        country: country.to_string(),
        round: id as u32,
        year: 2025,
        date: "2025-05-25".to_string(),
    }
}

fn driver(driver_ref: &str, name: &str, races: u32, wins: u32) -> Driver {
    Driver {
        driver_ref: driver_ref.to_string(),
        driver_name: name.to_string(),
        total_races: races,
        predicted_wins: wins,
        current_team: None,
    }
}

fn prediction(race_id: RaceId, race_name: &str) -> PredictionResult {
    PredictionResult {
        race_name: race_name.to_string(),
        race_id,
        predicted_winner: "Lando Norris".to_string(),
        predicted_winner_team: "McLaren".to_string(),
        top_3: Vec::new(),
        full_predictions: Vec::new(),
        confidence: 0.61,
        race_date: None,
        circuit_name: None,
        round: None,
        location: None,
        country: None,
    }
}

#[async_trait]
impl PredictionService for StubService {
    async fn list_races(&self, year: i32) -> Result<Vec<RaceDescriptor>> {
        if year != 2025 {
            return Ok(Vec::new());
        }
        Ok(vec![
            race(1, "Monaco Grand Prix", "Monaco", "Monte-Carlo", "Monaco"),
            race(2, "Japanese Grand Prix", "Suzuka Circuit", "Suzuka", "Japan"),
            race(3, "Las Vegas Grand Prix", "Las Vegas Strip", "Las Vegas", "USA"),
        ])
    }

    async fn list_drivers(&self) -> Result<Vec<Driver>> {
        Ok(vec![
            driver("alonso", "Fernando Alonso", 400, 2),
            driver("max_verstappen", "Max Verstappen", 200, 12),
            driver("norris", "Lando Norris", 130, 7),
        ])
    }

    async fn predict_race(&self, race_id: RaceId) -> Result<PredictionResult> {
        match race_id.0 {
            1 => Ok(prediction(race_id, "Monaco Grand Prix")),
            500 => Err(PaddockError::Upstream {
                status: 500,
                detail: "Failed to get prediction".to_string(),
            }),
            id => Err(PaddockError::RaceNotFound { race_id: id }),
        }
    }

    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult> {
        let name = request.race_name.clone().unwrap_or_default();
        Ok(prediction(request.race_id.unwrap_or(RaceId(0)), &name))
    }
}

fn app() -> Router {
    let state = AppState::new(Arc::new(StubService), CoordinateResolver::default(), 2025, 12.0);
    create_router(Arc::new(state))
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(request).await
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, body)
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "paddock-api");
}

#[tokio::test]
async fn test_races_carry_resolution() {
    let (status, body) = get("/api/v1/races").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["year"], 2025);

    let races = body["races"].as_array().unwrap();
    assert_eq!(races.len(), 3);
    assert_eq!(races[0]["raceId"], 1);
    assert_eq!(races[0]["tier"], "circuit");
    assert_eq!(races[1]["tier"], "country");
    assert_eq!(races[2]["tier"], "default");
    assert_eq!(races[2]["coordinate"], json!({"lat": 20.0, "lng": 0.0}));
}

#[tokio::test]
async fn test_viewport_overview_and_focus() {
    let (_, overview) = get("/api/v1/viewport").await;
    assert_eq!(overview["mode"], "overview");
    assert_eq!(overview["target"]["zoom"], 2);
    assert_eq!(overview["initial"]["center"], json!({"lat": 43.7347, "lng": 7.4206}));

    let (_, focused) = get("/api/v1/viewport?selected=2").await;
    assert_eq!(focused["mode"], "focused");
    assert_eq!(focused["target"]["zoom"], 6);
    assert_eq!(focused["target"]["center"], json!({"lat": 34.8431, "lng": 136.5412}));

    let (_, stale) = get("/api/v1/viewport?selected=99").await;
    assert_eq!(stale["target"], overview["target"]);
}

#[tokio::test]
async fn test_viewport_empty_season() {
    let (status, body) = get("/api/v1/viewport?year=1950").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["target"].is_null());
    assert_eq!(body["initial"]["center"], json!({"lat": 20.0, "lng": 0.0}));
}

#[tokio::test]
async fn test_markers_geojson() {
    let (status, body) = get("/api/v1/markers?selected=1&base_size=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "FeatureCollection");

    let features = body["features"].as_array().unwrap();
    assert_eq!(features.len(), 3);
    assert_eq!(features[0]["properties"]["selected"], true);
    assert_eq!(features[0]["properties"]["radius"], 15.0);
    assert_eq!(features[1]["properties"]["radius"], 10.0);
    assert_eq!(body["bbox"].as_array().unwrap().len(), 4);

    let (status, _) = get("/api/v1/markers?base_size=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_resolve_venue() {
    let (status, body) =
        get("/api/v1/venues/resolve?circuit=Miami%20International&location=Miami&country=USA").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tier"], "location");
    assert_eq!(body["precise"], true);
    assert_eq!(body["coordinate"]["lat"], 25.9581);

    let (_, body) = get("/api/v1/venues/resolve").await;
    assert_eq!(body["tier"], "default");
    assert_eq!(body["precise"], false);
}

#[tokio::test]
async fn test_drivers_search_and_sort() {
    let (_, body) = get("/api/v1/drivers").await;
    assert_eq!(body["total"], 3);
    assert_eq!(body["drivers"][0]["driverRef"], "max_verstappen");

    let (_, body) = get("/api/v1/drivers?sort=races").await;
    assert_eq!(body["drivers"][0]["driverRef"], "alonso");

    let (_, body) = get("/api/v1/drivers?search=NOR&sort=name").await;
    assert_eq!(body["drivers"].as_array().unwrap().len(), 1);
    assert_eq!(body["total"], 3);

    let (status, _) = get("/api/v1/drivers?sort=podiums").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_predict_by_id() {
    let (status, body) = get("/api/v1/predict/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["predicted_winner"], "Lando Norris");

    let (status, body) = get("/api/v1/predict/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Race not found: 42");

    let (status, body) = get("/api/v1/predict/500").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Failed to get prediction");
}

#[tokio::test]
async fn test_predict_by_search() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"race_name": "Imola Grand Prix"}).to_string()))
        .unwrap();
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["race_name"], "Imola Grand Prix");

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"race_name": "  "}).to_string()))
        .unwrap();
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please enter a race name or select a race");
}
