//! Exercises the HTTP adapter against a stub prediction service on a local port

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use paddock_client::HttpPredictionService;
use paddock_core::models::{PredictionQuery, PredictionRequest, RaceId};
use paddock_core::ports::PredictionService;
use paddock_core::PaddockError;
use serde_json::{json, Value};
use std::collections::HashMap;

fn prediction(race_id: i64, race_name: &str) -> Value {
    json!({
        "race_name": race_name,
        "race_id": race_id,
        "predicted_winner": "Max Verstappen",
        "predicted_winner_team": "Red Bull",
        "top_3": [
            {"driver": "Max Verstappen", "team": "Red Bull", "position": 1},
            {"driver": "Lando Norris", "team": "McLaren", "position": "P2"},
            {"driver": "Charles Leclerc", "team": "Ferrari", "position": 3}
        ],
        "full_predictions": [],
        "confidence": 0.734
    })
}

async fn races(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let year: i32 = params.get("year").and_then(|y| y.parse().ok()).unwrap_or(0);
    if year != 2025 {
        return Json(json!({}));
    }
    Json(json!({
        "races": [
            {"raceId": 1, "label": "Round 1 - Bahrain Grand Prix", "name": "Bahrain Grand Prix",
             "circuit": "Bahrain", "location": "Sakhir", "country": "Bahrain",
             "round": 1, "year": 2025, "date": "2025-04-13"},
            {"raceId": 8, "name": "Monaco Grand Prix", "circuit": "Monaco",
             "country": "Monaco", "round": 8, "year": 2025, "date": "2025-05-25"}
        ]
    }))
}

async fn predict_race(Path(race_id): Path<i64>) -> (StatusCode, Json<Value>) {
    match race_id {
        8 => (StatusCode::OK, Json(prediction(8, "Monaco Grand Prix"))),
        _ => (StatusCode::NOT_FOUND, Json(json!({"detail": "Race not found"}))),
    }
}

async fn predict(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    match body.get("race_name").and_then(Value::as_str) {
        Some(name) if !name.is_empty() => (StatusCode::OK, Json(prediction(0, name))),
        _ => (StatusCode::BAD_REQUEST, Json(json!({"detail": "race_name is required"}))),
    }
}

async fn spawn_stub() -> String {
    let app = Router::new()
        .route("/races", get(races))
        .route("/drivers", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }))
        .route("/predict/{race_id}", get(predict_race))
        .route("/predict", post(predict));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_list_races() {
    let service = HttpPredictionService::new(spawn_stub().await);

    let races = service.list_races(2025).await.unwrap();
    assert_eq!(races.len(), 2);
    assert_eq!(races[1].race_id, RaceId(8));
    assert_eq!(races[1].label, "");
    assert_eq!(races[1].location, "");

    // Missing envelope key is an empty schedule, not an error
    assert!(service.list_races(1950).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_predict_by_id() {
    let service = HttpPredictionService::new(spawn_stub().await);

    let result = service.run_query(&PredictionQuery::ById(RaceId(8))).await.unwrap();
    assert_eq!(result.race_name, "Monaco Grand Prix");
    assert_eq!(result.top_3.len(), 3);
    assert_eq!(result.top_3[1].position.to_string(), "P2");
    assert_eq!(result.confidence_percent(), 73);

    let err = service.predict_race(RaceId(404)).await.unwrap_err();
    assert!(matches!(err, PaddockError::RaceNotFound { race_id: 404 }));
}

#[tokio::test]
async fn test_predict_by_search() {
    let service = HttpPredictionService::new(spawn_stub().await);

    let request = PredictionRequest {
        race_name: Some("Imola Grand Prix".to_string()),
        ..Default::default()
    };
    let result = service.predict(&request).await.unwrap();
    assert_eq!(result.race_name, "Imola Grand Prix");

    let err = service.predict(&PredictionRequest::default()).await.unwrap_err();
    match err {
        PaddockError::Upstream { status, detail } => {
            assert_eq!(status, 400);
            assert_eq!(detail, "race_name is required");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_without_detail() {
    let service = HttpPredictionService::new(spawn_stub().await);

    let err = service.list_drivers().await.unwrap_err();
    assert!(
        matches!(&err, PaddockError::Upstream { status: 500, detail } if detail == "Failed to get prediction")
    );
}
