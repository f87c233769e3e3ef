//! Router tests driven through `tower::ServiceExt::oneshot`.

#![cfg(feature = "http-server")]

mod support;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use second_earth::http::{create_router, AppState};
use support::DataDir;

fn app(data: &DataDir) -> Router {
    create_router(AppState::new(data.config()))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>, Option<String>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec(), content_type)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body, _) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn health_reports_data_files() {
    let data = DataDir::with_files(Some(support::SELECTED_CSV), None);
    let (status, json) = get_json(app(&data), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert!(json["selected_data"].as_str().unwrap().starts_with("found"));
    assert_eq!(json["raw_data"], "missing");
}

#[tokio::test]
async fn catalog_with_query() {
    let data = DataDir::new();
    let (status, json) = get_json(app(&data), "/v1/planets?hospitable=true&sort=pl_eqt").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ready");
    let names: Vec<&str> = json["data"]["planets"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["pl_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Quoted, b", "TOI-1266 c", "K2-3 c"]);
    assert_eq!(json["data"]["total_count"], 5);
}

#[tokio::test]
async fn planet_detail_with_encoded_name() {
    let data = DataDir::new();
    let (status, json) = get_json(app(&data), "/v1/planets/TOI-1266%20c").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["planet"]["hostname"], "TOI-1266");
    assert_eq!(json["data"]["planet"]["metrics"]["pl_eqt"]["median"], 290.0);

    let (status, json) = get_json(app(&data), "/v1/planets/Vulcan").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "unavailable");
}

#[tokio::test]
async fn missing_file_is_unavailable_not_error() {
    let data = DataDir::with_files(None, None);
    let (status, json) = get_json(app(&data), "/v1/similarity").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "unavailable");
    assert!(json["reason"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn similarity_ranking() {
    let data = DataDir::new();
    let (status, json) = get_json(app(&data), "/v1/similarity").await;
    assert_eq!(status, StatusCode::OK);
    let planets = json["data"]["planets"].as_array().unwrap();
    assert_eq!(planets.len(), 4);
    assert_eq!(planets[0]["name"], "Quoted, b");
    assert_eq!(planets[0]["score"], 0.0);
    assert_eq!(planets[0]["axes"].as_array().unwrap().len(), 6);
    assert_eq!(planets[3]["ring"], 5);
}

#[tokio::test]
async fn density_bins_are_validated() {
    let data = DataDir::new();
    let (status, json) = get_json(app(&data), "/v1/density?bins=12").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["histogram"]["bins"].as_array().unwrap().len(), 12);
    assert!(json["data"]["histogram"]["bins"][0]["binStart"].as_f64().is_some());

    let (status, json) = get_json(app(&data), "/v1/density?bins=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");

    let (status, _) = get_json(app(&data), "/v1/density?bins=500").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn seeded_synthetic_cohorts_are_reproducible() {
    let data = DataDir::new();
    let uri = "/v1/planets/K2-3%20c/synthetic?count=4&seed=99";
    let (status, first) = get_json(app(&data), uri).await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = get_json(app(&data), uri).await;
    assert_eq!(first, second);

    let planets = first["data"]["planets"].as_array().unwrap();
    assert_eq!(planets.len(), 4);
    assert_eq!(planets[3]["id"], "K2-3 c#4");
    let radius = planets[0]["pl_rade"].as_f64().unwrap();
    assert!((0.0..=5.0).contains(&radius));

    let (status, _) = get_json(app(&data), "/v1/planets/K2-3%20c/synthetic?count=1001").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn synthetic_csv_download() {
    let data = DataDir::new();
    let (status, body, content_type) =
        get(app(&data), "/v1/planets/GJ%20367%20b/synthetic.csv?count=3&seed=1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/csv"));

    let text = String::from_utf8(body).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("id,source,index,pl_rade"));
    assert!(lines[1].starts_with("GJ 367 b#1,GJ 367 b,1,"));

    let (status, json) = get_json(app(&data), "/v1/planets/Vulcan/synthetic.csv").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn orbit_data_endpoint() {
    let data = DataDir::new();
    let (status, json) = get_json(app(&data), "/api/data").await;
    assert_eq!(status, StatusCode::OK);
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["name"], "K2-3 c");
    assert_eq!(rows[0]["semiMajorAxis"], 0.1406);
    assert_eq!(rows[0]["insolation"], 1.4);
}

#[tokio::test]
async fn orbit_data_missing_file_is_500() {
    let data = DataDir::with_files(Some(support::SELECTED_CSV), None);
    let (status, json) = get_json(app(&data), "/api/data").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "DATA_NOT_FOUND");
    let details = json["details"].as_str().unwrap();
    assert!(details.starts_with("searched: "));
    assert!(details.contains("rawdata.csv"));
}
