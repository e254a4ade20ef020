#![cfg(feature = "server")]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use fresh_lunch::adapters::http::{router, AppState};
use fresh_lunch::FileSystemLoader;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

fn state_for(base_path: PathBuf) -> AppState {
    AppState {
        loader: Arc::new(FileSystemLoader::new(base_path)),
        ingredients_source: "ingredients.json".to_string(),
        recipes_source: "recipes.json".to_string(),
    }
}

fn bundled_state() -> AppState {
    state_for(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"))
}

async fn get(state: AppState, uri: &str) -> (StatusCode, Value) {
    let response = router(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn names(body: &Value) -> Vec<&str> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|recipe| recipe["name"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_endpoint_is_successful() {
    for uri in [
        "/lunch",
        "/lunch?date=2019-03-07",
        "/lunch?date=2019-03-25",
        "/lunch?date=2019-03-29",
    ] {
        let (status, body) = get(bundled_state(), uri).await;
        assert_eq!(status, StatusCode::OK, "uri {}", uri);
        assert!(body.is_array());
    }
}

#[tokio::test]
async fn test_recipes_are_freshest_first() {
    let (_, body) = get(bundled_state(), "/lunch?date=2019-03-14").await;
    assert_eq!(names(&body), vec!["Fry-up", "Hotdog"]);

    let (_, body) = get(bundled_state(), "/lunch?date=2019-03-13").await;
    assert_eq!(names(&body), vec!["Fry-up", "Hotdog", "Ham and Cheese Toastie"]);
    assert_eq!(body[2]["requiredIngredientNames"][1], "Cheese");
}

#[tokio::test]
async fn test_invalid_date_format() {
    let (status, body) = get(bundled_state(), "/lunch?date=abcd").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert_eq!(
        body["message"],
        "Value provided for date is an invalid format. YYYY-MM-DD required."
    );
}

#[tokio::test]
async fn test_invalid_date_value() {
    let (status, body) = get(bundled_state(), "/lunch?date=2021-10-99").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Value provided for date is an invalid value. Valid date in the format of YYYY-MM-DD required."
    );
}

#[tokio::test]
async fn test_missing_catalog_is_internal_error() {
    let dir = TempDir::new().unwrap();
    let (status, body) = get(state_for(dir.path().to_path_buf()), "/lunch?date=2019-03-07").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], 500);
    assert_eq!(body["message"], "Internal server error");
}
