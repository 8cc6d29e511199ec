use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use cinerank_core::VectorizerOptions;
use http_body_util::BodyExt;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;
use tower::ServiceExt;

fn build_tiny_app(dir: &std::path::Path) -> Router {
    let path = dir.join("movies.csv");
    fs::write(
        &path,
        "title,overview,genres\n\
         A,space war alien,\n\
         B,space war alien,\n\
         C,romance drama,\n",
    )
    .unwrap();
    server::build_app(&path.to_string_lossy(), VectorizerOptions::default()).unwrap()
}

async fn call(app: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::get(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn recommend_returns_ranked_titles() {
    let dir = tempdir().unwrap();
    let app = build_tiny_app(dir.path());

    let (status, json) = call(app, "/recommend?title=a&n=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["found"], true);
    let titles: Vec<&str> = json["results"].as_array().unwrap().iter().map(|r| r["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["B", "C"]);
    assert_eq!(json["results"][0]["rank"], 1);
}

#[tokio::test]
async fn unknown_title_is_not_an_error() {
    let dir = tempdir().unwrap();
    let (status, json) = call(build_tiny_app(dir.path()), "/recommend?title=nonexistent-movie-xyz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["found"], false);
    assert!(json["results"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn n_is_clamped_and_defaulted() {
    let dir = tempdir().unwrap();
    let app = build_tiny_app(dir.path());
    let (_, json) = call(app.clone(), "/recommend?title=A&n=0").await;
    assert_eq!(json["n"], 1);
    assert_eq!(json["results"].as_array().unwrap().len(), 1);
    let (_, json) = call(app.clone(), "/recommend?title=A&n=500").await;
    assert_eq!(json["n"], 10);
    let (_, json) = call(app, "/recommend?title=A").await;
    assert_eq!(json["n"], 5);
    assert_eq!(json["results"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn blank_title_is_rejected() {
    let dir = tempdir().unwrap();
    let (status, _) = call(build_tiny_app(dir.path()), "/recommend?title=%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn movie_and_stats_endpoints() {
    let dir = tempdir().unwrap();
    let app = build_tiny_app(dir.path());
    let (status, json) = call(app.clone(), "/movie/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "C");
    assert_eq!(json["genres"], "");
    let (status, _) = call(app.clone(), "/movie/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, json) = call(app, "/stats").await;
    assert_eq!(json["num_items"], 3);
    assert_eq!(json["num_terms"], 5);
}
