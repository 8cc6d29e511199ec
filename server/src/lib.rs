use anyhow::{Context, Result};
use axum::{extract::{Path, Query, State}, http::{HeaderValue, StatusCode}, routing::get, Json, Router};
use cinerank_core::catalog::load_catalog;
use cinerank_core::recommender::{clamp_count, DEFAULT_COUNT};
use cinerank_core::{Recommender, VectorizerOptions};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct RecommendParams {
    pub title: String,
    #[serde(default = "default_n")]
    pub n: usize,
}
fn default_n() -> usize { DEFAULT_COUNT }

#[derive(Serialize)]
pub struct RecommendResponse {
    pub query: String,
    pub n: usize,
    pub found: bool,
    pub took_s: f64,
    pub results: Vec<RecommendHit>,
}

#[derive(Serialize)]
pub struct RecommendHit {
    pub rank: usize,
    pub index: usize,
    pub title: String,
    pub score: f32,
}

#[derive(Serialize)]
pub struct MovieResponse {
    pub index: usize,
    pub title: String,
    pub overview: String,
    pub genres: String,
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub num_items: usize,
    pub num_terms: usize,
}

#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
}

/// Load the catalog, build the recommender once and serve it.
pub fn build_app(catalog: &str, options: VectorizerOptions) -> Result<Router> {
    let records = load_catalog(catalog).with_context(|| format!("loading catalog {catalog}"))?;
    let recommender = Recommender::build(records, options).context("building recommender")?;
    Ok(router(Arc::new(recommender)))
}

pub fn router(recommender: Arc<Recommender>) -> Router {
    let cors = cors_layer(std::env::var("CORS_ALLOW_ORIGIN").ok().as_deref());
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/recommend", get(recommend_handler))
        .route("/movie/:index", get(movie_handler))
        .route("/stats", get(stats_handler))
        .with_state(AppState { recommender })
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Origins parsed from a comma-separated list; unparsable entries are skipped.
pub fn allowed_origins(list: &str) -> Vec<HeaderValue> {
    list.split(',').map(str::trim).filter(|s| !s.is_empty()).filter_map(|s| s.parse().ok()).collect()
}

/// Any origin unless `allow` names at least one valid origin.
pub fn cors_layer(allow: Option<&str>) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match allow.map(allowed_origins) {
        Some(origins) if !origins.is_empty() => base.allow_origin(AllowOrigin::list(origins)),
        _ => base.allow_origin(Any),
    }
}

pub async fn recommend_handler(
    State(state): State<AppState>,
    Query(params): Query<RecommendParams>,
) -> Result<Json<RecommendResponse>, (StatusCode, String)> {
    let start = std::time::Instant::now();
    if params.title.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Please enter a movie title.".into()));
    }
    let n = clamp_count(params.n);
    let (found, results) = match state.recommender.recommend_scored(&params.title, n) {
        Some(recs) => {
            let hits = recs
                .into_iter()
                .enumerate()
                .map(|(i, r)| RecommendHit { rank: i + 1, index: r.index, title: r.title, score: r.score })
                .collect();
            (true, hits)
        }
        None => {
            tracing::debug!(query = %params.title, "title not in catalog");
            (false, Vec::new())
        }
    };
    let elapsed = start.elapsed();
    Ok(Json(RecommendResponse { query: params.title, n, found, took_s: elapsed.as_secs_f64(), results }))
}

pub async fn movie_handler(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<MovieResponse>, (StatusCode, String)> {
    let item = state
        .recommender
        .item(index)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("no movie at index {index}")))?;
    Ok(Json(MovieResponse { index, title: item.title.clone(), overview: item.overview.clone(), genres: item.genres.clone() }))
}

pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse { num_items: state.recommender.num_items(), num_terms: state.recommender.num_terms() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_list_skips_blanks_and_garbage() {
        let origins = allowed_origins("https://a.example, ,https://b.example,bad\norigin");
        assert_eq!(origins, vec![HeaderValue::from_static("https://a.example"), HeaderValue::from_static("https://b.example")]);
        assert!(allowed_origins("").is_empty());
    }
}
