use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tracing::warn;

use super::clock::Clock;
use super::intake::{ProfileDraft, ValidationErrors};
use super::report::render_markdown;
use super::service::RecommendationService;

/// Router builder exposing recommendation and catalog endpoints.
pub fn recommendation_router<C>(service: Arc<RecommendationService<C>>) -> Router
where
    C: Clock + 'static,
{
    Router::new()
        .route("/api/v1/recommendations", post(recommend_handler::<C>))
        .route(
            "/api/v1/recommendations/markdown",
            post(markdown_handler::<C>),
        )
        .route("/api/v1/schemes", get(schemes_handler::<C>))
        .route("/api/v1/schemes/stats", get(stats_handler::<C>))
        .route("/api/v1/schemes/:scheme_id", get(scheme_handler::<C>))
        .route("/api/v1/categories", get(categories_handler::<C>))
        .route("/api/v1/states", get(states_handler::<C>))
        .with_state(service)
}

pub(crate) async fn recommend_handler<C>(
    State(service): State<Arc<RecommendationService<C>>>,
    axum::Json(draft): axum::Json<ProfileDraft>,
) -> Response
where
    C: Clock + 'static,
{
    match service.recommend(draft) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(errors) => rejected_profile("recommend", errors),
    }
}

pub(crate) async fn markdown_handler<C>(
    State(service): State<Arc<RecommendationService<C>>>,
    axum::Json(draft): axum::Json<ProfileDraft>,
) -> Response
where
    C: Clock + 'static,
{
    match service.recommend(draft) {
        Ok(report) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
            render_markdown(&report),
        )
            .into_response(),
        Err(errors) => rejected_profile("markdown", errors),
    }
}

pub(crate) fn rejected_profile(route: &'static str, errors: ValidationErrors) -> Response {
    warn!(
        route,
        errors = errors.errors.len(),
        "rejected recommendation request"
    );
    let payload = json!({ "errors": errors.errors });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}

async fn schemes_handler<C>(State(service): State<Arc<RecommendationService<C>>>) -> Response
where
    C: Clock + 'static,
{
    let payload = json!({ "schemes": service.catalog().schemes() });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

async fn scheme_handler<C>(
    State(service): State<Arc<RecommendationService<C>>>,
    Path(scheme_id): Path<String>,
) -> Response
where
    C: Clock + 'static,
{
    match service.catalog().get(&scheme_id) {
        Some(scheme) => (StatusCode::OK, axum::Json(scheme.as_ref())).into_response(),
        None => {
            let payload = json!({
                "scheme_id": scheme_id,
                "error": "scheme not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}

async fn stats_handler<C>(State(service): State<Arc<RecommendationService<C>>>) -> Response
where
    C: Clock + 'static,
{
    (StatusCode::OK, axum::Json(service.stats())).into_response()
}

async fn categories_handler<C>(State(service): State<Arc<RecommendationService<C>>>) -> Response
where
    C: Clock + 'static,
{
    let payload = json!({ "categories": service.catalog().categories() });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

async fn states_handler<C>(State(service): State<Arc<RecommendationService<C>>>) -> Response
where
    C: Clock + 'static,
{
    let payload = json!({ "states": service.catalog().states() });
    (StatusCode::OK, axum::Json(payload)).into_response()
}
