use crate::infra::AppState;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use hiring_dashboard::applicants::{
    applicant_router, list_query, write_csv, ApplicantDirectoryService, ApplicantRepository,
    ComputedStats, ListParams,
};
use hiring_dashboard::error::AppError;
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_dashboard_routes<R>(service: Arc<ApplicantDirectoryService<R>>) -> Router
where
    R: ApplicantRepository + 'static,
{
    let reporting = Router::new()
        .route("/api/stats", get(stats_endpoint::<R>))
        .route("/api/export/applicants.csv", get(export_endpoint::<R>))
        .with_state(service.clone());

    applicant_router(service)
        .merge(reporting)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn stats_endpoint<R>(
    State(service): State<Arc<ApplicantDirectoryService<R>>>,
) -> Result<Json<ComputedStats>, AppError>
where
    R: ApplicantRepository + 'static,
{
    Ok(Json(service.stats()?))
}

pub(crate) async fn export_endpoint<R>(
    State(service): State<Arc<ApplicantDirectoryService<R>>>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Response, AppError>
where
    R: ApplicantRepository + 'static,
{
    let query = match list_query(params) {
        Ok(query) => query,
        Err(response) => return Ok(response),
    };

    let listing = service.list(&query)?;
    let mut body = Vec::new();
    write_csv(&mut body, &listing.applicants)?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"applicants.csv\"",
            ),
        ],
        body,
    )
        .into_response())
}
