use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use super::domain::{ApplicantId, ApplicantStatus};
use super::query::{ApplicantQuery, ListParams};
use super::repository::ApplicantRepository;
use super::service::{ApplicantDirectoryService, DirectoryError};

/// Body of `PATCH /api/applicants/:id/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

/// Router builder exposing the applicant directory over HTTP.
pub fn applicant_router<R>(service: Arc<ApplicantDirectoryService<R>>) -> Router
where
    R: ApplicantRepository + 'static,
{
    Router::new()
        .route(
            "/api/applicants",
            get(list_handler::<R>).fallback(method_not_allowed),
        )
        .route(
            "/api/applicants/:applicant_id",
            get(detail_handler::<R>).fallback(method_not_allowed),
        )
        .route(
            "/api/applicants/:applicant_id/status",
            patch(status_handler::<R>).fallback(method_not_allowed),
        )
        .with_state(service)
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<ApplicantDirectoryService<R>>>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Response
where
    R: ApplicantRepository + 'static,
{
    let query = match list_query(params) {
        Ok(query) => query,
        Err(response) => return response,
    };

    match service.list(&query) {
        Ok(listing) => (StatusCode::OK, Json(listing)).into_response(),
        Err(err) => {
            error!(error = %err, "failed to list applicants");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch applicants")
        }
    }
}

pub(crate) async fn detail_handler<R>(
    State(service): State<Arc<ApplicantDirectoryService<R>>>,
    Path(applicant_id): Path<String>,
) -> Response
where
    R: ApplicantRepository + 'static,
{
    let id = ApplicantId(applicant_id);
    match service.detail(&id) {
        Ok(detail) => (StatusCode::OK, Json(detail)).into_response(),
        Err(err) => directory_error_response(&id, err),
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<ApplicantDirectoryService<R>>>,
    Path(applicant_id): Path<String>,
    Json(update): Json<StatusUpdate>,
) -> Response
where
    R: ApplicantRepository + 'static,
{
    let status = match update.status.parse::<ApplicantStatus>() {
        Ok(status) => status,
        Err(err) => return error_response(StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
    };

    let id = ApplicantId(applicant_id);
    match service.update_status(&id, status) {
        Ok(applicant) => (StatusCode::OK, Json(applicant)).into_response(),
        Err(err) => directory_error_response(&id, err),
    }
}

/// Validates list parameters, answering malformed query strings with a JSON 400.
pub fn list_query(
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<ApplicantQuery, Response> {
    let Query(params) =
        params.map_err(|err| error_response(StatusCode::BAD_REQUEST, err.body_text()))?;
    ApplicantQuery::try_from(params)
        .map_err(|err| error_response(StatusCode::BAD_REQUEST, err.to_string()))
}

pub(crate) async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

fn directory_error_response(id: &ApplicantId, err: DirectoryError) -> Response {
    if err.is_not_found() {
        let payload = json!({
            "error": "Applicant not found",
            "applicant_id": id.0,
        });
        return (StatusCode::NOT_FOUND, Json(payload)).into_response();
    }

    error!(applicant = %id, error = %err, "applicant directory request failed");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch applicants")
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let payload = json!({
        "error": message.into(),
    });
    (status, Json(payload)).into_response()
}
