use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::applicants::query::ListParams;
use crate::applicants::router::list_handler;
use crate::applicants::ApplicantDirectoryService;

#[tokio::test]
async fn list_route_returns_applicants_and_stats() {
    let router = router_with_roster();

    let response = router
        .oneshot(
            Request::get("/api/applicants")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let ids: Vec<&str> = body["applicants"]
        .as_array()
        .expect("applicants array")
        .iter()
        .filter_map(|a| a["id"].as_str())
        .collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(body["stats"]["total_applicants"], 3);
    assert_eq!(body["stats"]["average_rating"], "3.3");
    assert_eq!(body["applicants"][0]["hourly_rate"], "$45/hr");
}

#[tokio::test]
async fn list_route_applies_query_parameters() {
    let router = router_with_roster();

    let response = router
        .oneshot(
            Request::get("/api/applicants?max_hourly_rate=50&sort=hourly_rate&direction=asc")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let ids: Vec<&str> = body["applicants"]
        .as_array()
        .expect("applicants array")
        .iter()
        .filter_map(|a| a["id"].as_str())
        .collect();
    assert_eq!(ids, vec!["3", "1"]);
}

#[tokio::test]
async fn list_route_rejects_invalid_criteria() {
    let router = router_with_roster();

    let response = router
        .oneshot(
            Request::get("/api/applicants?sort=salary")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], "unknown sort field 'salary'");
}

#[tokio::test]
async fn list_route_answers_malformed_query_strings_with_json() {
    let router = router_with_roster();

    let response = router
        .oneshot(
            Request::get("/api/applicants?min_rating=1&min_rating=2")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("min_rating"));
}

#[tokio::test]
async fn non_get_list_requests_are_method_not_allowed() {
    for method in ["POST", "PUT", "DELETE"] {
        let router = router_with_roster();
        let response = router
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri("/api/applicants")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{method}");
        let body = read_json_body(response).await;
        assert_eq!(body, json!({ "error": "Method not allowed" }));
    }
}

#[tokio::test]
async fn list_handler_hides_repository_failures() {
    let service = Arc::new(ApplicantDirectoryService::new(Arc::new(
        UnavailableRepository,
    )));

    let response =
        list_handler::<UnavailableRepository>(State(service), Ok(Query(ListParams::default())))
            .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json_body(response).await;
    assert_eq!(body, json!({ "error": "Failed to fetch applicants" }));
}

#[tokio::test]
async fn detail_route_returns_breakdown_or_not_found() {
    let router = router_with_roster();
    let response = router
        .oneshot(
            Request::get("/api/applicants/3")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["applicant"]["name"], "Alex Rivera");
    assert_eq!(
        body["breakdown"]["dimensions"]
            .as_array()
            .expect("dimensions")
            .len(),
        5
    );
    assert_eq!(body["breakdown"]["average"], 4.0);

    let router = router_with_roster();
    let response = router
        .oneshot(
            Request::get("/api/applicants/404")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], "Applicant not found");
}

#[tokio::test]
async fn status_route_updates_and_validates() {
    let (service, _) = build_service();
    let router = crate::applicants::applicant_router(Arc::new(service));

    let response = router
        .clone()
        .oneshot(
            Request::patch("/api/applicants/1/status")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"status": "Interview"}"#))
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["status"], "interview");

    let response = router
        .clone()
        .oneshot(
            Request::patch("/api/applicants/1/status")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"status": "archived"}"#))
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = router
        .oneshot(
            Request::get("/api/applicants?status=interview")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    let body = read_json_body(response).await;
    assert_eq!(body["stats"]["status_breakdown"]["interview"], 2);
    assert_eq!(body["applicants"].as_array().expect("array").len(), 2);
}

#[tokio::test]
async fn status_route_only_accepts_patch() {
    let router = router_with_roster();
    let response = router
        .oneshot(
            Request::get("/api/applicants/1/status")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body = read_json_body(response).await;
    assert_eq!(body, json!({ "error": "Method not allowed" }));
}
