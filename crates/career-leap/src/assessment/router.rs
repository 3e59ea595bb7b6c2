use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ApplicantProfile, AssessmentId};
use super::repository::{AssessmentRepository, RepositoryError};
use super::service::{AssessmentService, AssessmentServiceError};
use super::views::{AssessmentRecordView, AssessmentView};

/// Router builder exposing HTTP endpoints for assessments.
pub fn assessment_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: AssessmentRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/assessments",
            post(assess_handler::<R>).get(recent_handler::<R>),
        )
        .route(
            "/api/v1/assessments/:assessment_id",
            get(record_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn assess_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    axum::Json(profile): axum::Json<ApplicantProfile>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.assess(&profile) {
        Ok(outcome) => {
            let view = AssessmentView::from(outcome);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(AssessmentServiceError::Input(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn record_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let id = AssessmentId(assessment_id);
    match service.get(&id) {
        Ok(record) => {
            let view = AssessmentRecordView::from(record);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound))
        | Err(AssessmentServiceError::StorageDisabled) => {
            let payload = json!({
                "assessment_id": id.0,
                "error": "assessment not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecentQuery {
    #[serde(default = "default_recent_limit")]
    limit: usize,
}

fn default_recent_limit() -> usize {
    20
}

pub(crate) async fn recent_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Query(query): Query<RecentQuery>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.recent(query.limit) {
        Ok(records) => {
            let views: Vec<AssessmentRecordView> =
                records.into_iter().map(AssessmentRecordView::from).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(AssessmentServiceError::StorageDisabled) => {
            (StatusCode::OK, axum::Json(Vec::<AssessmentRecordView>::new())).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
    }
}
