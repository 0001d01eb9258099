use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::directory::TalentDirectory;
use super::domain::{CompanyId, JobId};
use super::filter::FilterQuery;
use super::service::{MatchingService, MatchingServiceError};

/// Router builder exposing the match, search and inbox views.
pub fn matching_router<D>(service: Arc<MatchingService<D>>) -> Router
where
    D: TalentDirectory + 'static,
{
    Router::new()
        .route("/api/v1/jobs/:job_id/matches", get(matches_handler::<D>))
        .route(
            "/api/v1/jobs/:job_id/applications",
            get(applications_handler::<D>),
        )
        .route("/api/v1/talents/search", post(search_handler::<D>))
        .route("/api/v1/talents/facets", get(facets_handler::<D>))
        .route(
            "/api/v1/companies/:company_id/notifications",
            get(inbox_handler::<D>),
        )
        .with_state(service)
}

pub(crate) async fn matches_handler<D>(
    State(service): State<Arc<MatchingService<D>>>,
    Path(job_id): Path<u64>,
) -> Response
where
    D: TalentDirectory + 'static,
{
    match service.matches_for_job(JobId(job_id)) {
        Ok(matches) => (StatusCode::OK, Json(matches)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn applications_handler<D>(
    State(service): State<Arc<MatchingService<D>>>,
    Path(job_id): Path<u64>,
) -> Response
where
    D: TalentDirectory + 'static,
{
    match service.applications_for_job(JobId(job_id)) {
        Ok(applications) => {
            let payload = json!({
                "job_id": job_id,
                "total": applications.len(),
                "applications": applications,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn search_handler<D>(
    State(service): State<Arc<MatchingService<D>>>,
    Json(query): Json<FilterQuery>,
) -> Response
where
    D: TalentDirectory + 'static,
{
    match service.search(&query) {
        Ok(results) => (StatusCode::OK, Json(results)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn facets_handler<D>(State(service): State<Arc<MatchingService<D>>>) -> Response
where
    D: TalentDirectory + 'static,
{
    match service.facets() {
        Ok(facets) => (StatusCode::OK, Json(facets)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn inbox_handler<D>(
    State(service): State<Arc<MatchingService<D>>>,
    Path(company_id): Path<u64>,
) -> Response
where
    D: TalentDirectory + 'static,
{
    match service.inbox(CompanyId(company_id)) {
        Ok(inbox) => (StatusCode::OK, Json(inbox)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: MatchingServiceError) -> Response {
    let status = match &err {
        MatchingServiceError::JobNotFound(_) => StatusCode::NOT_FOUND,
        MatchingServiceError::Directory(_) => StatusCode::SERVICE_UNAVAILABLE,
    };
    let payload = json!({ "error": err.to_string() });
    (status, Json(payload)).into_response()
}
