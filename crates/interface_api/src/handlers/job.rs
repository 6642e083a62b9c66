//! Job handlers

use axum::extract::{Path, Query, State};
use axum::Json;

use core_kernel::JobId;
use infra_db::repositories::job::Job;
use infra_db::Page;

use crate::dto::job::{CreateJobRequest, UpdateJobRequest};
use crate::dto::MessageResponse;
use crate::error::ApiError;
use crate::AppState;

/// Creates a job posting; the response carries the generated key
pub async fn create_job(
    State(state): State<AppState>,
    Json(request): Json<CreateJobRequest>,
) -> Result<Json<Job>, ApiError> {
    let job = state.jobs().create(request.into()).await?;
    Ok(Json(job))
}

/// Lists job postings with offset/limit pagination
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(page): Query<Page>,
) -> Result<Json<Vec<Job>>, ApiError> {
    Ok(Json(state.jobs().list(page).await?))
}

/// Gets a job posting by id
pub async fn get_job(
    State(state): State<AppState>,
    Path(job_id): Path<JobId>,
) -> Result<Json<Job>, ApiError> {
    Ok(Json(state.jobs().get(job_id).await?))
}

/// Updates a job posting; unsupplied fields are cleared, not preserved
pub async fn update_job(
    State(state): State<AppState>,
    Path(job_id): Path<JobId>,
    Json(request): Json<UpdateJobRequest>,
) -> Result<Json<Job>, ApiError> {
    let job = state.jobs().update(job_id, request.into()).await?;
    Ok(Json(job))
}

/// Deletes a job posting; succeeds even when the id was never created
pub async fn delete_job(
    State(state): State<AppState>,
    Path(job_id): Path<JobId>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.jobs().delete(job_id).await?;
    Ok(Json(MessageResponse::new(format!(
        "Job with id {} deleted successfully.",
        job_id
    ))))
}
