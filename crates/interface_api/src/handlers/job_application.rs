//! Job application handlers
//!
//! Job applications are addressed by two path segments, the caregiver's user
//! id and the job id, e.g. `/job_applications/5/9`.

use axum::extract::{Path, Query, State};
use axum::Json;

use core_kernel::{JobId, UserId};
use infra_db::repositories::job_application::JobApplication;
use infra_db::Page;

use crate::dto::job_application::{CreateJobApplicationRequest, UpdateJobApplicationRequest};
use crate::dto::MessageResponse;
use crate::error::ApiError;
use crate::AppState;

/// Creates a job application for a (caregiver, job) pair
pub async fn create_job_application(
    State(state): State<AppState>,
    Json(request): Json<CreateJobApplicationRequest>,
) -> Result<Json<JobApplication>, ApiError> {
    let application = state.job_applications().create(request.into()).await?;
    Ok(Json(application))
}

/// Lists job applications with offset/limit pagination
pub async fn list_job_applications(
    State(state): State<AppState>,
    Query(page): Query<Page>,
) -> Result<Json<Vec<JobApplication>>, ApiError> {
    Ok(Json(state.job_applications().list(page).await?))
}

/// Gets a job application by its composite key
pub async fn get_job_application(
    State(state): State<AppState>,
    Path((caregiver_user_id, job_id)): Path<(UserId, JobId)>,
) -> Result<Json<JobApplication>, ApiError> {
    Ok(Json(
        state
            .job_applications()
            .get(caregiver_user_id, job_id)
            .await?,
    ))
}

/// Updates a job application; unsupplied fields are cleared, not preserved
pub async fn update_job_application(
    State(state): State<AppState>,
    Path((caregiver_user_id, job_id)): Path<(UserId, JobId)>,
    Json(request): Json<UpdateJobApplicationRequest>,
) -> Result<Json<JobApplication>, ApiError> {
    let application = state
        .job_applications()
        .update(caregiver_user_id, job_id, request.into())
        .await?;
    Ok(Json(application))
}

/// Deletes a job application; succeeds even when the pair was never created
pub async fn delete_job_application(
    State(state): State<AppState>,
    Path((caregiver_user_id, job_id)): Path<(UserId, JobId)>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .job_applications()
        .delete(caregiver_user_id, job_id)
        .await?;
    Ok(Json(MessageResponse::new(format!(
        "Job application from caregiver {} for job {} deleted successfully.",
        caregiver_user_id, job_id
    ))))
}
