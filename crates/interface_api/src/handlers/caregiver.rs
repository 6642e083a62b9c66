//! Caregiver handlers

use axum::extract::{Path, Query, State};
use axum::Json;
use validator::Validate;

use core_kernel::UserId;
use infra_db::repositories::caregiver::Caregiver;
use infra_db::Page;

use crate::dto::caregiver::{CreateCaregiverRequest, UpdateCaregiverRequest};
use crate::dto::MessageResponse;
use crate::error::ApiError;
use crate::AppState;

/// Creates a caregiver profile keyed by the supplied user id
pub async fn create_caregiver(
    State(state): State<AppState>,
    Json(request): Json<CreateCaregiverRequest>,
) -> Result<Json<Caregiver>, ApiError> {
    request.validate()?;
    let caregiver = state.caregivers().create(request.into()).await?;
    Ok(Json(caregiver))
}

/// Lists caregivers with offset/limit pagination
pub async fn list_caregivers(
    State(state): State<AppState>,
    Query(page): Query<Page>,
) -> Result<Json<Vec<Caregiver>>, ApiError> {
    Ok(Json(state.caregivers().list(page).await?))
}

/// Gets a caregiver by user id
pub async fn get_caregiver(
    State(state): State<AppState>,
    Path(caregiver_user_id): Path<UserId>,
) -> Result<Json<Caregiver>, ApiError> {
    Ok(Json(state.caregivers().get(caregiver_user_id).await?))
}

/// Updates a caregiver; unsupplied fields are cleared, not preserved
pub async fn update_caregiver(
    State(state): State<AppState>,
    Path(caregiver_user_id): Path<UserId>,
    Json(request): Json<UpdateCaregiverRequest>,
) -> Result<Json<Caregiver>, ApiError> {
    request.validate()?;
    let caregiver = state
        .caregivers()
        .update(caregiver_user_id, request.into())
        .await?;
    Ok(Json(caregiver))
}

/// Deletes a caregiver; succeeds even when the id was never created
pub async fn delete_caregiver(
    State(state): State<AppState>,
    Path(caregiver_user_id): Path<UserId>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.caregivers().delete(caregiver_user_id).await?;
    Ok(Json(MessageResponse::new(format!(
        "Caregiver with id {} deleted successfully.",
        caregiver_user_id
    ))))
}
