//! Member handlers

use axum::extract::{Path, Query, State};
use axum::Json;

use core_kernel::UserId;
use infra_db::repositories::member::Member;
use infra_db::Page;

use crate::dto::member::{CreateMemberRequest, UpdateMemberRequest};
use crate::dto::MessageResponse;
use crate::error::ApiError;
use crate::AppState;

/// Creates a member keyed by the supplied user id
pub async fn create_member(
    State(state): State<AppState>,
    Json(request): Json<CreateMemberRequest>,
) -> Result<Json<Member>, ApiError> {
    let member = state.members().create(request.into()).await?;
    Ok(Json(member))
}

/// Lists members with offset/limit pagination
pub async fn list_members(
    State(state): State<AppState>,
    Query(page): Query<Page>,
) -> Result<Json<Vec<Member>>, ApiError> {
    Ok(Json(state.members().list(page).await?))
}

/// Gets a member by user id
pub async fn get_member(
    State(state): State<AppState>,
    Path(member_user_id): Path<UserId>,
) -> Result<Json<Member>, ApiError> {
    Ok(Json(state.members().get(member_user_id).await?))
}

/// Updates a member; unsupplied fields are cleared, not preserved
pub async fn update_member(
    State(state): State<AppState>,
    Path(member_user_id): Path<UserId>,
    Json(request): Json<UpdateMemberRequest>,
) -> Result<Json<Member>, ApiError> {
    let member = state
        .members()
        .update(member_user_id, request.into())
        .await?;
    Ok(Json(member))
}

/// Deletes a member; succeeds even when the id was never created
pub async fn delete_member(
    State(state): State<AppState>,
    Path(member_user_id): Path<UserId>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.members().delete(member_user_id).await?;
    Ok(Json(MessageResponse::new(format!(
        "Member with id {} deleted successfully.",
        member_user_id
    ))))
}
