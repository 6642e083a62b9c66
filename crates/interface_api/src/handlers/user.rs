//! User handlers

use axum::extract::{Path, Query, State};
use axum::Json;
use validator::Validate;

use core_kernel::UserId;
use infra_db::repositories::user::User;
use infra_db::Page;

use crate::dto::user::{CreateUserRequest, UpdateUserRequest};
use crate::dto::MessageResponse;
use crate::error::ApiError;
use crate::AppState;

/// Creates a new user; the response carries the generated key
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<User>, ApiError> {
    request.validate()?;
    let user = state.users().create(request.into()).await?;
    Ok(Json(user))
}

/// Lists users with offset/limit pagination
pub async fn list_users(
    State(state): State<AppState>,
    Query(page): Query<Page>,
) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(state.users().list(page).await?))
}

/// Gets a user by id
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.users().get(user_id).await?))
}

/// Updates a user; unsupplied fields are cleared, not preserved
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<User>, ApiError> {
    let user = state.users().update(user_id, request.into()).await?;
    Ok(Json(user))
}

/// Deletes a user; succeeds even when the id was never created
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.users().delete(user_id).await?;
    Ok(Json(MessageResponse::new(format!(
        "User with id: {} deleted successfully",
        user_id
    ))))
}
