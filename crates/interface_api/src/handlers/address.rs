//! Address handlers

use axum::extract::{Path, Query, State};
use axum::Json;

use core_kernel::UserId;
use infra_db::repositories::address::Address;
use infra_db::Page;

use crate::dto::address::{CreateAddressRequest, UpdateAddressRequest};
use crate::dto::MessageResponse;
use crate::error::ApiError;
use crate::AppState;

/// Creates a member's address
pub async fn create_address(
    State(state): State<AppState>,
    Json(request): Json<CreateAddressRequest>,
) -> Result<Json<Address>, ApiError> {
    let address = state.addresses().create(request.into()).await?;
    Ok(Json(address))
}

/// Lists addresses with offset/limit pagination
pub async fn list_addresses(
    State(state): State<AppState>,
    Query(page): Query<Page>,
) -> Result<Json<Vec<Address>>, ApiError> {
    Ok(Json(state.addresses().list(page).await?))
}

/// Gets an address by member user id
pub async fn get_address(
    State(state): State<AppState>,
    Path(member_user_id): Path<UserId>,
) -> Result<Json<Address>, ApiError> {
    Ok(Json(state.addresses().get(member_user_id).await?))
}

/// Updates an address; unsupplied fields are cleared, not preserved
pub async fn update_address(
    State(state): State<AppState>,
    Path(member_user_id): Path<UserId>,
    Json(request): Json<UpdateAddressRequest>,
) -> Result<Json<Address>, ApiError> {
    let address = state
        .addresses()
        .update(member_user_id, request.into())
        .await?;
    Ok(Json(address))
}

/// Deletes an address; succeeds even when the id was never created
pub async fn delete_address(
    State(state): State<AppState>,
    Path(member_user_id): Path<UserId>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.addresses().delete(member_user_id).await?;
    Ok(Json(MessageResponse::new(format!(
        "Address for member user id {} deleted successfully.",
        member_user_id
    ))))
}
