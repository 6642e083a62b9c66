//! Appointment handlers

use axum::extract::{Path, Query, State};
use axum::Json;

use core_kernel::AppointmentId;
use infra_db::repositories::appointment::Appointment;
use infra_db::Page;

use crate::dto::appointment::{CreateAppointmentRequest, UpdateAppointmentRequest};
use crate::dto::MessageResponse;
use crate::error::ApiError;
use crate::AppState;

/// Creates an appointment; the response carries the generated key
pub async fn create_appointment(
    State(state): State<AppState>,
    Json(request): Json<CreateAppointmentRequest>,
) -> Result<Json<Appointment>, ApiError> {
    let appointment = state.appointments().create(request.into()).await?;
    Ok(Json(appointment))
}

/// Lists appointments with offset/limit pagination
pub async fn list_appointments(
    State(state): State<AppState>,
    Query(page): Query<Page>,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    Ok(Json(state.appointments().list(page).await?))
}

/// Gets an appointment by id
pub async fn get_appointment(
    State(state): State<AppState>,
    Path(appointment_id): Path<AppointmentId>,
) -> Result<Json<Appointment>, ApiError> {
    Ok(Json(state.appointments().get(appointment_id).await?))
}

/// Updates an appointment; unsupplied fields are cleared, not preserved
pub async fn update_appointment(
    State(state): State<AppState>,
    Path(appointment_id): Path<AppointmentId>,
    Json(request): Json<UpdateAppointmentRequest>,
) -> Result<Json<Appointment>, ApiError> {
    let appointment = state
        .appointments()
        .update(appointment_id, request.into())
        .await?;
    Ok(Json(appointment))
}

/// Deletes an appointment; succeeds even when the id was never created
pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(appointment_id): Path<AppointmentId>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.appointments().delete(appointment_id).await?;
    Ok(Json(MessageResponse::new(format!(
        "Appointment with id {} deleted successfully.",
        appointment_id
    ))))
}
