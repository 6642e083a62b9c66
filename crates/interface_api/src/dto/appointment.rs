//! Appointment DTOs

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use core_kernel::UserId;
use infra_db::repositories::appointment::{AppointmentPatch, NewAppointment};

#[derive(Debug, Deserialize)]
pub struct CreateAppointmentRequest {
    pub caregiver_user_id: UserId,
    pub member_user_id: UserId,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub work_hours: i32,
    pub status: String,
}

impl From<CreateAppointmentRequest> for NewAppointment {
    fn from(request: CreateAppointmentRequest) -> Self {
        NewAppointment {
            caregiver_user_id: request.caregiver_user_id,
            member_user_id: request.member_user_id,
            appointment_date: request.appointment_date,
            appointment_time: request.appointment_time,
            work_hours: request.work_hours,
            status: request.status,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateAppointmentRequest {
    pub caregiver_user_id: Option<UserId>,
    pub member_user_id: Option<UserId>,
    pub appointment_date: Option<NaiveDate>,
    pub appointment_time: Option<NaiveTime>,
    pub work_hours: Option<i32>,
    pub status: Option<String>,
}

impl From<UpdateAppointmentRequest> for AppointmentPatch {
    fn from(request: UpdateAppointmentRequest) -> Self {
        AppointmentPatch {
            caregiver_user_id: request.caregiver_user_id,
            member_user_id: request.member_user_id,
            appointment_date: request.appointment_date,
            appointment_time: request.appointment_time,
            work_hours: request.work_hours,
            status: request.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appointment_time_parses_wall_clock_time() {
        let request: CreateAppointmentRequest = serde_json::from_str(
            r#"{
                "caregiver_user_id": 1,
                "member_user_id": 2,
                "appointment_date": "2024-03-15",
                "appointment_time": "09:30:00",
                "work_hours": 4,
                "status": "pending"
            }"#,
        )
        .unwrap();

        assert_eq!(
            request.appointment_time,
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
    }
}
