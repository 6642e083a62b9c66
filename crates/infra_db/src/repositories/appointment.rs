//! Appointment repository
//!
//! An appointment binds one caregiver and one member to a scheduled slot:
//! a calendar date, a wall-clock time of day (neither carries a timezone),
//! a whole number of work hours, and a free-form status string. The key is
//! assigned by the table sequence; the caregiver and member references are
//! assumed, not verified, to point at existing users.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use sqlx::PgPool;

use core_kernel::{AppointmentId, UserId};

use crate::error::DatabaseError;
use crate::pagination::Page;

/// A stored appointment record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Appointment {
    pub appointment_id: AppointmentId,
    pub caregiver_user_id: Option<UserId>,
    pub member_user_id: Option<UserId>,
    pub appointment_date: Option<NaiveDate>,
    pub appointment_time: Option<NaiveTime>,
    pub work_hours: Option<i32>,
    pub status: Option<String>,
}

/// Input for creating an appointment; the key is assigned by the sequence
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub caregiver_user_id: UserId,
    pub member_user_id: UserId,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub work_hours: i32,
    pub status: String,
}

/// Partial update where every field is optional
#[derive(Debug, Clone, Default)]
pub struct AppointmentPatch {
    pub caregiver_user_id: Option<UserId>,
    pub member_user_id: Option<UserId>,
    pub appointment_date: Option<NaiveDate>,
    pub appointment_time: Option<NaiveTime>,
    pub work_hours: Option<i32>,
    pub status: Option<String>,
}

impl AppointmentPatch {
    /// Builds the update response: the key plus exactly the supplied fields.
    ///
    /// Unsupplied fields stay `None`, matching the NULLs the UPDATE wrote.
    pub fn into_record(self, appointment_id: AppointmentId) -> Appointment {
        Appointment {
            appointment_id,
            caregiver_user_id: self.caregiver_user_id,
            member_user_id: self.member_user_id,
            appointment_date: self.appointment_date,
            appointment_time: self.appointment_time,
            work_hours: self.work_hours,
            status: self.status,
        }
    }
}

/// Repository for appointments
#[derive(Debug, Clone)]
pub struct AppointmentRepository {
    pool: PgPool,
}

impl AppointmentRepository {
    /// Creates a new repository backed by the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts an appointment and returns the stored record with its key
    pub async fn create(&self, appointment: NewAppointment) -> Result<Appointment, DatabaseError> {
        let row = sqlx::query_as::<_, Appointment>(
            r#"
            INSERT INTO appointments (caregiver_user_id, member_user_id, appointment_date, appointment_time, work_hours, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING appointment_id, caregiver_user_id, member_user_id, appointment_date, appointment_time, work_hours, status
            "#,
        )
        .bind(appointment.caregiver_user_id)
        .bind(appointment.member_user_id)
        .bind(appointment.appointment_date)
        .bind(appointment.appointment_time)
        .bind(appointment.work_hours)
        .bind(appointment.status)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Retrieves an appointment by id
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` when no appointment has that id.
    pub async fn get(&self, appointment_id: AppointmentId) -> Result<Appointment, DatabaseError> {
        sqlx::query_as::<_, Appointment>(
            r#"
            SELECT appointment_id, caregiver_user_id, member_user_id, appointment_date, appointment_time, work_hours, status
            FROM appointments
            WHERE appointment_id = $1
            "#,
        )
        .bind(appointment_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Appointment"))
    }

    /// Lists appointments in key order with the given offset/limit window
    pub async fn list(&self, page: Page) -> Result<Vec<Appointment>, DatabaseError> {
        let rows = sqlx::query_as::<_, Appointment>(
            r#"
            SELECT appointment_id, caregiver_user_id, member_user_id, appointment_date, appointment_time, work_hours, status
            FROM appointments
            ORDER BY appointment_id
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(page.offset())
        .bind(page.limit())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Overwrites every mutable column with the patch values
    ///
    /// Fields the patch does not supply are written as NULL, not preserved
    /// from the existing row; a missing key updates zero rows and still
    /// succeeds.
    pub async fn update(
        &self,
        appointment_id: AppointmentId,
        patch: AppointmentPatch,
    ) -> Result<Appointment, DatabaseError> {
        sqlx::query(
            r#"
            UPDATE appointments
            SET caregiver_user_id = $2,
                member_user_id = $3,
                appointment_date = $4,
                appointment_time = $5,
                work_hours = $6,
                status = $7
            WHERE appointment_id = $1
            "#,
        )
        .bind(appointment_id)
        .bind(patch.caregiver_user_id)
        .bind(patch.member_user_id)
        .bind(patch.appointment_date)
        .bind(patch.appointment_time)
        .bind(patch.work_hours)
        .bind(&patch.status)
        .execute(&self.pool)
        .await?;

        Ok(patch.into_record(appointment_id))
    }

    /// Deletes an appointment; deleting a missing key succeeds silently
    pub async fn delete(&self, appointment_id: AppointmentId) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM appointments WHERE appointment_id = $1")
            .bind(appointment_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_echo_keeps_only_supplied_fields() {
        let patch = AppointmentPatch {
            status: Some("confirmed".to_string()),
            work_hours: Some(8),
            ..AppointmentPatch::default()
        };

        let echoed = patch.into_record(AppointmentId::new(12));

        assert_eq!(echoed.appointment_id, AppointmentId::new(12));
        assert_eq!(echoed.status.as_deref(), Some("confirmed"));
        assert_eq!(echoed.work_hours, Some(8));
        assert!(echoed.caregiver_user_id.is_none());
        assert!(echoed.member_user_id.is_none());
        assert!(echoed.appointment_date.is_none());
        assert!(echoed.appointment_time.is_none());
    }
}
