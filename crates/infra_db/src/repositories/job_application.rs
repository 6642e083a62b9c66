//! Job application repository
//!
//! Job applications form the many-to-many join between caregivers and jobs,
//! identified by the composite key (caregiver_user_id, job_id). Both halves
//! are supplied by the caller; applying twice to the same job collides on
//! the composite primary key and is rejected as a duplicate entry.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::PgPool;

use core_kernel::{JobId, UserId};

use crate::error::DatabaseError;
use crate::pagination::Page;

/// A stored job application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct JobApplication {
    pub caregiver_user_id: UserId,
    pub job_id: JobId,
    pub date_applied: Option<NaiveDate>,
}

/// Input for creating a job application
#[derive(Debug, Clone)]
pub struct NewJobApplication {
    pub caregiver_user_id: UserId,
    pub job_id: JobId,
    pub date_applied: NaiveDate,
}

/// Partial update where every field is optional
#[derive(Debug, Clone, Default)]
pub struct JobApplicationPatch {
    pub date_applied: Option<NaiveDate>,
}

impl JobApplicationPatch {
    /// Builds the update response: the composite key plus the supplied fields
    pub fn into_record(self, caregiver_user_id: UserId, job_id: JobId) -> JobApplication {
        JobApplication {
            caregiver_user_id,
            job_id,
            date_applied: self.date_applied,
        }
    }
}

/// Repository for job applications
#[derive(Debug, Clone)]
pub struct JobApplicationRepository {
    pool: PgPool,
}

impl JobApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        application: NewJobApplication,
    ) -> Result<JobApplication, DatabaseError> {
        let row = sqlx::query_as::<_, JobApplication>(
            r#"
            INSERT INTO job_applications (caregiver_user_id, job_id, date_applied)
            VALUES ($1, $2, $3)
            RETURNING caregiver_user_id, job_id, date_applied
            "#,
        )
        .bind(application.caregiver_user_id)
        .bind(application.job_id)
        .bind(application.date_applied)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get(
        &self,
        caregiver_user_id: UserId,
        job_id: JobId,
    ) -> Result<JobApplication, DatabaseError> {
        sqlx::query_as::<_, JobApplication>(
            r#"
            SELECT caregiver_user_id, job_id, date_applied
            FROM job_applications
            WHERE caregiver_user_id = $1 AND job_id = $2
            "#,
        )
        .bind(caregiver_user_id)
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Job application"))
    }

    /// Lists applications ordered by the composite key
    pub async fn list(&self, page: Page) -> Result<Vec<JobApplication>, DatabaseError> {
        let rows = sqlx::query_as::<_, JobApplication>(
            r#"
            SELECT caregiver_user_id, job_id, date_applied
            FROM job_applications
            ORDER BY caregiver_user_id, job_id
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(page.offset())
        .bind(page.limit())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn update(
        &self,
        caregiver_user_id: UserId,
        job_id: JobId,
        patch: JobApplicationPatch,
    ) -> Result<JobApplication, DatabaseError> {
        sqlx::query(
            r#"
            UPDATE job_applications
            SET date_applied = $3
            WHERE caregiver_user_id = $1 AND job_id = $2
            "#,
        )
        .bind(caregiver_user_id)
        .bind(job_id)
        .bind(patch.date_applied)
        .execute(&self.pool)
        .await?;

        Ok(patch.into_record(caregiver_user_id, job_id))
    }

    pub async fn delete(
        &self,
        caregiver_user_id: UserId,
        job_id: JobId,
    ) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM job_applications WHERE caregiver_user_id = $1 AND job_id = $2")
            .bind(caregiver_user_id)
            .bind(job_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_echo_carries_both_key_halves() {
        let echoed =
            JobApplicationPatch::default().into_record(UserId::new(5), JobId::new(9));

        assert_eq!(echoed.caregiver_user_id, UserId::new(5));
        assert_eq!(echoed.job_id, JobId::new(9));
        assert!(echoed.date_applied.is_none());
    }
}
