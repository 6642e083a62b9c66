//! Job repository
//!
//! Job postings carry a generated key and reference the posting member by
//! user id. The reference is not enforced with a foreign key.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::PgPool;

use core_kernel::{JobId, UserId};

use crate::error::DatabaseError;
use crate::pagination::Page;

/// A stored job posting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Job {
    pub job_id: JobId,
    pub member_user_id: Option<UserId>,
    pub required_caregiving_type: Option<String>,
    pub other_requirements: Option<String>,
    pub date_posted: Option<NaiveDate>,
}

/// Input for creating a job posting; the key is assigned by the sequence
#[derive(Debug, Clone)]
pub struct NewJob {
    pub member_user_id: UserId,
    pub required_caregiving_type: String,
    pub other_requirements: Option<String>,
    pub date_posted: NaiveDate,
}

/// Partial update where every field is optional
#[derive(Debug, Clone, Default)]
pub struct JobPatch {
    pub member_user_id: Option<UserId>,
    pub required_caregiving_type: Option<String>,
    pub other_requirements: Option<String>,
    pub date_posted: Option<NaiveDate>,
}

impl JobPatch {
    /// Builds the update response: the key plus exactly the supplied fields
    pub fn into_record(self, job_id: JobId) -> Job {
        Job {
            job_id,
            member_user_id: self.member_user_id,
            required_caregiving_type: self.required_caregiving_type,
            other_requirements: self.other_requirements,
            date_posted: self.date_posted,
        }
    }
}

/// Repository for job postings
#[derive(Debug, Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, job: NewJob) -> Result<Job, DatabaseError> {
        let row = sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO jobs (member_user_id, required_caregiving_type, other_requirements, date_posted)
            VALUES ($1, $2, $3, $4)
            RETURNING job_id, member_user_id, required_caregiving_type, other_requirements, date_posted
            "#,
        )
        .bind(job.member_user_id)
        .bind(job.required_caregiving_type)
        .bind(job.other_requirements)
        .bind(job.date_posted)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get(&self, job_id: JobId) -> Result<Job, DatabaseError> {
        sqlx::query_as::<_, Job>(
            r#"
            SELECT job_id, member_user_id, required_caregiving_type, other_requirements, date_posted
            FROM jobs
            WHERE job_id = $1
            "#,
        )
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Job"))
    }

    pub async fn list(&self, page: Page) -> Result<Vec<Job>, DatabaseError> {
        let rows = sqlx::query_as::<_, Job>(
            r#"
            SELECT job_id, member_user_id, required_caregiving_type, other_requirements, date_posted
            FROM jobs
            ORDER BY job_id
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(page.offset())
        .bind(page.limit())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn update(&self, job_id: JobId, patch: JobPatch) -> Result<Job, DatabaseError> {
        sqlx::query(
            r#"
            UPDATE jobs
            SET member_user_id = $2,
                required_caregiving_type = $3,
                other_requirements = $4,
                date_posted = $5
            WHERE job_id = $1
            "#,
        )
        .bind(job_id)
        .bind(patch.member_user_id)
        .bind(&patch.required_caregiving_type)
        .bind(&patch.other_requirements)
        .bind(patch.date_posted)
        .execute(&self.pool)
        .await?;

        Ok(patch.into_record(job_id))
    }

    pub async fn delete(&self, job_id: JobId) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM jobs WHERE job_id = $1")
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
    fn test_patch_echo_keeps_only_supplied_fields() {
        let patch = JobPatch {
            required_caregiving_type: Some("elderly care".to_string()),
            ..JobPatch::default()
        };

        let echoed = patch.into_record(JobId::new(6));

        assert_eq!(echoed.job_id, JobId::new(6));
        assert_eq!(
            echoed.required_caregiving_type.as_deref(),
            Some("elderly care")
        );
        assert!(echoed.member_user_id.is_none());
        assert!(echoed.other_requirements.is_none());
        assert!(echoed.date_posted.is_none());
    }
}
