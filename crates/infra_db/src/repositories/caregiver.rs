//! Caregiver repository
//!
//! A caregiver is a 1:1 profile extension of a user. Its key is the user's
//! id, supplied by the caller at creation time and never generated here; the
//! table's primary-key constraint is the only uniqueness enforcement, and a
//! collision is rejected as a duplicate entry.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;

use core_kernel::UserId;

use crate::error::DatabaseError;
use crate::pagination::Page;

/// A stored caregiver profile
///
/// `hourly_rate` is NUMERIC(5,2) in the schema: up to five significant
/// digits, exactly two of them fractional. It is stored and round-tripped,
/// never computed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Caregiver {
    pub caregiver_user_id: UserId,
    /// Base64-encoded photo payload
    pub photo: Option<String>,
    pub gender: Option<String>,
    pub caregiving_type: Option<String>,
    pub hourly_rate: Option<Decimal>,
}

/// Input for creating a caregiver profile under an existing user's id
#[derive(Debug, Clone)]
pub struct NewCaregiver {
    pub caregiver_user_id: UserId,
    pub photo: Option<String>,
    pub gender: String,
    pub caregiving_type: String,
    pub hourly_rate: Decimal,
}

/// Partial update where every field is optional
#[derive(Debug, Clone, Default)]
pub struct CaregiverPatch {
    pub photo: Option<String>,
    pub gender: Option<String>,
    pub caregiving_type: Option<String>,
    pub hourly_rate: Option<Decimal>,
}

impl CaregiverPatch {
    /// Builds the update response: the key plus exactly the supplied fields
    pub fn into_record(self, caregiver_user_id: UserId) -> Caregiver {
        Caregiver {
            caregiver_user_id,
            photo: self.photo,
            gender: self.gender,
            caregiving_type: self.caregiving_type,
            hourly_rate: self.hourly_rate,
        }
    }
}

/// Repository for caregiver profiles
#[derive(Debug, Clone)]
pub struct CaregiverRepository {
    pool: PgPool,
}

impl CaregiverRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a caregiver profile keyed by the caller-supplied user id
    pub async fn create(&self, caregiver: NewCaregiver) -> Result<Caregiver, DatabaseError> {
        let row = sqlx::query_as::<_, Caregiver>(
            r#"
            INSERT INTO caregivers (caregiver_user_id, photo, gender, caregiving_type, hourly_rate)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING caregiver_user_id, photo, gender, caregiving_type, hourly_rate
            "#,
        )
        .bind(caregiver.caregiver_user_id)
        .bind(caregiver.photo)
        .bind(caregiver.gender)
        .bind(caregiver.caregiving_type)
        .bind(caregiver.hourly_rate)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get(&self, caregiver_user_id: UserId) -> Result<Caregiver, DatabaseError> {
        sqlx::query_as::<_, Caregiver>(
            r#"
            SELECT caregiver_user_id, photo, gender, caregiving_type, hourly_rate
            FROM caregivers
            WHERE caregiver_user_id = $1
            "#,
        )
        .bind(caregiver_user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Caregiver"))
    }

    pub async fn list(&self, page: Page) -> Result<Vec<Caregiver>, DatabaseError> {
        let rows = sqlx::query_as::<_, Caregiver>(
            r#"
            SELECT caregiver_user_id, photo, gender, caregiving_type, hourly_rate
            FROM caregivers
            ORDER BY caregiver_user_id
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(page.offset())
        .bind(page.limit())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Overwrites every mutable column from the patch; see the module docs
    /// of [`crate::repositories`] for the shared update contract
    pub async fn update(
        &self,
        caregiver_user_id: UserId,
        patch: CaregiverPatch,
    ) -> Result<Caregiver, DatabaseError> {
        sqlx::query(
            r#"
            UPDATE caregivers
            SET photo = $2, gender = $3, caregiving_type = $4, hourly_rate = $5
            WHERE caregiver_user_id = $1
            "#,
        )
        .bind(caregiver_user_id)
        .bind(&patch.photo)
        .bind(&patch.gender)
        .bind(&patch.caregiving_type)
        .bind(patch.hourly_rate)
        .execute(&self.pool)
        .await?;

        Ok(patch.into_record(caregiver_user_id))
    }

    pub async fn delete(&self, caregiver_user_id: UserId) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM caregivers WHERE caregiver_user_id = $1")
            .bind(caregiver_user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_patch_echo_drops_unsupplied_fields() {
        let patch = CaregiverPatch {
            hourly_rate: Some(dec!(25.50)),
            ..CaregiverPatch::default()
        };

        let echoed = patch.into_record(UserId::new(4));

        assert_eq!(echoed.caregiver_user_id, UserId::new(4));
        assert_eq!(echoed.hourly_rate, Some(dec!(25.50)));
        assert!(echoed.photo.is_none());
        assert!(echoed.gender.is_none());
        assert!(echoed.caregiving_type.is_none());
    }

    #[test]
    fn test_rate_keeps_two_fractional_digits() {
        let rate = dec!(999.99);
        assert_eq!(rate.scale(), 2);
        assert_eq!(rate.to_string(), "999.99");
    }
}
