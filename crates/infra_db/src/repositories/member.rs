//! Member repository
//!
//! A member is the client-side 1:1 extension of a user, keyed by the user's
//! id. `house_rules` is NOT NULL in the schema, so an update that omits it
//! against an existing row fails with a constraint violation from the store;
//! against a missing row the update still succeeds silently (zero rows).

use serde::Serialize;
use sqlx::PgPool;

use core_kernel::UserId;

use crate::error::DatabaseError;
use crate::pagination::Page;

/// A stored member record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Member {
    pub member_user_id: UserId,
    pub house_rules: Option<String>,
}

/// Input for creating a member under an existing user's id
#[derive(Debug, Clone)]
pub struct NewMember {
    pub member_user_id: UserId,
    pub house_rules: String,
}

/// Partial update where every field is optional
#[derive(Debug, Clone, Default)]
pub struct MemberPatch {
    pub house_rules: Option<String>,
}

impl MemberPatch {
    /// Builds the update response: the key plus exactly the supplied fields
    pub fn into_record(self, member_user_id: UserId) -> Member {
        Member {
            member_user_id,
            house_rules: self.house_rules,
        }
    }
}

/// Repository for member records
#[derive(Debug, Clone)]
pub struct MemberRepository {
    pool: PgPool,
}

impl MemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, member: NewMember) -> Result<Member, DatabaseError> {
        let row = sqlx::query_as::<_, Member>(
            r#"
            INSERT INTO members (member_user_id, house_rules)
            VALUES ($1, $2)
            RETURNING member_user_id, house_rules
            "#,
        )
        .bind(member.member_user_id)
        .bind(member.house_rules)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get(&self, member_user_id: UserId) -> Result<Member, DatabaseError> {
        sqlx::query_as::<_, Member>(
            "SELECT member_user_id, house_rules FROM members WHERE member_user_id = $1",
        )
        .bind(member_user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Member"))
    }

    pub async fn list(&self, page: Page) -> Result<Vec<Member>, DatabaseError> {
        let rows = sqlx::query_as::<_, Member>(
            r#"
            SELECT member_user_id, house_rules
            FROM members
            ORDER BY member_user_id
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
        member_user_id: UserId,
        patch: MemberPatch,
    ) -> Result<Member, DatabaseError> {
        sqlx::query("UPDATE members SET house_rules = $2 WHERE member_user_id = $1")
            .bind(member_user_id)
            .bind(&patch.house_rules)
            .execute(&self.pool)
            .await?;

        Ok(patch.into_record(member_user_id))
    }

    pub async fn delete(&self, member_user_id: UserId) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM members WHERE member_user_id = $1")
            .bind(member_user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_echo_with_and_without_rules() {
        let supplied = MemberPatch {
            house_rules: Some("No smoking".to_string()),
        };
        assert_eq!(
            supplied.into_record(UserId::new(2)).house_rules.as_deref(),
            Some("No smoking")
        );

        let empty = MemberPatch::default().into_record(UserId::new(2));
        assert!(empty.house_rules.is_none());
    }
}
