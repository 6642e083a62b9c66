//! Address repository
//!
//! One address per member, keyed by the member's user id. All three street
//! fields are NOT NULL in the schema.

use serde::Serialize;
use sqlx::PgPool;

use core_kernel::UserId;

use crate::error::DatabaseError;
use crate::pagination::Page;

/// A stored address record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Address {
    pub member_user_id: UserId,
    pub house_number: Option<String>,
    pub street: Option<String>,
    pub town: Option<String>,
}

/// Input for creating a member's address
#[derive(Debug, Clone)]
pub struct NewAddress {
    pub member_user_id: UserId,
    pub house_number: String,
    pub street: String,
    pub town: String,
}

/// Partial update where every field is optional
#[derive(Debug, Clone, Default)]
pub struct AddressPatch {
    pub house_number: Option<String>,
    pub street: Option<String>,
    pub town: Option<String>,
}

impl AddressPatch {
    /// Builds the update response: the key plus exactly the supplied fields
    pub fn into_record(self, member_user_id: UserId) -> Address {
        Address {
            member_user_id,
            house_number: self.house_number,
            street: self.street,
            town: self.town,
        }
    }
}

/// Repository for member addresses
#[derive(Debug, Clone)]
pub struct AddressRepository {
    pool: PgPool,
}

impl AddressRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, address: NewAddress) -> Result<Address, DatabaseError> {
        let row = sqlx::query_as::<_, Address>(
            r#"
            INSERT INTO address (member_user_id, house_number, street, town)
            VALUES ($1, $2, $3, $4)
            RETURNING member_user_id, house_number, street, town
            "#,
        )
        .bind(address.member_user_id)
        .bind(address.house_number)
        .bind(address.street)
        .bind(address.town)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get(&self, member_user_id: UserId) -> Result<Address, DatabaseError> {
        sqlx::query_as::<_, Address>(
            r#"
            SELECT member_user_id, house_number, street, town
            FROM address
            WHERE member_user_id = $1
            "#,
        )
        .bind(member_user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Address"))
    }

    pub async fn list(&self, page: Page) -> Result<Vec<Address>, DatabaseError> {
        let rows = sqlx::query_as::<_, Address>(
            r#"
            SELECT member_user_id, house_number, street, town
            FROM address
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
        patch: AddressPatch,
    ) -> Result<Address, DatabaseError> {
        sqlx::query(
            r#"
            UPDATE address
            SET house_number = $2, street = $3, town = $4
            WHERE member_user_id = $1
            "#,
        )
        .bind(member_user_id)
        .bind(&patch.house_number)
        .bind(&patch.street)
        .bind(&patch.town)
        .execute(&self.pool)
        .await?;

        Ok(patch.into_record(member_user_id))
    }

    pub async fn delete(&self, member_user_id: UserId) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM address WHERE member_user_id = $1")
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
    fn test_patch_echo_keeps_only_supplied_fields() {
        let patch = AddressPatch {
            town: Some("Almaty".to_string()),
            ..AddressPatch::default()
        };

        let echoed = patch.into_record(UserId::new(11));

        assert_eq!(echoed.member_user_id, UserId::new(11));
        assert_eq!(echoed.town.as_deref(), Some("Almaty"));
        assert!(echoed.house_number.is_none());
        assert!(echoed.street.is_none());
    }
}
