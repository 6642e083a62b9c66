//! User repository
//!
//! Users are the root identity of the marketplace; caregivers, members, and
//! addresses are keyed by a user's id. The `users` table declares every
//! non-key column as nullable, which is why each mutable field of [`User`]
//! is an `Option`: after a partial update, columns the caller did not supply
//! genuinely hold NULL (see [`UserRepository::update`]).

use serde::Serialize;
use sqlx::PgPool;

use core_kernel::UserId;

use crate::error::DatabaseError;
use crate::pagination::Page;

/// A stored user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct User {
    pub user_id: UserId,
    pub email: Option<String>,
    pub given_name: Option<String>,
    pub surname: Option<String>,
    pub city: Option<String>,
    pub phone_number: Option<String>,
    pub profile_description: Option<String>,
    pub password: Option<String>,
}

/// Input for creating a user; the key is assigned by the table sequence
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub given_name: String,
    pub surname: String,
    pub city: String,
    pub phone_number: String,
    pub profile_description: Option<String>,
    /// Stored as an opaque string; hashing is out of scope for this service
    pub password: String,
}

/// Partial update where every field is optional
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub email: Option<String>,
    pub given_name: Option<String>,
    pub surname: Option<String>,
    pub city: Option<String>,
    pub phone_number: Option<String>,
    pub profile_description: Option<String>,
    pub password: Option<String>,
}

impl UserPatch {
    /// Builds the update response: the key plus exactly the supplied fields.
    ///
    /// Unsupplied fields stay `None`, matching the NULLs the UPDATE wrote.
    pub fn into_record(self, user_id: UserId) -> User {
        User {
            user_id,
            email: self.email,
            given_name: self.given_name,
            surname: self.surname,
            city: self.city,
            phone_number: self.phone_number,
            profile_description: self.profile_description,
            password: self.password,
        }
    }
}

/// Repository for user records
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Creates a new repository backed by the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a user and returns the stored record with its generated key
    ///
    /// Keys come from the table sequence: monotonically increasing and never
    /// reused, even after deletion.
    pub async fn create(&self, user: NewUser) -> Result<User, DatabaseError> {
        let row = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, given_name, surname, city, phone_number, profile_description, password)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING user_id, email, given_name, surname, city, phone_number, profile_description, password
            "#,
        )
        .bind(user.email)
        .bind(user.given_name)
        .bind(user.surname)
        .bind(user.city)
        .bind(user.phone_number)
        .bind(user.profile_description)
        .bind(user.password)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Retrieves a user by id
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` when no user has that id.
    pub async fn get(&self, user_id: UserId) -> Result<User, DatabaseError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, email, given_name, surname, city, phone_number, profile_description, password
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("User"))
    }

    /// Lists users in key order with the given offset/limit window
    pub async fn list(&self, page: Page) -> Result<Vec<User>, DatabaseError> {
        let rows = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, email, given_name, surname, city, phone_number, profile_description, password
            FROM users
            ORDER BY user_id
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
    /// from the existing row. The result echoes the patch with the key
    /// attached rather than re-reading the stored row. A key with no matching
    /// row updates zero rows and still succeeds.
    pub async fn update(&self, user_id: UserId, patch: UserPatch) -> Result<User, DatabaseError> {
        sqlx::query(
            r#"
            UPDATE users
            SET email = $2,
                given_name = $3,
                surname = $4,
                city = $5,
                phone_number = $6,
                profile_description = $7,
                password = $8
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .bind(&patch.email)
        .bind(&patch.given_name)
        .bind(&patch.surname)
        .bind(&patch.city)
        .bind(&patch.phone_number)
        .bind(&patch.profile_description)
        .bind(&patch.password)
        .execute(&self.pool)
        .await?;

        Ok(patch.into_record(user_id))
    }

    /// Deletes a user; deleting a missing key succeeds silently
    pub async fn delete(&self, user_id: UserId) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id)
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
        let patch = UserPatch {
            city: Some("Astana".to_string()),
            ..UserPatch::default()
        };

        let echoed = patch.into_record(UserId::new(1));

        assert_eq!(echoed.user_id, UserId::new(1));
        assert_eq!(echoed.city.as_deref(), Some("Astana"));
        assert_eq!(echoed.email, None);
        assert_eq!(echoed.given_name, None);
        assert_eq!(echoed.surname, None);
        assert_eq!(echoed.phone_number, None);
        assert_eq!(echoed.profile_description, None);
        assert_eq!(echoed.password, None);
    }

    #[test]
    fn test_empty_patch_echo_is_all_null() {
        let echoed = UserPatch::default().into_record(UserId::new(3));

        assert_eq!(echoed.user_id, UserId::new(3));
        assert!(echoed.email.is_none());
        assert!(echoed.password.is_none());
    }
}
