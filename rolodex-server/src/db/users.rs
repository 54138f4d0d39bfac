//! User repository
//!
//! One parameterized statement per operation. Update and delete report
//! rows affected rather than failing on a missing id; only get() turns
//! an empty result into NotFound.

use serde::Serialize;
use sqlx::{FromRow, PgPool};

/// User record from the database
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("user not found")]
    NotFound,
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all users, oldest first.
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>("SELECT id, name, email FROM users ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        Ok(users)
    }

    /// Fetch a single user by id.
    pub async fn get(&self, id: i64) -> Result<User, DbError> {
        sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(DbError::NotFound)
    }

    /// Insert a new user, returning the generated id.
    pub async fn create(&self, name: &str, email: &str) -> Result<i64, DbError> {
        let (id,): (i64,) =
            sqlx::query_as("INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id")
                .bind(name)
                .bind(email)
                .fetch_one(self.pool)
                .await?;

        Ok(id)
    }

    /// Update name and email in place, returning rows affected.
    ///
    /// An unknown id affects zero rows and is not an error.
    pub async fn update(&self, id: i64, name: &str, email: &str) -> Result<u64, DbError> {
        let result = sqlx::query("UPDATE users SET name = $1, email = $2 WHERE id = $3")
            .bind(name)
            .bind(email)
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Delete a user by id, returning rows affected.
    ///
    /// An unknown id affects zero rows and is not an error.
    pub async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
