//! Startup schema setup for the users table

use sqlx::PgPool;

/// Create the users table if it does not exist.
///
/// Runs at startup before the server binds. The id column is generated
/// by the database; callers never supply one on insert.
pub async fn init(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring users table exists");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
