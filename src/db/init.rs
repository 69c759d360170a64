use crate::{errors::AppError, state::DbClient};

/// Idempotent schema setup, run before the server binds its listener.
pub async fn initialize_schema(db: DbClient) -> Result<(), AppError> {
    tracing::info!("Initializing reviews schema...");

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS reviews (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL,
            game_name TEXT NOT NULL,
            rating INTEGER NOT NULL,
            review TEXT NOT NULL,
            likes INTEGER NOT NULL DEFAULT 0,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
    )
    .execute(&db)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to create reviews table: {}", e)))?;

    Ok(())
}
