use crate::{errors::AppError, state::DbClient};

pub async fn like_review(
    username: String,
    game_name: String,
    db: DbClient,
) -> Result<(), AppError> {
    let existing = sqlx::query_scalar::<_, i64>(
        "SELECT id FROM reviews WHERE game_name = $1 AND username = $2 LIMIT 1",
    )
    .bind(&game_name)
    .bind(&username)
    .fetch_optional(&db)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to look up review: {}", e)))?;

    if existing.is_none() {
        return Err(AppError::NotFound("Review not found!".into()));
    }

    // There is no unique key on (username, game_name): if the user posted
    // several reviews for this game, the like lands on every one of them.
    sqlx::query("UPDATE reviews SET likes = likes + 1 WHERE game_name = $1 AND username = $2")
        .bind(&game_name)
        .bind(&username)
        .execute(&db)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to add like: {}", e)))?;

    Ok(())
}
