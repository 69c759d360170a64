use crate::{errors::AppError, models::Review, state::DbClient};

pub async fn get_reviews_by_game(
    game_name: String,
    db: DbClient,
) -> Result<Vec<Review>, AppError> {
    let reviews = sqlx::query_as::<_, Review>(
        "SELECT id, username, game_name, rating, review, likes, created_at
        FROM reviews
        WHERE game_name = $1
        ORDER BY created_at DESC, id DESC",
    )
    .bind(&game_name)
    .fetch_all(&db)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch reviews: {}", e)))?;

    Ok(reviews)
}

/// The 20 most recent reviews across all games, newest first.
pub async fn get_recent_reviews(db: DbClient) -> Result<Vec<Review>, AppError> {
    let reviews = sqlx::query_as::<_, Review>(
        "SELECT id, username, game_name, rating, review, likes, created_at
        FROM reviews
        ORDER BY created_at DESC, id DESC
        LIMIT 20",
    )
    .fetch_all(&db)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch recent reviews: {}", e)))?;

    Ok(reviews)
}
