use crate::{errors::AppError, models::Review, state::DbClient};

pub async fn create_review(
    username: String,
    game_name: String,
    rating: i32,
    review: String,
    db: DbClient,
) -> Result<Review, AppError> {
    let now = chrono::Utc::now();

    let inserted = sqlx::query_as::<_, Review>(
        "INSERT INTO reviews (username, game_name, rating, review, likes, created_at)
        VALUES ($1, $2, $3, $4, 0, $5)
        RETURNING id, username, game_name, rating, review, likes, created_at",
    )
    .bind(&username)
    .bind(&game_name)
    .bind(rating)
    .bind(&review)
    .bind(now)
    .fetch_one(&db)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to insert review: {}", e)))?;

    tracing::info!(
        "Stored review {} by {} for {} (rating {})",
        inserted.id,
        inserted.username,
        inserted.game_name,
        inserted.rating
    );

    Ok(inserted)
}
