use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::{
    db::review::{create_review, get_recent_reviews, get_reviews_by_game, like_review},
    models::Review,
    state::AppState,
};

#[derive(Deserialize)]
pub struct CreateReviewPayload {
    pub username: String,
    pub game_name: String,
    pub rating: i32,
    pub review: String,
}

#[derive(Deserialize)]
pub struct GameNameQuery {
    pub game_name: String,
}

#[derive(Deserialize)]
pub struct LikeReviewPayload {
    pub username: String,
    pub game_name: String,
}

#[derive(Serialize)]
pub struct ApiMessage {
    pub message: String,
}

pub async fn create_review_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateReviewPayload>,
) -> Result<(StatusCode, Json<ApiMessage>), (StatusCode, String)> {
    match create_review(
        payload.username,
        payload.game_name,
        payload.rating,
        payload.review,
        state.db.clone(),
    )
    .await
    {
        Ok(review) => {
            tracing::info!("Review created with ID: {}", review.id);
            Ok((
                StatusCode::CREATED,
                Json(ApiMessage {
                    message: "Review added successfully!".into(),
                }),
            ))
        }
        Err(err) => {
            tracing::error!("Error creating review: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn get_reviews_handler(
    State(state): State<AppState>,
    Query(query): Query<GameNameQuery>,
) -> Result<Json<Vec<Review>>, (StatusCode, String)> {
    let reviews = get_reviews_by_game(query.game_name, state.db.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching reviews: {}", e);
            e.to_response()
        })?;

    Ok(Json(reviews))
}

pub async fn like_review_handler(
    State(state): State<AppState>,
    Json(payload): Json<LikeReviewPayload>,
) -> Result<Json<ApiMessage>, (StatusCode, String)> {
    like_review(payload.username, payload.game_name, state.db.clone())
        .await
        .map_err(|err| {
            tracing::error!("Error adding like: {}", err);
            err.to_response()
        })?;

    Ok(Json(ApiMessage {
        message: "Like added successfully!".into(),
    }))
}

pub async fn get_recent_reviews_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Review>>, (StatusCode, String)> {
    let reviews = get_recent_reviews(state.db.clone()).await.map_err(|e| {
        tracing::error!("Error fetching recent reviews: {}", e);
        e.to_response()
    })?;

    Ok(Json(reviews))
}
