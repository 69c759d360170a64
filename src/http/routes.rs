use axum::{
    Router,
    routing::{get, post, put},
};

use crate::{
    http::handlers::{
        create_review_handler, get_recent_reviews_handler, get_reviews_handler,
        like_review_handler,
    },
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/reviews", post(create_review_handler))
        .route("/review", get(get_reviews_handler))
        .route("/review/like", put(like_review_handler))
        .route("/review/last", get(get_recent_reviews_handler))
        .with_state(state)
}
