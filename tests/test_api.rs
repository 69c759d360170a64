use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use game_reviews_be::db::init::initialize_schema;
use game_reviews_be::http::create_http_routes;
use game_reviews_be::state::AppState;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

async fn test_app() -> Router {
    let db = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    initialize_schema(db.clone())
        .await
        .expect("Failed to initialize schema");

    create_http_routes(AppState { db })
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_post_review_returns_created_with_message() {
    let app = test_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/reviews",
            json!({
                "username": "Ana",
                "game_name": "Celeste",
                "rating": 5,
                "review": "Great"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Review added successfully!");
}

#[tokio::test]
async fn test_post_review_with_missing_field_is_rejected() {
    let app = test_app().await;

    // No rating: the Json extractor rejects before the handler runs
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/reviews",
            json!({
                "username": "Ana",
                "game_name": "Celeste",
                "review": "Great"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Nothing was stored
    let response = app.oneshot(get_request("/review/last")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_get_reviews_requires_game_name() {
    let app = test_app().await;

    let response = app.oneshot(get_request("/review")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_review_lifecycle_post_get_like() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/reviews",
            json!({
                "username": "Ana",
                "game_name": "Celeste",
                "rating": 5,
                "review": "Great"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(get_request("/review?game_name=Celeste"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["username"], "Ana");
    assert_eq!(body[0]["game_name"], "Celeste");
    assert_eq!(body[0]["rating"], 5);
    assert_eq!(body[0]["review"], "Great");
    assert_eq!(body[0]["likes"], 0);

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/review/like",
            json!({"username": "Ana", "game_name": "Celeste"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Like added successfully!");

    let response = app
        .oneshot(get_request("/review?game_name=Celeste"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body[0]["likes"], 1);
}

#[tokio::test]
async fn test_like_unknown_pair_returns_not_found() {
    let app = test_app().await;

    let response = app
        .oneshot(json_request(
            "PUT",
            "/review/like",
            json!({"username": "Nobody", "game_name": "Nothing"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"Review not found!");
}

#[tokio::test]
async fn test_recent_reviews_endpoint_caps_at_twenty() {
    let app = test_app().await;

    for i in 0..22 {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/reviews",
                json!({
                    "username": format!("user{}", i),
                    "game_name": "Celeste",
                    "rating": 4,
                    "review": "short note"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.oneshot(get_request("/review/last")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let reviews = body.as_array().unwrap();
    assert_eq!(reviews.len(), 20);
    // Newest first: the last submission leads the list
    assert_eq!(reviews[0]["username"], "user21");
}
