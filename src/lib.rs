pub mod db;
pub mod errors;
pub mod http;
mod middleware;
pub mod models;
pub mod state;

use axum::{Router, middleware as axum_middleware};
use middleware::{cors_layer, create_global_rate_limiter, rate_limit_middleware};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use state::AppState;
use std::net::SocketAddr;
use std::str::FromStr;

pub async fn start_server() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://reviews.db".to_string());

    let options = SqliteConnectOptions::from_str(&database_url)
        .expect("Invalid DATABASE_URL")
        .create_if_missing(true);

    let db = SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .expect("Failed to open database");

    // Schema must exist before the listener starts accepting requests
    if let Err(e) = db::init::initialize_schema(db.clone()).await {
        tracing::error!("Failed to initialize schema: {}", e);
        panic!("Failed to initialize schema: {}", e);
    }

    let state = AppState { db };

    let global_rate_limiter = create_global_rate_limiter();

    let app = Router::new()
        .merge(http::create_http_routes(state))
        .layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(global_rate_limiter.clone(), req, next)
        }))
        .layer(cors_layer())
        .fallback(|| async { "404 Not Found" });

    let port = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3001);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("Failed to bind address");

    tracing::info!("Review server listening on 0.0.0.0:{port}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
