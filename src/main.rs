#[tokio::main]
async fn main() {
    game_reviews_be::start_server().await;
}
