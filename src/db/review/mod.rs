pub mod get;
pub mod post;
pub mod put;

pub use get::{get_recent_reviews, get_reviews_by_game};
pub use post::create_review;
pub use put::like_review;
