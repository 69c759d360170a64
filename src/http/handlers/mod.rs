pub mod review;

pub use review::{
    create_review_handler, get_recent_reviews_handler, get_reviews_handler, like_review_handler,
};
