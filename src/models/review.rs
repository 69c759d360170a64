use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user-submitted rating and text comment about a named game.
///
/// Serialized field names match the `reviews` table columns, so the same
/// struct is both the row mapping and the wire format.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: i64,
    pub username: String,
    pub game_name: String,
    pub rating: i32,
    pub review: String,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
}
