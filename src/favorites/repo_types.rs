use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// A recipe pinned by a user. `id` is the recipe's derived id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: i64,
    pub user_id: Uuid,
    pub title: String,
    pub href: String,
    pub ingredients: String,
    pub thumbnail: String,
    pub is_favorite: bool, // always true for stored rows
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
