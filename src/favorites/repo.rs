use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{dto::NewFavorite, repo_types::Favorite};
use crate::{db::StoreError, recipes::hash::recipe_id};

/// Persistence of per-user favorites.
#[async_trait]
pub trait FavoriteStore: Send + Sync {
    /// All favorites owned by `user_id`, oldest first.
    async fn list_favorites(&self, user_id: Uuid) -> Result<Vec<Favorite>, StoreError>;

    /// Ids only; what the search merge needs.
    async fn favorite_ids(&self, user_id: Uuid) -> Result<Vec<i64>, StoreError>;

    /// Stores `recipe` for `user_id` under `recipe_id(title)`.
    async fn add_favorite(&self, user_id: Uuid, recipe: &NewFavorite)
        -> Result<Favorite, StoreError>;

    /// Deletes the row matching both ids. Matching nothing is not an error.
    async fn remove_favorite(&self, user_id: Uuid, favorite_id: i64) -> Result<(), StoreError>;
}

pub struct PgFavoriteStore {
    db: PgPool,
}

impl PgFavoriteStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FavoriteStore for PgFavoriteStore {
    async fn list_favorites(&self, user_id: Uuid) -> Result<Vec<Favorite>, StoreError> {
        let rows = sqlx::query_as::<_, Favorite>(
            r#"
            SELECT id, user_id, title, href, ingredients, thumbnail,
                   TRUE AS is_favorite, created_at
            FROM favorites
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn favorite_ids(&self, user_id: Uuid) -> Result<Vec<i64>, StoreError> {
        let ids = sqlx::query_scalar::<_, i64>(r#"SELECT id FROM favorites WHERE user_id = $1"#)
            .bind(user_id)
            .fetch_all(&self.db)
            .await?;
        Ok(ids)
    }

    async fn add_favorite(
        &self,
        user_id: Uuid,
        recipe: &NewFavorite,
    ) -> Result<Favorite, StoreError> {
        let row = sqlx::query_as::<_, Favorite>(
            r#"
            INSERT INTO favorites (id, user_id, title, href, ingredients, thumbnail)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, title, href, ingredients, thumbnail,
                      TRUE AS is_favorite, created_at
            "#,
        )
        .bind(recipe_id(&recipe.title))
        .bind(user_id)
        .bind(&recipe.title)
        .bind(&recipe.href)
        .bind(&recipe.ingredients)
        .bind(&recipe.thumbnail)
        .fetch_one(&self.db)
        .await?;
        Ok(row)
    }

    async fn remove_favorite(&self, user_id: Uuid, favorite_id: i64) -> Result<(), StoreError> {
        sqlx::query(r#"DELETE FROM favorites WHERE id = $1 AND user_id = $2"#)
            .bind(favorite_id)
            .bind(user_id)
            .execute(&self.db)
            .await?;
        Ok(())
    }
}
