use std::sync::Arc;

use crate::auth::repo::{PgUserStore, UserStore};
use crate::config::AppConfig;
use crate::db;
use crate::favorites::repo::{FavoriteStore, PgFavoriteStore};
use crate::recipes::client::{PuppyClient, RecipeSource};

/// Everything a handler needs, cloned cheaply per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserStore>,
    pub favorites: Arc<dyn FavoriteStore>,
    pub recipes: Arc<dyn RecipeSource>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let pool = db::connect(&config).await?;
        db::migrate(&pool).await;

        let recipes =
            Arc::new(PuppyClient::new(&config.recipe_api.base_url)?) as Arc<dyn RecipeSource>;

        Ok(Self::from_parts(
            config,
            Arc::new(PgUserStore::new(pool.clone())),
            Arc::new(PgFavoriteStore::new(pool)),
            recipes,
        ))
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        users: Arc<dyn UserStore>,
        favorites: Arc<dyn FavoriteStore>,
        recipes: Arc<dyn RecipeSource>,
    ) -> Self {
        Self {
            config,
            users,
            favorites,
            recipes,
        }
    }

    /// State backed by in-memory stores and an empty recipe source.
    #[cfg(test)]
    pub fn fake() -> Self {
        crate::testing::TestApp::new(crate::testing::CannedRecipes::default()).state
    }
}
