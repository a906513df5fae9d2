use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use super::{
    dto::{Recipe, SearchParams},
    services::mark_favorites,
};
use crate::{
    auth::extractors::AuthUser, error::AppError, extract::AppQuery, state::AppState,
};

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/recipes", get(search_recipes))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me/recipes", get(search_my_recipes))
}

/// GET /recipes: upstream results, never marked as favorites.
#[instrument(skip(state))]
pub async fn search_recipes(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SearchParams>,
) -> Result<Json<Vec<Recipe>>, AppError> {
    let recipes = state.recipes.search(&params.search, params.page()).await?;
    Ok(Json(recipes))
}

/// GET /me/recipes: upstream results annotated with the caller's favorites.
#[instrument(skip(state))]
pub async fn search_my_recipes(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    AppQuery(params): AppQuery<SearchParams>,
) -> Result<Json<Vec<Recipe>>, AppError> {
    let mut recipes = state.recipes.search(&params.search, params.page()).await?;
    let favorite_ids = state.favorites.favorite_ids(user_id).await?;
    mark_favorites(&mut recipes, favorite_ids);

    info!(%user_id, count = recipes.len(), "recipes annotated");
    Ok(Json(recipes))
}
