use axum::{
    extract::State,
    routing::{delete, get},
    Json, Router,
};
use tracing::{info, instrument};

use super::{
    dto::{NewFavorite, RemovedResponse},
    repo_types::Favorite,
};
use crate::{
    auth::extractors::AuthUser,
    db::StoreError,
    error::AppError,
    extract::{AppJson, AppPath},
    state::AppState,
};

pub fn me_routes() -> Router<AppState> {
    Router::new()
        .route("/me/favorites", get(list_favorites).post(add_favorite))
        .route("/me/favorites/:id", delete(remove_favorite))
}

#[instrument(skip(state))]
pub async fn list_favorites(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Favorite>>, AppError> {
    let favorites = state.favorites.list_favorites(user_id).await?;
    Ok(Json(favorites))
}

#[instrument(skip(state, payload))]
pub async fn add_favorite(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    AppJson(payload): AppJson<NewFavorite>,
) -> Result<Json<Favorite>, AppError> {
    if payload.title.trim().is_empty() {
        return Err(AppError::BadRequest("title is required".into()));
    }

    let favorite = match state.favorites.add_favorite(user_id, &payload).await {
        Ok(f) => f,
        Err(StoreError::Duplicate) => {
            return Err(AppError::Conflict("recipe is already a favorite".into()));
        }
        Err(e) => return Err(e.into()),
    };

    info!(%user_id, favorite_id = favorite.id, "favorite added");
    Ok(Json(favorite))
}

/// Reports `removed: true` whether or not a row matched.
#[instrument(skip(state))]
pub async fn remove_favorite(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    AppPath(id): AppPath<i64>,
) -> Result<Json<RemovedResponse>, AppError> {
    state.favorites.remove_favorite(user_id, id).await?;
    info!(%user_id, favorite_id = id, "favorite removed");
    Ok(Json(RemovedResponse { removed: true }))
}
