use std::collections::HashSet;

use super::dto::Recipe;

/// Flags every recipe whose id is among the caller's favorites.
pub fn mark_favorites<I>(recipes: &mut [Recipe], favorite_ids: I)
where
    I: IntoIterator<Item = i64>,
{
    let favorites: HashSet<i64> = favorite_ids.into_iter().collect();
    for recipe in recipes.iter_mut() {
        recipe.is_favorite = favorites.contains(&recipe.id);
    }
}
