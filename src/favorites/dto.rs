use serde::{Deserialize, Serialize};

/// Body of POST /me/favorites. Extra fields sent by clients (`id`,
/// `isFavorite`) are ignored; the id is always re-derived from the title.
#[derive(Debug, Clone, Deserialize)]
pub struct NewFavorite {
    pub title: String,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub thumbnail: String,
}

#[derive(Debug, Serialize)]
pub struct RemovedResponse {
    pub removed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_search_result_as_body() {
        let body = r#"{"id": 1, "title": "Toast", "href": "h", "ingredients": "bread",
                       "thumbnail": "t", "isFavorite": false}"#;
        let fav: NewFavorite = serde_json::from_str(body).unwrap();
        assert_eq!(fav.title, "Toast");
        assert_eq!(fav.ingredients, "bread");
    }

    #[test]
    fn title_is_required() {
        assert!(serde_json::from_str::<NewFavorite>(r#"{"href": "h"}"#).is_err());
    }
}
