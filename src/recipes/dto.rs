use serde::{Deserialize, Serialize};

use super::hash::recipe_id;

/// A recipe as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub href: String,
    pub ingredients: String,
    pub thumbnail: String,
    pub is_favorite: bool,
}

impl Recipe {
    /// Builds an unmarked recipe, deriving its id from the title.
    pub fn new(title: String, href: String, ingredients: String, thumbnail: String) -> Self {
        Self {
            id: recipe_id(&title),
            title,
            href,
            ingredients,
            thumbnail,
            is_favorite: false,
        }
    }
}

/// Query string of the search endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub search: String,
    pub page: Option<u32>,
}

impl SearchParams {
    /// Page to request upstream; absent or zero means the first page.
    pub fn page(&self) -> u32 {
        self.page.filter(|p| *p > 0).unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case() {
        let r = Recipe::new("Toast".into(), "h".into(), "bread".into(), String::new());
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["isFavorite"], false);
        assert_eq!(json["id"], recipe_id("Toast"));
    }

    #[test]
    fn page_defaults_to_one() {
        assert_eq!(SearchParams::default().page(), 1);
        let zero = SearchParams { search: String::new(), page: Some(0) };
        assert_eq!(zero.page(), 1);
        let third = SearchParams { search: String::new(), page: Some(3) };
        assert_eq!(third.page(), 3);
    }
}
