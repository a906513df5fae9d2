//! Upstream recipe search client.
//!
//! One GET per search, no retries. The upstream serves JSON with a
//! `text/javascript` content type, so the body is decoded from raw bytes.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use super::dto::Recipe;

const USER_AGENT: &str = concat!("recipebox/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum RecipeApiError {
    #[error("recipe api request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("recipe api returned status {0}")]
    Status(u16),

    #[error("recipe api returned malformed json: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can answer a recipe search.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    async fn search(&self, term: &str, page: u32) -> Result<Vec<Recipe>, RecipeApiError>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<UpstreamRecipe>,
}

#[derive(Debug, Deserialize)]
struct UpstreamRecipe {
    #[serde(default)]
    title: String,
    #[serde(default)]
    href: String,
    #[serde(default)]
    ingredients: String,
    #[serde(default)]
    thumbnail: String,
}

impl From<UpstreamRecipe> for Recipe {
    fn from(r: UpstreamRecipe) -> Self {
        Recipe::new(r.title, r.href, r.ingredients, r.thumbnail)
    }
}

#[derive(Clone)]
pub struct PuppyClient {
    client: Client,
    base_url: Url,
}

impl PuppyClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("invalid recipe api url {base_url}"))?;
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("build http client")?;
        Ok(Self { client, base_url })
    }

    fn search_url(&self, term: &str, page: u32) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("i", term)
            .append_pair("p", &page.to_string());
        url
    }
}

#[async_trait]
impl RecipeSource for PuppyClient {
    #[instrument(skip(self))]
    async fn search(&self, term: &str, page: u32) -> Result<Vec<Recipe>, RecipeApiError> {
        let url = self.search_url(term, page);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecipeApiError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let recipes = parse_results(&body)?;
        debug!(count = recipes.len(), "recipes fetched");
        Ok(recipes)
    }
}

fn parse_results(body: &[u8]) -> Result<Vec<Recipe>, RecipeApiError> {
    let decoded: SearchResponse = serde_json::from_slice(body)?;
    Ok(decoded.results.into_iter().map(Recipe::from).collect())
}
