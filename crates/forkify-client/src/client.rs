//! Forkify API client implementation

use async_trait::async_trait;
use forkify_core::{Error, RecipeApi, RecipeId, RecipeRecord, RecipeSummary, Result};
use reqwest::{StatusCode, Url};

use crate::config::ClientConfig;
use crate::wire::{RecipeResponse, SearchResponse};

/// Forkify API client.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ForkifyClient {
    http: reqwest::Client,
    base_url: String,
}

impl ForkifyClient {
    /// Create a new client instance
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;

        let base_url = config.trimmed_base_url().to_string();
        Url::parse(&base_url)
            .map_err(|e| Error::config(format!("Invalid API base URL '{base_url}': {e}")))?;

        Ok(Self { http, base_url })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> std::result::Result<Url, String> {
        Url::parse_with_params(&format!("{}/{path}", self.base_url), params)
            .map_err(|e| e.to_string())
    }
}

#[async_trait]
impl RecipeApi for ForkifyClient {
    async fn search_recipes(&self, query: &str) -> Result<Vec<RecipeSummary>> {
        let url = self
            .endpoint("search", &[("q", query)])
            .map_err(|e| Error::search(query, e))?;
        tracing::debug!(%url, "GET search");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::search_with_source(query, "request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(query, status = status.as_u16(), "Search rejected by API");
            return Err(Error::http(status.as_u16(), format!("search '{query}'")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::search_with_source(query, "failed to read body", e))?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;

        Ok(parsed.recipes.into_iter().map(RecipeSummary::from).collect())
    }

    async fn get_recipe(&self, id: &RecipeId) -> Result<RecipeRecord> {
        let url = self
            .endpoint("get", &[("rId", id.as_str())])
            .map_err(|e| Error::fetch(id.as_str(), e))?;
        tracing::debug!(%url, "GET recipe");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::fetch_with_source(id.as_str(), "request failed", e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::not_found(id.as_str()));
        }
        if !status.is_success() {
            tracing::warn!(recipe_id = %id, status = status.as_u16(), "Recipe rejected by API");
            return Err(Error::http(status.as_u16(), format!("recipe {id}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::fetch_with_source(id.as_str(), "failed to read body", e))?;
        let parsed: RecipeResponse = serde_json::from_str(&body)?;

        Ok(parsed.recipe.into())
    }
}
