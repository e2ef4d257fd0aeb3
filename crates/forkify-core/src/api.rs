//! The remote recipe API seam.
//!
//! [`RecipeApi`] is the only way the core talks to the outside world. The
//! HTTP implementation lives in `forkify-client`; [`MockRecipeApi`] serves
//! canned data for tests and offline demos.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::types::RecipeId;
use crate::{Error, Result};

/// Lightweight search-result representation of a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    /// Recipe id on the remote API
    pub id: RecipeId,

    /// Recipe title
    pub title: String,

    /// Publisher of the recipe
    pub author: String,

    /// Image URL
    pub image: String,
}

/// Full recipe record as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRecord {
    /// Recipe id on the remote API
    pub id: RecipeId,

    /// Recipe title
    pub title: String,

    /// Publisher of the recipe
    pub author: String,

    /// Source URL of the original recipe
    pub url: String,

    /// Image URL
    pub image: String,

    /// Raw ingredient lines, in recipe order
    pub ingredients: Vec<String>,

    /// Servings, when the API reports them
    pub servings: Option<u32>,
}

/// Access to the remote recipe search API.
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Search recipes by keyword.
    async fn search_recipes(&self, query: &str) -> Result<Vec<RecipeSummary>>;

    /// Fetch one full recipe by id.
    async fn get_recipe(&self, id: &RecipeId) -> Result<RecipeRecord>;
}

#[async_trait]
impl<T: RecipeApi + ?Sized> RecipeApi for Arc<T> {
    async fn search_recipes(&self, query: &str) -> Result<Vec<RecipeSummary>> {
        (**self).search_recipes(query).await
    }

    async fn get_recipe(&self, id: &RecipeId) -> Result<RecipeRecord> {
        (**self).get_recipe(id).await
    }
}

/// In-memory [`RecipeApi`] with canned data.
///
/// Searches match a query against recipe titles, case-insensitively.
/// Failures can be injected per query or per recipe id, and every call can
/// be slowed down to exercise overlapping requests.
#[derive(Default)]
pub struct MockRecipeApi {
    recipes: Vec<RecipeRecord>,
    failing_queries: Vec<String>,
    failing_ids: Vec<RecipeId>,
    delays: HashMap<String, Duration>,
    search_calls: AtomicUsize,
    recipe_calls: AtomicUsize,
    requested: Mutex<Vec<String>>,
}

impl MockRecipeApi {
    /// Creates a mock serving the given recipes.
    pub fn new(recipes: Vec<RecipeRecord>) -> Self {
        Self {
            recipes,
            ..Default::default()
        }
    }

    /// Makes searches for `query` fail with a search error.
    pub fn with_failing_query(mut self, query: impl Into<String>) -> Self {
        self.failing_queries.push(query.into());
        self
    }

    /// Makes fetches of `id` fail with a fetch error.
    pub fn with_failing_recipe(mut self, id: impl Into<RecipeId>) -> Self {
        self.failing_ids.push(id.into());
        self
    }

    /// Delays answers for a query or recipe id by `delay`.
    pub fn with_delay(mut self, key: impl Into<String>, delay: Duration) -> Self {
        self.delays.insert(key.into(), delay);
        self
    }

    /// Number of search calls made so far.
    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    /// Number of recipe calls made so far.
    pub fn recipe_calls(&self) -> usize {
        self.recipe_calls.load(Ordering::SeqCst)
    }

    /// Every query and recipe id requested, in call order.
    pub fn requested(&self) -> Vec<String> {
        self.requested
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    fn record(&self, key: &str) {
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(key.to_string());
        }
    }

    async fn pause(&self, key: &str) {
        if let Some(delay) = self.delays.get(key) {
            tokio::time::sleep(*delay).await;
        }
    }
}

#[async_trait]
impl RecipeApi for MockRecipeApi {
    async fn search_recipes(&self, query: &str) -> Result<Vec<RecipeSummary>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.record(query);
        self.pause(query).await;

        if self.failing_queries.iter().any(|q| q == query) {
            return Err(Error::search(query, "injected failure"));
        }

        let needle = query.to_lowercase();
        Ok(self
            .recipes
            .iter()
            .filter(|r| r.title.to_lowercase().contains(&needle))
            .map(|r| RecipeSummary {
                id: r.id.clone(),
                title: r.title.clone(),
                author: r.author.clone(),
                image: r.image.clone(),
            })
            .collect())
    }

    async fn get_recipe(&self, id: &RecipeId) -> Result<RecipeRecord> {
        self.recipe_calls.fetch_add(1, Ordering::SeqCst);
        self.record(id.as_str());
        self.pause(id.as_str()).await;

        if self.failing_ids.contains(id) {
            return Err(Error::fetch(id.as_str(), "injected failure"));
        }

        self.recipes
            .iter()
            .find(|r| &r.id == id)
            .cloned()
            .ok_or_else(|| Error::not_found(id.as_str()))
    }
}
