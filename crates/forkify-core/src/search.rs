//! Search sessions.
//!
//! A [`Search`] holds one query and every result it produced. Pages are never
//! stored separately: they are slices of the full result list, computed at
//! render time from a page size.

use serde::{Deserialize, Serialize};

use crate::api::{RecipeApi, RecipeSummary};
use crate::Result;

/// Default number of results shown per page.
pub const RESULTS_PER_PAGE: usize = 10;

/// A search query and its results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Search {
    /// The query as entered
    pub query: String,

    /// Every result, in API order
    pub recipes: Vec<RecipeSummary>,

    /// Page currently shown, 1-based
    pub page: usize,
}

/// Previous/next page numbers to offer next to a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageButtons {
    /// Previous page, if there is one
    pub prev: Option<usize>,
    /// Next page, if there is one
    pub next: Option<usize>,
}

impl Search {
    /// Creates an empty session for `query`.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            recipes: Vec::new(),
            page: 1,
        }
    }

    /// Runs the query against the API and stores the results.
    ///
    /// Every call goes to the API; nothing is cached. On failure the
    /// previous results are left as they were.
    pub async fn get_results<A>(&mut self, api: &A) -> Result<()>
    where
        A: RecipeApi + ?Sized,
    {
        tracing::debug!(query = %self.query, "Searching recipes");
        let recipes = api.search_recipes(&self.query).await?;
        tracing::info!(query = %self.query, results = recipes.len(), "Search completed");
        self.recipes = recipes;
        self.page = 1;
        Ok(())
    }

    /// Number of pages at `per_page` results per page.
    pub fn page_count(&self, per_page: usize) -> usize {
        self.recipes.len().div_ceil(per_page.max(1))
    }

    /// Results on `page` (1-based). Out-of-range pages are empty.
    pub fn page_results(&self, page: usize, per_page: usize) -> &[RecipeSummary] {
        let per_page = per_page.max(1);
        let start = page.saturating_sub(1).saturating_mul(per_page);
        if page == 0 || start >= self.recipes.len() {
            return &[];
        }
        let end = (start + per_page).min(self.recipes.len());
        &self.recipes[start..end]
    }

    /// Navigation buttons for `page`.
    pub fn buttons(&self, page: usize, per_page: usize) -> PageButtons {
        let pages = self.page_count(per_page);
        if pages <= 1 || page == 0 || page > pages {
            return PageButtons::default();
        }
        PageButtons {
            prev: (page > 1).then(|| page - 1),
            next: (page < pages).then(|| page + 1),
        }
    }
}
