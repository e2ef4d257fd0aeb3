//! Controllers.
//!
//! [`Controller`] turns user intents into state changes and view updates.
//! It owns the [`AppState`] behind a Tokio mutex that is released before
//! every API call, so several operations can be in flight at once; the
//! state's tickets decide which answer is kept.
//!
//! API failures never escape: the loader is cleared, the user sees one
//! generic alert and the details go to the log.

use forkify_core::search::RESULTS_PER_PAGE;
use forkify_core::{
    AppState, ItemId, Like, Recipe, RecipeApi, RecipeId, Search, ServingsUpdate, parse_count,
};
use tokio::sync::Mutex;

use crate::view::{Region, View};

/// Alert shown when a search fails.
pub const SEARCH_ALERT: &str = "error processing the search!";

/// Alert shown when a recipe fails to load.
pub const RECIPE_ALERT: &str = "error processing the recipe!";

/// Session controller over an API and a view.
pub struct Controller<A, V> {
    api: A,
    view: V,
    state: Mutex<AppState>,
    per_page: usize,
}

impl<A: RecipeApi, V: View> Controller<A, V> {
    /// Creates a controller with an empty session.
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            state: Mutex::new(AppState::new()),
            per_page: RESULTS_PER_PAGE,
        }
    }

    /// Sets the number of search results per page.
    pub fn with_results_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// The API in use.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// The view in use.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Runs `f` against the current state.
    pub async fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        let state = self.state.lock().await;
        f(&state)
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    /// Searches for `query` and renders the first page of results.
    ///
    /// Blank queries are ignored. Returns whether results were shown.
    pub async fn control_search(&self, query: &str) -> bool {
        self.control_search_at(query, 1).await
    }

    /// Searches for `query` and renders only `page` of the results.
    ///
    /// A page outside the results keeps the search but renders nothing and
    /// returns `false`.
    pub async fn control_search_at(&self, query: &str, page: usize) -> bool {
        let query = query.trim();
        if query.is_empty() {
            tracing::debug!("Ignoring empty search");
            return false;
        }

        self.view.clear_input();
        self.view.clear_results();
        self.view.render_loader(Region::Results);
        let ticket = self.state.lock().await.begin_search(query);

        let mut search = Search::new(query);
        let outcome = search.get_results(&self.api).await;

        let mut state = self.state.lock().await;
        match outcome {
            Ok(()) => {
                if !state.finish_search(ticket, search) {
                    return false;
                }
                self.view.clear_loader(Region::Results);
                let Some(search) = state.search_mut() else {
                    return false;
                };
                // page 1 always renders, if only to say nothing was found
                if page != 1 && (page == 0 || page > search.page_count(self.per_page)) {
                    tracing::debug!(page, "Requested page outside results");
                    return false;
                }
                search.page = page;
                self.view.render_results(&search.recipes, page, self.per_page);
                true
            }
            Err(e) => {
                tracing::warn!(query, error = %e, "Search failed");
                if state.is_current(ticket) {
                    self.view.clear_loader(Region::Results);
                    self.view.alert(SEARCH_ALERT);
                }
                false
            }
        }
    }

    /// Shows `page` of the current results.
    ///
    /// Does nothing without a search or for a page outside the results.
    pub async fn goto_page(&self, page: usize) -> bool {
        let mut state = self.state.lock().await;
        let Some(search) = state.search_mut() else {
            return false;
        };
        if page == 0 || page > search.page_count(self.per_page) {
            tracing::debug!(page, "Ignoring page outside results");
            return false;
        }
        search.page = page;
        self.view.clear_results();
        self.view.render_results(&search.recipes, page, self.per_page);
        true
    }

    // ------------------------------------------------------------------
    // Recipe
    // ------------------------------------------------------------------

    /// Loads and renders the recipe `id`.
    ///
    /// A blank id is ignored. Returns whether the recipe was shown.
    pub async fn control_recipe(&self, id: &str) -> bool {
        self.load_recipe(id, None).await
    }

    /// Loads the recipe `id`, rescales it to `servings` and renders it once.
    pub async fn control_recipe_scaled(&self, id: &str, servings: u32) -> bool {
        self.load_recipe(id, Some(servings)).await
    }

    async fn load_recipe(&self, id: &str, servings: Option<u32>) -> bool {
        let id = RecipeId::new(id.trim());
        if id.is_blank() {
            return false;
        }

        self.view.clear_recipe();
        self.view.render_loader(Region::Recipe);
        let ticket = {
            let mut state = self.state.lock().await;
            if state.search().is_some() {
                self.view.highlight_selected(&id);
            }
            state.begin_recipe(id.clone())
        };

        let outcome = Recipe::load(&self.api, &id).await;

        let mut state = self.state.lock().await;
        match outcome {
            Ok(recipe) => {
                let liked = state.likes().is_liked(&recipe.id);
                if !state.finish_recipe(ticket, recipe) {
                    return false;
                }
                self.view.clear_loader(Region::Recipe);
                if let Some(recipe) = state.recipe_mut() {
                    if let Some(servings) = servings {
                        recipe.scale_to(servings);
                    }
                    self.view.render_recipe(recipe, liked);
                }
                true
            }
            Err(e) => {
                tracing::warn!(recipe_id = %id, error = %e, "Recipe load failed");
                if state.fail_recipe(ticket) {
                    self.view.clear_loader(Region::Recipe);
                    self.view.alert(RECIPE_ALERT);
                }
                false
            }
        }
    }

    /// Adds one serving to the open recipe.
    pub async fn increase_servings(&self) -> bool {
        self.update_servings(ServingsUpdate::Inc).await
    }

    /// Removes one serving from the open recipe, never going below one.
    pub async fn decrease_servings(&self) -> bool {
        self.update_servings(ServingsUpdate::Dec).await
    }

    async fn update_servings(&self, update: ServingsUpdate) -> bool {
        let mut state = self.state.lock().await;
        let Some(recipe) = state.recipe_mut() else {
            return false;
        };
        if update == ServingsUpdate::Dec && recipe.servings <= 1 {
            return false;
        }
        recipe.update_servings(update);
        self.view.update_servings_ingredients(recipe);
        true
    }

    /// Rescales the open recipe to `servings` and re-renders it.
    pub async fn set_servings(&self, servings: u32) -> bool {
        let mut state = self.state.lock().await;
        let Some(recipe) = state.recipe_mut() else {
            return false;
        };
        if !recipe.scale_to(servings) {
            return false;
        }
        self.view.update_servings_ingredients(recipe);
        true
    }

    // ------------------------------------------------------------------
    // Shopping list
    // ------------------------------------------------------------------

    /// Copies every ingredient of the open recipe into the shopping list.
    ///
    /// Ingredients without a quantity are added with a count of one.
    /// Returns the number of items added.
    pub async fn control_list(&self) -> usize {
        let mut state = self.state.lock().await;
        let Some((recipe, list)) = state.recipe_and_list() else {
            tracing::debug!("No recipe to add to the list");
            return 0;
        };
        for ing in &recipe.ingredients {
            let item = list.add_item(ing.quantity.unwrap_or(1.0), ing.unit_str(), &ing.name);
            self.view.render_item(&item);
        }
        recipe.ingredients.len()
    }

    /// Renders the shopping list as it stands.
    pub async fn show_list(&self) {
        let mut state = self.state.lock().await;
        self.view.render_list(state.list_mut_or_create());
    }

    /// Removes an item from the list and the view. Unknown ids are ignored.
    pub async fn delete_item(&self, id: &ItemId) -> bool {
        let mut state = self.state.lock().await;
        let removed = state.list_mut().and_then(|list| list.delete_item(id));
        if removed.is_none() {
            return false;
        }
        self.view.delete_item(id);
        true
    }

    /// Sets an item's count from user input and re-renders the item.
    ///
    /// Input that is not a finite number is ignored; negative numbers count
    /// as zero. Returns whether an item was updated.
    pub async fn update_count(&self, id: &ItemId, raw: &str) -> bool {
        let count = match parse_count(raw) {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!(item_id = %id, error = %e, "Ignoring invalid count");
                return false;
            }
        };
        let mut state = self.state.lock().await;
        let Some(list) = state.list_mut() else {
            return false;
        };
        if !list.update_count(id, count) {
            return false;
        }
        if let Some(item) = list.get(id) {
            self.view.update_item(item);
        }
        true
    }

    // ------------------------------------------------------------------
    // Likes
    // ------------------------------------------------------------------

    /// Likes the open recipe, or unlikes it if already liked.
    ///
    /// Returns the new liked state, or `None` without an open recipe.
    pub async fn toggle_like(&self) -> Option<bool> {
        let mut state = self.state.lock().await;
        let like = Like::from(state.recipe()?);
        let id = like.id.clone();

        if state.likes().is_liked(&id) {
            state.likes_mut().remove(&id);
            self.view.toggle_like_button(false);
            self.view.delete_like(&id);
            tracing::info!(recipe_id = %id, "Recipe unliked");
            Some(false)
        } else {
            state.likes_mut().add(like.clone());
            self.view.toggle_like_button(true);
            self.view.render_like(&like);
            tracing::info!(recipe_id = %id, "Recipe liked");
            Some(true)
        }
    }

    /// Renders every liked recipe.
    pub async fn show_likes(&self) -> usize {
        let state = self.state.lock().await;
        for like in state.likes().iter() {
            self.view.render_like(like);
        }
        state.likes().len()
    }
}
