//! Application state.
//!
//! [`AppState`] holds everything the session knows: the current search, the
//! current recipe, the shopping list and the likes. It is an ordinary value
//! owned by whoever drives the session.
//!
//! # Overlapping requests
//!
//! Searches and recipe loads are asynchronous, and a user can start a new one
//! before the previous one answers. Each of the two slots carries a
//! generation counter. [`AppState::begin_search`] and
//! [`AppState::begin_recipe`] bump it and hand out a [`Ticket`]; the matching
//! `finish_*` call applies a result only if its ticket is still current. The
//! most recently started request always wins, whatever order answers arrive
//! in.
//!
//! ```rust
//! use forkify_core::{AppState, Search};
//!
//! let mut state = AppState::new();
//! let old = state.begin_search("pasta");
//! let new = state.begin_search("pizza");
//!
//! assert!(state.finish_search(new, Search::new("pizza")));
//! assert!(!state.finish_search(old, Search::new("pasta")));
//! assert_eq!(state.search().map(|s| s.query.as_str()), Some("pizza"));
//! ```

use crate::likes::Likes;
use crate::list::ShoppingList;
use crate::recipe::Recipe;
use crate::search::Search;
use crate::types::RecipeId;

/// Which asynchronous slot a [`Ticket`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The search session
    Search,
    /// The current recipe
    Recipe,
}

/// Proof that a request was started, checked when its result arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    slot: Slot,
    generation: u64,
}

impl Ticket {
    /// The slot this ticket belongs to.
    pub fn slot(&self) -> Slot {
        self.slot
    }

    /// The generation this ticket was issued for.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Everything the session knows.
#[derive(Debug, Default)]
pub struct AppState {
    search: Option<Search>,
    recipe: Option<Recipe>,
    pending_recipe: Option<RecipeId>,
    list: Option<ShoppingList>,
    likes: Likes,
    search_generation: u64,
    recipe_generation: u64,
}

impl AppState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Search slot
    // ------------------------------------------------------------------

    /// Starts a new search, replacing the current session with an empty one.
    pub fn begin_search(&mut self, query: impl Into<String>) -> Ticket {
        self.search_generation += 1;
        self.search = Some(Search::new(query));
        Ticket {
            slot: Slot::Search,
            generation: self.search_generation,
        }
    }

    /// Installs a completed search if `ticket` is still current.
    ///
    /// Returns `false` and drops `search` when a newer search has started.
    pub fn finish_search(&mut self, ticket: Ticket, search: Search) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                query = %search.query,
                generation = ticket.generation,
                current = self.search_generation,
                "Discarding stale search result"
            );
            return false;
        }
        self.search = Some(search);
        true
    }

    /// The current search session.
    pub fn search(&self) -> Option<&Search> {
        self.search.as_ref()
    }

    /// The current search session, mutably.
    pub fn search_mut(&mut self) -> Option<&mut Search> {
        self.search.as_mut()
    }

    // ------------------------------------------------------------------
    // Recipe slot
    // ------------------------------------------------------------------

    /// Starts loading a recipe. The current recipe is cleared.
    pub fn begin_recipe(&mut self, id: RecipeId) -> Ticket {
        self.recipe_generation += 1;
        self.recipe = None;
        self.pending_recipe = Some(id);
        Ticket {
            slot: Slot::Recipe,
            generation: self.recipe_generation,
        }
    }

    /// Installs a loaded recipe if `ticket` is still current.
    ///
    /// Returns `false` and drops `recipe` when a newer load has started.
    pub fn finish_recipe(&mut self, ticket: Ticket, recipe: Recipe) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                recipe_id = %recipe.id,
                generation = ticket.generation,
                current = self.recipe_generation,
                "Discarding stale recipe"
            );
            return false;
        }
        self.pending_recipe = None;
        self.recipe = Some(recipe);
        true
    }

    /// Marks a recipe load as failed. The slot stays empty.
    ///
    /// Returns `false` if a newer load has started since.
    pub fn fail_recipe(&mut self, ticket: Ticket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.pending_recipe = None;
        true
    }

    /// The current recipe.
    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    /// The current recipe, mutably.
    pub fn recipe_mut(&mut self) -> Option<&mut Recipe> {
        self.recipe.as_mut()
    }

    /// Id of the recipe being loaded, if any.
    pub fn pending_recipe(&self) -> Option<&RecipeId> {
        self.pending_recipe.as_ref()
    }

    /// Returns `true` if `ticket` belongs to the latest request of its slot.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        let current = match ticket.slot {
            Slot::Search => self.search_generation,
            Slot::Recipe => self.recipe_generation,
        };
        ticket.generation == current
    }

    // ------------------------------------------------------------------
    // Shopping list and likes
    // ------------------------------------------------------------------

    /// The shopping list, if one has been created.
    pub fn list(&self) -> Option<&ShoppingList> {
        self.list.as_ref()
    }

    /// The shopping list, mutably, if one has been created.
    pub fn list_mut(&mut self) -> Option<&mut ShoppingList> {
        self.list.as_mut()
    }

    /// The shopping list, created on first use.
    pub fn list_mut_or_create(&mut self) -> &mut ShoppingList {
        self.list.get_or_insert_with(|| {
            tracing::debug!("Creating shopping list");
            ShoppingList::new()
        })
    }

    /// Recipe and list together, for copying ingredients into the list.
    pub fn recipe_and_list(&mut self) -> Option<(&Recipe, &mut ShoppingList)> {
        let recipe = self.recipe.as_ref()?;
        let list = self.list.get_or_insert_with(ShoppingList::new);
        Some((recipe, list))
    }

    /// Liked recipes.
    pub fn likes(&self) -> &Likes {
        &self.likes
    }

    /// Liked recipes, mutably.
    pub fn likes_mut(&mut self) -> &mut Likes {
        &mut self.likes
    }
}
