#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Forkify Core Library
//!
//! Domain types and logic for Forkify: the unit table and ingredient parser,
//! recipes with servings rescaling, search sessions, the shopping list,
//! likes, the [`RecipeApi`] seam and the session's [`AppState`].
//!
//! Nothing in this crate renders anything or knows about HTTP; see
//! `forkify-client` for the API client and `forkify-cli` for the front end.

pub mod api;
pub mod error;
pub mod ingredient;
pub mod likes;
pub mod list;
pub mod recipe;
pub mod search;
pub mod state;
pub mod types;
pub mod units;

// Re-exports for convenience
pub use api::{MockRecipeApi, RecipeApi, RecipeRecord, RecipeSummary};
pub use error::{Error, Result};
pub use ingredient::{Ingredient, parse_ingredient};
pub use likes::{Like, Likes};
pub use list::{ListItem, ShoppingList, parse_count};
pub use recipe::{Recipe, ServingsUpdate};
pub use search::{PageButtons, Search};
pub use state::{AppState, Slot, Ticket};
pub use types::{ItemId, RecipeId};
pub use units::Unit;
