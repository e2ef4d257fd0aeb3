//! Identifier types shared across Forkify.

mod ids;
mod proptests;

pub use ids::{ItemId, RecipeId};
