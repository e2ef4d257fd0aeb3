//! Liked recipes, kept in memory for the session.

use serde::{Deserialize, Serialize};

use crate::recipe::Recipe;
use crate::types::RecipeId;

/// A liked recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    /// Recipe id on the remote API
    pub id: RecipeId,
    /// Recipe title
    pub title: String,
    /// Publisher of the recipe
    pub author: String,
    /// Image URL
    pub image: String,
}

impl From<&Recipe> for Like {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            author: recipe.author.clone(),
            image: recipe.image.clone(),
        }
    }
}

/// Insertion-ordered set of likes, keyed by recipe id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Likes {
    likes: Vec<Like>,
}

impl Likes {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a like. Returns `false` if the recipe was already liked.
    pub fn add(&mut self, like: Like) -> bool {
        if self.is_liked(&like.id) {
            return false;
        }
        self.likes.push(like);
        true
    }

    /// Removes the like for `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: &RecipeId) -> Option<Like> {
        let index = self.likes.iter().position(|like| &like.id == id)?;
        Some(self.likes.remove(index))
    }

    /// Returns `true` if `id` is liked.
    pub fn is_liked(&self, id: &RecipeId) -> bool {
        self.likes.iter().any(|like| &like.id == id)
    }

    /// Number of likes.
    pub fn len(&self) -> usize {
        self.likes.len()
    }

    /// Returns `true` if nothing is liked.
    pub fn is_empty(&self) -> bool {
        self.likes.is_empty()
    }

    /// Likes in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &Like> {
        self.likes.iter()
    }
}
