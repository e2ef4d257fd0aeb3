//! The recipe entity.
//!
//! A [`Recipe`] is built from one API fetch and then goes through a fixed
//! sequence of derivations: ingredients are parsed, servings validated and
//! the preparation time estimated. After that, only the serving count
//! changes, and every ingredient quantity follows it proportionally.

use serde::{Deserialize, Serialize};

use crate::api::{RecipeApi, RecipeRecord};
use crate::ingredient::{Ingredient, parse_ingredient};
use crate::types::RecipeId;
use crate::Result;

/// Servings assumed when the API does not report a usable value.
pub const DEFAULT_SERVINGS: u32 = 4;

/// Minutes of preparation per started group of ingredients.
pub const MINUTES_PER_PERIOD: u32 = 15;

/// Ingredients per preparation period.
pub const INGREDIENTS_PER_PERIOD: usize = 3;

/// Direction of a servings change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServingsUpdate {
    /// One more serving
    Inc,
    /// One fewer serving
    Dec,
}

/// A fetched recipe and its derived fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
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

    /// Current serving count, always at least 1 once calculated
    pub servings: u32,

    /// Estimated preparation time in minutes
    pub time: u32,

    /// Parsed ingredients, in recipe order
    pub ingredients: Vec<Ingredient>,

    raw_ingredients: Vec<String>,
    fetched_servings: Option<u32>,
}

impl Recipe {
    /// Builds an unparsed recipe from an API record.
    ///
    /// `ingredients` stays empty and `servings`/`time` stay zero until
    /// [`parse_ingredients`](Self::parse_ingredients),
    /// [`calc_servings`](Self::calc_servings) and
    /// [`calc_time`](Self::calc_time) run.
    pub fn from_record(record: RecipeRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            author: record.author,
            url: record.url,
            image: record.image,
            servings: 0,
            time: 0,
            ingredients: Vec::new(),
            raw_ingredients: record.ingredients,
            fetched_servings: record.servings,
        }
    }

    /// Fetches a recipe from the API.
    ///
    /// Fails with whatever the API reports (fetch, not-found, HTTP). Nothing
    /// is returned on failure, so there is no half-populated recipe.
    pub async fn fetch<A>(api: &A, id: &RecipeId) -> Result<Self>
    where
        A: RecipeApi + ?Sized,
    {
        tracing::debug!(recipe_id = %id, "Fetching recipe");
        let record = api.get_recipe(id).await?;
        Ok(Self::from_record(record))
    }

    /// Fetches a recipe and runs every derivation.
    pub async fn load<A>(api: &A, id: &RecipeId) -> Result<Self>
    where
        A: RecipeApi + ?Sized,
    {
        let mut recipe = Self::fetch(api, id).await?;
        recipe.parse_ingredients();
        recipe.calc_servings();
        recipe.calc_time();
        tracing::info!(
            recipe_id = %recipe.id,
            ingredients = recipe.ingredients.len(),
            servings = recipe.servings,
            time = recipe.time,
            "Recipe loaded"
        );
        Ok(recipe)
    }

    /// Raw ingredient lines as fetched.
    pub fn raw_ingredients(&self) -> &[String] {
        &self.raw_ingredients
    }

    /// Parses every raw ingredient line, replacing any earlier parse.
    ///
    /// Blank lines are skipped.
    pub fn parse_ingredients(&mut self) {
        self.ingredients = self
            .raw_ingredients
            .iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| parse_ingredient(line))
            .collect();
    }

    /// Estimates preparation time: 15 minutes per started group of 3
    /// ingredients.
    pub fn calc_time(&mut self) {
        let periods = self.ingredients.len().div_ceil(INGREDIENTS_PER_PERIOD);
        self.time = u32::try_from(periods)
            .unwrap_or(u32::MAX / MINUTES_PER_PERIOD)
            .saturating_mul(MINUTES_PER_PERIOD);
    }

    /// Uses the fetched serving count when it is at least 1, otherwise
    /// [`DEFAULT_SERVINGS`].
    pub fn calc_servings(&mut self) {
        self.servings = match self.fetched_servings {
            Some(n) if n >= 1 => n,
            _ => DEFAULT_SERVINGS,
        };
    }

    /// Changes servings by one and rescales every ingredient quantity.
    ///
    /// Decreasing at one serving is a no-op. Returns whether servings changed.
    pub fn update_servings(&mut self, update: ServingsUpdate) -> bool {
        let current = self.servings.max(1);
        let new_servings = match update {
            ServingsUpdate::Inc => current.saturating_add(1),
            ServingsUpdate::Dec if current > 1 => current - 1,
            ServingsUpdate::Dec => {
                tracing::debug!(recipe_id = %self.id, "Servings already at minimum");
                return false;
            }
        };

        self.ingredients = self
            .ingredients
            .iter()
            .map(|ing| ing.rescaled(current, new_servings))
            .collect();
        self.servings = new_servings;
        true
    }

    /// Rescales every ingredient to `servings` in one step.
    ///
    /// Zero is treated as one. Returns whether servings changed.
    pub fn scale_to(&mut self, servings: u32) -> bool {
        let current = self.servings.max(1);
        let target = servings.max(1);
        if target == current {
            return false;
        }
        self.ingredients = self
            .ingredients
            .iter()
            .map(|ing| ing.rescaled(current, target))
            .collect();
        self.servings = target;
        true
    }
}
