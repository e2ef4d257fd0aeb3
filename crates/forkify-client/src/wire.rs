//! JSON shapes of the recipe API.

use forkify_core::{RecipeId, RecipeRecord, RecipeSummary};
use serde::{Deserialize, Deserializer};

/// `GET /search?q=...`
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub recipes: Vec<WireSummary>,
}

/// `GET /get?rId=...`
#[derive(Debug, Deserialize)]
pub(crate) struct RecipeResponse {
    pub recipe: WireRecipe,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireSummary {
    #[serde(deserialize_with = "id_string")]
    pub recipe_id: String,
    pub title: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub image_url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireRecipe {
    #[serde(deserialize_with = "id_string")]
    pub recipe_id: String,
    pub title: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub servings: Option<u32>,
}

impl From<WireSummary> for RecipeSummary {
    fn from(wire: WireSummary) -> Self {
        Self {
            id: RecipeId::new(wire.recipe_id),
            title: wire.title,
            author: wire.publisher,
            image: wire.image_url,
        }
    }
}

impl From<WireRecipe> for RecipeRecord {
    fn from(wire: WireRecipe) -> Self {
        Self {
            id: RecipeId::new(wire.recipe_id),
            title: wire.title,
            author: wire.publisher,
            url: wire.source_url,
            image: wire.image_url,
            ingredients: wire.ingredients,
            servings: wire.servings,
        }
    }
}

/// Recipe ids arrive as strings from some deployments and numbers from
/// others.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}
