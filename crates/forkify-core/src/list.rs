//! The shopping list.
//!
//! An insertion-ordered collection of items keyed by [`ItemId`]. Delete and
//! update are total: an unknown id is a silent no-op, because the view and
//! the state can disagree for a moment on rapid clicks.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::ItemId;

/// Parses a user-entered item count.
///
/// Anything that is not a finite number is rejected; negative numbers are
/// clamped to zero.
pub fn parse_count(raw: &str) -> Result<f64> {
    let raw = raw.trim();
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n.max(0.0)),
        _ => Err(Error::validation_field(
            "count",
            format!("'{raw}' is not a number"),
        )),
    }
}

/// One row of the shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// Unique id, never reused within the list
    pub id: ItemId,

    /// Amount to buy
    pub count: f64,

    /// Unit string, empty when there is none
    pub unit: String,

    /// Ingredient name
    pub ingredient: String,
}

/// Shopping list of ingredients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    items: Vec<ListItem>,
}

impl ShoppingList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new item under a fresh id and returns it.
    pub fn add_item(
        &mut self,
        count: f64,
        unit: impl Into<String>,
        ingredient: impl Into<String>,
    ) -> ListItem {
        let item = ListItem {
            id: ItemId::new(),
            count,
            unit: unit.into(),
            ingredient: ingredient.into(),
        };
        tracing::debug!(item_id = %item.id, ingredient = %item.ingredient, "List item added");
        self.items.push(item.clone());
        item
    }

    /// Removes the item with `id`, returning it. Unknown ids are ignored.
    pub fn delete_item(&mut self, id: &ItemId) -> Option<ListItem> {
        let index = self.items.iter().position(|item| &item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Sets the count of the item with `id`. Unknown ids are ignored.
    ///
    /// The count is stored as given; callers coerce it to a non-negative
    /// number first. Returns whether an item was updated.
    pub fn update_count(&mut self, id: &ItemId, count: f64) -> bool {
        match self.items.iter_mut().find(|item| &item.id == id) {
            Some(item) => {
                item.count = count;
                true
            }
            None => false,
        }
    }

    /// Looks up an item.
    pub fn get(&self, id: &ItemId) -> Option<&ListItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
