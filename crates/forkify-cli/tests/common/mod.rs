//! Shared fixtures: a view that records calls and a canned recipe API.

use std::sync::Mutex;

use forkify_cli::{Controller, Region, View};
use forkify_core::{
    ItemId, Like, ListItem, MockRecipeApi, Recipe, RecipeId, RecipeRecord, RecipeSummary,
    ShoppingList,
};

/// One call made on a [`RecordingView`].
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    RenderLoader(Region),
    ClearLoader(Region),
    ClearInput,
    ClearResults,
    RenderResults {
        ids: Vec<String>,
        page: usize,
        per_page: usize,
    },
    Highlight(String),
    ClearRecipe,
    RenderRecipe {
        id: String,
        servings: u32,
        liked: bool,
    },
    UpdateServings(u32),
    RenderItem(ListItem),
    UpdateItem(ItemId, f64),
    DeleteItem(ItemId),
    RenderList(usize),
    LikeButton(bool),
    RenderLike(String),
    DeleteLike(String),
    Alert(String),
    Notify(String),
}

/// View that records every call for later assertions.
#[derive(Default)]
pub struct RecordingView {
    events: Mutex<Vec<Event>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Alert(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl View for RecordingView {
    fn render_loader(&self, region: Region) {
        self.push(Event::RenderLoader(region));
    }

    fn clear_loader(&self, region: Region) {
        self.push(Event::ClearLoader(region));
    }

    fn clear_input(&self) {
        self.push(Event::ClearInput);
    }

    fn clear_results(&self) {
        self.push(Event::ClearResults);
    }

    fn render_results(&self, recipes: &[RecipeSummary], page: usize, per_page: usize) {
        self.push(Event::RenderResults {
            ids: recipes.iter().map(|r| r.id.to_string()).collect(),
            page,
            per_page,
        });
    }

    fn highlight_selected(&self, id: &RecipeId) {
        self.push(Event::Highlight(id.to_string()));
    }

    fn clear_recipe(&self) {
        self.push(Event::ClearRecipe);
    }

    fn render_recipe(&self, recipe: &Recipe, liked: bool) {
        self.push(Event::RenderRecipe {
            id: recipe.id.to_string(),
            servings: recipe.servings,
            liked,
        });
    }

    fn update_servings_ingredients(&self, recipe: &Recipe) {
        self.push(Event::UpdateServings(recipe.servings));
    }

    fn render_item(&self, item: &ListItem) {
        self.push(Event::RenderItem(item.clone()));
    }

    fn update_item(&self, item: &ListItem) {
        self.push(Event::UpdateItem(item.id, item.count));
    }

    fn delete_item(&self, id: &ItemId) {
        self.push(Event::DeleteItem(*id));
    }

    fn render_list(&self, list: &ShoppingList) {
        self.push(Event::RenderList(list.len()));
    }

    fn toggle_like_button(&self, liked: bool) {
        self.push(Event::LikeButton(liked));
    }

    fn render_like(&self, like: &Like) {
        self.push(Event::RenderLike(like.id.to_string()));
    }

    fn delete_like(&self, id: &RecipeId) {
        self.push(Event::DeleteLike(id.to_string()));
    }

    fn alert(&self, message: &str) {
        self.push(Event::Alert(message.to_string()));
    }

    fn notify(&self, message: &str) {
        self.push(Event::Notify(message.to_string()));
    }
}

pub fn record(id: &str, title: &str, servings: Option<u32>, ingredients: &[&str]) -> RecipeRecord {
    RecipeRecord {
        id: RecipeId::new(id),
        title: title.to_string(),
        author: "The Pioneer Woman".to_string(),
        url: format!("http://example.com/{id}"),
        image: format!("http://example.com/{id}.jpg"),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        servings,
    }
}

/// Recipes used across tests: two pizzas, a pasta and a single-serving soup.
pub fn catalogue() -> Vec<RecipeRecord> {
    vec![
        record(
            "47746",
            "Best Pizza Dough Ever",
            Some(4),
            &["4 1/2 cups flour", "1 3/4 cups ice water", "1 tbsp salt"],
        ),
        record(
            "54454",
            "Deep Dish Pizza",
            None,
            &["2 cups flour", "1 pinch of sugar", "salt to taste", "3 eggs"],
        ),
        record("3030", "Pasta Carbonara", Some(2), &["200 g spaghetti", "2 eggs"]),
        record("1111", "Tomato Soup", Some(1), &["1 can tomatoes", "1 cup stock"]),
    ]
}

pub fn controller_with(api: MockRecipeApi) -> Controller<MockRecipeApi, RecordingView> {
    Controller::new(api, RecordingView::default())
}

pub fn controller() -> Controller<MockRecipeApi, RecordingView> {
    controller_with(MockRecipeApi::new(catalogue()))
}

/// `n` pizza recipes, for paging.
pub fn many_pizzas(n: usize) -> Vec<RecipeRecord> {
    (1..=n)
        .map(|i| record(&format!("p{i}"), &format!("Pizza {i}"), None, &["1 cup flour"]))
        .collect()
}
