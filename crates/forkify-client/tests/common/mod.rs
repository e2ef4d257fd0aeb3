//! Shared fixtures for client tests.

use forkify_client::{ClientConfig, ForkifyClient};
use serde_json::{Value, json};
use wiremock::MockServer;

/// Client pointed at `server` with retries disabled and short delays.
pub fn client_for(server: &MockServer) -> ForkifyClient {
    ForkifyClient::new(&config_for(server)).unwrap()
}

/// Config pointed at `server`.
pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig {
        base_url: format!("{}/api", server.uri()),
        timeout_secs: 5,
        max_retries: 0,
        retry_min_delay_ms: 1,
        retry_max_delay_ms: 5,
        ..Default::default()
    }
}

/// Search response body with the given `(id, title)` pairs.
pub fn search_body(recipes: &[(&str, &str)]) -> Value {
    let recipes: Vec<Value> = recipes
        .iter()
        .map(|(id, title)| {
            json!({
                "recipe_id": id,
                "title": title,
                "publisher": "Closet Cooking",
                "image_url": format!("http://img.example/{id}.jpg"),
                "social_rank": 99.9
            })
        })
        .collect();
    json!({ "count": recipes.len(), "recipes": recipes })
}

/// Recipe response body.
pub fn recipe_body(id: &str, title: &str, ingredients: &[&str]) -> Value {
    json!({
        "recipe": {
            "recipe_id": id,
            "title": title,
            "publisher": "Two Peas and Their Pod",
            "source_url": format!("http://source.example/{id}"),
            "image_url": format!("http://img.example/{id}.jpg"),
            "ingredients": ingredients,
            "social_rank": 100.0
        }
    })
}
