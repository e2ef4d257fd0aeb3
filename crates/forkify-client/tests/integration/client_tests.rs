use forkify_client::{ClientConfig, ForkifyClient};
use forkify_core::{Error, Recipe, RecipeApi, RecipeId};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{client_for, recipe_body, search_body};

#[tokio::test]
async fn test_search_returns_summaries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("q", "pizza"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&[
            ("47746", "Best Pizza Dough Ever"),
            ("54454", "Cauliflower Pizza Crust"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let results = client_for(&server).search_recipes("pizza").await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id.as_str(), "47746");
    assert_eq!(results[1].title, "Cauliflower Pizza Crust");
    assert_eq!(results[0].author, "Closet Cooking");
}

#[tokio::test]
async fn test_search_query_is_url_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("q", "mac & cheese"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&[])))
        .expect(1)
        .mount(&server)
        .await;

    let results = client_for(&server)
        .search_recipes("mac & cheese")
        .await
        .unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_search_server_error_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).search_recipes("pizza").await.unwrap_err();

    assert!(matches!(err, Error::Http { status: 500, .. }));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_get_recipe_decodes_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/get"))
        .and(query_param("rId", "47746"))
        .respond_with(ResponseTemplate::new(200).set_body_json(recipe_body(
            "47746",
            "Best Pizza Dough Ever",
            &["4 1/2 cups unbleached flour", "1 3/4 cups ice water"],
        )))
        .mount(&server)
        .await;

    let record = client_for(&server)
        .get_recipe(&RecipeId::new("47746"))
        .await
        .unwrap();

    assert_eq!(record.title, "Best Pizza Dough Ever");
    assert_eq!(record.author, "Two Peas and Their Pod");
    assert_eq!(record.url, "http://source.example/47746");
    assert_eq!(record.ingredients.len(), 2);
}

#[tokio::test]
async fn test_recipe_load_through_client() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(recipe_body(
            "1",
            "Pancakes",
            &["2 cups flour", "1 egg", "1 tsp salt", "1 cup milk"],
        )))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let recipe = Recipe::load(&client, &RecipeId::new("1")).await.unwrap();

    assert_eq!(recipe.servings, 4);
    assert_eq!(recipe.time, 30);
    assert_eq!(recipe.ingredients[0].quantity, Some(2.0));
    assert_eq!(recipe.ingredients[0].unit_str(), "cup");
}

#[tokio::test]
async fn test_get_recipe_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/get"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_recipe(&RecipeId::new("missing"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::NotFound { ref id } if id == "missing"));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_get_recipe_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/get"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_recipe(&RecipeId::new("1"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Serialization(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_fetch_error() {
    // Bind then release a port so nothing is listening on it.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let config = ClientConfig::with_base_url(format!("http://127.0.0.1:{port}/api"));
    let client = ForkifyClient::new(&config).unwrap();

    let err = client.get_recipe(&RecipeId::new("1")).await.unwrap_err();
    assert!(matches!(err, Error::Fetch { .. }));
    assert!(err.is_retryable());
}
