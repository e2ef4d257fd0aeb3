use forkify_client::{ForkifyClient, RetryingApi};
use forkify_core::{Error, RecipeApi, RecipeId};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{config_for, recipe_body, search_body};

fn retrying_client(server: &MockServer, retries: usize) -> RetryingApi<ForkifyClient> {
    let mut config = config_for(server);
    config.max_retries = retries;
    RetryingApi::from_config(ForkifyClient::new(&config).unwrap(), &config)
}

#[tokio::test]
async fn test_retries_past_transient_503() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&[("1", "Soup")])))
        .expect(1)
        .mount(&server)
        .await;

    let results = retrying_client(&server, 2)
        .search_recipes("soup")
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
}

#[tokio::test]
async fn test_not_found_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/get"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let err = retrying_client(&server, 3)
        .get_recipe(&RecipeId::new("9"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::NotFound { .. }));
}

#[tokio::test]
async fn test_exhausted_retries_return_last_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/get"))
        .respond_with(ResponseTemplate::new(502))
        .expect(3)
        .mount(&server)
        .await;

    let err = retrying_client(&server, 2)
        .get_recipe(&RecipeId::new("9"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Http { status: 502, .. }));
}

#[tokio::test]
async fn test_success_needs_one_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(recipe_body("9", "Stew", &["1 onion"])))
        .expect(1)
        .mount(&server)
        .await;

    let record = retrying_client(&server, 2)
        .get_recipe(&RecipeId::new("9"))
        .await
        .unwrap();
    assert_eq!(record.title, "Stew");
}
