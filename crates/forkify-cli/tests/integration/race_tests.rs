//! Overlapping requests: the most recently started one always wins.

use std::time::Duration;

use forkify_cli::Region;
use forkify_cli::controller::RECIPE_ALERT;
use forkify_core::MockRecipeApi;

use crate::common::{Event, catalogue, controller_with};

const SLOW: Duration = Duration::from_millis(200);
const HEAD_START: Duration = Duration::from_millis(10);

fn rendered_results(events: &[Event]) -> Vec<Vec<String>> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::RenderResults { ids, .. } => Some(ids.clone()),
            _ => None,
        })
        .collect()
}

fn rendered_recipes(events: &[Event]) -> Vec<String> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::RenderRecipe { id, .. } => Some(id.clone()),
            _ => None,
        })
        .collect()
}

#[tokio::test(start_paused = true)]
async fn test_slow_search_does_not_overwrite_newer() {
    let c = controller_with(MockRecipeApi::new(catalogue()).with_delay("pasta", SLOW));

    let (old, new) = futures::join!(c.control_search("pasta"), async {
        tokio::time::sleep(HEAD_START).await;
        c.control_search("pizza").await
    });

    assert!(!old);
    assert!(new);
    let query = c.with_state(|s| s.search().map(|s| s.query.clone())).await;
    assert_eq!(query.as_deref(), Some("pizza"));
    assert_eq!(
        rendered_results(&c.view().events()),
        vec![vec!["47746".to_string(), "54454".to_string()]]
    );
    assert_eq!(c.api().search_calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_stale_search_leaves_loader_to_newer_request() {
    let c = controller_with(MockRecipeApi::new(catalogue()).with_delay("pasta", SLOW));

    futures::join!(c.control_search("pasta"), async {
        tokio::time::sleep(HEAD_START).await;
        c.control_search("pizza").await
    });

    let clears = c
        .view()
        .events()
        .into_iter()
        .filter(|e| *e == Event::ClearLoader(Region::Results))
        .count();
    assert_eq!(clears, 1);
}

#[tokio::test(start_paused = true)]
async fn test_slow_recipe_does_not_overwrite_newer() {
    let c = controller_with(MockRecipeApi::new(catalogue()).with_delay("47746", SLOW));

    let (old, new) = futures::join!(c.control_recipe("47746"), async {
        tokio::time::sleep(HEAD_START).await;
        c.control_recipe("3030").await
    });

    assert!(!old);
    assert!(new);
    let id = c
        .with_state(|s| s.recipe().map(|r| r.id.to_string()))
        .await;
    assert_eq!(id.as_deref(), Some("3030"));
    assert_eq!(rendered_recipes(&c.view().events()), vec!["3030".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_stale_failure_is_silent() {
    let api = MockRecipeApi::new(catalogue())
        .with_failing_recipe("47746")
        .with_delay("47746", SLOW);
    let c = controller_with(api);

    futures::join!(c.control_recipe("47746"), async {
        tokio::time::sleep(HEAD_START).await;
        c.control_recipe("3030").await
    });

    assert!(c.view().alerts().is_empty());
    assert!(c.with_state(|s| s.recipe().is_some()).await);
}

#[tokio::test(start_paused = true)]
async fn test_stale_success_after_newer_failure_is_discarded() {
    let api = MockRecipeApi::new(catalogue())
        .with_failing_recipe("3030")
        .with_delay("47746", SLOW);
    let c = controller_with(api);

    futures::join!(c.control_recipe("47746"), async {
        tokio::time::sleep(HEAD_START).await;
        c.control_recipe("3030").await
    });

    assert_eq!(c.view().alerts(), vec![RECIPE_ALERT.to_string()]);
    assert!(c.with_state(|s| s.recipe().is_none()).await);
    assert!(rendered_recipes(&c.view().events()).is_empty());
}
