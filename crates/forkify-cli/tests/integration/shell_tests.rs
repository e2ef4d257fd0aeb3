use forkify_cli::config::ViewConfig;
use forkify_cli::{Controller, TerminalView, shell};
use forkify_core::MockRecipeApi;

use crate::common::catalogue;

async fn run_script(script: &str) -> String {
    let controller = Controller::new(
        MockRecipeApi::new(catalogue()),
        TerminalView::new(Vec::new(), ViewConfig::default()),
    );
    shell::run(&controller, script.as_bytes()).await.unwrap();
    controller.view().contents()
}

#[tokio::test]
async fn test_search_open_and_scale() {
    let out = run_script("search pizza\nopen 3030\ninc\nadd\nlist\nquit\n").await;

    assert!(out.contains("Best Pizza Dough ..."));
    assert!(out.contains("Pasta Carbonara [not liked]"));
    assert!(out.contains("3 servings"));
    assert!(out.contains("  - 300 gram spaghetti"));
    assert!(out.contains("+ 300 gram spaghetti"));
    assert!(out.contains("Shopping list:"));
}

#[tokio::test]
async fn test_servings_command() {
    let out = run_script("open 3030\nservings 6\nservings 6\n").await;

    assert!(out.contains("6 servings"));
    assert!(out.contains("  - 600 gram spaghetti"));
    assert!(out.contains("servings unchanged"));
}

#[tokio::test]
async fn test_unknown_command_keeps_session_alive() {
    let out = run_script("bake a cake\nlikes\n").await;

    assert!(out.contains("unknown command 'bake'"));
    assert!(out.contains("no liked recipes"));
}

#[tokio::test]
async fn test_quit_stops_reading() {
    let out = run_script("quit\nsearch pizza\n").await;
    assert!(!out.contains("Loading results"));
}

#[tokio::test]
async fn test_failed_open_alerts() {
    let out = run_script("open nope\n").await;
    assert!(out.contains("! error processing the recipe!"));
}

#[tokio::test]
async fn test_like_and_list_likes() {
    let out = run_script("open 47746\nlike\nlikes\n").await;
    assert!(out.contains("Liked."));
    assert!(out.contains("* 47746"));
}

#[tokio::test]
async fn test_help() {
    let out = run_script("help\n").await;
    assert!(out.contains("count <item-id> <n>"));
}
