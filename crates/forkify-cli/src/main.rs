//! Forkify CLI
//!
//! Search recipes, scale servings and build a shopping list from the
//! terminal.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Context;
use clap::Parser;
use forkify_cli::cli::{Cli, Command};
use forkify_cli::config::LoggingConfig;
use forkify_cli::{AppConfig, Controller, TerminalView, shell};
use forkify_client::{ForkifyClient, RetryingApi};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(url) = &cli.api_url {
        config = config.with_api_url(url.clone());
    }
    init_tracing(cli.verbose, &config.logging);
    tracing::debug!(base_url = %config.api.base_url, "Configuration loaded");

    let client = ForkifyClient::new(&config.api)?;
    let api = RetryingApi::from_config(client, &config.api);
    let view = TerminalView::new(std::io::stdout(), config.view.clone());
    let controller =
        Controller::new(api, view).with_results_per_page(config.view.results_per_page);

    match cli.subcommand() {
        Command::Search { query, page } => {
            let query = query.join(" ");
            if !controller.control_search_at(&query, page).await {
                if controller.with_state(|s| s.search().is_some()).await {
                    anyhow::bail!("no page {page} for '{query}'");
                }
                anyhow::bail!("search for '{query}' failed");
            }
        }
        Command::Recipe { id, servings } => {
            let shown = match servings {
                Some(servings) => controller.control_recipe_scaled(&id, servings).await,
                None => controller.control_recipe(&id).await,
            };
            if !shown {
                anyhow::bail!("could not load recipe {id}");
            }
        }
        Command::Shell => {
            let stdin = BufReader::new(tokio::io::stdin());
            shell::run(&controller, stdin).await?;
        }
    }

    Ok(())
}

/// `--verbose` means debug; otherwise the configured level. `RUST_LOG` wins
/// over both.
fn init_tracing(verbose: bool, logging: &LoggingConfig) {
    let default_directive = if verbose {
        "debug".to_string()
    } else {
        logging.level.clone()
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
