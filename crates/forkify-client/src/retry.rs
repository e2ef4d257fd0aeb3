//! Retry wrapper for recipe API calls.

use std::time::Duration;

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use forkify_core::{Error, RecipeApi, RecipeId, RecipeRecord, RecipeSummary, Result};

use crate::config::ClientConfig;

/// Wraps a [`RecipeApi`] and retries transient failures with exponential
/// backoff.
///
/// Only errors for which [`Error::is_retryable`] holds are retried; a 404 or
/// an undecodable body is returned on the first attempt.
#[derive(Debug, Clone)]
pub struct RetryingApi<A> {
    inner: A,
    backoff: ExponentialBuilder,
}

impl<A: RecipeApi> RetryingApi<A> {
    /// Wrap `inner` with the given retry budget and delay bounds.
    pub fn new(inner: A, max_retries: usize, min_delay: Duration, max_delay: Duration) -> Self {
        let backoff = ExponentialBuilder::default()
            .with_min_delay(min_delay)
            .with_max_delay(max_delay)
            .with_max_times(max_retries);
        Self { inner, backoff }
    }

    /// Wrap `inner` using the retry settings in `config`.
    pub fn from_config(inner: A, config: &ClientConfig) -> Self {
        Self::new(
            inner,
            config.max_retries,
            config.retry_min_delay(),
            config.retry_max_delay(),
        )
    }

    /// The wrapped API.
    pub fn inner(&self) -> &A {
        &self.inner
    }
}

#[async_trait]
impl<A: RecipeApi> RecipeApi for RetryingApi<A> {
    async fn search_recipes(&self, query: &str) -> Result<Vec<RecipeSummary>> {
        (|| async { self.inner.search_recipes(query).await })
            .retry(self.backoff)
            .sleep(tokio::time::sleep)
            .when(Error::is_retryable)
            .notify(|err: &Error, delay: Duration| {
                tracing::warn!(query, error = %err, ?delay, "Retrying search");
            })
            .await
    }

    async fn get_recipe(&self, id: &RecipeId) -> Result<RecipeRecord> {
        (|| async { self.inner.get_recipe(id).await })
            .retry(self.backoff)
            .sleep(tokio::time::sleep)
            .when(Error::is_retryable)
            .notify(|err: &Error, delay: Duration| {
                tracing::warn!(recipe_id = %id, error = %err, ?delay, "Retrying recipe fetch");
            })
            .await
    }
}
