//! # forkify-client
//!
//! HTTP client for the Forkify recipe API.
//!
//! This crate provides the network side of the [`RecipeApi`] seam:
//! - [`ForkifyClient`]: reqwest-based client for the search and recipe endpoints
//! - [`RetryingApi`]: exponential-backoff wrapper around any [`RecipeApi`]
//! - [`ClientConfig`]: endpoint, timeout and retry settings
//!
//! [`RecipeApi`]: forkify_core::RecipeApi

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod retry;
mod wire;

pub use client::ForkifyClient;
pub use config::ClientConfig;
pub use retry::RetryingApi;
