//! # forkify-cli
//!
//! Terminal front end for Forkify.
//!
//! - [`controller`]: turns user intents into state changes and view updates
//! - [`view`]: the rendering seam and a plain-text implementation
//! - [`shell`]: the interactive command loop
//! - [`config`]: TOML configuration and its lookup order
//! - [`cli`]: command-line arguments

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod shell;
pub mod view;

pub use config::AppConfig;
pub use controller::Controller;
pub use error::{Error, Result};
pub use view::{Region, TerminalView, View};
