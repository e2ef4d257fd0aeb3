//! Command-line arguments.

use clap::{Parser, Subcommand};

/// Search recipes, scale servings and build a shopping list
#[derive(Parser, Debug)]
#[command(name = "forkify", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Recipe API base URL, overriding the config file
    #[arg(long, env = "FORKIFY_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// What to do; defaults to the interactive shell
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Search recipes and print one page of results
    Search {
        /// Search terms
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Page to print
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Print one recipe
    Recipe {
        /// Recipe id
        id: String,

        /// Rescale ingredients to this many servings
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        servings: Option<u32>,
    },

    /// Interactive session reading commands from stdin
    Shell,
}

impl Cli {
    /// The chosen subcommand, or the shell.
    pub fn subcommand(&self) -> Command {
        self.command.clone().unwrap_or(Command::Shell)
    }
}
