//! Interactive shell.
//!
//! Reads one command per line and dispatches it to a [`Controller`]. Bad
//! input is reported through the view and never ends the session.

use forkify_core::{ItemId, RecipeApi};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::controller::Controller;
use crate::error::{Error, Result};
use crate::view::View;

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  search <query>        search recipes
  page <n>              show page n of the results
  open <id>             open a recipe
  inc | dec             one serving more or less
  servings <n>          rescale the recipe to n servings
  add                   add the recipe's ingredients to the shopping list
  list                  show the shopping list
  delete <item-id>      remove a shopping-list item
  count <item-id> <n>   change an item's count
  like                  like or unlike the open recipe
  likes                 show liked recipes
  help                  show this help
  quit                  leave";

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    /// Search recipes
    Search(String),
    /// Show a results page
    Page(usize),
    /// Open a recipe by id
    Open(String),
    /// One more serving
    Inc,
    /// One fewer serving
    Dec,
    /// Rescale to a number of servings
    Servings(u32),
    /// Add the open recipe to the shopping list
    Add,
    /// Show the shopping list
    List,
    /// Remove a list item
    Delete(ItemId),
    /// Set a list item's count; the raw text is validated by the controller
    Count(ItemId, String),
    /// Toggle like on the open recipe
    Like,
    /// Show likes
    Likes,
    /// Show help
    Help,
    /// Leave the shell
    Quit,
}

impl ShellCommand {
    /// Parses one line. Blank lines parse to `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        let Some((name, rest)) = split_first_word(line) else {
            return Ok(None);
        };

        let command = match name.to_lowercase().as_str() {
            "search" | "s" => Self::Search(required(rest, "search <query>")?.to_string()),
            "page" | "p" => Self::Page(parse_page(required(rest, "page <n>")?)?),
            "open" | "o" => Self::Open(required(rest, "open <id>")?.to_string()),
            "inc" | "+" => Self::Inc,
            "dec" | "-" => Self::Dec,
            "servings" => Self::Servings(parse_servings(required(rest, "servings <n>")?)?),
            "add" => Self::Add,
            "list" | "ls" => Self::List,
            "delete" | "del" | "rm" => {
                Self::Delete(parse_item_id(required(rest, "delete <item-id>")?)?)
            }
            "count" => {
                let args = required(rest, "count <item-id> <n>")?;
                let (id, value) = split_first_word(args)
                    .filter(|(_, value)| !value.is_empty())
                    .ok_or_else(|| Error::command("usage: count <item-id> <n>"))?;
                Self::Count(parse_item_id(id)?, value.to_string())
            }
            "like" => Self::Like,
            "likes" => Self::Likes,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => {
                return Err(Error::command(format!(
                    "unknown command '{other}'; type 'help' for a list"
                )));
            }
        };
        Ok(Some(command))
    }
}

fn split_first_word(text: &str) -> Option<(&str, &str)> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(match text.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, rest.trim()),
        None => (text, ""),
    })
}

fn required<'a>(rest: &'a str, usage: &str) -> Result<&'a str> {
    if rest.is_empty() {
        Err(Error::command(format!("usage: {usage}")))
    } else {
        Ok(rest)
    }
}

fn parse_page(text: &str) -> Result<usize> {
    text.parse()
        .map_err(|_| Error::command(format!("'{text}' is not a page number")))
}

fn parse_servings(text: &str) -> Result<u32> {
    match text.parse() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::command(format!("'{text}' is not a number of servings"))),
    }
}

fn parse_item_id(text: &str) -> Result<ItemId> {
    text.parse()
        .map_err(|_| Error::command(format!("'{text}' is not a list item id")))
}

/// Runs the shell until `quit` or end of input.
pub async fn run<A, V, R>(controller: &Controller<A, V>, input: R) -> Result<()>
where
    A: RecipeApi,
    V: View,
    R: AsyncBufRead + Unpin,
{
    controller.view().notify("Type 'help' for commands.");
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match ShellCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                controller.view().notify(&e.to_string());
                continue;
            }
        };
        tracing::debug!(?command, "Shell command");
        if command == ShellCommand::Quit {
            break;
        }
        dispatch(controller, command).await;
    }
    Ok(())
}

async fn dispatch<A: RecipeApi, V: View>(controller: &Controller<A, V>, command: ShellCommand) {
    let view = controller.view();
    match command {
        ShellCommand::Search(query) => {
            controller.control_search(&query).await;
        }
        ShellCommand::Page(page) => {
            if !controller.goto_page(page).await {
                view.notify(&format!("no page {page}"));
            }
        }
        ShellCommand::Open(id) => {
            controller.control_recipe(&id).await;
        }
        ShellCommand::Inc => {
            if !controller.increase_servings().await {
                view.notify("no recipe open");
            }
        }
        ShellCommand::Dec => {
            if !controller.decrease_servings().await {
                view.notify("servings unchanged");
            }
        }
        ShellCommand::Servings(servings) => {
            if !controller.set_servings(servings).await {
                view.notify("servings unchanged");
            }
        }
        ShellCommand::Add => {
            if controller.control_list().await == 0 {
                view.notify("nothing to add; open a recipe first");
            }
        }
        ShellCommand::List => controller.show_list().await,
        ShellCommand::Delete(id) => {
            if !controller.delete_item(&id).await {
                view.notify(&format!("no list item {id}"));
            }
        }
        ShellCommand::Count(id, raw) => {
            if !controller.update_count(&id, &raw).await {
                view.notify("count not changed");
            }
        }
        ShellCommand::Like => {
            if controller.toggle_like().await.is_none() {
                view.notify("no recipe open");
            }
        }
        ShellCommand::Likes => {
            if controller.show_likes().await == 0 {
                view.notify("no liked recipes");
            }
        }
        ShellCommand::Help => view.notify(HELP),
        ShellCommand::Quit => {}
    }
}
