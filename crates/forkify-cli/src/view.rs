//! Rendering.
//!
//! The [`View`] trait is everything the controller asks of a front end.
//! [`TerminalView`] renders to any [`Write`] as plain text; the terminal is
//! append-only, so operations that would clear or hide something on a page
//! mostly print nothing.

use std::fmt::Display;
use std::io::Write;
use std::sync::Mutex;

use forkify_core::{
    Ingredient, ItemId, Like, ListItem, Recipe, RecipeId, RecipeSummary, Search, ShoppingList,
};

use crate::config::ViewConfig;

/// Part of the screen a loading indicator belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Search results
    Results,
    /// The open recipe
    Recipe,
}

impl Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Region::Results => f.write_str("results"),
            Region::Recipe => f.write_str("recipe"),
        }
    }
}

/// Rendering callbacks used by the controller.
pub trait View: Send + Sync {
    /// Show a loading indicator.
    fn render_loader(&self, region: Region);

    /// Remove the loading indicator.
    fn clear_loader(&self, region: Region);

    /// Empty the search input.
    fn clear_input(&self);

    /// Remove the rendered result list.
    fn clear_results(&self);

    /// Render `page` (1-based) of `recipes` at `per_page` per page, with
    /// navigation to neighbouring pages.
    fn render_results(&self, recipes: &[RecipeSummary], page: usize, per_page: usize);

    /// Mark the result for `id` as selected.
    fn highlight_selected(&self, id: &RecipeId);

    /// Remove the rendered recipe.
    fn clear_recipe(&self);

    /// Render a full recipe.
    fn render_recipe(&self, recipe: &Recipe, liked: bool);

    /// Re-render servings and ingredient quantities after a rescale.
    fn update_servings_ingredients(&self, recipe: &Recipe);

    /// Render one new shopping-list item.
    fn render_item(&self, item: &ListItem);

    /// Re-render a shopping-list item after its count changed.
    fn update_item(&self, item: &ListItem);

    /// Remove a shopping-list item.
    fn delete_item(&self, id: &ItemId);

    /// Render the whole shopping list.
    fn render_list(&self, list: &ShoppingList);

    /// Show whether the open recipe is liked.
    fn toggle_like_button(&self, liked: bool);

    /// Add an entry to the likes menu.
    fn render_like(&self, like: &Like);

    /// Remove an entry from the likes menu.
    fn delete_like(&self, id: &RecipeId);

    /// Tell the user something went wrong.
    fn alert(&self, message: &str);

    /// Informational text, such as help or hints.
    fn notify(&self, message: &str);
}

/// Plain-text [`View`] over a writer.
pub struct TerminalView<W> {
    out: Mutex<W>,
    config: ViewConfig,
    selected: Mutex<Option<RecipeId>>,
}

impl<W: Write + Send> TerminalView<W> {
    /// Render to `out` with the given settings.
    pub fn new(out: W, config: ViewConfig) -> Self {
        Self {
            out: Mutex::new(out),
            config,
            selected: Mutex::new(None),
        }
    }

    /// Consume the view, returning the writer.
    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_lines<I, S>(&self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        for line in lines {
            if let Err(e) = writeln!(out, "{}", line.as_ref()) {
                tracing::warn!(error = %e, "Failed to write output");
                return;
            }
        }
        if let Err(e) = out.flush() {
            tracing::warn!(error = %e, "Failed to flush output");
        }
    }

    fn is_selected(&self, id: &RecipeId) -> bool {
        self.selected
            .lock()
            .map(|s| s.as_ref() == Some(id))
            .unwrap_or(false)
    }

    fn ingredient_lines(recipe: &Recipe) -> Vec<String> {
        recipe
            .ingredients
            .iter()
            .map(|ing| format!("  - {}", format_ingredient(ing)))
            .collect()
    }
}

impl TerminalView<Vec<u8>> {
    /// Everything rendered so far, for in-memory views.
    pub fn contents(&self) -> String {
        self.out
            .lock()
            .map(|out| String::from_utf8_lossy(&out).into_owned())
            .unwrap_or_default()
    }
}

impl<W: Write + Send> View for TerminalView<W> {
    fn render_loader(&self, region: Region) {
        self.write_lines([format!("Loading {region}...")]);
    }

    // A printed line cannot be retracted.
    fn clear_loader(&self, _region: Region) {}

    fn clear_input(&self) {}

    fn clear_results(&self) {}

    fn render_results(&self, recipes: &[RecipeSummary], page: usize, per_page: usize) {
        // Paging goes through a throwaway session so the maths lives in one place.
        let search = Search {
            query: String::new(),
            recipes: recipes.to_vec(),
            page,
        };
        let rows = search.page_results(page, per_page);
        if rows.is_empty() {
            self.write_lines(["No recipes found."]);
            return;
        }

        let mut lines: Vec<String> = rows
            .iter()
            .map(|r| {
                let marker = if self.is_selected(&r.id) { '>' } else { ' ' };
                format!(
                    "{marker} {:<8} {} ({})",
                    r.id.as_str(),
                    limit_title(&r.title, self.config.title_limit),
                    r.author
                )
            })
            .collect();

        let pages = search.page_count(per_page);
        let buttons = search.buttons(page, per_page);
        let mut footer = format!("Page {page} of {pages}");
        if let Some(prev) = buttons.prev {
            footer.push_str(&format!("  [prev: page {prev}]"));
        }
        if let Some(next) = buttons.next {
            footer.push_str(&format!("  [next: page {next}]"));
        }
        lines.push(footer);
        self.write_lines(lines);
    }

    fn highlight_selected(&self, id: &RecipeId) {
        if let Ok(mut selected) = self.selected.lock() {
            *selected = Some(id.clone());
        }
    }

    fn clear_recipe(&self) {}

    fn render_recipe(&self, recipe: &Recipe, liked: bool) {
        let heart = if liked { "[liked]" } else { "[not liked]" };
        let mut lines = vec![
            String::new(),
            format!("{} {heart}", recipe.title),
            format!("by {}", recipe.author),
            format!("{} minutes, {} servings", recipe.time, recipe.servings),
            "Ingredients:".to_string(),
        ];
        lines.extend(Self::ingredient_lines(recipe));
        if !recipe.url.is_empty() {
            lines.push(format!("Directions: {}", recipe.url));
        }
        self.write_lines(lines);
    }

    fn update_servings_ingredients(&self, recipe: &Recipe) {
        let mut lines = vec![format!("{} servings", recipe.servings)];
        lines.extend(Self::ingredient_lines(recipe));
        self.write_lines(lines);
    }

    fn render_item(&self, item: &ListItem) {
        self.write_lines([format!("+ {}", format_item(item))]);
    }

    fn update_item(&self, item: &ListItem) {
        self.write_lines([format!("~ {}", format_item(item))]);
    }

    fn delete_item(&self, id: &ItemId) {
        self.write_lines([format!("- removed {id}")]);
    }

    fn render_list(&self, list: &ShoppingList) {
        if list.is_empty() {
            self.write_lines(["Shopping list is empty."]);
            return;
        }
        let mut lines = vec!["Shopping list:".to_string()];
        lines.extend(list.items().iter().map(|item| format!("  {}", format_item(item))));
        self.write_lines(lines);
    }

    fn toggle_like_button(&self, liked: bool) {
        self.write_lines([if liked { "Liked." } else { "Unliked." }]);
    }

    fn render_like(&self, like: &Like) {
        self.write_lines([format!(
            "  * {:<8} {} ({})",
            like.id.as_str(),
            limit_title(&like.title, self.config.title_limit),
            like.author
        )]);
    }

    fn delete_like(&self, id: &RecipeId) {
        self.write_lines([format!("  removed {id} from likes")]);
    }

    fn alert(&self, message: &str) {
        self.write_lines([format!("! {message}")]);
    }

    fn notify(&self, message: &str) {
        self.write_lines([message]);
    }
}

fn format_ingredient(ing: &Ingredient) -> String {
    [format_count(ing.quantity).as_str(), ing.unit_str(), ing.name.as_str()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_item(item: &ListItem) -> String {
    let amount = format_count(Some(item.count));
    let body = [amount.as_str(), item.unit.as_str(), item.ingredient.as_str()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    format!("{body}  ({})", item.id)
}

const MAX_DENOMINATOR: u32 = 16;
const FRACTION_TOLERANCE: f64 = 0.001;

/// Render a quantity the way recipes write them: `2`, `1 1/2`, `3/4`.
///
/// Amounts that are no simple fraction fall back to two decimals. A missing
/// quantity renders as an empty string.
pub fn format_count(count: Option<f64>) -> String {
    let Some(count) = count else {
        return String::new();
    };
    if !count.is_finite() || count < 0.0 {
        return format!("{count}");
    }

    let mut whole = count.trunc();
    let frac = count - whole;
    if frac < FRACTION_TOLERANCE {
        return format!("{whole}");
    }
    if frac > 1.0 - FRACTION_TOLERANCE {
        whole += 1.0;
        return format!("{whole}");
    }

    match nearest_fraction(frac) {
        Some((n, d)) if whole == 0.0 => format!("{n}/{d}"),
        Some((n, d)) => format!("{whole} {n}/{d}"),
        None => {
            let text = format!("{count:.2}");
            text.trim_end_matches('0').trim_end_matches('.').to_string()
        }
    }
}

fn nearest_fraction(frac: f64) -> Option<(u32, u32)> {
    (2..=MAX_DENOMINATOR).find_map(|d| {
        let n = (frac * f64::from(d)).round();
        let close = (frac - n / f64::from(d)).abs() < FRACTION_TOLERANCE;
        // n is in 1..d here, so the cast is exact.
        (close && n >= 1.0).then_some((n as u32, d))
    })
}

/// Shorten `title` to whole words fitting in `limit` characters, followed
/// by ` ...`. Titles within the limit are returned unchanged.
pub fn limit_title(title: &str, limit: usize) -> String {
    if title.chars().count() <= limit {
        return title.to_string();
    }
    let mut kept: Vec<&str> = Vec::new();
    let mut used = 0;
    for word in title.split_whitespace() {
        let len = word.chars().count();
        if used + len > limit {
            break;
        }
        used += len;
        kept.push(word);
    }
    if kept.is_empty() {
        let prefix: String = title.chars().take(limit).collect();
        return format!("{prefix} ...");
    }
    format!("{} ...", kept.join(" "))
}
