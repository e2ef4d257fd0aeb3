//! Ingredient parsing.
//!
//! Turns a free-text ingredient line such as `"1 1/2 tbsp olive oil"` into a
//! structured [`Ingredient`]. Parsing is best-effort and never fails: a line
//! the grammar cannot make sense of degrades to a name-only ingredient.
//!
//! # Grammar
//!
//! 1. Parenthesized text is removed and the line is lower-cased.
//! 2. The first token that is a known unit spelling (see [`crate::units`]) is
//!    the unit. The run of number tokens directly before it supplies the
//!    quantity, which defaults to `1` when the run is empty. Words such as
//!    "about" or "a" may sit inside the run; earlier tokens stay in the name.
//! 3. Without a unit, leading number tokens supply the quantity.
//! 4. Whatever is left is the name, minus a connective `of` after the unit
//!    and a trailing "to taste".
//!
//! Number tokens are integers, decimals, fractions (`1/2`), hyphenated mixed
//! numbers (`1-1/2`), ranges (`2-3`, read as the lower bound) and Unicode
//! vulgar fractions (`½`, `1½`). Consecutive number tokens are summed.
//!
//! # Example
//!
//! ```rust
//! use forkify_core::ingredient::parse_ingredient;
//! use forkify_core::units::Unit;
//!
//! let oil = parse_ingredient("1 1/2 tbsp olive oil");
//! assert_eq!(oil.quantity, Some(1.5));
//! assert_eq!(oil.unit, Some(Unit::Tablespoon));
//! assert_eq!(oil.name, "olive oil");
//!
//! let salt = parse_ingredient("A pinch of salt");
//! assert_eq!(salt.quantity, Some(1.0));
//! assert_eq!(salt.unit_str(), "pinch");
//! assert_eq!(salt.name, "salt");
//! ```

use serde::{Deserialize, Serialize};

use crate::units::Unit;

/// Words that only soften a quantity ("about 2 cups").
const APPROXIMATORS: &[&str] = &["about", "approximately", "approx", "around", "roughly", "~"];

/// A parsed ingredient line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Amount, if the line had one
    pub quantity: Option<f64>,

    /// Canonical unit, if the line had one
    pub unit: Option<Unit>,

    /// Lower-cased ingredient name; never empty for a non-blank line
    pub name: String,
}

impl Ingredient {
    /// Creates a name-only ingredient.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            quantity: None,
            unit: None,
            name: name.into(),
        }
    }

    /// Sets the quantity.
    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Sets the unit.
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }

    /// The canonical unit string, or `""` when there is no unit.
    pub fn unit_str(&self) -> &'static str {
        self.unit.map(|u| u.as_str()).unwrap_or("")
    }

    /// Returns a copy with the quantity rescaled from `from` servings to `to`
    /// servings (`quantity * to / from`). Unit and name are unchanged.
    ///
    /// `from` must be at least 1.
    pub fn rescaled(&self, from: u32, to: u32) -> Self {
        let factor = f64::from(to) / f64::from(from.max(1));
        Self {
            quantity: self.quantity.map(|q| q * factor),
            unit: self.unit,
            name: self.name.clone(),
        }
    }
}

/// Parse a raw ingredient line.
///
/// Never fails. See the [module documentation](self) for the grammar.
pub fn parse_ingredient(line: &str) -> Ingredient {
    let cleaned = strip_parenthesized(line).to_lowercase();
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();

    let (quantity, unit, name_tokens) = match tokens
        .iter()
        .position(|t| Unit::from_token(t).is_some())
    {
        Some(unit_index) => {
            let unit = Unit::from_token(tokens[unit_index]);
            let run_start = quantity_run_start(&tokens[..unit_index]);
            let amount = tokens[run_start..unit_index]
                .iter()
                .filter_map(|t| parse_quantity(t))
                .fold(None, |sum: Option<f64>, q| Some(sum.unwrap_or(0.0) + q));
            let mut prefix = tokens[..run_start].to_vec();
            let mut rest = &tokens[unit_index + 1..];
            if rest.first() == Some(&"of") {
                rest = &rest[1..];
            }
            prefix.extend_from_slice(rest);
            (Some(amount.unwrap_or(1.0)), unit, prefix)
        }
        None => {
            let leading = tokens
                .iter()
                .take_while(|t| parse_quantity(t).is_some())
                .count();
            let quantity = (leading > 0).then(|| {
                tokens[..leading]
                    .iter()
                    .filter_map(|t| parse_quantity(t))
                    .sum::<f64>()
            });
            (quantity, None, tokens[leading..].to_vec())
        }
    };

    let name = clean_name(&name_tokens);
    if name.is_empty() {
        return name_only(line, &tokens);
    }

    Ingredient {
        quantity,
        unit,
        name,
    }
}

/// Start of the run of quantity and filler tokens that ends the slice.
///
/// Only this run belongs to the unit; a number with a word after it is part
/// of the name ("2 eggs, beaten with 1 tbsp milk").
fn quantity_run_start(before_unit: &[&str]) -> usize {
    before_unit
        .iter()
        .rposition(|t| parse_quantity(t).is_none() && !is_filler(t))
        .map_or(0, |i| i + 1)
}

/// Words allowed between a quantity and its unit.
fn is_filler(token: &str) -> bool {
    // "a pinch", "an ounce"
    APPROXIMATORS.contains(&token) || token == "a" || token == "an"
}

/// Fallback: the whole line becomes the name.
fn name_only(line: &str, tokens: &[&str]) -> Ingredient {
    let joined = tokens.join(" ");
    if joined.is_empty() {
        Ingredient::new(line.trim())
    } else {
        Ingredient::new(joined)
    }
}

/// Join name tokens, dropping a trailing "to taste" and stray punctuation.
fn clean_name(tokens: &[&str]) -> String {
    let mut tokens: Vec<&str> = tokens
        .iter()
        .copied()
        .filter(|t| !t.trim_matches(',').is_empty())
        .collect();

    if tokens.len() >= 2 && tokens[tokens.len() - 2..] == ["to", "taste"] {
        tokens.truncate(tokens.len() - 2);
        // "salt, or to taste"
        if tokens.last() == Some(&"or") {
            tokens.pop();
        }
    }

    tokens
        .join(" ")
        .trim_end_matches([',', '.', ';'])
        .trim()
        .to_string()
}

/// Remove every `( ... )` group, replacing it with a space.
fn strip_parenthesized(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut depth = 0usize;
    for c in line.chars() {
        match c {
            '(' => {
                depth += 1;
                out.push(' ');
            }
            ')' if depth > 0 => depth -= 1,
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

/// Parse one quantity token. Returns `None` for anything that is not a
/// finite, non-negative amount.
pub fn parse_quantity(token: &str) -> Option<f64> {
    let token = token.trim_end_matches(',');
    if token.is_empty() {
        return None;
    }

    // "1½"
    if let Some(last) = token.chars().last() {
        if let Some(fraction) = vulgar_fraction(last) {
            let whole = &token[..token.len() - last.len_utf8()];
            return if whole.is_empty() {
                Some(fraction)
            } else {
                parse_number(whole).map(|w| w + fraction)
            };
        }
    }

    if let Some((left, right)) = token.split_once('-') {
        let left = parse_simple(left)?;
        let right = parse_simple(right)?;
        // "1-1/2" is a mixed number, "2-3" a range
        return if right < 1.0 {
            Some(left + right)
        } else {
            Some(left)
        };
    }

    parse_simple(token)
}

/// A plain number or an `a/b` fraction.
fn parse_simple(token: &str) -> Option<f64> {
    match token.split_once('/') {
        Some((numerator, denominator)) => {
            let n = parse_number(numerator)?;
            let d = parse_number(denominator)?;
            (d > 0.0).then(|| n / d)
        }
        None => parse_number(token),
    }
}

/// Digits with an optional decimal point. Rejects `inf`, `nan` and signs,
/// which `f64::from_str` would otherwise accept.
fn parse_number(token: &str) -> Option<f64> {
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    if !token.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    token.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn vulgar_fraction(c: char) -> Option<f64> {
    let value = match c {
        '½' => 1.0 / 2.0,
        '⅓' => 1.0 / 3.0,
        '⅔' => 2.0 / 3.0,
        '¼' => 1.0 / 4.0,
        '¾' => 3.0 / 4.0,
        '⅕' => 1.0 / 5.0,
        '⅙' => 1.0 / 6.0,
        '⅛' => 1.0 / 8.0,
        '⅜' => 3.0 / 8.0,
        '⅝' => 5.0 / 8.0,
        '⅞' => 7.0 / 8.0,
        _ => return None,
    };
    Some(value)
}
