//! Unit-conversion table.
//!
//! Maps the many ways recipes spell a measurement unit ("Tbsp", "tablespoons",
//! "tbs.") onto one canonical [`Unit`]. Lookup is case-insensitive and ignores
//! a trailing period or comma, so tokens can be passed straight from a
//! whitespace split.
//!
//! # Example
//!
//! ```rust
//! use forkify_core::units::Unit;
//!
//! assert_eq!(Unit::from_token("Tbsp."), Some(Unit::Tablespoon));
//! assert_eq!(Unit::from_token("ounces"), Some(Unit::Ounce));
//! assert_eq!(Unit::Tablespoon.as_str(), "tablespoon");
//! assert_eq!(Unit::from_token("flour"), None);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A canonical measurement unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Tablespoon
    Tablespoon,
    /// Teaspoon
    Teaspoon,
    /// Cup
    Cup,
    /// Ounce
    Ounce,
    /// Pound
    Pound,
    /// Kilogram
    Kilogram,
    /// Gram
    Gram,
    /// Milliliter
    Milliliter,
    /// Liter
    Liter,
    /// Pinch
    Pinch,
    /// Clove
    Clove,
}

/// Synonym table: every accepted spelling and the unit it normalizes to.
///
/// Entries are lower-case with no trailing punctuation.
const SYNONYMS: &[(&str, Unit)] = &[
    ("tablespoons", Unit::Tablespoon),
    ("tablespoon", Unit::Tablespoon),
    ("tbsp", Unit::Tablespoon),
    ("tbsps", Unit::Tablespoon),
    ("tbs", Unit::Tablespoon),
    ("tbl", Unit::Tablespoon),
    ("teaspoons", Unit::Teaspoon),
    ("teaspoon", Unit::Teaspoon),
    ("tsp", Unit::Teaspoon),
    ("tsps", Unit::Teaspoon),
    ("cups", Unit::Cup),
    ("cup", Unit::Cup),
    ("ounces", Unit::Ounce),
    ("ounce", Unit::Ounce),
    ("oz", Unit::Ounce),
    ("pounds", Unit::Pound),
    ("pound", Unit::Pound),
    ("lbs", Unit::Pound),
    ("lb", Unit::Pound),
    ("kilograms", Unit::Kilogram),
    ("kilogram", Unit::Kilogram),
    ("kg", Unit::Kilogram),
    ("grams", Unit::Gram),
    ("gram", Unit::Gram),
    ("g", Unit::Gram),
    ("milliliters", Unit::Milliliter),
    ("milliliter", Unit::Milliliter),
    ("ml", Unit::Milliliter),
    ("liters", Unit::Liter),
    ("liter", Unit::Liter),
    ("pinches", Unit::Pinch),
    ("pinch", Unit::Pinch),
    ("cloves", Unit::Clove),
    ("clove", Unit::Clove),
];

impl Unit {
    /// Look up a token in the synonym table.
    ///
    /// Returns `None` when the token is not a known unit spelling.
    pub fn from_token(token: &str) -> Option<Self> {
        let normalized = token
            .trim()
            .trim_end_matches(['.', ','])
            .to_lowercase();
        if normalized.is_empty() {
            return None;
        }
        SYNONYMS
            .iter()
            .find(|(synonym, _)| *synonym == normalized)
            .map(|(_, unit)| *unit)
    }

    /// The canonical unit string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Tablespoon => "tablespoon",
            Unit::Teaspoon => "teaspoon",
            Unit::Cup => "cup",
            Unit::Ounce => "ounce",
            Unit::Pound => "pound",
            Unit::Kilogram => "kilogram",
            Unit::Gram => "gram",
            Unit::Milliliter => "milliliter",
            Unit::Liter => "liter",
            Unit::Pinch => "pinch",
            Unit::Clove => "clove",
        }
    }

    /// All canonical units.
    pub fn all() -> &'static [Unit] {
        &[
            Unit::Tablespoon,
            Unit::Teaspoon,
            Unit::Cup,
            Unit::Ounce,
            Unit::Pound,
            Unit::Kilogram,
            Unit::Gram,
            Unit::Milliliter,
            Unit::Liter,
            Unit::Pinch,
            Unit::Clove,
        ]
    }

    /// Every spelling the table accepts.
    pub fn synonyms() -> impl Iterator<Item = &'static str> {
        SYNONYMS.iter().map(|(synonym, _)| *synonym)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
