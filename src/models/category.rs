//! Product category enum
//!
//! Categories form a closed set: every product and every transaction carries
//! exactly one of these values, and reports enumerate the full set so that
//! zero-sales categories still appear in chart output.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Biologicals,
    Micronutrients,
    Adjuvants,
    Herbicide,
    Fungicide,
    Insecticide,
}

impl Category {
    /// All categories, in canonical order. This is the grouping universe for
    /// every per-category report.
    pub const ALL: [Category; 6] = [
        Category::Biologicals,
        Category::Micronutrients,
        Category::Adjuvants,
        Category::Herbicide,
        Category::Fungicide,
        Category::Insecticide,
    ];

    /// The canonical key form (lowercase, hyphenated)
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Biologicals => "biologicals",
            Category::Micronutrients => "micronutrients",
            Category::Adjuvants => "adjuvants",
            Category::Herbicide => "herbicide",
            Category::Fungicide => "fungicide",
            Category::Insecticide => "insecticide",
        }
    }

    /// Presentation form: first letter upper-cased, hyphens replaced with
    /// spaces (e.g. "seed-treatment" would render as "Seed treatment").
    /// Formatting only; the key form is what grouping uses.
    pub fn display_name(&self) -> String {
        let key = self.as_str();
        let mut chars = key.chars();
        match chars.next() {
            Some(first) => {
                let rest: String = chars.collect();
                format!("{}{}", first.to_uppercase(), rest.replace('-', " "))
            }
            None => String::new(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "biologicals" => Ok(Category::Biologicals),
            "micronutrients" => Ok(Category::Micronutrients),
            "adjuvants" => Ok(Category::Adjuvants),
            "herbicide" => Ok(Category::Herbicide),
            "fungicide" => Ok(Category::Fungicide),
            "insecticide" => Ok(Category::Insecticide),
            other => Err(CategoryParseError::Unknown(other.to_string())),
        }
    }
}

/// Error type for category parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    Unknown(String),
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryParseError::Unknown(s) => write!(f, "Unknown category: {}", s),
        }
    }
}

impl std::error::Error for CategoryParseError {}
