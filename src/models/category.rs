//! Expense categories
//!
//! Categories are a closed set. Each variant carries static display metadata
//! (label and chart color) through [`CategoryInfo`]; adding a category means
//! adding a variant and a row to the metadata table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The category an expense is filed under
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Food,
    Transportation,
    Housing,
    Utilities,
    Entertainment,
    Healthcare,
    #[default]
    Other,
}

/// Static display metadata for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    /// Wire and CLI name (lowercase)
    pub key: &'static str,
    /// Human readable label
    pub label: &'static str,
    /// Chart color as a hex string
    pub color: &'static str,
}

static CATEGORY_INFO: [(ExpenseCategory, CategoryInfo); 7] = [
    (
        ExpenseCategory::Food,
        CategoryInfo {
            key: "food",
            label: "Food",
            color: "#FF6B6B",
        },
    ),
    (
        ExpenseCategory::Transportation,
        CategoryInfo {
            key: "transportation",
            label: "Transportation",
            color: "#4ECDC4",
        },
    ),
    (
        ExpenseCategory::Housing,
        CategoryInfo {
            key: "housing",
            label: "Housing",
            color: "#45B7D1",
        },
    ),
    (
        ExpenseCategory::Utilities,
        CategoryInfo {
            key: "utilities",
            label: "Utilities",
            color: "#96CEB4",
        },
    ),
    (
        ExpenseCategory::Entertainment,
        CategoryInfo {
            key: "entertainment",
            label: "Entertainment",
            color: "#FFEEAD",
        },
    ),
    (
        ExpenseCategory::Healthcare,
        CategoryInfo {
            key: "healthcare",
            label: "Healthcare",
            color: "#D4A5A5",
        },
    ),
    (
        ExpenseCategory::Other,
        CategoryInfo {
            key: "other",
            label: "Other",
            color: "#9BA4B4",
        },
    ),
];

impl ExpenseCategory {
    /// Get all categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Transportation,
            Self::Housing,
            Self::Utilities,
            Self::Entertainment,
            Self::Healthcare,
            Self::Other,
        ]
    }

    /// Get the metadata row for this category
    pub fn info(&self) -> &'static CategoryInfo {
        // The table is indexed in declaration order
        &CATEGORY_INFO[*self as usize].1
    }

    pub fn key(&self) -> &'static str {
        self.info().key
    }

    pub fn label(&self) -> &'static str {
        self.info().label
    }

    pub fn color(&self) -> &'static str {
        self.info().color
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for ExpenseCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

/// Error returned when a string names no known category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = ExpenseCategory::all().iter().map(|c| c.key()).collect();
        write!(
            f,
            "Unknown category '{}' (expected one of: {})",
            self.0,
            known.join(", ")
        )
    }
}

impl std::error::Error for CategoryParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_table_matches_variants() {
        for (category, info) in CATEGORY_INFO.iter() {
            assert_eq!(category.info(), info);
        }
        assert_eq!(ExpenseCategory::all().len(), CATEGORY_INFO.len());
    }

    #[test]
    fn test_colors() {
        assert_eq!(ExpenseCategory::Food.color(), "#FF6B6B");
        assert_eq!(ExpenseCategory::Other.color(), "#9BA4B4");
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(
            "Food".parse::<ExpenseCategory>().unwrap(),
            ExpenseCategory::Food
        );
        assert_eq!(
            " healthcare ".parse::<ExpenseCategory>().unwrap(),
            ExpenseCategory::Healthcare
        );
        let err = "groceries".parse::<ExpenseCategory>().unwrap_err();
        assert!(err.to_string().contains("groceries"));
    }

    #[test]
    fn test_default_is_other() {
        assert_eq!(ExpenseCategory::default(), ExpenseCategory::Other);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&ExpenseCategory::Transportation).unwrap();
        assert_eq!(json, "\"transportation\"");

        let parsed: ExpenseCategory = serde_json::from_str("\"utilities\"").unwrap();
        assert_eq!(parsed, ExpenseCategory::Utilities);
    }
}
