//! Expense model
//!
//! An [`ExpenseDraft`] is what the user submits; it becomes an [`Expense`]
//! once the persistence API has assigned it an identifier.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ExpenseCategory;
use super::money::Money;

/// Maximum title length in characters
pub const MAX_TITLE_LEN: usize = 100;

/// Opaque identifier assigned by the persistence API
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for ExpenseId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Expense contents without an identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub title: String,

    pub amount: Money,

    /// Calendar date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,

    pub category: ExpenseCategory,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ExpenseDraft {
    pub fn new(
        title: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        category: ExpenseCategory,
    ) -> Self {
        Self {
            title: title.into(),
            amount,
            date,
            category,
            note: None,
        }
    }

    /// Attach a free-text note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        self.note = if note.trim().is_empty() {
            None
        } else {
            Some(note)
        };
        self
    }

    /// Validate a draft entered locally
    ///
    /// Adds the title length cap on top of [`ExpenseDraft::check_invariants`].
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        self.check_invariants()?;

        let len = self.title.trim().chars().count();
        if len > MAX_TITLE_LEN {
            return Err(ExpenseValidationError::TitleTooLong(len));
        }

        Ok(())
    }

    /// Rules every stored expense satisfies, whoever wrote it
    pub fn check_invariants(&self) -> Result<(), ExpenseValidationError> {
        if self.title.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyTitle);
        }

        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount);
        }

        Ok(())
    }

    /// Attach a server-assigned identifier
    pub fn into_expense(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            title: self.title,
            amount: self.amount,
            date: self.date,
            category: self.category,
            note: self.note,
        }
    }
}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,

    pub title: String,

    pub amount: Money,

    pub date: NaiveDate,

    pub category: ExpenseCategory,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Expense {
    /// Year-month bucket key (`YYYY-MM`)
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    /// Copy of the contents without the identifier
    pub fn to_draft(&self) -> ExpenseDraft {
        ExpenseDraft {
            title: self.title.clone(),
            amount: self.amount,
            date: self.date,
            category: self.category,
            note: self.note.clone(),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) {}",
            self.date, self.title, self.category, self.amount
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyTitle,
    TitleTooLong(usize),
    NegativeAmount,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Expense title cannot be empty"),
            Self::TitleTooLong(len) => write!(
                f,
                "Expense title too long ({} chars, max {})",
                len, MAX_TITLE_LEN
            ),
            Self::NegativeAmount => write!(f, "Expense amount cannot be negative"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
