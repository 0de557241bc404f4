//! Wire records exchanged with the persistence API
//!
//! Records are decoded loosely first and converted into [`Expense`] one at a
//! time, so a single bad record on the server does not hide all the others.

use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;

use crate::models::{Expense, ExpenseDraft, ExpenseId, Money};

/// Identifier as the server sends it; some backends use numeric keys
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Text(String),
    Number(i64),
}

impl From<RecordId> for ExpenseId {
    fn from(id: RecordId) -> Self {
        match id {
            RecordId::Text(s) => ExpenseId::new(s),
            RecordId::Number(n) => ExpenseId::new(n.to_string()),
        }
    }
}

/// An expense record as returned by `GET /expenses`
///
/// The reference backend stores documents under `_id`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpenseRecord {
    #[serde(default, alias = "_id")]
    pub id: Option<RecordId>,
    pub title: String,
    pub amount: f64,
    pub date: String,
    pub category: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// Response body of `POST /expenses`; only the identifier is used
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedRecord {
    #[serde(alias = "_id")]
    pub id: RecordId,
}

/// Error body some servers send with a failing status
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: String,
}

/// Why a record could not become an [`Expense`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    MissingId,
    InvalidDate(String),
    InvalidAmount,
    UnknownCategory(String),
    Invalid(String),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingId => write!(f, "record has no id"),
            Self::InvalidDate(d) => write!(f, "invalid date '{}'", d),
            Self::InvalidAmount => write!(f, "amount is not a finite number in range"),
            Self::UnknownCategory(c) => write!(f, "unknown category '{}'", c),
            Self::Invalid(reason) => write!(f, "{}", reason),
        }
    }
}

impl std::error::Error for RecordError {}

impl TryFrom<ExpenseRecord> for Expense {
    type Error = RecordError;

    fn try_from(record: ExpenseRecord) -> Result<Self, Self::Error> {
        let id = record.id.ok_or(RecordError::MissingId)?;

        let date = NaiveDate::parse_from_str(&record.date, "%Y-%m-%d")
            .map_err(|_| RecordError::InvalidDate(record.date.clone()))?;

        let amount = Money::from_decimal(record.amount).ok_or(RecordError::InvalidAmount)?;

        let category = record
            .category
            .parse()
            .map_err(|_| RecordError::UnknownCategory(record.category.clone()))?;

        let mut draft = ExpenseDraft::new(record.title, amount, date, category);
        if let Some(note) = record.note {
            draft = draft.with_note(note);
        }
        draft
            .check_invariants()
            .map_err(|e| RecordError::Invalid(e.to_string()))?;

        Ok(draft.into_expense(id.into()))
    }
}
