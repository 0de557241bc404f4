//! Remote sync gateway
//!
//! [`ExpenseApi`] is the seam between the expense store and the persistence
//! service. [`HttpExpenseApi`] speaks the REST protocol; tests substitute an
//! in-memory implementation.

pub mod http;
pub mod wire;

use std::future::Future;

use crate::error::ApiError;
use crate::models::{Expense, ExpenseDraft, ExpenseId};

pub use http::HttpExpenseApi;
pub use wire::{CreatedRecord, ExpenseRecord, RecordError, RecordId};

/// Operations on the remote `expenses` collection
///
/// Implementations report failures; they never retry.
pub trait ExpenseApi {
    /// Fetch the whole collection
    fn list(&self) -> impl Future<Output = Result<Vec<Expense>, ApiError>> + Send;

    /// Store a new expense and return it with its assigned identifier
    fn create(
        &self,
        draft: &ExpenseDraft,
    ) -> impl Future<Output = Result<Expense, ApiError>> + Send;

    /// Replace the expense stored under `id`
    fn update(
        &self,
        id: &ExpenseId,
        draft: &ExpenseDraft,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// Delete the expense stored under `id`
    fn delete(&self, id: &ExpenseId) -> impl Future<Output = Result<(), ApiError>> + Send;
}
