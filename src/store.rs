//! Expense store
//!
//! Holds the session's authoritative expense list. Every mutation goes to the
//! persistence API first and is applied locally only once the API confirms it,
//! so the local list never shows a state the server rejected.

use tracing::info;

use crate::api::ExpenseApi;
use crate::error::{SpendError, SpendResult};
use crate::models::{Expense, ExpenseDraft, ExpenseId};
use crate::services::{filter_expenses, ExpenseFilter};

/// In-memory expense list backed by a remote collection
pub struct ExpenseStore<A> {
    api: A,
    expenses: Vec<Expense>,
}

impl<A: ExpenseApi> ExpenseStore<A> {
    /// Seed the store from the remote collection
    pub async fn load(api: A) -> SpendResult<Self> {
        let expenses = api.list().await?;
        info!(count = expenses.len(), "loaded expenses");
        Ok(Self { api, expenses })
    }

    /// Record a new expense; it is placed first in the list
    pub async fn add(&mut self, draft: ExpenseDraft) -> SpendResult<&Expense> {
        validate(&draft)?;

        let expense = self.api.create(&draft).await?;
        info!(id = %expense.id, "created expense");

        self.expenses.insert(0, expense);
        Ok(&self.expenses[0])
    }

    /// Replace the contents of an existing expense
    pub async fn update(&mut self, id: &ExpenseId, draft: ExpenseDraft) -> SpendResult<&Expense> {
        validate(&draft)?;
        let index = self.position(id)?;

        self.api.update(id, &draft).await?;
        info!(id = %id, "updated expense");

        self.expenses[index] = draft.into_expense(id.clone());
        Ok(&self.expenses[index])
    }

    /// Delete an expense, returning the removed record
    pub async fn remove(&mut self, id: &ExpenseId) -> SpendResult<Expense> {
        let index = self.position(id)?;

        self.api.delete(id).await?;
        info!(id = %id, "deleted expense");

        Ok(self.expenses.remove(index))
    }
}

impl<A> ExpenseStore<A> {
    /// Build a store from an already loaded list
    pub fn with_expenses(api: A, expenses: Vec<Expense>) -> Self {
        Self { api, expenses }
    }

    /// All expenses, newest additions first
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Expenses passing `filter`, in store order
    pub fn filtered(&self, filter: &ExpenseFilter) -> Vec<Expense> {
        filter_expenses(&self.expenses, filter)
    }

    pub fn get(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| &e.id == id)
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// The gateway this store writes through
    pub fn api(&self) -> &A {
        &self.api
    }

    fn position(&self, id: &ExpenseId) -> SpendResult<usize> {
        self.expenses
            .iter()
            .position(|e| &e.id == id)
            .ok_or_else(|| SpendError::expense_not_found(id.as_str()))
    }
}

fn validate(draft: &ExpenseDraft) -> SpendResult<()> {
    draft
        .validate()
        .map_err(|e| SpendError::Validation(e.to_string()))
}
