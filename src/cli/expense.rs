//! Expense CLI commands
//!
//! Implements listing, adding, editing and deleting expenses. Every mutation
//! goes through the store, so nothing changes locally unless the API accepted it.

use chrono::Local;
use clap::Subcommand;

use super::{parse_amount, parse_category, parse_date, FilterArgs};
use crate::api::ExpenseApi;
use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::{SpendError, SpendResult};
use crate::models::{ExpenseCategory, ExpenseDraft, ExpenseId};
use crate::services::total;
use crate::store::ExpenseStore;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// List expenses, optionally filtered
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Record a new expense
    Add {
        /// What the money was spent on
        title: String,
        /// Amount (e.g., "12.50" or "12")
        amount: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Category (food, transportation, housing, utilities, entertainment, healthcare, other)
        #[arg(short, long, default_value = "other")]
        category: String,
        /// Optional note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Edit an expense; unspecified fields keep their current value
    Edit {
        /// Expense ID
        id: String,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New note (an empty string clears it)
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID
        id: String,
    },
}

/// Handle an expense command
pub async fn handle_expense_command<A: ExpenseApi>(
    store: &mut ExpenseStore<A>,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> SpendResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::List { filter } => {
            let filter = filter.to_filter()?;
            let expenses = store.filtered(&filter);

            print!("{}", format_expense_table(&expenses, symbol));
            if !expenses.is_empty() {
                println!(
                    "{} of {} expense(s), total {}",
                    expenses.len(),
                    store.len(),
                    total(&expenses).format_with_symbol(symbol)
                );
            }
        }

        ExpenseCommands::Add {
            title,
            amount,
            date,
            category,
            note,
        } => {
            let amount = parse_amount(&amount)?;
            let category = parse_category(&category)?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => Local::now().date_naive(),
            };

            let mut draft = ExpenseDraft::new(title, amount, date, category);
            if let Some(note) = note {
                draft = draft.with_note(note);
            }

            let expense = store.add(draft).await?;
            println!("Added expense:");
            print!("{}", format_expense_details(expense, symbol));
        }

        ExpenseCommands::Edit {
            id,
            title,
            amount,
            date,
            category,
            note,
        } => {
            let id = ExpenseId::new(id);
            let current = store
                .get(&id)
                .ok_or_else(|| SpendError::expense_not_found(id.as_str()))?;

            if title.is_none()
                && amount.is_none()
                && date.is_none()
                && category.is_none()
                && note.is_none()
            {
                println!("No changes specified. Use --title, --amount, --date, --category or --note.");
                return Ok(());
            }

            let draft = apply_edits(current.to_draft(), title, amount, date, category, note)?;
            let updated = store.update(&id, draft).await?;
            println!("Updated expense:");
            print!("{}", format_expense_details(updated, symbol));
        }

        ExpenseCommands::Delete { id } => {
            let removed = store.remove(&ExpenseId::new(id)).await?;
            println!(
                "Deleted expense: {} ({})",
                removed.title,
                removed.amount.format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}

/// Overlay the given fields on an existing draft
fn apply_edits(
    mut draft: ExpenseDraft,
    title: Option<String>,
    amount: Option<String>,
    date: Option<String>,
    category: Option<String>,
    note: Option<String>,
) -> SpendResult<ExpenseDraft> {
    if let Some(title) = title {
        draft.title = title;
    }
    if let Some(amount) = amount {
        draft.amount = parse_amount(&amount)?;
    }
    if let Some(date) = date {
        draft.date = parse_date(&date)?;
    }
    if let Some(category) = category {
        draft.category = parse_category(&category)?;
    }
    if let Some(note) = note {
        draft = draft.with_note(note);
    }
    Ok(draft)
}

/// Format every category with its label and color
pub fn format_category_list() -> String {
    let mut output = String::new();
    output.push_str(&format!("{:<16} {:<16} {}\n", "Key", "Label", "Color"));
    output.push_str(&"-".repeat(40));
    output.push('\n');
    for category in ExpenseCategory::all() {
        output.push_str(&format!(
            "{:<16} {:<16} {}\n",
            category.key(),
            category.label(),
            category.color()
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn base() -> ExpenseDraft {
        ExpenseDraft::new(
            "Coffee",
            Money::from_cents(450),
            "2024-05-01".parse().unwrap(),
            ExpenseCategory::Food,
        )
        .with_note("oat milk")
    }

    #[test]
    fn test_apply_edits_keeps_unspecified_fields() {
        let draft = apply_edits(base(), None, Some("5.25".into()), None, None, None).unwrap();

        assert_eq!(draft.title, "Coffee");
        assert_eq!(draft.amount, Money::from_cents(525));
        assert_eq!(draft.category, ExpenseCategory::Food);
        assert_eq!(draft.note.as_deref(), Some("oat milk"));
    }

    #[test]
    fn test_apply_edits_empty_note_clears() {
        let draft = apply_edits(base(), None, None, None, None, Some(String::new())).unwrap();
        assert_eq!(draft.note, None);
    }

    #[test]
    fn test_apply_edits_rejects_bad_category() {
        let err = apply_edits(base(), None, None, None, Some("snacks".into()), None).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_format_category_list() {
        let output = format_category_list();
        assert!(output.contains("food"));
        assert!(output.contains("#FF6B6B"));
        assert!(output.contains("Healthcare"));
        assert_eq!(output.lines().count(), 2 + ExpenseCategory::all().len());
    }
}
