//! Budget evaluation
//!
//! Compares per-category spend across the full, unfiltered expense list
//! against each budget goal.

use crate::models::{Budget, BudgetGoals, Expense, ExpenseCategory, Money};

/// Progress of one category against its budget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetStatus {
    pub category: ExpenseCategory,
    pub limit: Money,
    pub spent: Money,
    /// Spent as a percentage of the limit; may exceed 100
    pub percentage: f64,
    pub over_budget: bool,
}

impl BudgetStatus {
    /// Percentage clamped to 0..=100 for progress bars
    pub fn progress(&self) -> f64 {
        self.percentage.clamp(0.0, 100.0)
    }

    /// Amount left before the limit is reached (negative when over)
    pub fn remaining(&self) -> Money {
        self.limit - self.spent
    }
}

/// Sum of amounts for one category
pub fn spent_in(category: ExpenseCategory, expenses: &[Expense]) -> Money {
    expenses
        .iter()
        .filter(|e| e.category == category)
        .map(|e| e.amount)
        .sum()
}

/// Evaluate a single budget against the expense list
pub fn evaluate(budget: &Budget, expenses: &[Expense]) -> BudgetStatus {
    let spent = spent_in(budget.category(), expenses);
    // Limits are positive by construction
    let percentage = spent.percent_of(budget.limit()).unwrap_or(0.0);

    BudgetStatus {
        category: budget.category(),
        limit: budget.limit(),
        spent,
        percentage,
        over_budget: spent > budget.limit(),
    }
}

/// Evaluate every goal, in goal order
pub fn evaluate_all(goals: &BudgetGoals, expenses: &[Expense]) -> Vec<BudgetStatus> {
    goals.iter().map(|b| evaluate(b, expenses)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;

    fn expense(category: ExpenseCategory, cents: i64) -> Expense {
        Expense {
            id: ExpenseId::new(format!("{:?}-{}", category, cents)),
            title: "test".into(),
            amount: Money::from_cents(cents),
            date: "2024-01-10".parse().unwrap(),
            category,
            note: None,
        }
    }

    fn budget(category: ExpenseCategory, cents: i64) -> Budget {
        Budget::new(category, Money::from_cents(cents)).unwrap()
    }

    #[test]
    fn test_over_budget_scenario() {
        let expenses = vec![
            expense(ExpenseCategory::Food, 10000),
            expense(ExpenseCategory::Food, 5000),
            expense(ExpenseCategory::Housing, 99999),
        ];
        let status = evaluate(&budget(ExpenseCategory::Food, 10000), &expenses);

        assert_eq!(status.spent, Money::from_cents(15000));
        assert_eq!(status.percentage, 150.0);
        assert!(status.over_budget);
        assert_eq!(status.progress(), 100.0);
        assert_eq!(status.remaining(), Money::from_cents(-5000));
    }

    #[test]
    fn test_exactly_at_limit_is_not_over() {
        let expenses = vec![expense(ExpenseCategory::Food, 10000)];
        let status = evaluate(&budget(ExpenseCategory::Food, 10000), &expenses);

        assert_eq!(status.percentage, 100.0);
        assert!(!status.over_budget);
    }

    #[test]
    fn test_one_cent_over() {
        let expenses = vec![expense(ExpenseCategory::Food, 10001)];
        assert!(evaluate(&budget(ExpenseCategory::Food, 10000), &expenses).over_budget);
    }

    #[test]
    fn test_no_spending() {
        let status = evaluate(&budget(ExpenseCategory::Entertainment, 20000), &[]);
        assert_eq!(status.spent, Money::zero());
        assert_eq!(status.percentage, 0.0);
        assert!(!status.over_budget);
        assert_eq!(status.progress(), 0.0);
    }

    #[test]
    fn test_evaluate_all_keeps_goal_order() {
        let expenses = vec![
            expense(ExpenseCategory::Transportation, 15000),
            expense(ExpenseCategory::Food, 25000),
        ];
        let statuses = evaluate_all(&BudgetGoals::default(), &expenses);

        let categories: Vec<_> = statuses.iter().map(|s| s.category).collect();
        assert_eq!(
            categories,
            vec![
                ExpenseCategory::Food,
                ExpenseCategory::Entertainment,
                ExpenseCategory::Transportation
            ]
        );
        assert_eq!(statuses[0].percentage, 50.0);
        assert_eq!(statuses[2].percentage, 50.0);
    }
}
