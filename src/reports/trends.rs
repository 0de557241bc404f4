//! Monthly Trends Report
//!
//! Month-by-month spend over the full expense list with the
//! month-over-month insight.

use crate::display::{double_separator, format_bar, separator};
use crate::models::{Expense, Money};
use crate::services::{monthly_trend, trend_insight, TrendInsight, TrendPoint};

const BAR_WIDTH: usize = 30;

/// Monthly Trends Report
#[derive(Debug, Clone)]
pub struct TrendReport {
    /// Ascending by month
    pub points: Vec<TrendPoint>,
    pub insight: TrendInsight,
}

impl TrendReport {
    pub fn generate(expenses: &[Expense]) -> Self {
        let points = monthly_trend(expenses);
        let insight = trend_insight(&points);
        Self { points, insight }
    }

    /// Highest monthly total, used to scale the bars
    pub fn peak(&self) -> Money {
        self.points
            .iter()
            .map(|p| p.amount)
            .max()
            .unwrap_or_else(Money::zero)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Monthly Trends\n");
        output.push_str(&double_separator(60));
        output.push('\n');
        output.push_str(&format!("{}\n\n", self.insight));

        if self.points.is_empty() {
            return output;
        }

        output.push_str(&format!("{:<8} {:>12}  {}\n", "Month", "Amount", ""));
        output.push_str(&separator(60));
        output.push('\n');

        let peak = self.peak().as_decimal();
        for point in &self.points {
            output.push_str(&format!(
                "{:<8} {:>12}  {}\n",
                point.month,
                point.amount.format_with_symbol(symbol),
                format_bar(point.amount.as_decimal(), peak, BAR_WIDTH)
            ));
        }

        output
    }
}
