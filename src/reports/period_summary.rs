//! Period summary report
//!
//! Everything the period screen needs in one call: the resolved window, its
//! label, expense and income totals, and the category distribution for both
//! sides.

use std::io::Write;

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::debug;

use crate::error::{MonetaError, MonetaResult};
use crate::export::csv::escape_csv;
use crate::locale::{AmountFormat, RangeLocale};
use crate::models::{CategoryShare, DateRange, PeriodKind};
use crate::services::{aggregate, filter, period};
use crate::storage::TransactionStore;

/// Summary of one period window
#[derive(Debug, Clone, Serialize)]
pub struct PeriodSummary {
    /// The period kind the window was resolved from
    pub kind: PeriodKind,

    /// Months navigated away from the reference instant
    pub month_offset: i32,

    /// The resolved window
    pub range: DateRange,

    /// Human-readable label for the window
    pub label: String,

    /// Sum of absolute expense amounts in the window
    pub total_expenses: f64,

    /// Sum of income amounts in the window
    pub total_income: f64,

    /// Signed sum of every amount in the window
    pub net: f64,

    /// Number of transactions in the window
    pub transaction_count: usize,

    /// Expense distribution, largest share first
    pub expense_shares: Vec<CategoryShare>,

    /// Income distribution, largest share first
    pub income_shares: Vec<CategoryShare>,
}

impl PeriodSummary {
    /// Generate a summary for a period selection
    pub fn generate<S: TransactionStore>(
        store: &S,
        kind: PeriodKind,
        reference: NaiveDateTime,
        month_offset: i32,
        locale: &RangeLocale,
    ) -> MonetaResult<Self> {
        let range = period::resolve_range(kind, reference, month_offset);
        let label = period::describe_range(kind, reference, month_offset, locale);

        let transactions = store.list()?;
        let matching = filter::filter_by_range(&transactions, &range);
        debug!(%kind, month_offset, matched = matching.len(), "generating period summary");

        Ok(Self {
            kind,
            month_offset,
            range,
            label,
            total_expenses: aggregate::total_expenses(&matching),
            total_income: aggregate::total_income(&matching),
            net: aggregate::net_total(&matching),
            transaction_count: matching.len(),
            expense_shares: aggregate::expense_shares(&matching),
            income_shares: aggregate::income_shares(&matching),
        })
    }

    /// Format the summary for terminal display
    pub fn format_text(&self, amounts: &AmountFormat) -> String {
        let mut output = String::new();

        output.push_str(&format!("Period Summary: {}\n", self.label));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Expenses: {}\n",
            amounts.format(self.total_expenses)
        ));
        output.push_str(&format!("Income: {}\n", amounts.format(self.total_income)));
        output.push_str(&format!("Net: {}\n", amounts.format(self.net)));
        output.push_str(&format!("Transactions: {}\n", self.transaction_count));

        for (title, shares) in [
            ("Expenses by category", &self.expense_shares),
            ("Income by category", &self.income_shares),
        ] {
            if shares.is_empty() {
                continue;
            }
            output.push_str(&format!("\n{}\n", title));
            output.push_str(&"-".repeat(60));
            output.push('\n');
            for share in shares {
                output.push_str(&format!(
                    "  {:<30} {:>14} {:>6.1}%\n",
                    share.category,
                    amounts.format(share.amount),
                    share.percentage * 100.0
                ));
            }
        }

        output
    }

    /// Export the summary to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> MonetaResult<()> {
        writeln!(writer, "Label,Start,End,Side,Category,Amount,Percentage")
            .map_err(|e| MonetaError::Export(e.to_string()))?;

        for (side, shares) in [
            ("Expense", &self.expense_shares),
            ("Income", &self.income_shares),
        ] {
            for share in shares {
                writeln!(
                    writer,
                    "{},{},{},{},{},{:.2},{:.4}",
                    escape_csv(&self.label),
                    self.range.start.format("%Y-%m-%dT%H:%M:%S"),
                    self.range.end.format("%Y-%m-%dT%H:%M:%S"),
                    side,
                    escape_csv(&share.category),
                    share.amount,
                    share.percentage
                )
                .map_err(|e| MonetaError::Export(e.to_string()))?;
            }
        }

        Ok(())
    }

    /// Get the largest expense shares
    pub fn top_expense_categories(&self, limit: usize) -> &[CategoryShare] {
        &self.expense_shares[..limit.min(self.expense_shares.len())]
    }
}
