//! CSV export functionality
//!
//! Renders transactions to CSV through any `Write`r; callers decide where
//! the bytes go.

use std::io::Write;

use crate::error::{MonetaError, MonetaResult};
use crate::models::Transaction;

/// Export transactions to CSV, one row per transaction
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
) -> MonetaResult<()> {
    writeln!(writer, "ID,Date,Description,Category,Amount,Kind")
        .map_err(|e| MonetaError::Export(e.to_string()))?;

    for txn in transactions {
        let kind = if txn.is_expense() {
            "Expense"
        } else if txn.is_income() {
            "Income"
        } else {
            ""
        };

        writeln!(
            writer,
            "{},{},{},{},{:.2},{}",
            txn.id,
            txn.date.format("%Y-%m-%dT%H:%M:%S"),
            escape_csv(&txn.description),
            escape_csv(&txn.category),
            txn.amount,
            kind
        )
        .map_err(|e| MonetaError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Escape a field for CSV output
pub(crate) fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
