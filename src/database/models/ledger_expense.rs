use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// A living-expense entry on the pay-cycle ledger, counted against the
/// monthly budget of the window its date falls into.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LedgerExpense {
    pub id: i64,
    pub expense_date: NaiveDate,
    pub category: String,
    pub item: String,
    pub amount: f64,
}
