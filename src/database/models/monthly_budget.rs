use serde::Serialize;
use sqlx::FromRow;

/// Budget override for one pay-cycle, keyed by its "YYYY-MM" label.
/// Months without a row use the default budget.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MonthlyBudget {
    pub id: i64,
    pub month: String,
    pub amount: f64,
}
