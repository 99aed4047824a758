use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Expense {
    pub id: i64,
    pub expense_type: String,
    pub expense_date: NaiveDate,
    pub category: String,
    pub item: String,
    pub amount: f64,
    pub notes: Option<String>,
}
