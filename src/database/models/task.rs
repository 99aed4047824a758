use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// A due-date reminder: "replace the water filter by the 12th" and the
/// address the reminder email goes to.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Task {
    pub id: i64,
    pub item_name: String,
    pub model_name: Option<String>,
    pub due_date: NaiveDate,
    pub email: String,
}
