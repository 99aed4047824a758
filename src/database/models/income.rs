use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Income {
    pub id: i64,
    pub income_date: NaiveDate,
    pub income_type: String,
    pub amount: f64,
}
