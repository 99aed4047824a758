use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Asset {
    pub id: i64,
    pub date: NaiveDate,
    pub category: String,
    pub item: String,
    pub amount: f64,
    pub notes: Option<String>,
}
