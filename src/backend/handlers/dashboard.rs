use askama::Template;
use axum::extract::State;
use axum::response::Redirect;

use crate::backend::AppState;
use crate::database::db::queries;
use crate::database::models::{Asset, Expense, Income, Task};
use crate::error::AppError;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub incomes: Vec<Income>,
    pub expenses: Vec<Expense>,
    pub total_income_sum: f64,
    pub total_expense_sum: f64,
    pub assets: Vec<Asset>,
    pub assets_json: String,
    pub tasks: Vec<Task>,
}

pub async fn home() -> Redirect {
    Redirect::to("/dashboard")
}

pub async fn dashboard(State(state): State<AppState>) -> Result<DashboardTemplate, AppError> {
    let incomes = queries::get_all_incomes(&state.db).await?;
    let expenses = queries::get_all_expenses(&state.db).await?;
    let assets = queries::get_all_assets(&state.db).await?;
    let tasks = queries::get_all_tasks(&state.db).await?;

    let total_income_sum = queries::total_income(&state.db).await?;
    let total_expense_sum = queries::total_expense(&state.db).await?;

    // Asset rows are mirrored as JSON for the chart script.
    let assets_json = serde_json::to_string(&assets).unwrap_or_else(|_| "[]".to_string());

    Ok(DashboardTemplate {
        incomes,
        expenses,
        total_income_sum,
        total_expense_sum,
        assets,
        assets_json,
        tasks,
    })
}
