//! The pay-cycle ledger page: living expenses grouped into the
//! 25th-to-24th window, measured against the month's budget.

use std::collections::BTreeMap;

use askama::Template;
use axum::extract::{Query, State};
use axum::response::Redirect;
use axum::Form;
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use crate::backend::AppState;
use crate::database::db::queries;
use crate::database::models::LedgerExpense;
use crate::error::AppError;
use crate::period::{parse_month_or, period_key_for, PayCycle};

#[derive(Template)]
#[template(path = "monthly_ledger.html")]
pub struct MonthlyLedgerTemplate {
    pub expenses: Vec<LedgerExpense>,
    pub budget: f64,
    pub total_spent: f64,
    pub remaining_budget: f64,
    pub usage_percentage: String,
    pub month_key: String,
    pub month_display: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub prev_month: String,
    pub next_month: String,
    pub d_day: Option<i64>,
    pub chart_data: String,
}

#[derive(Deserialize)]
pub struct LedgerQuery {
    pub month: Option<String>,
}

pub async fn monthly_ledger(
    State(state): State<AppState>,
    Query(query): Query<LedgerQuery>,
) -> Result<MonthlyLedgerTemplate, AppError> {
    let today = Local::now().date_naive();
    let reference = parse_month_or(query.month.as_deref(), today);
    let cycle = PayCycle::resolve(reference);

    let expenses =
        queries::get_ledger_expenses_between(&state.db, cycle.start_date, cycle.end_date).await?;

    let mut category_totals: BTreeMap<&str, f64> = BTreeMap::new();
    for expense in &expenses {
        *category_totals.entry(expense.category.as_str()).or_default() += expense.amount;
    }
    let chart_data = serde_json::to_string(&category_totals).unwrap_or_else(|_| "{}".to_string());

    let total_spent: f64 = expenses.iter().map(|e| e.amount).sum();
    let budget = queries::get_budget_or_default(&state.db, &cycle.key()).await?;
    let usage = usage_percentage(total_spent, budget);

    Ok(MonthlyLedgerTemplate {
        expenses,
        budget,
        total_spent,
        remaining_budget: budget - total_spent,
        usage_percentage: format!("{usage:.1}"),
        month_key: cycle.key(),
        month_display: cycle.display_month.format("%Y-%m").to_string(),
        start_date: cycle.start_date,
        end_date: cycle.end_date,
        prev_month: cycle.prev_key(),
        next_month: cycle.next_key(),
        d_day: cycle.days_until_payday(today),
        chart_data,
    })
}

/// Share of the budget already spent, as a percentage. A zero budget
/// reads as 0% rather than dividing by zero.
fn usage_percentage(total_spent: f64, budget: f64) -> f64 {
    if budget > 0.0 {
        total_spent / budget * 100.0
    } else {
        0.0
    }
}

#[derive(Deserialize)]
pub struct AddLedgerExpenseForm {
    pub expense_date: NaiveDate,
    pub category: String,
    pub item: String,
    pub amount: f64,
}

pub async fn add_ledger_expense(
    State(state): State<AppState>,
    Form(form): Form<AddLedgerExpenseForm>,
) -> Result<Redirect, AppError> {
    queries::create_ledger_expense(
        &state.db,
        form.expense_date,
        &form.category,
        &form.item,
        form.amount,
    )
    .await?;

    // Land on the window the new entry belongs to, which for dates on the
    // 25th or later is the next month's page.
    let key = period_key_for(form.expense_date);
    Ok(Redirect::to(&format!("/monthly_ledger?month={key}")))
}

#[derive(Deserialize)]
pub struct DeleteLedgerExpenseForm {
    pub expense_id: i64,
}

pub async fn delete_ledger_expense(
    State(state): State<AppState>,
    Form(form): Form<DeleteLedgerExpenseForm>,
) -> Result<Redirect, AppError> {
    let expense = queries::get_ledger_expense_by_id(&state.db, form.expense_id)
        .await?
        .ok_or(AppError::NotFound("ledger expense"))?;

    queries::delete_ledger_expense(&state.db, form.expense_id).await?;

    let key = period_key_for(expense.expense_date);
    Ok(Redirect::to(&format!("/monthly_ledger?month={key}")))
}

#[derive(Deserialize)]
pub struct SetBudgetForm {
    pub month: String,
    pub amount: f64,
}

pub async fn set_budget(
    State(state): State<AppState>,
    Form(form): Form<SetBudgetForm>,
) -> Result<Redirect, AppError> {
    queries::set_budget(&state.db, &form.month, form.amount).await?;
    Ok(Redirect::to(&format!("/monthly_ledger?month={}", form.month)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_spend_is_zero_percent() {
        assert_eq!(usage_percentage(0.0, 700_000.0), 0.0);
    }

    #[test]
    fn usage_is_spent_over_budget() {
        assert_eq!(usage_percentage(350_000.0, 700_000.0), 50.0);
        assert!(usage_percentage(770_000.0, 700_000.0) > 100.0);
    }

    #[test]
    fn zero_budget_never_divides() {
        assert_eq!(usage_percentage(123_456.0, 0.0), 0.0);
    }
}
