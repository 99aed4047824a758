//! The income/expense book: running lists of both, the balance between
//! them, and the usual add/edit/delete forms. New entries are dated today;
//! edits can move the date.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::Form;
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use crate::backend::AppState;
use crate::database::db::queries;
use crate::database::models::{Expense, Income};
use crate::error::AppError;

#[derive(Template)]
#[template(path = "expenses.html")]
pub struct ExpensesTemplate {
    pub incomes: Vec<Income>,
    pub expenses: Vec<Expense>,
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
}

#[derive(Template)]
#[template(path = "edit_expense.html")]
pub struct EditExpenseTemplate {
    pub expense: Expense,
}

#[derive(Template)]
#[template(path = "edit_income.html")]
pub struct EditIncomeTemplate {
    pub income: Income,
}

pub async fn expenses_page(State(state): State<AppState>) -> Result<ExpensesTemplate, AppError> {
    let incomes = queries::get_all_incomes(&state.db).await?;
    let expenses = queries::get_all_expenses(&state.db).await?;
    let total_income = queries::total_income(&state.db).await?;
    let total_expense = queries::total_expense(&state.db).await?;

    Ok(ExpensesTemplate {
        incomes,
        expenses,
        total_income,
        total_expense,
        balance: total_income - total_expense,
    })
}

#[derive(Deserialize)]
pub struct AddIncomeForm {
    pub income_type: String,
    pub amount: f64,
}

pub async fn add_income(
    State(state): State<AppState>,
    Form(form): Form<AddIncomeForm>,
) -> Result<Redirect, AppError> {
    let today = Local::now().date_naive();
    queries::create_income(&state.db, today, &form.income_type, form.amount).await?;
    Ok(Redirect::to("/expenses"))
}

#[derive(Deserialize)]
pub struct AddExpenseForm {
    pub expense_type: String,
    pub category: String,
    pub item: String,
    pub amount: f64,
    pub notes: Option<String>,
}

pub async fn add_expense(
    State(state): State<AppState>,
    Form(form): Form<AddExpenseForm>,
) -> Result<Redirect, AppError> {
    let today = Local::now().date_naive();
    let notes = form.notes.as_deref().filter(|s| !s.trim().is_empty());
    queries::create_expense(
        &state.db,
        &form.expense_type,
        today,
        &form.category,
        &form.item,
        form.amount,
        notes,
    )
    .await?;
    Ok(Redirect::to("/expenses"))
}

#[derive(Deserialize)]
pub struct DeleteIncomeForm {
    pub income_id: i64,
}

pub async fn delete_income(
    State(state): State<AppState>,
    Form(form): Form<DeleteIncomeForm>,
) -> Result<Redirect, AppError> {
    if !queries::delete_income(&state.db, form.income_id).await? {
        return Err(AppError::NotFound("income"));
    }
    Ok(Redirect::to("/expenses"))
}

#[derive(Deserialize)]
pub struct DeleteExpenseForm {
    pub expense_id: i64,
}

pub async fn delete_expense(
    State(state): State<AppState>,
    Form(form): Form<DeleteExpenseForm>,
) -> Result<Redirect, AppError> {
    if !queries::delete_expense(&state.db, form.expense_id).await? {
        return Err(AppError::NotFound("expense"));
    }
    Ok(Redirect::to("/expenses"))
}

pub async fn edit_expense_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<EditExpenseTemplate, AppError> {
    let expense = queries::get_expense_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("expense"))?;
    Ok(EditExpenseTemplate { expense })
}

#[derive(Deserialize)]
pub struct EditExpenseForm {
    pub expense_date: NaiveDate,
    pub expense_type: String,
    pub category: String,
    pub item: String,
    pub amount: f64,
    pub notes: Option<String>,
}

pub async fn update_expense(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<EditExpenseForm>,
) -> Result<Redirect, AppError> {
    let notes = form.notes.as_deref().filter(|s| !s.trim().is_empty());
    let updated = queries::update_expense(
        &state.db,
        id,
        &form.expense_type,
        form.expense_date,
        &form.category,
        &form.item,
        form.amount,
        notes,
    )
    .await?;
    if !updated {
        return Err(AppError::NotFound("expense"));
    }
    Ok(Redirect::to("/expenses"))
}

pub async fn edit_income_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<EditIncomeTemplate, AppError> {
    let income = queries::get_income_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("income"))?;
    Ok(EditIncomeTemplate { income })
}

#[derive(Deserialize)]
pub struct EditIncomeForm {
    pub income_date: NaiveDate,
    pub income_type: String,
    pub amount: f64,
}

pub async fn update_income(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<EditIncomeForm>,
) -> Result<Redirect, AppError> {
    let updated = queries::update_income(
        &state.db,
        id,
        form.income_date,
        &form.income_type,
        form.amount,
    )
    .await?;
    if !updated {
        return Err(AppError::NotFound("income"));
    }
    Ok(Redirect::to("/expenses"))
}
