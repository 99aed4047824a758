//! Due-date reminders. Creating a task fires a confirmation email in the
//! background; the daily job in `service::reminder` handles the due-date
//! notification itself.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::Form;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::backend::AppState;
use crate::database::db::queries;
use crate::database::models::Task;
use crate::error::AppError;

#[derive(Template)]
#[template(path = "tasks.html")]
pub struct TasksTemplate {
    pub tasks: Vec<Task>,
}

#[derive(Template)]
#[template(path = "add_task.html")]
pub struct AddTaskTemplate;

#[derive(Template)]
#[template(path = "edit_task.html")]
pub struct EditTaskTemplate {
    pub task: Task,
}

pub async fn tasks_page(State(state): State<AppState>) -> Result<TasksTemplate, AppError> {
    let tasks = queries::get_all_tasks(&state.db).await?;
    Ok(TasksTemplate { tasks })
}

pub async fn add_task_form() -> AddTaskTemplate {
    AddTaskTemplate
}

#[derive(Deserialize)]
pub struct TaskForm {
    pub item_name: String,
    pub model_name: Option<String>,
    pub due_date: NaiveDate,
    pub email: String,
}

pub async fn add_task(
    State(state): State<AppState>,
    Form(form): Form<TaskForm>,
) -> Result<Redirect, AppError> {
    let model_name = form.model_name.as_deref().filter(|s| !s.trim().is_empty());
    queries::create_task(
        &state.db,
        &form.item_name,
        model_name,
        form.due_date,
        &form.email,
    )
    .await?;

    // Confirmation email goes out in the background; the redirect never
    // waits on SMTP.
    let mailer = state.mailer.clone();
    let to = form.email.clone();
    let subject = format!("[Household Ledger] new schedule registered: {}", form.item_name);
    let body = confirmation_body(
        &form.item_name,
        model_name.unwrap_or("none"),
        form.due_date,
    );
    tokio::spawn(async move {
        mailer.send(&to, &subject, &body).await;
    });

    Ok(Redirect::to("/dashboard"))
}

pub async fn complete_task(
    State(state): State<AppState>,
    Form(form): Form<DeleteTaskForm>,
) -> Result<Redirect, AppError> {
    if !queries::delete_task(&state.db, form.task_id).await? {
        return Err(AppError::NotFound("task"));
    }
    Ok(Redirect::to("/tasks"))
}

#[derive(Deserialize)]
pub struct DeleteTaskForm {
    pub task_id: i64,
}

pub async fn delete_task_dashboard(
    State(state): State<AppState>,
    Form(form): Form<DeleteTaskForm>,
) -> Result<Redirect, AppError> {
    if !queries::delete_task(&state.db, form.task_id).await? {
        return Err(AppError::NotFound("task"));
    }
    Ok(Redirect::to("/dashboard"))
}

pub async fn edit_task_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<EditTaskTemplate, AppError> {
    let task = queries::get_task_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("task"))?;
    Ok(EditTaskTemplate { task })
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<TaskForm>,
) -> Result<Redirect, AppError> {
    let model_name = form.model_name.as_deref().filter(|s| !s.trim().is_empty());
    let updated = queries::update_task(
        &state.db,
        id,
        &form.item_name,
        model_name,
        form.due_date,
        &form.email,
    )
    .await?;
    if !updated {
        return Err(AppError::NotFound("task"));
    }
    Ok(Redirect::to("/tasks"))
}

fn confirmation_body(item_name: &str, model_name: &str, due_date: NaiveDate) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; background-color: #f4f7f9; padding: 20px; text-align: center;">
  <div style="max-width: 600px; margin: 0 auto; background-color: #ffffff; padding: 30px; border-radius: 12px;">
    <h1 style="color: #1e3a8a; margin-top: 0;">Household reminder</h1>
    <p style="color: #555;">The schedule "{item_name}" has been registered.</p>
    <table style="width: 100%; text-align: left; border-collapse: collapse;">
      <tr><td style="padding: 10px; font-weight: bold; color: #1e3a8a;">Item</td><td style="padding: 10px;">{item_name}</td></tr>
      <tr><td style="padding: 10px; font-weight: bold; color: #1e3a8a;">Model</td><td style="padding: 10px;">{model_name}</td></tr>
      <tr><td style="padding: 10px; font-weight: bold; color: #1e3a8a;">Due date</td><td style="padding: 10px; color: #ef4444; font-weight: bold;">{due_date}</td></tr>
    </table>
    <p style="font-size: 14px; color: #888; margin-top: 30px;">This is an automated message. Do not reply.</p>
  </div>
</div>"#
    )
}
