//! Daily reminder job: once a day, email every task that is due today.
//! Fire and forget, no retry and no double-send guard.

use chrono::Local;
use sqlx::{Pool, Sqlite};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::database::db::queries;
use crate::database::models::Task;
use crate::service::email::Mailer;

/// Register the daily scan with the scheduler and start it.
pub async fn start(
    pool: Pool<Sqlite>,
    mailer: Mailer,
    cron: &str,
) -> anyhow::Result<JobScheduler> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(cron, move |_id, _scheduler| {
        let pool = pool.clone();
        let mailer = mailer.clone();
        Box::pin(async move {
            run_once(&pool, &mailer).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;
    tracing::info!(cron, "reminder job scheduled");

    Ok(scheduler)
}

/// One scan: find tasks due today and send a reminder for each.
pub async fn run_once(pool: &Pool<Sqlite>, mailer: &Mailer) {
    let today = Local::now().date_naive();

    let tasks = match queries::get_tasks_due_on(pool, today).await {
        Ok(tasks) => tasks,
        Err(e) => {
            tracing::error!(error = %e, "reminder scan failed");
            return;
        }
    };

    tracing::info!(count = tasks.len(), %today, "reminder scan");
    for task in tasks {
        let subject = format!("[Household Ledger] due today: {}", task.item_name);
        let body = reminder_body(&task);
        mailer.send(&task.email, &subject, &body).await;
    }
}

fn reminder_body(task: &Task) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; padding: 20px;">
  <h2 style="color: #1e3a8a;">Due today</h2>
  <p><strong>{}</strong>{} is due on {}.</p>
  <p style="color: #888; font-size: 13px;">This is an automated reminder. Do not reply.</p>
</div>"#,
        task.item_name,
        task.model_name
            .as_deref()
            .map(|m| format!(" ({m})"))
            .unwrap_or_default(),
        task.due_date
    )
}
