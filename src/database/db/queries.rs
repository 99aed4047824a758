use chrono::NaiveDate;
use sqlx::{Pool, Sqlite};

use crate::database::models::{Asset, Expense, Income, LedgerExpense, MonthlyBudget, Task};

// CRUD for every table. All functions take the shared pool and speak
// plain SQL with explicit binds.

/// Budget applied to a pay-cycle that has no stored override.
pub const DEFAULT_MONTHLY_BUDGET: f64 = 700_000.0;

/*========== Income queries ==========*/

pub async fn create_income(
    pool: &Pool<Sqlite>,
    income_date: NaiveDate,
    income_type: &str,
    amount: f64,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO incomes (income_date, income_type, amount)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(income_date)
    .bind(income_type)
    .bind(amount)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn get_income_by_id(
    pool: &Pool<Sqlite>,
    id: i64,
) -> Result<Option<Income>, sqlx::Error> {
    sqlx::query_as::<_, Income>(
        r#"
        SELECT id, income_date, income_type, amount
        FROM incomes
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn get_all_incomes(pool: &Pool<Sqlite>) -> Result<Vec<Income>, sqlx::Error> {
    sqlx::query_as::<_, Income>(
        r#"
        SELECT id, income_date, income_type, amount
        FROM incomes
        ORDER BY id DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn update_income(
    pool: &Pool<Sqlite>,
    id: i64,
    income_date: NaiveDate,
    income_type: &str,
    amount: f64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE incomes
        SET income_date = ?, income_type = ?, amount = ?
        WHERE id = ?
        "#,
    )
    .bind(income_date)
    .bind(income_type)
    .bind(amount)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_income(pool: &Pool<Sqlite>, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM incomes WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn total_income(pool: &Pool<Sqlite>) -> Result<f64, sqlx::Error> {
    sqlx::query_scalar::<_, f64>("SELECT COALESCE(SUM(amount), 0.0) FROM incomes")
        .fetch_one(pool)
        .await
}

/*========== Expense queries ==========*/

#[allow(clippy::too_many_arguments)]
pub async fn create_expense(
    pool: &Pool<Sqlite>,
    expense_type: &str,
    expense_date: NaiveDate,
    category: &str,
    item: &str,
    amount: f64,
    notes: Option<&str>,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO expenses (expense_type, expense_date, category, item, amount, notes)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(expense_type)
    .bind(expense_date)
    .bind(category)
    .bind(item)
    .bind(amount)
    .bind(notes)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn get_expense_by_id(
    pool: &Pool<Sqlite>,
    id: i64,
) -> Result<Option<Expense>, sqlx::Error> {
    sqlx::query_as::<_, Expense>(
        r#"
        SELECT id, expense_type, expense_date, category, item, amount, notes
        FROM expenses
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn get_all_expenses(pool: &Pool<Sqlite>) -> Result<Vec<Expense>, sqlx::Error> {
    sqlx::query_as::<_, Expense>(
        r#"
        SELECT id, expense_type, expense_date, category, item, amount, notes
        FROM expenses
        ORDER BY id DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

#[allow(clippy::too_many_arguments)]
pub async fn update_expense(
    pool: &Pool<Sqlite>,
    id: i64,
    expense_type: &str,
    expense_date: NaiveDate,
    category: &str,
    item: &str,
    amount: f64,
    notes: Option<&str>,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE expenses
        SET expense_type = ?, expense_date = ?, category = ?, item = ?, amount = ?, notes = ?
        WHERE id = ?
        "#,
    )
    .bind(expense_type)
    .bind(expense_date)
    .bind(category)
    .bind(item)
    .bind(amount)
    .bind(notes)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_expense(pool: &Pool<Sqlite>, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM expenses WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn total_expense(pool: &Pool<Sqlite>) -> Result<f64, sqlx::Error> {
    sqlx::query_scalar::<_, f64>("SELECT COALESCE(SUM(amount), 0.0) FROM expenses")
        .fetch_one(pool)
        .await
}

/*========== Asset queries ==========*/

pub async fn create_asset(
    pool: &Pool<Sqlite>,
    date: NaiveDate,
    category: &str,
    item: &str,
    amount: f64,
    notes: Option<&str>,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO assets (date, category, item, amount, notes)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(date)
    .bind(category)
    .bind(item)
    .bind(amount)
    .bind(notes)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn get_asset_by_id(pool: &Pool<Sqlite>, id: i64) -> Result<Option<Asset>, sqlx::Error> {
    sqlx::query_as::<_, Asset>(
        r#"
        SELECT id, date, category, item, amount, notes
        FROM assets
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn get_all_assets(pool: &Pool<Sqlite>) -> Result<Vec<Asset>, sqlx::Error> {
    sqlx::query_as::<_, Asset>(
        r#"
        SELECT id, date, category, item, amount, notes
        FROM assets
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn update_asset(
    pool: &Pool<Sqlite>,
    id: i64,
    date: NaiveDate,
    category: &str,
    item: &str,
    amount: f64,
    notes: Option<&str>,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE assets
        SET date = ?, category = ?, item = ?, amount = ?, notes = ?
        WHERE id = ?
        "#,
    )
    .bind(date)
    .bind(category)
    .bind(item)
    .bind(amount)
    .bind(notes)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_asset(pool: &Pool<Sqlite>, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM assets WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/*========== Task queries ==========*/

pub async fn create_task(
    pool: &Pool<Sqlite>,
    item_name: &str,
    model_name: Option<&str>,
    due_date: NaiveDate,
    email: &str,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO tasks (item_name, model_name, due_date, email)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(item_name)
    .bind(model_name)
    .bind(due_date)
    .bind(email)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn get_task_by_id(pool: &Pool<Sqlite>, id: i64) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        SELECT id, item_name, model_name, due_date, email
        FROM tasks
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn get_all_tasks(pool: &Pool<Sqlite>) -> Result<Vec<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        SELECT id, item_name, model_name, due_date, email
        FROM tasks
        ORDER BY due_date ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Tasks whose due date is exactly the given day. The reminder job runs
/// this once a day.
pub async fn get_tasks_due_on(
    pool: &Pool<Sqlite>,
    date: NaiveDate,
) -> Result<Vec<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        SELECT id, item_name, model_name, due_date, email
        FROM tasks
        WHERE due_date = ?
        "#,
    )
    .bind(date)
    .fetch_all(pool)
    .await
}

pub async fn update_task(
    pool: &Pool<Sqlite>,
    id: i64,
    item_name: &str,
    model_name: Option<&str>,
    due_date: NaiveDate,
    email: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE tasks
        SET item_name = ?, model_name = ?, due_date = ?, email = ?
        WHERE id = ?
        "#,
    )
    .bind(item_name)
    .bind(model_name)
    .bind(due_date)
    .bind(email)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_task(pool: &Pool<Sqlite>, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/*========== Ledger queries ==========*/

pub async fn create_ledger_expense(
    pool: &Pool<Sqlite>,
    expense_date: NaiveDate,
    category: &str,
    item: &str,
    amount: f64,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO ledger_expenses (expense_date, category, item, amount)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(expense_date)
    .bind(category)
    .bind(item)
    .bind(amount)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn get_ledger_expense_by_id(
    pool: &Pool<Sqlite>,
    id: i64,
) -> Result<Option<LedgerExpense>, sqlx::Error> {
    sqlx::query_as::<_, LedgerExpense>(
        r#"
        SELECT id, expense_date, category, item, amount
        FROM ledger_expenses
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Ledger entries inside one pay-cycle window, newest first.
pub async fn get_ledger_expenses_between(
    pool: &Pool<Sqlite>,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<LedgerExpense>, sqlx::Error> {
    sqlx::query_as::<_, LedgerExpense>(
        r#"
        SELECT id, expense_date, category, item, amount
        FROM ledger_expenses
        WHERE expense_date BETWEEN ? AND ?
        ORDER BY expense_date DESC, id DESC
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await
}

pub async fn delete_ledger_expense(pool: &Pool<Sqlite>, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM ledger_expenses WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/*========== Budget queries ==========*/

pub async fn get_budget_by_month(
    pool: &Pool<Sqlite>,
    month: &str,
) -> Result<Option<MonthlyBudget>, sqlx::Error> {
    sqlx::query_as::<_, MonthlyBudget>(
        r#"
        SELECT id, month, amount
        FROM monthly_budgets
        WHERE month = ?
        "#,
    )
    .bind(month)
    .fetch_optional(pool)
    .await
}

/// Budget amount for a "YYYY-MM" key, or the default when none is stored.
pub async fn get_budget_or_default(
    pool: &Pool<Sqlite>,
    month: &str,
) -> Result<f64, sqlx::Error> {
    let stored = get_budget_by_month(pool, month).await?;
    Ok(stored.map(|b| b.amount).unwrap_or(DEFAULT_MONTHLY_BUDGET))
}

/// Insert or replace the budget for a month. The month key is unique.
pub async fn set_budget(pool: &Pool<Sqlite>, month: &str, amount: f64) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO monthly_budgets (month, amount)
        VALUES (?, ?)
        ON CONFLICT(month) DO UPDATE SET amount = excluded.amount
        "#,
    )
    .bind(month)
    .bind(amount)
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::db::schema;
    use sqlx::sqlite::SqlitePoolOptions;

    // One connection only: each :memory: connection is its own database.
    async fn test_pool() -> Pool<Sqlite> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        schema::create_all(&pool).await.unwrap();
        pool
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn income_crud_roundtrip() {
        let pool = test_pool().await;

        let id = create_income(&pool, ymd(2025, 9, 1), "급여", 3_000_000.0)
            .await
            .unwrap();
        let income = get_income_by_id(&pool, id).await.unwrap().unwrap();
        assert_eq!(income.income_type, "급여");
        assert_eq!(income.amount, 3_000_000.0);

        assert!(update_income(&pool, id, ymd(2025, 9, 2), "보너스", 500_000.0)
            .await
            .unwrap());
        let income = get_income_by_id(&pool, id).await.unwrap().unwrap();
        assert_eq!(income.income_type, "보너스");
        assert_eq!(income.income_date, ymd(2025, 9, 2));

        assert!(delete_income(&pool, id).await.unwrap());
        assert!(get_income_by_id(&pool, id).await.unwrap().is_none());
        assert!(!delete_income(&pool, id).await.unwrap());
    }

    #[tokio::test]
    async fn totals_are_zero_on_empty_tables() {
        let pool = test_pool().await;
        assert_eq!(total_income(&pool).await.unwrap(), 0.0);
        assert_eq!(total_expense(&pool).await.unwrap(), 0.0);
    }

    #[tokio::test]
    async fn expense_totals_sum_all_rows() {
        let pool = test_pool().await;
        create_expense(&pool, "고정", ymd(2025, 9, 1), "주거", "월세", 650_000.0, None)
            .await
            .unwrap();
        create_expense(
            &pool,
            "변동",
            ymd(2025, 9, 3),
            "식비",
            "장보기",
            84_500.0,
            Some("주말"),
        )
        .await
        .unwrap();

        assert_eq!(total_expense(&pool).await.unwrap(), 734_500.0);
        let all = get_all_expenses(&pool).await.unwrap();
        assert_eq!(all.len(), 2);
        // Newest insert listed first.
        assert_eq!(all[0].item, "장보기");
        assert_eq!(all[0].notes.as_deref(), Some("주말"));
    }

    #[tokio::test]
    async fn ledger_window_filter_is_inclusive() {
        let pool = test_pool().await;
        let start = ymd(2025, 8, 25);
        let end = ymd(2025, 9, 24);

        create_ledger_expense(&pool, ymd(2025, 8, 24), "식비", "전날", 1.0)
            .await
            .unwrap();
        create_ledger_expense(&pool, start, "식비", "시작일", 2.0)
            .await
            .unwrap();
        create_ledger_expense(&pool, ymd(2025, 9, 10), "생활", "중간", 3.0)
            .await
            .unwrap();
        create_ledger_expense(&pool, end, "식비", "마지막날", 4.0)
            .await
            .unwrap();
        create_ledger_expense(&pool, ymd(2025, 9, 25), "식비", "다음날", 5.0)
            .await
            .unwrap();

        let rows = get_ledger_expenses_between(&pool, start, end).await.unwrap();
        let items: Vec<_> = rows.iter().map(|r| r.item.as_str()).collect();
        assert_eq!(items, vec!["마지막날", "중간", "시작일"]);
    }

    #[tokio::test]
    async fn missing_budget_falls_back_to_default() {
        let pool = test_pool().await;
        assert_eq!(
            get_budget_or_default(&pool, "2025-09").await.unwrap(),
            DEFAULT_MONTHLY_BUDGET
        );

        set_budget(&pool, "2025-09", 850_000.0).await.unwrap();
        assert_eq!(
            get_budget_or_default(&pool, "2025-09").await.unwrap(),
            850_000.0
        );

        // Upsert replaces, never duplicates the unique month key.
        set_budget(&pool, "2025-09", 900_000.0).await.unwrap();
        assert_eq!(
            get_budget_or_default(&pool, "2025-09").await.unwrap(),
            900_000.0
        );
    }

    #[tokio::test]
    async fn tasks_due_today_only() {
        let pool = test_pool().await;
        create_task(&pool, "정수기 필터", Some("WF-200"), ymd(2025, 9, 12), "home@example.com")
            .await
            .unwrap();
        create_task(&pool, "자동차 보험", None, ymd(2025, 9, 13), "home@example.com")
            .await
            .unwrap();

        let due = get_tasks_due_on(&pool, ymd(2025, 9, 12)).await.unwrap();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].item_name, "정수기 필터");

        // Listing orders by due date.
        let all = get_all_tasks(&pool).await.unwrap();
        assert_eq!(all[0].due_date, ymd(2025, 9, 12));
    }
}
