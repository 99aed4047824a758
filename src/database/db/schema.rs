use sqlx::{Pool, Sqlite};

/// Create all tables if they do not exist yet. Run once at startup.
pub async fn create_all(pool: &Pool<Sqlite>) -> Result<(), sqlx::Error> {
    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS incomes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            income_date DATE NOT NULL,
            income_type TEXT NOT NULL,
            amount REAL NOT NULL
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS expenses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            expense_type TEXT NOT NULL,
            expense_date DATE NOT NULL,
            category TEXT NOT NULL,
            item TEXT NOT NULL,
            amount REAL NOT NULL,
            notes TEXT
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS assets (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date DATE NOT NULL,
            category TEXT NOT NULL,
            item TEXT NOT NULL,
            amount REAL NOT NULL,
            notes TEXT
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            item_name TEXT NOT NULL,
            model_name TEXT,
            due_date DATE NOT NULL,
            email TEXT NOT NULL
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS ledger_expenses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            expense_date DATE NOT NULL,
            category TEXT NOT NULL,
            item TEXT NOT NULL,
            amount REAL NOT NULL
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS monthly_budgets (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            month TEXT NOT NULL UNIQUE,
            amount REAL NOT NULL
        )
        "#,
    ];

    for statement in statements {
        sqlx::query(statement).execute(pool).await?;
    }

    Ok(())
}
