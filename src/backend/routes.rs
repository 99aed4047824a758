use axum::middleware;
use axum::routing::{get, post};
use axum::Router;

use crate::backend::{handlers, AppState};

pub fn page_routes() -> Router<AppState> {
    // Everything except the login pages sits behind the session check.
    let protected = Router::new()
        .route("/", get(handlers::dashboard::home))
        .route("/dashboard", get(handlers::dashboard::dashboard))
        .route("/expenses", get(handlers::expenses::expenses_page))
        .route("/add_income", post(handlers::expenses::add_income))
        .route("/add_expense", post(handlers::expenses::add_expense))
        .route("/delete_income", post(handlers::expenses::delete_income))
        .route("/delete_expense", post(handlers::expenses::delete_expense))
        .route(
            "/edit_income/:id",
            get(handlers::expenses::edit_income_form).post(handlers::expenses::update_income),
        )
        .route(
            "/edit_expense/:id",
            get(handlers::expenses::edit_expense_form).post(handlers::expenses::update_expense),
        )
        .route(
            "/add_asset",
            get(handlers::assets::add_asset_form).post(handlers::assets::create_asset),
        )
        .route(
            "/edit_asset/:id",
            get(handlers::assets::edit_asset_form).post(handlers::assets::update_asset),
        )
        .route("/delete_asset", post(handlers::assets::delete_asset))
        .route("/monthly_ledger", get(handlers::ledger::monthly_ledger))
        .route(
            "/monthly_ledger/export",
            get(handlers::export::export_ledger),
        )
        .route(
            "/add_ledger_expense",
            post(handlers::ledger::add_ledger_expense),
        )
        .route(
            "/delete_ledger_expense",
            post(handlers::ledger::delete_ledger_expense),
        )
        .route("/set_budget", post(handlers::ledger::set_budget))
        .route("/tasks", get(handlers::tasks::tasks_page))
        .route("/add_task_form", get(handlers::tasks::add_task_form))
        .route("/add_task", post(handlers::tasks::add_task))
        .route("/complete_task", post(handlers::tasks::complete_task))
        .route(
            "/delete_task_dashboard",
            post(handlers::tasks::delete_task_dashboard),
        )
        .route(
            "/edit_task/:id",
            get(handlers::tasks::edit_task_form).post(handlers::tasks::update_task),
        )
        .layer(middleware::from_fn(handlers::auth::require_login));

    Router::new()
        .merge(protected)
        .route(
            "/login",
            get(handlers::auth::login_form).post(handlers::auth::login_submit),
        )
        .route("/logout", get(handlers::auth::logout))
}
