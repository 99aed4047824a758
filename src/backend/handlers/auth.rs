//! Login with the single shared household password. Logged-in state lives
//! in the server-side session; the page the user was heading to is stashed
//! there so login lands them back where they started.

use askama::Template;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use tower_sessions::Session;

use crate::backend::AppState;
use crate::error::AppError;

const LOGGED_IN_KEY: &str = "logged_in";
const REDIRECT_KEY: &str = "redirect_after_login";

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: String,
}

#[derive(Deserialize)]
pub struct LoginForm {
    pub password: String,
}

pub async fn login_form() -> LoginTemplate {
    LoginTemplate {
        error: String::new(),
    }
}

pub async fn login_submit(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    if form.password == state.config.login_password {
        session.insert(LOGGED_IN_KEY, true).await?;
        let target = session
            .remove::<String>(REDIRECT_KEY)
            .await?
            .unwrap_or_else(|| "/dashboard".to_string());
        Ok(Redirect::to(&target).into_response())
    } else {
        Ok(LoginTemplate {
            error: "Incorrect password.".to_string(),
        }
        .into_response())
    }
}

pub async fn logout(session: Session) -> Result<Redirect, AppError> {
    session.remove::<bool>(LOGGED_IN_KEY).await?;
    Ok(Redirect::to("/login"))
}

/// Middleware guarding every page behind the password. Unauthenticated
/// requests get their target URL stored and a 303 to the login form.
pub async fn require_login(session: Session, request: Request, next: Next) -> Response {
    let logged_in = session
        .get::<bool>(LOGGED_IN_KEY)
        .await
        .ok()
        .flatten()
        .unwrap_or(false);

    if logged_in {
        next.run(request).await
    } else {
        let _ = session
            .insert(REDIRECT_KEY, request.uri().to_string())
            .await;
        Redirect::to("/login").into_response()
    }
}
