//! HTTP routes: thin wrappers around the auth core.
//!
//! Handlers translate between HTTP and the typed outcomes of
//! `AuthService`; no auth decisions are made here.

use axum::{
    Json, Router,
    extract::{Form, State},
    http::{
        HeaderMap, StatusCode,
        header::{COOKIE, SET_COOKIE},
    },
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::error;

use ordocliens_admin_auth::{AccessError, LOGIN_PAGE, LoginOutcome};
use ordocliens_admin_upstream::Credentials;

use crate::state::AppState;

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/login", get(login_page).post(login))
        .route("/dashboard", get(dashboard))
        .route("/logout", get(logout))
        .with_state(state)
}

/// Submitted login form fields.
#[derive(Debug, Deserialize)]
struct LoginForm {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

/// `GET /` — route visitors by token presence, without a network call.
async fn index(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Redirect {
    if state.auth.is_authenticated(cookie_header(&headers)) {
        Redirect::to(ordocliens_admin_auth::PROTECTED_AREA)
    } else {
        Redirect::to(LOGIN_PAGE)
    }
}

/// `GET /login` — the login form.
async fn login_page() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html lang="sv">
  <body>
    <h1>Logga in</h1>
    <form method="post" action="/login">
      <label for="email">E-post</label>
      <input type="text" name="email" id="email" />
      <label for="password">L&ouml;senord</label>
      <input type="password" name="password" id="password" />
      <button type="submit">Logga in</button>
    </form>
  </body>
</html>"#,
    )
}

/// `POST /login` — exchange credentials for a session cookie.
async fn login(State(state): State<Arc<AppState>>, Form(form): Form<LoginForm>) -> Response {
    let credentials = Credentials {
        email: form.email,
        password: form.password,
    };

    match state.auth.login(&credentials).await {
        LoginOutcome::Authenticated {
            set_cookie,
            redirect_to,
            ..
        } => (
            AppendHeaders([(SET_COOKIE, set_cookie)]),
            Redirect::to(redirect_to),
        )
            .into_response(),
        LoginOutcome::Invalid(field_errors) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "fieldErrors": field_errors })),
        )
            .into_response(),
        LoginOutcome::Rejected {
            form_errors,
            status,
        } => (
            status_code(status),
            Json(json!({ "formErrors": form_errors })),
        )
            .into_response(),
    }
}

/// `GET /dashboard` — the protected area, superadmins only.
async fn dashboard(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    match state.auth.current_user(cookie_header(&headers)).await {
        Ok(user) => Json(user).into_response(),
        // Wrong role and no session land on the same page on purpose:
        // the response must not reveal which one it was.
        Err(AccessError::Unauthenticated) | Err(AccessError::Forbidden) => {
            Redirect::to(LOGIN_PAGE).into_response()
        }
        Err(AccessError::Upstream(upstream)) => {
            error!(status = upstream.status(), error = %upstream, "user lookup failed");
            (
                status_code(upstream.status()),
                Json(json!({
                    "message": upstream.message(),
                    "status": upstream.status(),
                })),
            )
                .into_response()
        }
    }
}

/// `GET /logout` — destroy the session and return to the login page.
async fn logout(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let outcome = state.auth.logout(cookie_header(&headers));
    (
        AppendHeaders([(SET_COOKIE, outcome.set_cookie)]),
        Redirect::to(outcome.redirect_to),
    )
        .into_response()
}

fn cookie_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(COOKIE).and_then(|value| value.to_str().ok())
}

fn status_code(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}
