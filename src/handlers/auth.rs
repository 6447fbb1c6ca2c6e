use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tower_cookies::{Cookies, Cookie};
use tower_cookies::cookie::time::Duration;
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, Result},
    models::user::DemoUser,
    services::auth::{self as auth_service, SESSION_COOKIE},
    state::AppState,
    validation::auth::*,
};

/// The request payload for user login.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The response payload for a successful login.
#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: DemoUser,
}

/// A bare `{"success": true}` acknowledgement.
#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// The response payload for `GET /api/auth/me`.
#[derive(Serialize)]
pub struct MeResponse {
    pub user: DemoUser,
}

/// Creates the session cookie. Never readable from scripts.
fn session_cookie(value: String, max_age_secs: i64, secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, value);

    cookie.set_http_only(true);
    if secure {
        cookie.set_secure(true);
    }

    cookie.set_same_site(tower_cookies::cookie::SameSite::Lax);
    cookie.set_max_age(Duration::seconds(max_age_secs));
    cookie.set_path("/");

    cookie
}

/// Handles user login.
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Response> {
    let Json(payload) = payload.map_err(|e| {
        tracing::debug!("Rejected login body: {}", e);
        AppError::Validation(CREDENTIALS_REQUIRED.to_string())
    })?;

    tracing::info!("🔐 Login attempt for {}", payload.email);
    validate_credentials(&payload.email, &payload.password)?;

    let (user, token) = auth_service::login(&state, &payload.email, &payload.password)?;

    cookies.add(session_cookie(
        token,
        state.sessions.ttl().num_seconds(),
        state.config.secure_cookies,
    ));

    tracing::info!("✅ User logged in: {}", user.id);

    let response = LoginResponse {
        success: true,
        user,
    };

    Ok((StatusCode::OK, Json(response)).into_response())
}

/// Handles user logout.
///
/// Only instructs the client to drop the cookie; a copied token stays valid
/// until it expires.
#[axum::debug_handler]
pub async fn logout(State(state): State<AppState>, cookies: Cookies) -> Response {
    let mut cookie = session_cookie(String::new(), 0, state.config.secure_cookies);
    cookie.make_removal();
    cookies.add(cookie);

    tracing::info!("👋 Session cookie cleared");

    (StatusCode::OK, Json(SuccessResponse { success: true })).into_response()
}

/// Returns the caller's identity, if their session cookie is valid.
#[axum::debug_handler]
pub async fn me(State(state): State<AppState>, cookies: Cookies) -> Result<Json<MeResponse>> {
    auth_service::current_user(&state, &cookies)
        .map(|user| Json(MeResponse { user }))
        .ok_or_else(|| AppError::Authentication("Not authenticated".to_string()))
}
